use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A difficulty tier, stored as levels 1-3 in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Beginner),
            2 => Some(Difficulty::Intermediate),
            3 => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Short badge text used on quiz cards.
    pub fn badge(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Easy",
            Difficulty::Intermediate => "Medium",
            Difficulty::Advanced => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(level) = s.parse::<u8>() {
            return Difficulty::from_level(level)
                .ok_or_else(|| format!("Difficulty level out of range (1-3): {}", level));
        }
        match s.to_lowercase().as_str() {
            "beginner" | "easy" => Ok(Difficulty::Beginner),
            "intermediate" | "medium" => Ok(Difficulty::Intermediate),
            "advanced" | "hard" => Ok(Difficulty::Advanced),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

/// A browsable catalog entry: a quiz topic card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub difficulty: Option<Difficulty>,
    pub quiz_count: Option<u32>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub is_new: bool,
}

/// A named group of topics. Sections are kept in a Vec so the bundled
/// ordering survives filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Hackathon,
    Internship,
    Training,
    Workshop,
    Conference,
    Career,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Hackathon => "Hackathon",
            EventKind::Internship => "Internship",
            EventKind::Training => "Training",
            EventKind::Workshop => "Workshop",
            EventKind::Conference => "Conference",
            EventKind::Career => "Career",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EventKind::Hackathon => "code",
            EventKind::Internship => "briefcase",
            EventKind::Training => "book",
            EventKind::Workshop => "shield",
            EventKind::Conference => "users",
            EventKind::Career => "award",
        }
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hackathon" => Ok(EventKind::Hackathon),
            "internship" => Ok(EventKind::Internship),
            "training" => Ok(EventKind::Training),
            "workshop" => Ok(EventKind::Workshop),
            "conference" => Ok(EventKind::Conference),
            "career" => Ok(EventKind::Career),
            other => Err(format!("Unknown event kind: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub kind: EventKind,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A per-school subject with its document names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub title: String,
    pub documents: Vec<String>,
}

/// A home-screen category tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub icon: String,
    pub progress: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: u32,
    pub time_minutes: u32,
    pub difficulty: Difficulty,
}

/// A bookmarked catalog entry. Title is the key: save/remove/is-saved all
/// compare titles only, so duplicate titles collapse into one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default = "Utc::now")]
    pub saved_at: DateTime<Utc>,
}

impl SavedItem {
    pub fn new(title: String, description: String, icon: String) -> Self {
        Self {
            title,
            description,
            icon,
            saved_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_levels_and_names() {
        assert_eq!(Difficulty::from_str("1"), Ok(Difficulty::Beginner));
        assert_eq!(Difficulty::from_str("3"), Ok(Difficulty::Advanced));
        assert_eq!(Difficulty::from_str("medium"), Ok(Difficulty::Intermediate));
        assert_eq!(Difficulty::from_str("Advanced"), Ok(Difficulty::Advanced));

        assert!(Difficulty::from_str("0").is_err());
        assert!(Difficulty::from_str("4").is_err());
        assert!(Difficulty::from_str("extreme").is_err());
    }

    #[test]
    fn difficulty_level_roundtrip() {
        for level in 1..=3 {
            assert_eq!(Difficulty::from_level(level).unwrap().level(), level);
        }
        assert!(Difficulty::from_level(0).is_none());
    }

    #[test]
    fn event_kind_icons() {
        assert_eq!(EventKind::Hackathon.icon(), "code");
        assert_eq!(EventKind::Career.icon(), "award");
    }

    #[test]
    fn event_kind_parses_case_insensitively() {
        assert_eq!(EventKind::from_str("WORKSHOP"), Ok(EventKind::Workshop));
        assert!(EventKind::from_str("meetup").is_err());
    }
}
