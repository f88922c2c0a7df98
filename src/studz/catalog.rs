//! The bundled catalog.
//!
//! All browsable content ships with the binary: quiz topics grouped in
//! sections, the popular-topics strip, upcoming events, the home-screen
//! categories, per-school subject lists, and per-topic quiz sets. Tables
//! are built once behind `Lazy` statics and handed out as slices; nothing
//! here is created or destroyed at runtime.

use crate::model::{
    Category, Difficulty, Event, EventKind, Quiz, Section, Subject, Topic,
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

fn topic(
    title: &str,
    description: &str,
    icon: &str,
    tags: &[&str],
    difficulty: Difficulty,
    quiz_count: u32,
) -> Topic {
    Topic {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        difficulty: Some(difficulty),
        quiz_count: Some(quiz_count),
        featured: false,
        is_new: false,
    }
}

static QUIZ_SECTIONS: Lazy<Vec<Section>> = Lazy::new(|| {
    vec![
        Section {
            name: "Computer Science".to_string(),
            topics: vec![
                topic(
                    "Programming",
                    "Multiple languages and paradigms.",
                    "code-tags",
                    &["coding", "development", "computer science"],
                    Difficulty::Intermediate,
                    156,
                ),
                topic(
                    "Databases",
                    "SQL and NoSQL systems.",
                    "database",
                    &["data", "storage", "sql", "computer science"],
                    Difficulty::Advanced,
                    89,
                ),
                topic(
                    "Algorithms",
                    "Sorting, searching, and optimization.",
                    "chevron-right",
                    &["logic", "analysis", "computer science"],
                    Difficulty::Intermediate,
                    64,
                ),
            ],
        },
        Section {
            name: "Web Development".to_string(),
            topics: vec![
                topic(
                    "HTML/CSS",
                    "Frontend basics and design.",
                    "web",
                    &["frontend", "design", "web"],
                    Difficulty::Beginner,
                    78,
                ),
                topic(
                    "JavaScript",
                    "Modern JS frameworks and vanilla code.",
                    "language-javascript",
                    &["frontend", "programming", "web"],
                    Difficulty::Intermediate,
                    124,
                ),
                topic(
                    "React",
                    "Component-based UI development.",
                    "react",
                    &["frontend", "framework", "web"],
                    Difficulty::Intermediate,
                    82,
                ),
            ],
        },
        Section {
            name: "Data Science".to_string(),
            topics: vec![
                topic(
                    "Machine Learning",
                    "AI, neural networks, and data science fundamentals.",
                    "brain",
                    &["ai", "algorithms", "data"],
                    Difficulty::Advanced,
                    78,
                ),
                topic(
                    "Data Analysis",
                    "Statistical methods and visualization.",
                    "chart-bar",
                    &["statistics", "visualization", "data"],
                    Difficulty::Intermediate,
                    63,
                ),
                topic(
                    "Python for Data",
                    "Using Python for data processing.",
                    "language-python",
                    &["python", "programming", "data"],
                    Difficulty::Intermediate,
                    91,
                ),
            ],
        },
    ]
});

static POPULAR_TOPICS: Lazy<Vec<Topic>> = Lazy::new(|| {
    let mut featured = topic(
        "Programming",
        "Test your coding skills across multiple languages and frameworks.",
        "code-tags",
        &["coding", "development", "computer science"],
        Difficulty::Intermediate,
        156,
    );
    featured.featured = true;

    let mut fresh = topic(
        "Web Development",
        "HTML, CSS, JavaScript and modern frameworks.",
        "web",
        &["frontend", "design", "web"],
        Difficulty::Beginner,
        112,
    );
    fresh.is_new = true;

    vec![
        featured,
        topic(
            "Databases",
            "Learn about SQL, NoSQL, and database design principles.",
            "database",
            &["data", "storage", "sql", "computer science"],
            Difficulty::Advanced,
            89,
        ),
        fresh,
        topic(
            "Machine Learning",
            "AI, neural networks, and data science fundamentals.",
            "brain",
            &["ai", "algorithms", "data"],
            Difficulty::Advanced,
            78,
        ),
    ]
});

fn event(
    id: &str,
    title: &str,
    date: (i32, u32, u32),
    kind: EventKind,
    description: &str,
    tags: &[&str],
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid bundled event date"),
        kind,
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

static EVENTS: Lazy<Vec<Event>> = Lazy::new(|| {
    vec![
        event(
            "1",
            "AI Hackathon 2025",
            (2025, 3, 15),
            EventKind::Hackathon,
            "Join the ultimate AI challenge and showcase your skills.",
            &["ai", "coding", "competition"],
        ),
        event(
            "2",
            "Summer Internship at Google",
            (2025, 6, 1),
            EventKind::Internship,
            "A great opportunity to work with Google engineers.",
            &["career", "professional", "summer"],
        ),
        event(
            "3",
            "Web Development Bootcamp",
            (2025, 4, 10),
            EventKind::Training,
            "Learn full-stack web development with hands-on projects.",
            &["coding", "web", "learning"],
        ),
        event(
            "4",
            "Cybersecurity Workshop",
            (2025, 3, 28),
            EventKind::Workshop,
            "Learn ethical hacking and security best practices.",
            &["security", "coding", "workshop"],
        ),
        event(
            "5",
            "Mobile App Development Seminar",
            (2025, 5, 15),
            EventKind::Training,
            "Discover the latest trends in mobile app development.",
            &["coding", "mobile", "learning"],
        ),
        event(
            "6",
            "Data Science Conference",
            (2025, 7, 20),
            EventKind::Conference,
            "Connect with data scientists and machine learning experts.",
            &["data", "ai", "networking"],
        ),
        event(
            "7",
            "Microsoft Career Fair",
            (2025, 4, 25),
            EventKind::Career,
            "Meet recruiters and learn about job opportunities at Microsoft.",
            &["career", "professional", "networking"],
        ),
    ]
});

static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    let category = |title: &str, icon: &str, progress: f32| Category {
        title: title.to_string(),
        icon: icon.to_string(),
        progress,
    };
    vec![
        category("Subjects", "book", 9.0 / 24.0),
        category("Events", "calendar", 4.0 / 18.0),
        category("Quizzes", "clipboard-check", 3.0 / 15.0),
        category("Learning path", "route", 3.0 / 15.0),
    ]
});

fn subject(title: &str, documents: &[&str]) -> Subject {
    Subject {
        title: title.to_string(),
        documents: documents.iter().map(|d| d.to_string()).collect(),
    }
}

fn quiz(
    id: &str,
    title: &str,
    description: &str,
    questions: u32,
    time_minutes: u32,
    difficulty: Difficulty,
) -> Quiz {
    Quiz {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        questions,
        time_minutes,
        difficulty,
    }
}

static TOPIC_QUIZZES: Lazy<Vec<(&'static str, Vec<Quiz>)>> = Lazy::new(|| {
    vec![
        (
            "Programming",
            vec![
                quiz(
                    "prog1",
                    "JavaScript Fundamentals",
                    "Test your knowledge of JavaScript basics including variables, functions, and control flow.",
                    15,
                    20,
                    Difficulty::Beginner,
                ),
                quiz(
                    "prog2",
                    "Python Data Structures",
                    "Challenge yourself with questions about Python lists, dictionaries, sets, and tuples.",
                    12,
                    15,
                    Difficulty::Intermediate,
                ),
                quiz(
                    "prog3",
                    "Advanced Algorithms",
                    "Test your understanding of complex algorithms and time complexity analysis.",
                    10,
                    25,
                    Difficulty::Advanced,
                ),
            ],
        ),
        (
            "Databases",
            vec![
                quiz(
                    "db1",
                    "SQL Basics",
                    "Practice fundamental SQL queries including SELECT, INSERT, UPDATE, and DELETE.",
                    12,
                    15,
                    Difficulty::Beginner,
                ),
                quiz(
                    "db2",
                    "Database Design",
                    "Test your knowledge of normalization, relationships, and schema design.",
                    10,
                    20,
                    Difficulty::Intermediate,
                ),
                quiz(
                    "db3",
                    "NoSQL Concepts",
                    "Explore document, key-value, and graph database concepts and use cases.",
                    8,
                    15,
                    Difficulty::Intermediate,
                ),
            ],
        ),
    ]
});

pub fn quiz_sections() -> &'static [Section] {
    &QUIZ_SECTIONS
}

pub fn popular_topics() -> &'static [Topic] {
    &POPULAR_TOPICS
}

pub fn events() -> &'static [Event] {
    &EVENTS
}

pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// Subjects for a school code. Unknown codes yield an empty list, the same
/// default a screen gets when its navigation params are missing.
pub fn subjects_for_school(school: &str) -> Vec<Subject> {
    match school {
        "school_a" => vec![
            subject(
                "Programming",
                &["Object Oriented.pdf", "Algorithms.pptx"],
            ),
            subject("Databases", &["SQL Basics.pdf", "ER Diagrams.pptx"]),
            subject("Networking", &["Network Layers.pdf", "TCP/IP.pptx"]),
            subject(
                "Technical Info",
                &["Hardware Basics.pdf", "Software Systems.pptx"],
            ),
        ],
        "school_b" => vec![
            subject(
                "History",
                &["World History.pdf", "Ancient Civilizations.pptx"],
            ),
            subject("Geography", &["Continents.pdf", "Maps.pptx"]),
        ],
        "school_c" => vec![
            subject(
                "Physics",
                &["Quantum Mechanics.pdf", "Classical Physics.pptx"],
            ),
            subject(
                "Chemistry",
                &["Organic Chemistry.pdf", "Periodic Table.pptx"],
            ),
        ],
        _ => Vec::new(),
    }
}

/// Quizzes for a topic. Unknown topics yield an empty list.
pub fn quizzes_for_topic(topic: &str) -> &'static [Quiz] {
    TOPIC_QUIZZES
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, quizzes)| quizzes.as_slice())
        .unwrap_or(&[])
}
