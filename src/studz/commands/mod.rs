use crate::backend::Session;
use crate::config::StudzConfig;
use crate::model::{Category, Event, Quiz, SavedItem, Section, Subject};
use std::path::PathBuf;

pub mod ask;
pub mod config;
pub mod events;
pub mod explore;
pub mod fetch;
pub mod home;
pub mod init;
pub mod login;
pub mod quizzes;
pub mod saved;
pub mod subjects;
pub mod topics;

/// Base directories used by the commands that touch disk.
#[derive(Debug, Clone)]
pub struct StudzPaths {
    pub config: PathBuf,
    pub data: PathBuf,
    pub cache: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub sections: Vec<Section>,
    pub events: Vec<Event>,
    pub subjects: Vec<Subject>,
    pub categories: Vec<Category>,
    pub quizzes: Vec<Quiz>,
    pub saved_items: Vec<SavedItem>,
    pub reply: Option<String>,
    pub document: Option<PathBuf>,
    pub config: Option<StudzConfig>,
    pub session: Option<Session>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }

    pub fn with_subjects(mut self, subjects: Vec<Subject>) -> Self {
        self.subjects = subjects;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_quizzes(mut self, quizzes: Vec<Quiz>) -> Self {
        self.quizzes = quizzes;
        self
    }

    pub fn with_saved_items(mut self, saved_items: Vec<SavedItem>) -> Self {
        self.saved_items = saved_items;
        self
    }

    pub fn with_reply(mut self, reply: String) -> Self {
        self.reply = Some(reply);
        self
    }

    pub fn with_document(mut self, document: PathBuf) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_config(mut self, config: StudzConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }
}
