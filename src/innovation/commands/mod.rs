use crate::config::InnovationConfig;
use crate::index::{DisplayIdea, IdeaSelector};
use crate::model::Idea;

pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod process;
pub mod rank;
pub mod resources;
pub mod stats;
pub mod update;
pub mod view;

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
    pub affected_ideas: Vec<Idea>,
    pub listed_ideas: Vec<DisplayIdea>,
    pub stats: Option<stats::StatsReport>,
    pub config: Option<InnovationConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_ideas(mut self, ideas: Vec<DisplayIdea>) -> Self {
        self.listed_ideas = ideas;
        self
    }

    pub fn with_stats(mut self, stats: stats::StatsReport) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: InnovationConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Edits to apply to one idea. Unset fields keep their current value; the
/// store still receives the complete record.
#[derive(Debug, Clone)]
pub struct IdeaUpdate {
    pub selector: IdeaSelector,
    pub title: Option<String>,
    pub description: Option<String>,
    pub traits: Vec<(String, u8)>,
}

impl IdeaUpdate {
    pub fn new(selector: IdeaSelector) -> Self {
        Self {
            selector,
            title: None,
            description: None,
            traits: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_trait(mut self, name: impl Into<String>, value: u8) -> Self {
        self.traits.push((name.into(), value));
        self
    }
}
