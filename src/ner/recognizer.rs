use serde::{Deserialize, Serialize};

/// A labeled span produced by an entity recognizer. `start` is the byte
/// offset of the span in the input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    Person,
    Organization,
    Date,
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityLabel::Person => write!(f, "Person"),
            EntityLabel::Organization => write!(f, "Organization"),
            EntityLabel::Date => write!(f, "Date"),
        }
    }
}

/// Pluggable entity recognition. The pipeline depends on this interface
/// only, so statistical models can be injected without touching the core;
/// the trait is synchronous because no core operation blocks on I/O.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<Entity>;
    fn name(&self) -> &str;
}
