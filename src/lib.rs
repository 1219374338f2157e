pub mod analytics;
pub mod config;
pub mod error;
pub mod extraction;
pub mod models;
pub mod ner;
pub mod scoring;
pub mod taxonomy;

pub use config::{ExtractionConfig, ScoringWeights};
pub use error::{Error, Result};
pub use extraction::ExtractionPipeline;
pub use ner::{EntityRecognizer, HeuristicRecognizer};
pub use scoring::ScoringEngine;
pub use taxonomy::SkillTaxonomy;
