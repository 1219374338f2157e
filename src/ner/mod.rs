pub mod heuristic;
pub mod recognizer;

pub use heuristic::HeuristicRecognizer;
pub use recognizer::{Entity, EntityLabel, EntityRecognizer};
