pub mod engine;
pub mod tfidf;

pub use engine::ScoringEngine;
pub use tfidf::{cosine_similarity, TfidfVectorizer};
