use serde::{Deserialize, Serialize};

use super::candidate::Candidate;

/// Per-candidate scoring outcome. Sub-scores and the weighted total live
/// in [0, 100]; `rank` is 1-based once ranking has run, 0 before.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub skills_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub certifications_score: f64,
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
    pub rank: usize,
}

/// Human-readable contribution strings, one per component, in the form
/// "score × weight = contribution".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub certifications: String,
}

/// A candidate paired with its score, as returned by ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: ScoreResult,
}
