use serde::{Deserialize, Serialize};

/// Structured record assembled from one résumé. Identity fields are fixed
/// at parse time; scores are attached separately and never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub filename: String,
    /// Validated name, or the literal "Unknown Candidate" fallback.
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Canonical skill names, deduplicated case-insensitively and sorted.
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub years_of_experience: f64,
    pub certifications: Vec<String>,
    /// Leading slice of the input text, kept for transparency.
    pub raw_text: String,
}

impl Candidate {
    /// Case-insensitive skill membership test.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    /// The full matched line; always populated.
    pub degree: String,
    pub institution: Option<String>,
    pub year: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: Option<String>,
    pub duration: Option<String>,
}
