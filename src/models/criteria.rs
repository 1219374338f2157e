use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Job requirements one scoring pass runs against. Built per request,
/// never persisted by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCriteria {
    pub description: String,
    /// Exact skills the role asks for; empty means "score on text alone".
    pub required_skills: Vec<String>,
    pub min_experience: f64,
    pub max_experience: f64,
}

impl JobCriteria {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            required_skills: Vec::new(),
            min_experience: 0.0,
            max_experience: 15.0,
        }
    }

    pub fn with_required_skills(mut self, skills: Vec<String>) -> Self {
        self.required_skills = skills;
        self
    }

    pub fn with_experience_range(mut self, min: f64, max: f64) -> Self {
        self.min_experience = min;
        self.max_experience = max;
        self
    }

    /// Checked before any scoring work; a failure here means no partial
    /// computation happened.
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(Error::InvalidCriteria(
                "job description is empty".to_string(),
            ));
        }

        if self.min_experience < 0.0 {
            return Err(Error::InvalidCriteria(format!(
                "min_experience is negative: {}",
                self.min_experience
            )));
        }

        if self.max_experience < self.min_experience {
            return Err(Error::InvalidCriteria(format!(
                "max_experience {} is below min_experience {}",
                self.max_experience, self.min_experience
            )));
        }

        Ok(())
    }
}
