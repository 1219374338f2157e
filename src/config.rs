use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Weights applied to the four scoring components. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub certifications: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            experience: 0.25,
            education: 0.20,
            certifications: 0.15,
        }
    }
}

impl ScoringWeights {
    const SUM_TOLERANCE: f64 = 1e-6;

    pub fn validate(&self) -> Result<()> {
        let components = [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("certifications", self.certifications),
        ];

        for (name, value) in components {
            if value < 0.0 {
                return Err(Error::InvalidWeights(format!(
                    "{} weight is negative: {}",
                    name, value
                )));
            }
        }

        let sum: f64 = components.iter().map(|(_, v)| v).sum();
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(Error::InvalidWeights(format!(
                "weights must sum to 1.0, got {}",
                sum
            )));
        }

        Ok(())
    }
}

/// Limits applied during extraction. The defaults match the documented
/// behavior of the pipeline; callers rarely need to change them.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Person entities past this byte offset are ignored for name resolution.
    pub name_window: usize,
    /// Non-empty lines inspected by the line-scan name strategy.
    pub scan_lines: usize,
    /// Organization entities kept as experience records.
    pub max_companies: usize,
    /// Upper bound on computed years of experience.
    pub years_cap: f64,
    /// Characters of input preserved on the candidate for transparency.
    pub raw_text_limit: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_window: 1000,
            scan_lines: 5,
            max_companies: 5,
            years_cap: 50.0,
            raw_text_limit: 1000,
        }
    }
}
