use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::ScoredCandidate;

const TOP_SKILLS_LIMIT: usize = 10;

/// Aggregate view over a scored candidate pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolSummary {
    pub total_candidates: usize,
    pub average_score: f64,
    pub median_score: f64,
    pub max_score: f64,
    pub min_score: f64,
    pub average_experience: f64,
    pub unique_skills: usize,
    /// Most common skills as (name, candidate count), most common first.
    pub top_skills: Vec<(String, usize)>,
    /// All five bands in ascending order, zero counts included.
    pub experience_bands: Vec<(ExperienceBand, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceBand {
    Entry,
    Junior,
    Mid,
    Senior,
    Expert,
}

impl ExperienceBand {
    const ALL: [ExperienceBand; 5] = [
        ExperienceBand::Entry,
        ExperienceBand::Junior,
        ExperienceBand::Mid,
        ExperienceBand::Senior,
        ExperienceBand::Expert,
    ];

    /// Band boundaries are inclusive on the upper edge: exactly two
    /// years is still Entry.
    pub fn from_years(years: f64) -> Self {
        if years <= 2.0 {
            ExperienceBand::Entry
        } else if years <= 5.0 {
            ExperienceBand::Junior
        } else if years <= 8.0 {
            ExperienceBand::Mid
        } else if years <= 12.0 {
            ExperienceBand::Senior
        } else {
            ExperienceBand::Expert
        }
    }
}

impl std::fmt::Display for ExperienceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperienceBand::Entry => write!(f, "Entry (0-2 years)"),
            ExperienceBand::Junior => write!(f, "Junior (2-5 years)"),
            ExperienceBand::Mid => write!(f, "Mid (5-8 years)"),
            ExperienceBand::Senior => write!(f, "Senior (8-12 years)"),
            ExperienceBand::Expert => write!(f, "Expert (12+ years)"),
        }
    }
}

/// Summarize a scored pool. Returns `None` for an empty pool, since
/// none of the statistics are defined there.
pub fn summarize(pool: &[ScoredCandidate]) -> Option<PoolSummary> {
    if pool.is_empty() {
        return None;
    }

    let scores: Vec<f64> = pool.iter().map(|entry| entry.score.total_score).collect();
    let average_score = round2(scores.iter().sum::<f64>() / scores.len() as f64);
    let median_score = round2(median(&scores));
    let max_score = scores.iter().cloned().fold(f64::MIN, f64::max);
    let min_score = scores.iter().cloned().fold(f64::MAX, f64::min);

    let average_experience = round2(
        pool.iter()
            .map(|entry| entry.candidate.years_of_experience)
            .sum::<f64>()
            / pool.len() as f64,
    );

    // Count skills case-insensitively, keeping the first-seen casing
    // for display.
    let mut skill_counts: HashMap<String, (String, usize)> = HashMap::new();
    for entry in pool {
        for skill in &entry.candidate.skills {
            let key = skill.to_lowercase();
            let slot = skill_counts.entry(key).or_insert_with(|| (skill.clone(), 0));
            slot.1 += 1;
        }
    }
    let unique_skills = skill_counts.len();

    let mut top_skills: Vec<(String, usize)> = skill_counts.into_values().collect();
    // Ties break alphabetically, not by display casing.
    top_skills.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| a.0.to_lowercase().cmp(&b.0.to_lowercase()))
    });
    top_skills.truncate(TOP_SKILLS_LIMIT);

    let mut band_counts: HashMap<ExperienceBand, usize> = HashMap::new();
    for entry in pool {
        *band_counts
            .entry(ExperienceBand::from_years(
                entry.candidate.years_of_experience,
            ))
            .or_insert(0) += 1;
    }
    let experience_bands = ExperienceBand::ALL
        .iter()
        .map(|band| (*band, band_counts.get(band).copied().unwrap_or(0)))
        .collect();

    Some(PoolSummary {
        total_candidates: pool.len(),
        average_score,
        median_score,
        max_score,
        min_score,
        average_experience,
        unique_skills,
        top_skills,
        experience_bands,
    })
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
