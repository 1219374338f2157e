use std::cmp::Ordering;

use crate::config::ScoringWeights;
use crate::error::{Error, Result};
use crate::models::{
    Candidate, EducationEntry, JobCriteria, ScoreBreakdown, ScoreResult, ScoredCandidate,
};
use crate::scoring::tfidf::{cosine_similarity, TfidfVectorizer};

/// Degree tiers, checked in order; the first tier found in a degree
/// line decides that entry's score.
const EDUCATION_LEVELS: &[(&str, f64)] = &[
    ("phd", 100.0),
    ("doctorate", 100.0),
    ("master", 85.0),
    ("m.tech", 85.0),
    ("m.s", 85.0),
    ("mba", 85.0),
    ("bachelor", 70.0),
    ("b.tech", 70.0),
    ("b.s", 70.0),
    ("associate", 50.0),
    ("diploma", 40.0),
    ("high school", 20.0),
];

/// Vocabulary size for the pool vector space.
const MAX_FEATURES: usize = 100;

/// Scores a candidate pool against one set of job criteria.
///
/// Ranking is a pure function of (pool, criteria): the TF-IDF space is
/// fit once over the whole pool so similarities stay comparable, and
/// every tie-break is deterministic.
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Build an engine with non-default weights. The weights are
    /// validated here so a bad configuration fails before any scoring.
    pub fn with_weights(weights: ScoringWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Score and rank the pool, best candidate first.
    pub fn rank_candidates(
        &self,
        candidates: &[Candidate],
        criteria: &JobCriteria,
    ) -> Result<Vec<ScoredCandidate>> {
        criteria.validate()?;
        if candidates.is_empty() {
            return Err(Error::EmptyPool);
        }

        tracing::info!("Scoring {} candidates", candidates.len());

        let job_text = job_text(criteria);
        let mut corpus = Vec::with_capacity(candidates.len() + 1);
        corpus.push(job_text.clone());
        for candidate in candidates {
            corpus.push(candidate.skills.join(" "));
        }

        let vectorizer = TfidfVectorizer::fit(&corpus, MAX_FEATURES);
        let job_vector = vectorizer.transform(&job_text);

        let mut scored: Vec<ScoredCandidate> = candidates
            .iter()
            .map(|candidate| ScoredCandidate {
                candidate: candidate.clone(),
                score: self.score_candidate(candidate, criteria, &vectorizer, &job_vector),
            })
            .collect();

        // Stable sort keeps input order on equal totals.
        scored.sort_by(|a, b| {
            b.score
                .total_score
                .partial_cmp(&a.score.total_score)
                .unwrap_or(Ordering::Equal)
        });
        for (index, entry) in scored.iter_mut().enumerate() {
            entry.score.rank = index + 1;
        }

        Ok(scored)
    }

    fn score_candidate(
        &self,
        candidate: &Candidate,
        criteria: &JobCriteria,
        vectorizer: &TfidfVectorizer,
        job_vector: &[f64],
    ) -> ScoreResult {
        let skills_score = self.score_skills(candidate, criteria, vectorizer, job_vector);
        let experience_score = score_experience(
            candidate.years_of_experience,
            criteria.min_experience,
            criteria.max_experience,
        );
        let education_score = score_education(&candidate.education);
        let certifications_score =
            score_certifications(&candidate.certifications, &criteria.description);

        let w = &self.weights;
        let total = skills_score * w.skills
            + experience_score * w.experience
            + education_score * w.education
            + certifications_score * w.certifications;

        ScoreResult {
            skills_score,
            experience_score,
            education_score,
            certifications_score,
            total_score: round1(total.clamp(0.0, 100.0)),
            breakdown: ScoreBreakdown {
                skills: contribution_line(skills_score, w.skills),
                experience: contribution_line(experience_score, w.experience),
                education: contribution_line(education_score, w.education),
                certifications: contribution_line(certifications_score, w.certifications),
            },
            rank: 0,
        }
    }

    /// Cosine similarity against the job text, blended half-and-half
    /// with the exact overlap ratio when required skills are given.
    fn score_skills(
        &self,
        candidate: &Candidate,
        criteria: &JobCriteria,
        vectorizer: &TfidfVectorizer,
        job_vector: &[f64],
    ) -> f64 {
        if candidate.skills.is_empty() {
            return 0.0;
        }

        let candidate_vector = vectorizer.transform(&candidate.skills.join(" "));
        let cosine = cosine_similarity(job_vector, &candidate_vector);

        let score = if criteria.required_skills.is_empty() {
            cosine * 100.0
        } else {
            let matched = criteria
                .required_skills
                .iter()
                .filter(|required| candidate.has_skill(required))
                .count();
            let overlap = matched as f64 / criteria.required_skills.len() as f64;
            (0.5 * cosine + 0.5 * overlap) * 100.0
        };

        round2(score.clamp(0.0, 100.0))
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Piecewise ramp over the requested experience range: linear up to 70
/// below the minimum, 70..100 across the range, and a small
/// overqualification penalty floored at 85 past the maximum.
fn score_experience(years: f64, min_years: f64, max_years: f64) -> f64 {
    let score = if years < min_years {
        if min_years == 0.0 {
            // No minimum: nothing to fall short of.
            100.0
        } else {
            70.0 * years / min_years
        }
    } else if years <= max_years {
        if max_years == min_years {
            100.0
        } else {
            70.0 + 30.0 * (years - min_years) / (max_years - min_years)
        }
    } else {
        (100.0 - 2.0 * (years - max_years)).max(85.0)
    };

    round2(score.clamp(0.0, 100.0))
}

/// Best tier matched across all education entries.
fn score_education(education: &[EducationEntry]) -> f64 {
    let mut best = 0.0_f64;

    for entry in education {
        let degree = entry.degree.to_lowercase();
        for (level, score) in EDUCATION_LEVELS {
            if degree.contains(level) {
                best = best.max(*score);
                break;
            }
        }
    }

    best
}

/// Share of certifications relevant to the job description. A
/// certification counts as relevant when any of its words longer than
/// three characters appears in the description.
fn score_certifications(certifications: &[String], job_description: &str) -> f64 {
    if certifications.is_empty() {
        return 0.0;
    }

    let job_lower = job_description.to_lowercase();
    let relevant = certifications
        .iter()
        .filter(|cert| {
            cert.to_lowercase()
                .split_whitespace()
                .any(|word| word.chars().count() > 3 && job_lower.contains(word))
        })
        .count();

    round2(100.0 * relevant as f64 / certifications.len() as f64)
}

fn job_text(criteria: &JobCriteria) -> String {
    if criteria.required_skills.is_empty() {
        criteria.description.clone()
    } else {
        format!(
            "{} {}",
            criteria.required_skills.join(" "),
            criteria.description
        )
    }
}

fn contribution_line(score: f64, weight: f64) -> String {
    format!("{} × {} = {:.2}", score, weight, score * weight)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
