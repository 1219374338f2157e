use std::sync::Arc;

use crate::config::ExtractionConfig;
use crate::extraction::certifications::extract_certifications;
use crate::extraction::contact::{extract_email, extract_phone};
use crate::extraction::education::extract_education;
use crate::extraction::experience::{extract_companies, total_years};
use crate::extraction::name::{resolve_name, NameContext};
use crate::extraction::skills::SkillMatcher;
use crate::models::Candidate;
use crate::ner::{EntityRecognizer, HeuristicRecognizer};
use crate::taxonomy::SkillTaxonomy;

/// Turns raw résumé text into a structured candidate record.
///
/// Extraction never fails: a field that cannot be recovered falls back
/// to a safe default ("Unknown Candidate", zero years, empty lists)
/// rather than aborting the parse.
pub struct ExtractionPipeline {
    recognizer: Arc<dyn EntityRecognizer>,
    matcher: SkillMatcher,
    config: ExtractionConfig,
}

impl ExtractionPipeline {
    pub fn new(
        recognizer: impl EntityRecognizer + 'static,
        taxonomy: &SkillTaxonomy,
        config: ExtractionConfig,
    ) -> Self {
        Self {
            recognizer: Arc::new(recognizer),
            matcher: SkillMatcher::new(taxonomy),
            config,
        }
    }

    pub fn parse(&self, filename: &str, text: &str) -> Candidate {
        tracing::info!("Parsing resume: {}", filename);

        // Step 1: Recognize entities
        let entities = self.recognizer.recognize(text);
        tracing::debug!(
            "{} found {} entities",
            self.recognizer.name(),
            entities.len()
        );

        // Step 2: Contact details
        let email = extract_email(text);
        let phone = extract_phone(text);

        // Step 3: Resolve the candidate name
        let name = resolve_name(&NameContext {
            text,
            entities: &entities,
            email: email.as_deref(),
            window: self.config.name_window,
            scan_lines: self.config.scan_lines,
        });

        // Step 4: Match skills
        let skills = self.matcher.match_text(text);
        tracing::debug!("Matched {} skills", skills.len());

        // Step 5: Education entries
        let education = extract_education(text);

        // Step 6: Companies from recognized organizations
        let experience = extract_companies(&entities, self.config.max_companies);

        // Step 7: Years of experience from date ranges
        let years_of_experience = total_years(text, self.config.years_cap);

        // Step 8: Certifications
        let certifications = extract_certifications(text);

        // Step 9: Assemble the record, keeping a bounded slice of the
        // raw text for transparency
        let raw_text: String = text.chars().take(self.config.raw_text_limit).collect();

        tracing::info!(
            "Parsed {}: name={}, {} skills, {:.1} years",
            filename,
            name,
            skills.len(),
            years_of_experience
        );

        Candidate {
            filename: filename.to_string(),
            name,
            email,
            phone,
            skills,
            education,
            experience,
            years_of_experience,
            certifications,
            raw_text,
        }
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new(
            HeuristicRecognizer::new(),
            &SkillTaxonomy::new(),
            ExtractionConfig::default(),
        )
    }
}
