use std::sync::LazyLock;

use regex::Regex;

use crate::ner::recognizer::{Entity, EntityLabel, EntityRecognizer};

/// Runs of 2-4 capitalized words on one line, allowing initials,
/// hyphens and apostrophes.
static PERSON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][a-zA-Z'.-]*(?:[ \t]+[A-Z][a-zA-Z'.-]*){1,3}").unwrap()
});

/// Capitalized phrases ending in a company or institution suffix, plus
/// the "University of X" form.
static ORG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:[A-Z][A-Za-z&'.-]*(?:[ \t]+[A-Z][A-Za-z&'.-]*){0,4}[ \t]+(?:Inc|LLC|Ltd|Corp|Corporation|Technologies|Systems|Solutions|Labs|Software|University|College|Institute)\b|(?:University|Institute|College)[ \t]+of[ \t]+[A-Z][A-Za-z.-]*(?:[ \t]+[A-Z][A-Za-z.-]*){0,2})",
    )
    .unwrap()
});

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// Deterministic rule-based recognizer shipped as the default adapter.
/// Intentionally conservative: it tags plausible spans and leaves
/// validation to the consumers (the name resolver in particular).
#[derive(Debug, Default)]
pub struct HeuristicRecognizer;

impl HeuristicRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl EntityRecognizer for HeuristicRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        // Organizations first: a span carries one label, and suffix
        // matches are stronger evidence than capitalization alone.
        let mut org_ranges: Vec<(usize, usize)> = Vec::new();
        for m in ORG_RE.find_iter(text) {
            org_ranges.push((m.start(), m.end()));
            entities.push(Entity {
                text: m.as_str().to_string(),
                label: EntityLabel::Organization,
                start: m.start(),
            });
        }

        for m in PERSON_RE.find_iter(text) {
            let overlaps_org = org_ranges
                .iter()
                .any(|&(start, end)| m.start() < end && start < m.end());
            if !overlaps_org {
                entities.push(Entity {
                    text: m.as_str().to_string(),
                    label: EntityLabel::Person,
                    start: m.start(),
                });
            }
        }

        for m in YEAR_RE.find_iter(text) {
            entities.push(Entity {
                text: m.as_str().to_string(),
                label: EntityLabel::Date,
                start: m.start(),
            });
        }

        entities.sort_by_key(|e| e.start);
        entities.dedup();
        entities
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_with_label(entities: &[Entity], label: EntityLabel) -> Vec<&str> {
        entities
            .iter()
            .filter(|e| e.label == label)
            .map(|e| e.text.as_str())
            .collect()
    }

    #[test]
    fn test_recognizes_person_at_top_of_text() {
        let recognizer = HeuristicRecognizer::new();
        let entities = recognizer.recognize("Rahul Sharma\nSoftware Engineer\n");

        let persons = spans_with_label(&entities, EntityLabel::Person);
        assert!(persons.contains(&"Rahul Sharma"));
        assert_eq!(entities[0].start, 0);
    }

    #[test]
    fn test_person_runs_do_not_cross_lines() {
        let recognizer = HeuristicRecognizer::new();
        let entities = recognizer.recognize("Rahul Sharma\nSenior Developer");

        let persons = spans_with_label(&entities, EntityLabel::Person);
        assert!(persons.contains(&"Rahul Sharma"));
        assert!(persons.contains(&"Senior Developer"));
        assert!(!persons.iter().any(|p| p.contains('\n')));
    }

    #[test]
    fn test_org_suffix_wins_over_person_capitalization() {
        let recognizer = HeuristicRecognizer::new();
        let entities = recognizer.recognize("Worked at Acme Technologies since 2019");

        let orgs = spans_with_label(&entities, EntityLabel::Organization);
        assert!(orgs.contains(&"Acme Technologies"));
        let persons = spans_with_label(&entities, EntityLabel::Person);
        assert!(!persons.contains(&"Acme Technologies"));
    }

    #[test]
    fn test_university_of_form() {
        let recognizer = HeuristicRecognizer::new();
        let entities = recognizer.recognize("B.S. from University of California in 2018");

        let orgs = spans_with_label(&entities, EntityLabel::Organization);
        assert!(orgs.iter().any(|o| o.starts_with("University of California")));
    }

    #[test]
    fn test_years_are_tagged_as_dates() {
        let recognizer = HeuristicRecognizer::new();
        let entities = recognizer.recognize("Acme Corp 2018-2022");

        let dates = spans_with_label(&entities, EntityLabel::Date);
        assert_eq!(dates, vec!["2018", "2022"]);
    }

    #[test]
    fn test_empty_text_yields_no_entities() {
        let recognizer = HeuristicRecognizer::new();
        assert!(recognizer.recognize("").is_empty());
    }
}
