use std::sync::LazyLock;

use chrono::{Datelike, Utc};
use regex::Regex;

use crate::models::ExperienceEntry;
use crate::ner::{Entity, EntityLabel};

/// Employment ranges: "2018-2022", "2019 – Present". Hyphen, en dash
/// and em dash all appear in real résumés.
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b((?:19|20)\d{2})\s*[-–—]\s*((?:19|20)\d{2}|present|current|now)\b")
        .unwrap()
});

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// Total years of experience from date ranges.
///
/// Overlapping ranges are merged before summing so that concurrent
/// positions are not double-counted; "2018-2022" contributes four
/// years. When no range parses, the span between the earliest and
/// latest standalone years stands in. The result is capped.
pub fn total_years(text: &str, cap: f64) -> f64 {
    total_years_at(text, cap, Utc::now().year())
}

fn total_years_at(text: &str, cap: f64, current_year: i32) -> f64 {
    let mut ranges: Vec<(i32, i32)> = Vec::new();

    for captures in RANGE_RE.captures_iter(text) {
        let (Some(start_m), Some(end_m)) = (captures.get(1), captures.get(2)) else {
            continue;
        };
        let Ok(start) = start_m.as_str().parse::<i32>() else {
            continue;
        };
        let end = match end_m.as_str().parse::<i32>() {
            Ok(year) => year,
            Err(_) => current_year,
        };
        // Reversed ranges are noise, not negative experience.
        if end >= start {
            ranges.push((start, end));
        }
    }

    let mut total = merge_and_sum(&mut ranges);

    if total == 0.0 {
        let years: Vec<i32> = YEAR_RE
            .find_iter(text)
            .filter_map(|m| m.as_str().parse::<i32>().ok())
            .collect();
        if years.len() >= 2 {
            let min = years.iter().min().copied().unwrap_or(0);
            let max = years.iter().max().copied().unwrap_or(0);
            total = (max - min) as f64;
        }
    }

    total.min(cap)
}

/// Merge overlapping or touching ranges in place, then sum the lengths.
fn merge_and_sum(ranges: &mut Vec<(i32, i32)>) -> f64 {
    if ranges.is_empty() {
        return 0.0;
    }

    ranges.sort_unstable();

    let mut merged: Vec<(i32, i32)> = Vec::with_capacity(ranges.len());
    for &(start, end) in ranges.iter() {
        match merged.last_mut() {
            Some((_, last_end)) if start <= *last_end => {
                *last_end = (*last_end).max(end);
            }
            _ => merged.push((start, end)),
        }
    }

    merged.iter().map(|(start, end)| (end - start) as f64).sum()
}

/// Company entries from recognized organizations, deduplicated
/// case-insensitively in order of first mention. The first-seen casing
/// is the one kept.
pub fn extract_companies(entities: &[Entity], limit: usize) -> Vec<ExperienceEntry> {
    let mut seen: Vec<&str> = Vec::new();
    let mut companies = Vec::new();

    for entity in entities {
        if entity.label != EntityLabel::Organization {
            continue;
        }
        if seen.iter().any(|s| s.eq_ignore_ascii_case(&entity.text)) {
            continue;
        }
        seen.push(&entity.text);

        companies.push(ExperienceEntry {
            company: entity.text.clone(),
            position: None,
            duration: None,
        });
        if companies.len() == limit {
            break;
        }
    }

    companies
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(text: &str, start: usize) -> Entity {
        Entity {
            text: text.to_string(),
            label: EntityLabel::Organization,
            start,
        }
    }

    #[test]
    fn test_single_range() {
        assert_eq!(total_years_at("Acme Corp 2018-2022", 50.0, 2026), 4.0);
    }

    #[test]
    fn test_disjoint_ranges_sum() {
        let text = "Acme 2012-2015\nGlobex 2017-2020";
        assert_eq!(total_years_at(text, 50.0, 2026), 6.0);
    }

    #[test]
    fn test_overlapping_ranges_merge() {
        let text = "Acme 2015-2019 and Globex 2018-2021";
        assert_eq!(total_years_at(text, 50.0, 2026), 6.0);
    }

    #[test]
    fn test_open_range_uses_current_year() {
        assert_eq!(total_years_at("Acme 2020 - Present", 50.0, 2026), 6.0);
        assert_eq!(total_years_at("Acme 2020-current", 50.0, 2026), 6.0);
    }

    #[test]
    fn test_en_dash_ranges() {
        assert_eq!(total_years_at("Acme 2018–2022", 50.0, 2026), 4.0);
    }

    #[test]
    fn test_reversed_range_is_skipped() {
        // The stray reversed pair leaves only standalone years, so the
        // span fallback kicks in.
        assert_eq!(total_years_at("typo 2022-2018", 50.0, 2026), 4.0);
    }

    #[test]
    fn test_standalone_year_span_fallback() {
        let text = "Joined Acme in 2014. Left Globex in 2021.";
        assert_eq!(total_years_at(text, 50.0, 2026), 7.0);
    }

    #[test]
    fn test_single_year_yields_zero() {
        assert_eq!(total_years_at("Class of 2019", 50.0, 2026), 0.0);
    }

    #[test]
    fn test_cap_applies() {
        assert_eq!(total_years_at("1950-2024", 50.0, 2026), 50.0);
    }

    #[test]
    fn test_companies_deduplicated_in_order() {
        let entities = vec![
            org("Acme Inc", 10),
            org("Globex Corp", 50),
            org("Acme Inc", 90),
        ];
        let companies = extract_companies(&entities, 5);

        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].company, "Acme Inc");
        assert_eq!(companies[1].company, "Globex Corp");
        assert_eq!(companies[0].position, None);
    }

    #[test]
    fn test_company_dedup_ignores_case() {
        let entities = vec![org("Acme Inc", 10), org("ACME INC", 50)];
        let companies = extract_companies(&entities, 5);

        assert_eq!(companies.len(), 1);
        // First-seen casing wins.
        assert_eq!(companies[0].company, "Acme Inc");
    }

    #[test]
    fn test_company_limit() {
        let entities: Vec<Entity> = (0..8)
            .map(|i| org(&format!("Company {i} Inc"), i * 20))
            .collect();
        assert_eq!(extract_companies(&entities, 5).len(), 5);
    }
}
