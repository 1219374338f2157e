use std::sync::LazyLock;

use regex::Regex;

use crate::models::EducationEntry;

/// Keywords that flag a line as an education statement. Substring
/// containment on the lowercased line.
const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "b.tech",
    "m.tech",
    "b.s",
    "m.s",
    "b.a",
    "mba",
    "associate",
    "diploma",
    "high school",
    "degree",
    "university",
    "college",
];

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// Scan for lines containing degree keywords. Each hit becomes an
/// entry: the full line as the degree, the first year on the line, and
/// the following non-empty-after-trim line as the institution.
pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let lines: Vec<&str> = text.lines().collect();
    let mut education = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let lower = line.to_lowercase();
        if !EDUCATION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            continue;
        }

        let year = YEAR_RE
            .find(line)
            .and_then(|m| m.as_str().parse::<u16>().ok());

        let institution = lines
            .get(i + 1)
            .map(|next| next.trim())
            .filter(|next| !next.is_empty())
            .map(str::to_string);

        education.push(EducationEntry {
            degree: line.trim().to_string(),
            institution,
            year,
        });
    }

    education
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_line_with_year_and_institution() {
        let text = "Master of Science in Computer Science, 2019\nStanford University";
        let entries = extract_education(text);

        assert_eq!(entries[0].degree, "Master of Science in Computer Science, 2019");
        assert_eq!(entries[0].year, Some(2019));
        assert_eq!(entries[0].institution, Some("Stanford University".to_string()));
    }

    #[test]
    fn test_institution_line_also_matches_keywords() {
        let text = "Master of Science in Computer Science, 2019\nStanford University";
        let entries = extract_education(text);

        // The institution line contains "university" and produces its
        // own entry, mirroring the keyword scan.
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].degree, "Stanford University");
        assert_eq!(entries[1].institution, None);
    }

    #[test]
    fn test_degree_without_year_or_institution() {
        let entries = extract_education("B.Tech in Electronics");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "B.Tech in Electronics");
        assert_eq!(entries[0].year, None);
        assert_eq!(entries[0].institution, None);
    }

    #[test]
    fn test_no_keywords_no_entries() {
        assert!(extract_education("Built dashboards at Acme Corp").is_empty());
    }

    #[test]
    fn test_blank_following_line_is_not_an_institution() {
        let entries = extract_education("MBA, 2015\n\nWork history follows");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].institution, None);
    }
}
