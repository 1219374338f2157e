/// Keywords that flag certification lines, including the vendor names
/// that dominate real certification sections.
const CERTIFICATION_KEYWORDS: &[&str] = &[
    "certified",
    "certification",
    "certificate",
    "aws",
    "azure",
    "google cloud",
    "pmp",
    "cissp",
];

/// For each keyword, capture the first line mentioning it. The combined
/// hits come back in order of appearance in the text, deduplicated
/// case-insensitively.
pub fn extract_certifications(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let mut hits: Vec<(usize, &str)> = Vec::new();

    for keyword in CERTIFICATION_KEYWORDS {
        let first = lines
            .iter()
            .enumerate()
            .find(|(_, line)| line.to_lowercase().contains(keyword));
        if let Some((idx, line)) = first {
            hits.push((idx, line.trim()));
        }
    }

    hits.sort_by_key(|(idx, _)| *idx);

    let mut seen: Vec<String> = Vec::new();
    let mut certifications = Vec::new();
    for (_, line) in hits {
        let lower = line.to_lowercase();
        if seen.contains(&lower) {
            continue;
        }
        seen.push(lower);
        certifications.push(line.to_string());
    }

    certifications
}
