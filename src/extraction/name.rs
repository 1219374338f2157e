use crate::ner::{Entity, EntityLabel};

pub const UNKNOWN_CANDIDATE: &str = "Unknown Candidate";

const MAX_NAME_LEN: usize = 50;
const MIN_NAME_WORDS: usize = 2;
const MAX_NAME_WORDS: usize = 4;
const MIN_NAME_CHAR_RATIO: f64 = 0.8;

/// Job-related keywords that never appear in a real name. Substring
/// containment on the lowercased candidate.
const JOB_TITLE_BLOCKLIST: &[&str] = &[
    "developer",
    "engineer",
    "manager",
    "associate",
    "consultant",
    "analyst",
    "intern",
    "designer",
    "architect",
    "lead",
    "senior",
    "junior",
    "staff",
    "principal",
    "director",
    "head",
    "chief",
    "officer",
    "specialist",
    "stack",
    "frontend",
    "backend",
    "fullstack",
    "full-stack",
    "full stack",
    "software",
    "data",
    "web",
    "mobile",
    "cloud",
    "security",
    "network",
    "product",
    "project",
    "program",
    "technical",
    "tech",
    "it",
    "qa",
    "qe",
    "coordinator",
    "administrator",
    "executive",
    "assistant",
    "representative",
];

/// Tech terms that show up in headers and skill lines, never in names.
const TECH_BLOCKLIST: &[&str] = &[
    // Programming languages
    "python",
    "java",
    "javascript",
    "typescript",
    "c++",
    "c#",
    "ruby",
    "go",
    "rust",
    "php",
    "swift",
    "kotlin",
    // Libraries and frameworks
    "react",
    "angular",
    "vue",
    "node",
    "nodejs",
    "express",
    "django",
    "flask",
    "fastapi",
    "spring",
    "pandas",
    "numpy",
    "scipy",
    "matplotlib",
    "seaborn",
    "plotly",
    "tensorflow",
    "pytorch",
    "keras",
    // Tools and platforms
    "docker",
    "kubernetes",
    "git",
    "github",
    "gitlab",
    "jenkins",
    "aws",
    "azure",
    "gcp",
    "linux",
    "windows",
    "macos",
    "ubuntu",
    "debian",
    // Design tools
    "adobe",
    "photoshop",
    "illustrator",
    "figma",
    "sketch",
    "xd",
    // Databases
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "elasticsearch",
    "sql",
    // Other tech terms
    "api",
    "rest",
    "graphql",
    "microservices",
    "devops",
    "agile",
    "scrum",
    "jira",
];

/// Words that mark a sentence fragment rather than a name.
const CONNECTIVE_WORDS: &[&str] = &[
    "with",
    "and",
    "the",
    "for",
    "in",
    "at",
    "to",
    "of",
    "undergraduate",
    "graduate",
    "student",
];

/// Inputs available to the name strategies.
pub struct NameContext<'a> {
    pub text: &'a str,
    pub entities: &'a [Entity],
    pub email: Option<&'a str>,
    /// Person entities past this byte offset are ignored.
    pub window: usize,
    /// Non-empty lines inspected by the line-scan strategy.
    pub scan_lines: usize,
}

type Strategy = fn(&NameContext) -> Option<String>;

/// Ordered fallback chain; the first strategy producing a valid name wins.
/// Reordering is a data change here, not a control-flow rewrite.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("entity", from_person_entities),
    ("line-scan", from_leading_lines),
    ("email", from_email),
];

/// Resolve the single best candidate name, falling back to
/// "Unknown Candidate" when every strategy comes up empty.
pub fn resolve_name(ctx: &NameContext) -> String {
    for (label, strategy) in STRATEGIES {
        if let Some(name) = strategy(ctx) {
            tracing::debug!("name resolved via {} strategy: {}", label, name);
            return name;
        }
    }

    tracing::debug!("all name strategies exhausted, using fallback");
    UNKNOWN_CANDIDATE.to_string()
}

/// Validate a name candidate. Every check must hold; the blocklists run
/// first as the cheapest rejects.
pub fn is_valid_name(candidate: &str) -> bool {
    let name = candidate.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        return false;
    }

    let lower = name.to_lowercase();
    if JOB_TITLE_BLOCKLIST.iter().any(|term| lower.contains(term)) {
        return false;
    }
    if TECH_BLOCKLIST.iter().any(|term| lower.contains(term)) {
        return false;
    }
    if CONNECTIVE_WORDS.iter().any(|word| lower.contains(word)) {
        return false;
    }

    let words = name.split_whitespace().count();
    if !(MIN_NAME_WORDS..=MAX_NAME_WORDS).contains(&words) {
        return false;
    }

    let total = name.chars().count();
    let name_chars = name
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace() || matches!(c, '-' | '\'' | '.'))
        .count();
    (name_chars as f64 / total as f64) >= MIN_NAME_CHAR_RATIO
}

/// Recognized-entity strategy: validated person spans from the leading
/// window, scored by position (earlier wins) and word count (2-4 peaks).
fn from_person_entities(ctx: &NameContext) -> Option<String> {
    let mut best: Option<(f64, &str)> = None;

    for entity in ctx.entities {
        if entity.label != EntityLabel::Person || entity.start >= ctx.window {
            continue;
        }
        if !is_valid_name(&entity.text) {
            continue;
        }

        let position_score = 1.0 - entity.start as f64 / ctx.window as f64;
        let word_count = entity.text.split_whitespace().count();
        let word_score = if (MIN_NAME_WORDS..=MAX_NAME_WORDS).contains(&word_count) {
            1.0
        } else {
            0.5
        };
        let score = position_score + word_score;

        // Strictly-greater keeps the earliest entity on ties.
        if best.map_or(true, |(top, _)| score > top) {
            best = Some((score, entity.text.as_str()));
        }
    }

    best.map(|(_, name)| name.trim().to_string())
}

/// Line-scan strategy: the first few non-empty lines, skipping anything
/// that is clearly not a name.
fn from_leading_lines(ctx: &NameContext) -> Option<String> {
    ctx.text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(ctx.scan_lines)
        .find(|line| {
            if line.chars().count() > MAX_NAME_LEN
                || line.contains('@')
                || line.to_lowercase().contains("http")
            {
                return false;
            }
            is_valid_name(line) && line.contains(' ')
        })
        .map(str::to_string)
}

/// Email-derived strategy: title-cased tokens from the local part.
fn from_email(ctx: &NameContext) -> Option<String> {
    let email = ctx.email?;
    let local = match email.split_once('@') {
        Some((local, _)) => local,
        None => email,
    };

    let parts: Vec<&str> = local
        .split(|c: char| matches!(c, '.' | '_' | '-') || c.is_ascii_digit())
        .filter(|part| !part.is_empty())
        .collect();

    let derived = if parts.is_empty() {
        capitalize(local)
    } else {
        parts
            .iter()
            .take(2)
            .map(|part| capitalize(part))
            .collect::<Vec<_>>()
            .join(" ")
    };

    if derived.trim().is_empty() {
        None
    } else {
        Some(derived)
    }
}

/// First char uppercased, the rest lowercased.
fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(text: &str, start: usize) -> Entity {
        Entity {
            text: text.to_string(),
            label: EntityLabel::Person,
            start,
        }
    }

    fn ctx<'a>(text: &'a str, entities: &'a [Entity], email: Option<&'a str>) -> NameContext<'a> {
        NameContext {
            text,
            entities,
            email,
            window: 1000,
            scan_lines: 5,
        }
    }

    #[test]
    fn test_accepts_plain_names() {
        assert!(is_valid_name("Rahul Sharma"));
        assert!(is_valid_name("Mary Jane Rose Burke"));
        assert!(is_valid_name("Anne-Marie O'Brien"));
    }

    #[test]
    fn test_rejects_job_titles() {
        assert!(!is_valid_name("Frontend Developer"));
        assert!(!is_valid_name("Senior Program Manager"));
    }

    #[test]
    fn test_rejects_tech_terms() {
        assert!(!is_valid_name("Seaborn"));
        assert!(!is_valid_name("Python Pandas"));
    }

    #[test]
    fn test_rejects_wrong_word_counts() {
        assert!(!is_valid_name("Rahul"));
        assert!(!is_valid_name("Mary Jane Rose Holly Burke"));
    }

    #[test]
    fn test_rejects_overlong_candidate() {
        let long = "Aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa Bbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
        assert!(!is_valid_name(long));
    }

    #[test]
    fn test_rejects_low_alpha_ratio() {
        assert!(!is_valid_name("Rahul 12345678"));
    }

    #[test]
    fn test_rejects_sentence_fragments() {
        assert!(!is_valid_name("Working with Anna"));
        assert!(!is_valid_name("Graduate Student Profile"));
    }

    #[test]
    fn test_entity_strategy_prefers_earlier_span() {
        let entities = vec![person("Priya Verma", 500), person("Rahul Sharma", 0)];
        let context = ctx("irrelevant", &entities, None);
        assert_eq!(resolve_name(&context), "Rahul Sharma");
    }

    #[test]
    fn test_entity_outside_window_is_ignored() {
        let entities = vec![person("Rahul Sharma", 1500)];
        let context = ctx("no usable lines here @", &entities, None);
        assert_eq!(resolve_name(&context), UNKNOWN_CANDIDATE);
    }

    #[test]
    fn test_invalid_entities_fall_through_to_line_scan() {
        let entities = vec![person("Frontend Developer", 0)];
        let text = "Frontend Developer\nRahul Sharma\nrahul@example.com";
        let context = ctx(text, &entities, None);
        assert_eq!(resolve_name(&context), "Rahul Sharma");
    }

    #[test]
    fn test_line_scan_skips_emails_and_urls() {
        let text = "rahul@example.com\nhttp://example.com\nRahul Sharma";
        let context = ctx(text, &[], None);
        assert_eq!(resolve_name(&context), "Rahul Sharma");
    }

    #[test]
    fn test_line_scan_requires_a_space() {
        let text = "Moonlight\nVikram Rao";
        let context = ctx(text, &[], None);
        assert_eq!(resolve_name(&context), "Vikram Rao");
    }

    #[test]
    fn test_email_fallback_tokenization() {
        let context = ctx("", &[], Some("rahul.sharma92@example.com"));
        assert_eq!(resolve_name(&context), "Rahul Sharma");
    }

    #[test]
    fn test_email_fallback_keeps_single_letter_tokens() {
        let context = ctx("", &[], Some("m.smith@example.com"));
        assert_eq!(resolve_name(&context), "M Smith");
    }

    #[test]
    fn test_email_fallback_without_separators() {
        let context = ctx("", &[], Some("sahulshaw92@gmail.com"));
        assert_eq!(resolve_name(&context), "Sahulshaw");
    }

    #[test]
    fn test_terminal_fallback() {
        let context = ctx("", &[], None);
        assert_eq!(resolve_name(&context), UNKNOWN_CANDIDATE);
    }
}
