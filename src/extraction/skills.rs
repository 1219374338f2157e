use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::taxonomy::SkillTaxonomy;

/// Lines like "Skills: python, react" whose remainder is an explicit
/// skill list.
static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:skills?|technologies?|proficient in|experience with):\s*([^\n]+)")
        .unwrap()
});

/// Matches résumé text against the skill taxonomy. Terms are matched at
/// word boundaries in the body text, and skill-section lines get an
/// additional token-by-token pass.
pub struct SkillMatcher {
    /// (lowercased term, canonical display name), sorted by term.
    terms: Vec<(String, String)>,
}

impl SkillMatcher {
    pub fn new(taxonomy: &SkillTaxonomy) -> Self {
        let terms = taxonomy
            .match_terms()
            .into_iter()
            .map(|(term, skill)| (term, skill.name.clone()))
            .collect();

        Self { terms }
    }

    /// All canonical skills mentioned in the text, deduplicated and
    /// sorted case-insensitively.
    pub fn match_text(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut found: BTreeSet<&str> = BTreeSet::new();

        for (term, canonical) in &self.terms {
            if contains_word(&lower, term) {
                found.insert(canonical);
            }
        }

        for capture in SECTION_RE.captures_iter(&lower) {
            let Some(segment) = capture.get(1) else {
                continue;
            };
            for raw in segment
                .as_str()
                .split(|c| matches!(c, ',' | ';' | '|' | '•'))
            {
                let token = raw.trim();
                if token.is_empty() {
                    continue;
                }
                if let Some(canonical) = self.lookup(token) {
                    found.insert(canonical);
                }
            }
        }

        let mut skills: Vec<String> = found.into_iter().map(str::to_string).collect();
        skills.sort_by_key(|name| name.to_lowercase());
        skills
    }

    fn lookup(&self, token: &str) -> Option<&str> {
        self.terms
            .binary_search_by(|(term, _)| term.as_str().cmp(token))
            .ok()
            .map(|idx| self.terms[idx].1.as_str())
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new(&SkillTaxonomy::new())
    }
}

/// True when `term` occurs in `text` delimited by non-alphanumeric
/// characters. Regex `\b` cannot express this for terms that end in
/// punctuation (c++, node.js, ci/cd), so the flanks are checked by hand.
fn contains_word(text: &str, term: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = text[from..].find(term) {
        let start = from + pos;
        let end = start + term.len();

        let before_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());

        if before_ok && after_ok {
            return true;
        }
        from = end;
    }

    false
}
