use std::collections::{HashMap, HashSet};

/// Common English words excluded from the vocabulary. Sorted so the
/// tokenizer can binary-search it.
const STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as",
    "at", "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him",
    "his", "how", "if", "in", "into", "is", "it", "its", "just", "more", "most", "my", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "why", "will", "with", "would", "you", "your",
];

/// Lowercased alphanumeric tokens of at least two characters, with
/// stopwords removed.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| STOPWORDS.binary_search(token).is_err())
        .map(str::to_string)
        .collect()
}

/// Term-frequency / inverse-document-frequency vectorizer.
///
/// Fitted once per candidate pool so every document is projected into
/// the same vocabulary: the most frequent corpus terms (ties broken
/// alphabetically), indexed in alphabetical order. Transformed vectors
/// are L2-normalized.
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn fit(corpus: &[String], max_features: usize) -> Self {
        let mut total_counts: HashMap<String, u64> = HashMap::new();
        let mut doc_freq: HashMap<String, u64> = HashMap::new();

        for doc in corpus {
            let tokens = tokenize(doc);
            for token in &tokens {
                *total_counts.entry(token.clone()).or_insert(0) += 1;
            }
            let distinct: HashSet<&String> = tokens.iter().collect();
            for token in distinct {
                *doc_freq.entry(token.clone()).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(&String, &u64)> = total_counts.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        let mut selected: Vec<String> = ranked
            .into_iter()
            .take(max_features)
            .map(|(term, _)| term.clone())
            .collect();
        selected.sort();

        let n_docs = corpus.len() as f64;
        let mut vocabulary = HashMap::with_capacity(selected.len());
        let mut idf = Vec::with_capacity(selected.len());
        for (index, term) in selected.into_iter().enumerate() {
            let df = doc_freq.get(&term).copied().unwrap_or(0) as f64;
            idf.push(((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Self { vocabulary, idf }
    }

    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                vector[index] += 1.0;
            }
        }

        for (index, value) in vector.iter_mut().enumerate() {
            *value *= self.idf[index];
        }

        let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Cosine similarity of two vectors. Zero-norm vectors and dimension
/// mismatches both yield zero rather than NaN.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        tracing::warn!(
            a_len = a.len(),
            b_len = b.len(),
            "vector dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[&str]) -> Vec<String> {
        docs.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_tokenize_strips_stopwords_and_short_tokens() {
        let tokens = tokenize("The quick-witted fox, a legend");
        assert_eq!(tokens, vec!["quick", "witted", "fox", "legend"]);
    }

    #[test]
    fn test_identical_documents_have_similarity_one() {
        let docs = corpus(&["python backend services", "python backend services"]);
        let vectorizer = TfidfVectorizer::fit(&docs, 100);

        let a = vectorizer.transform(&docs[0]);
        let b = vectorizer.transform(&docs[1]);

        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents_have_similarity_zero() {
        let docs = corpus(&["rust systems programming", "pastry baking recipes"]);
        let vectorizer = TfidfVectorizer::fit(&docs, 100);

        let a = vectorizer.transform(&docs[0]);
        let b = vectorizer.transform(&docs[1]);

        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_vocabulary_keeps_most_frequent_terms() {
        let docs = corpus(&["alpha alpha beta gamma"]);
        let vectorizer = TfidfVectorizer::fit(&docs, 2);

        assert_eq!(vectorizer.vocabulary_len(), 2);
        // gamma lost the frequency tie to beta alphabetically
        assert_eq!(vectorizer.transform("gamma"), vec![0.0, 0.0]);
        assert!(vectorizer.transform("beta").iter().any(|v| *v > 0.0));
    }

    #[test]
    fn test_fit_is_deterministic() {
        let docs = corpus(&[
            "python django rest services",
            "java spring microservices",
            "python data pipelines",
        ]);
        let first = TfidfVectorizer::fit(&docs, 100);
        let second = TfidfVectorizer::fit(&docs, 100);

        for doc in &docs {
            assert_eq!(first.transform(doc), second.transform(doc));
        }
    }

    #[test]
    fn test_empty_text_transforms_to_zero_vector() {
        let docs = corpus(&["python backend"]);
        let vectorizer = TfidfVectorizer::fit(&docs, 100);

        let empty = vectorizer.transform("");
        let other = vectorizer.transform("python");
        assert_eq!(cosine_similarity(&empty, &other), 0.0);
    }

    #[test]
    fn test_mismatched_dimensions_yield_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0]), 0.0);
    }
}
