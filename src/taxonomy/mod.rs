use std::collections::HashMap;

use crate::models::{Skill, SkillCategory};

/// Canonical skill names plus the alternate spellings that résumés use
/// for them. Lookup is case-insensitive; canonical names keep their
/// display casing.
pub struct SkillTaxonomy {
    skills: HashMap<String, Skill>,
    aliases: HashMap<String, String>,
}

impl SkillTaxonomy {
    pub fn new() -> Self {
        let mut taxonomy = Self {
            skills: HashMap::new(),
            aliases: HashMap::new(),
        };

        taxonomy.init_programming();
        taxonomy.init_web();
        taxonomy.init_data();
        taxonomy.init_machine_learning();
        taxonomy.init_cloud();
        taxonomy.init_tools();

        taxonomy
    }

    fn init_programming(&mut self) {
        let languages = vec![
            ("Python", vec!["python3"]),
            ("Java", vec![]),
            ("JavaScript", vec!["js"]),
            ("C++", vec!["cpp"]),
            ("C#", vec!["csharp"]),
            ("Ruby", vec![]),
            ("Go", vec!["golang"]),
            ("Rust", vec![]),
            ("PHP", vec![]),
            ("Swift", vec![]),
            ("Kotlin", vec![]),
            ("TypeScript", vec!["ts"]),
        ];

        for (name, aliases) in languages {
            self.add_skill(name, SkillCategory::Programming, &aliases);
        }
    }

    fn init_web(&mut self) {
        let web = vec![
            ("React", vec!["reactjs", "react.js"]),
            ("Angular", vec!["angularjs"]),
            ("Vue", vec!["vuejs", "vue.js"]),
            ("Node.js", vec!["nodejs", "node"]),
            ("Express", vec!["expressjs"]),
            ("Django", vec![]),
            ("Flask", vec![]),
            ("FastAPI", vec![]),
            ("HTML", vec!["html5"]),
            ("CSS", vec!["css3"]),
            ("Tailwind", vec!["tailwindcss"]),
        ];

        for (name, aliases) in web {
            self.add_skill(name, SkillCategory::Web, &aliases);
        }
    }

    fn init_data(&mut self) {
        let data = vec![
            ("SQL", vec![]),
            ("MongoDB", vec!["mongo"]),
            ("PostgreSQL", vec!["postgres"]),
            ("MySQL", vec![]),
            ("Redis", vec![]),
            ("Elasticsearch", vec![]),
            ("Pandas", vec![]),
            ("NumPy", vec![]),
            ("Spark", vec!["pyspark"]),
        ];

        for (name, aliases) in data {
            self.add_skill(name, SkillCategory::Data, &aliases);
        }
    }

    fn init_machine_learning(&mut self) {
        let ml = vec![
            ("Machine Learning", vec!["ml"]),
            ("Deep Learning", vec![]),
            ("TensorFlow", vec![]),
            ("PyTorch", vec![]),
            ("scikit-learn", vec!["sklearn"]),
            ("Keras", vec![]),
            ("NLP", vec!["natural language processing"]),
            ("Computer Vision", vec![]),
        ];

        for (name, aliases) in ml {
            self.add_skill(name, SkillCategory::MachineLearning, &aliases);
        }
    }

    fn init_cloud(&mut self) {
        let cloud = vec![
            ("AWS", vec!["amazon web services"]),
            ("Azure", vec!["microsoft azure"]),
            ("GCP", vec!["google cloud", "google cloud platform"]),
            ("Docker", vec![]),
            ("Kubernetes", vec!["k8s"]),
            ("Terraform", vec![]),
            ("Jenkins", vec![]),
            ("CI/CD", vec!["cicd", "ci-cd"]),
        ];

        for (name, aliases) in cloud {
            self.add_skill(name, SkillCategory::Cloud, &aliases);
        }
    }

    fn init_tools(&mut self) {
        let tools = vec![
            ("Git", vec![]),
            ("Jira", vec![]),
            ("Agile", vec![]),
            ("Scrum", vec![]),
            ("REST API", vec!["restful"]),
            ("GraphQL", vec![]),
            ("Microservices", vec![]),
        ];

        for (name, aliases) in tools {
            self.add_skill(name, SkillCategory::Tools, &aliases);
        }
    }

    fn add_skill(&mut self, name: &str, category: SkillCategory, aliases: &[&str]) {
        let skill = Skill {
            name: name.to_string(),
            category,
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
        };

        self.skills.insert(name.to_lowercase(), skill);

        for alias in aliases {
            self.aliases
                .insert(alias.to_lowercase(), name.to_lowercase());
        }
    }

    /// Resolve a raw term to its canonical display name, through an
    /// alias if needed.
    pub fn canonical_name(&self, term: &str) -> Option<&str> {
        self.get_skill(term).map(|skill| skill.name.as_str())
    }

    pub fn get_skill(&self, term: &str) -> Option<&Skill> {
        let lower = term.to_lowercase();
        let key = self.aliases.get(&lower).unwrap_or(&lower);
        self.skills.get(key)
    }

    /// Every matchable term (canonical names and aliases, lowercased)
    /// paired with the skill it resolves to, in a stable order.
    pub fn match_terms(&self) -> Vec<(String, &Skill)> {
        let mut terms: Vec<(String, &Skill)> = Vec::new();
        for (key, skill) in &self.skills {
            terms.push((key.clone(), skill));
            for alias in &skill.aliases {
                terms.push((alias.to_lowercase(), skill));
            }
        }

        terms.sort_by(|a, b| a.0.cmp(&b.0));
        terms
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::new()
    }
}
