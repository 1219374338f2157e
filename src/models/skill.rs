use serde::{Deserialize, Serialize};

/// A recognized skill with its canonical display name and the spellings
/// that map onto it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Programming,
    Web,
    Data,
    MachineLearning,
    Cloud,
    Tools,
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillCategory::Programming => write!(f, "Programming"),
            SkillCategory::Web => write!(f, "Web"),
            SkillCategory::Data => write!(f, "Data"),
            SkillCategory::MachineLearning => write!(f, "Machine Learning"),
            SkillCategory::Cloud => write!(f, "Cloud"),
            SkillCategory::Tools => write!(f, "Tools"),
        }
    }
}
