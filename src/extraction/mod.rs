pub mod certifications;
pub mod contact;
pub mod education;
pub mod experience;
pub mod name;
pub mod pipeline;
pub mod skills;

pub use name::{is_valid_name, resolve_name, NameContext, UNKNOWN_CANDIDATE};
pub use pipeline::ExtractionPipeline;
pub use skills::SkillMatcher;
