pub mod candidate;
pub mod criteria;
pub mod score;
pub mod skill;

pub use candidate::*;
pub use criteria::*;
pub use score::*;
pub use skill::*;
