pub mod age;
pub mod models;
pub mod skills;

pub use age::{age_on, AgeBracket, AgeGroup};
pub use models::{GradeRecord, MatchFormat, Player, Rating, Role, SkillRatingSet};
pub use skills::SkillDomain;
