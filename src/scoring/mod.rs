pub mod age_score;
pub mod cohort;
pub mod context;
pub mod cps;
pub mod domains;
pub mod engine;
pub mod growth;
pub mod holistic;
pub mod leaderboard;
pub mod pdi;
pub mod performance;
pub mod rounding;
pub mod types;

pub use engine::ScoringEngine;
pub use growth::{growth_delta, DomainDelta, GrowthDelta};
pub use leaderboard::{rank, SortKey};
pub use types::{
    AwarenessLabel, Band, DomainDiagnostic, GradeContext, HolisticScore, PerformanceIndices, Pdi,
    ScoreResult, SelfAwareness,
};
