pub mod growth;
pub mod scoring;

pub use growth::GrowthService;
pub use scoring::{load_roster, ScoringService};
