pub mod settings;
pub mod tiers;
pub mod weights;

pub use settings::{AppConfig, ArmModel, CohortGrouping, ConfigWarning, EngineSettings};
pub use tiers::{CompetitionTier, TierTable};
pub use weights::{DisciplineWeights, DomainWeights, RoleWeightTable, RoleWeights};
