use serde::{Deserialize, Serialize};

/// A competition level on the canonical scale where a top-flight adult 1st XI is 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionTier {
    pub code: String,
    pub label: String,
    pub category: String,
    pub tier_value: f64,
}

impl CompetitionTier {
    pub fn new(code: &str, label: &str, category: &str, tier_value: f64) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            category: category.to_string(),
            tier_value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierTable {
    tiers: Vec<CompetitionTier>,
}

impl Default for TierTable {
    fn default() -> Self {
        Self::new(default_tiers())
    }
}

impl TierTable {
    pub fn new(tiers: Vec<CompetitionTier>) -> Self {
        Self { tiers }
    }

    pub fn lookup(&self, code: &str) -> Option<&CompetitionTier> {
        self.tiers.iter().find(|t| t.code == code)
    }

    /// Unknown codes resolve to `fallback` rather than failing the computation.
    pub fn tier_value(&self, code: &str, fallback: f64) -> f64 {
        self.lookup(code).map(|t| t.tier_value).unwrap_or(fallback)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompetitionTier> {
        self.tiers.iter()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

/// Built-in competition levels, ranked from senior premier cricket down to junior club divisions.
pub fn default_tiers() -> Vec<CompetitionTier> {
    vec![
        CompetitionTier::new("prem_1", "Premier Cricket - 1st XI", "Premier / Pathway", 1.0),
        CompetitionTier::new("prem_low", "Premier Cricket - 2nd-4th XI", "Premier / Pathway", 0.9),
        CompetitionTier::new("dowling", "Dowling Shield / U18 Pathway", "Premier / Pathway", 0.85),
        CompetitionTier::new("sr_sub", "Senior Sub-District / Association", "Senior Cricket", 0.8),
        CompetitionTier::new("jgc", "J.G. Craig U15 / Representative", "Representative", 0.85),
        CompetitionTier::new("vmcu", "VMCU Representative", "Representative", 0.75),
        CompetitionTier::new("local_sr", "Local Club - Senior Cricket", "Local Club", 0.7),
        CompetitionTier::new("local_j1", "Local Club - Junior Shield 1 / Premier", "Local Club - Junior", 0.75),
        CompetitionTier::new("local_j2", "Local Club - Junior Shield 2 / Div 1", "Local Club - Junior", 0.6),
        CompetitionTier::new("local_j3", "Local Club - Junior Shield 3+ / Div 2+", "Local Club - Junior", 0.45),
    ]
}
