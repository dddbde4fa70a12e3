use crate::config::EngineSettings;

use super::rounding::{round2, safe_ratio, to_percent};
use super::types::Pdi;

/// Player Development Index on `0..=pdi_scale_max`.
///
/// Ratings and competition data are blended by `pdi_competition_weight`.
/// With only one source, that source is used alone. With neither, the PDI is 0.
pub fn player_development_index(
    holistic: Option<u32>,
    cps: Option<u32>,
    settings: &EngineSettings,
) -> Pdi {
    let ratings = holistic.map(|h| f64::from(h) / 100.0);
    let competition = cps.map(|c| f64::from(c) / 100.0);
    let w = settings.pdi_competition_weight.clamp(0.0, 1.0);

    let fraction = match (ratings, competition) {
        (Some(h), Some(c)) => (1.0 - w) * h + w * c,
        (Some(h), None) => h,
        (None, Some(c)) => c,
        (None, None) => 0.0,
    };

    let scale = settings.pdi_scale_max.max(0.0);
    let value = round2(fraction.clamp(0.0, 1.0) * scale);
    Pdi {
        value,
        percent: to_percent(safe_ratio(value, scale) * 100.0),
    }
}
