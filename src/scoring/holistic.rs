use super::rounding::{safe_ratio, to_percent};
use super::types::{Band, DomainDiagnostic, HolisticScore};

/// Weighted blend of rated domains. Unrated domains drop out of both the
/// numerator and the weight sum.
pub fn holistic_score(domains: &[DomainDiagnostic]) -> HolisticScore {
    let (weighted, weight_sum) = domains
        .iter()
        .filter_map(|d| d.percent.map(|pct| (pct, d.weight)))
        .fold((0.0, 0.0), |(acc, total), (pct, weight)| (acc + pct * weight, total + weight));

    let score = to_percent(safe_ratio(weighted, weight_sum));
    let rated_count: usize = domains.iter().map(|d| d.rated_count).sum();
    let total_count: usize = domains.iter().map(|d| d.total_count).sum();

    HolisticScore {
        score,
        band: Band::from_score(score),
        completeness: to_percent(safe_ratio(rated_count as f64, total_count as f64) * 100.0),
        rated_count,
        total_count,
    }
}
