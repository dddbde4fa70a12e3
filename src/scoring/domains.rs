use log::warn;

use crate::config::{DomainWeights, EngineSettings};
use crate::domain::skills::{domain_label, items};
use crate::domain::{Player, Rating, SkillDomain};

use super::rounding::round2;
use super::types::{AwarenessLabel, DomainDiagnostic, SelfAwareness};

const RATING_SCALE_MAX: f64 = 5.0;

/// Coach and self blended when both exist, otherwise whichever is present.
pub fn blend_rating(rating: &Rating, settings: &EngineSettings) -> Option<f64> {
    match (rating.coach, rating.self_rating) {
        (Some(coach), Some(own)) => {
            Some(settings.coach_weight * f64::from(coach) + settings.self_weight * f64::from(own))
        }
        (Some(coach), None) => Some(f64::from(coach)),
        (None, Some(own)) => Some(f64::from(own)),
        (None, None) => None,
    }
}

/// Averages the rated items of one domain. Unrated items are skipped.
pub fn aggregate_domain(
    player: &Player,
    domain: SkillDomain,
    weights: &DomainWeights,
    settings: &EngineSettings,
) -> DomainDiagnostic {
    let catalogue = items(player.role, domain);
    let blended: Vec<f64> = catalogue
        .iter()
        .filter_map(|item| player.rating(domain, item))
        .filter_map(|rating| blend_rating(rating, settings))
        .collect();

    let average = (!blended.is_empty()).then(|| blended.iter().sum::<f64>() / blended.len() as f64);

    DomainDiagnostic {
        domain,
        label: domain_label(player.role, domain).to_string(),
        average: average.map(round2),
        percent: average.map(|avg| round2(avg / RATING_SCALE_MAX * 100.0)),
        rated_count: blended.len(),
        total_count: catalogue.len(),
        weight: weights.weight(domain),
    }
}

pub fn domain_breakdown(
    player: &Player,
    weights: &DomainWeights,
    settings: &EngineSettings,
) -> Vec<DomainDiagnostic> {
    report_unknown_items(player);
    SkillDomain::ALL
        .iter()
        .map(|&domain| aggregate_domain(player, domain, weights, settings))
        .collect()
}

fn report_unknown_items(player: &Player) {
    for (domain, rated) in &player.ratings {
        let catalogue = items(player.role, *domain);
        for item in rated.keys().filter(|item| !catalogue.contains(&item.as_str())) {
            warn!(
                "Player {}: '{}' is not a {} item for {}, ignoring",
                player.id,
                item,
                domain.as_str(),
                player.role.label()
            );
        }
    }
}

/// Self-Awareness Gap: how far a player's own ratings sit from the coach's.
pub fn self_awareness(player: &Player, settings: &EngineSettings) -> SelfAwareness {
    let mut coach = Vec::new();
    let mut own = Vec::new();

    for domain in SkillDomain::ALL {
        for item in items(player.role, domain) {
            if let Some(rating) = player.rating(domain, item) {
                coach.extend(rating.coach.map(f64::from));
                own.extend(rating.self_rating.map(f64::from));
            }
        }
    }

    let gap = match (mean(&own), mean(&coach)) {
        (Some(own_mean), Some(coach_mean)) => Some(round2(own_mean - coach_mean)),
        _ => None,
    };
    let label = match gap {
        None => AwarenessLabel::Unassessed,
        Some(g) if g > settings.self_awareness_gap_max => AwarenessLabel::OverEstimates,
        Some(g) if g < settings.self_awareness_gap_min => AwarenessLabel::UnderEstimates,
        Some(_) => AwarenessLabel::Aligned,
    };

    SelfAwareness {
        gap,
        label,
        provisional: coach.is_empty(),
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}
