use log::{debug, warn};

use crate::config::{AppConfig, ArmModel, EngineSettings};
use crate::domain::{AgeGroup, GradeRecord, MatchFormat};

use super::rounding::round2;
use super::types::GradeContext;

const NEUTRAL_ARM: f64 = 1.0;

/// Age-Relevance Modifier: rewards playing above the player's own age group.
pub fn age_relevance_modifier(age_group: &str, age: Option<u32>, settings: &EngineSettings) -> f64 {
    let Some(age) = age else {
        return NEUTRAL_ARM;
    };
    let group = AgeGroup::parse(age_group);
    let raw = match settings.arm_model {
        ArmModel::Banded => banded_arm(group, age, settings),
        ArmModel::Linear => linear_arm(group, age, settings),
    };
    raw.clamp(settings.arm_floor.min(settings.arm_ceiling), settings.arm_ceiling)
}

fn banded_arm(group: AgeGroup, age: u32, settings: &EngineSettings) -> f64 {
    if group == AgeGroup::Open {
        return open_arm(age, settings);
    }
    let Some(ceiling) = group.ceiling(settings.open_age_ceiling) else {
        return NEUTRAL_ARM;
    };
    let delta = i64::from(ceiling) - i64::from(age);
    match delta {
        d if d >= 2 => 1.3,
        1 => 1.15,
        d if d >= -1 => 1.0,
        -2 => 0.8,
        _ => 0.6,
    }
}

fn linear_arm(group: AgeGroup, age: u32, settings: &EngineSettings) -> f64 {
    if group == AgeGroup::Open {
        return open_arm(age, settings);
    }
    match group.ceiling(settings.open_age_ceiling) {
        Some(ceiling) => 1.0 + (f64::from(ceiling) - f64::from(age)) * settings.arm_sensitivity,
        None => NEUTRAL_ARM,
    }
}

/// Juniors in open cricket earn the ceiling bonus. Adults are age-appropriate there.
fn open_arm(age: u32, settings: &EngineSettings) -> f64 {
    if age < settings.open_age_ceiling {
        settings.arm_ceiling
    } else {
        NEUTRAL_ARM
    }
}

/// Format only matters once a player is old enough for senior formats.
pub fn format_modifier(format: MatchFormat, age: Option<u32>, settings: &EngineSettings) -> f64 {
    match age {
        Some(a) if a >= settings.senior_format_age => match format {
            MatchFormat::T20 => 1.15,
            MatchFormat::MultiDay => 0.9,
            MatchFormat::OneDay | MatchFormat::Unspecified => 1.0,
        },
        _ => 1.0,
    }
}

/// Resolves one grade into its Competition Context Multiplier.
pub fn resolve_grade(grade: &GradeRecord, age: Option<u32>, config: &AppConfig) -> GradeContext {
    let settings = &config.engine;
    let known_tier = config.tiers.lookup(&grade.tier_code).is_some();
    if !known_tier {
        warn!(
            "Unknown competition tier '{}', using fallback value {}",
            grade.tier_code, settings.fallback_tier_value
        );
    }
    let tier_value = config.tiers.tier_value(&grade.tier_code, settings.fallback_tier_value);
    let arm = age_relevance_modifier(&grade.age_group, age, settings);
    let format_modifier = format_modifier(grade.format, age, settings);
    let ccm = round2(tier_value * arm * format_modifier);

    debug!(
        "Grade {} ({}): tier {} x arm {} x format {} = ccm {}",
        grade.tier_code, grade.age_group, tier_value, arm, format_modifier, ccm
    );

    GradeContext {
        tier_code: grade.tier_code.clone(),
        known_tier,
        tier_value,
        arm,
        format_modifier,
        ccm,
    }
}

/// The grade with the highest CCM; the first one wins ties.
///
/// CCM rather than raw tier value, so a lower tier played well above age can
/// outrank a higher tier played at age. Its ARM feeds the age score and its
/// age group the trajectory flag.
pub fn headline_grade(contexts: &[GradeContext]) -> Option<usize> {
    contexts
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, ctx)| match best {
            Some((_, ccm)) if ccm >= ctx.ccm => best,
            _ => Some((i, ctx.ccm)),
        })
        .map(|(i, _)| i)
}
