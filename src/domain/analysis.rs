//! Sustainability scoring layered on top of a priced device.
//!
//! These numbers are presentation aids. They are derived from small per-kind
//! constant tables and the multipliers already found in a [`PriceBreakdown`].

use serde::Serialize;

use super::catalog::DeviceKind;
use super::pricing::PriceBreakdown;
use super::tables::Condition;

const UNKNOWN_CONDITION_CONFIDENCE: u8 = 40;

/// Best condition multiplier in the table; a like-new device scores full quality.
const BEST_CONDITION_MULTIPLIER: f64 = 0.9;

const REUSE_WEIGHT: f64 = 0.40;
const RECYCLE_WEIGHT: f64 = 0.35;
const REFURBISH_WEIGHT: f64 = 0.25;

struct KindProfile {
    reuse: f64,
    recycle: f64,
    refurbish: f64,
    manufacturing_co2_tons: f64,
    recycling_co2_tons: f64,
}

fn kind_profile(kind: DeviceKind) -> KindProfile {
    match kind {
        DeviceKind::Smartphone => KindProfile {
            reuse: 85.0,
            recycle: 90.0,
            refurbish: 80.0,
            manufacturing_co2_tons: 0.07,
            recycling_co2_tons: 0.065,
        },
        DeviceKind::Laptop => KindProfile {
            reuse: 80.0,
            recycle: 85.0,
            refurbish: 75.0,
            manufacturing_co2_tons: 0.35,
            recycling_co2_tons: 0.325,
        },
        DeviceKind::Tablet => KindProfile {
            reuse: 75.0,
            recycle: 88.0,
            refurbish: 70.0,
            manufacturing_co2_tons: 0.18,
            recycling_co2_tons: 0.165,
        },
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecyclingPotential {
    pub reuse: f64,
    pub recycle: f64,
    pub refurbish: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonFootprint {
    pub manufacturing_tons: f64,
    pub reuse_savings_tons: f64,
    pub recycling_savings_tons: f64,
    /// Manufacturing cost left after the better of reuse or recycling.
    pub net_tons: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityAnalysis {
    pub recycling_potential: RecyclingPotential,
    pub sustainability_score: f64,
    pub carbon_footprint: CarbonFootprint,
    pub confidence: u8,
}

pub fn condition_confidence(condition: &str) -> u8 {
    match Condition::from_label(condition) {
        Some(Condition::LikeNew) => 92,
        Some(Condition::Excellent) => 88,
        Some(Condition::Good) => 82,
        Some(Condition::Fair) => 70,
        Some(Condition::Poor) => 60,
        Some(Condition::ForParts) => 50,
        None => UNKNOWN_CONDITION_CONFIDENCE,
    }
}

pub fn confidence_multiplier(confidence: u8) -> f64 {
    if confidence > 80 {
        1.1
    } else if confidence > 60 {
        1.0
    } else {
        0.9
    }
}

pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

/// Scores a priced device. Returns `None` when `device_type` is not a catalog category.
pub fn analyze_sustainability(
    device_type: &str,
    condition: &str,
    breakdown: &PriceBreakdown,
) -> Option<SustainabilityAnalysis> {
    let profile = kind_profile(DeviceKind::from_key(device_type)?);
    let confidence = condition_confidence(condition);
    let boost = confidence_multiplier(confidence);
    let quality = (breakdown.condition_multiplier / BEST_CONDITION_MULTIPLIER).min(1.0);

    let potential = RecyclingPotential {
        reuse: clamp_score(profile.reuse * quality * breakdown.age_multiplier * boost),
        recycle: clamp_score(profile.recycle * boost),
        refurbish: clamp_score(profile.refurbish * (0.5 + 0.5 * quality) * boost),
    };

    let score = clamp_score(
        REUSE_WEIGHT * potential.reuse
            + RECYCLE_WEIGHT * potential.recycle
            + REFURBISH_WEIGHT * potential.refurbish,
    );

    let reuse_savings = profile.manufacturing_co2_tons * (potential.reuse / 100.0);
    let carbon = CarbonFootprint {
        manufacturing_tons: profile.manufacturing_co2_tons,
        reuse_savings_tons: reuse_savings,
        recycling_savings_tons: profile.recycling_co2_tons,
        net_tons: profile.manufacturing_co2_tons - reuse_savings.max(profile.recycling_co2_tons),
    };

    Some(SustainabilityAnalysis {
        recycling_potential: potential,
        sustainability_score: score,
        carbon_footprint: carbon,
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::{calculate_price, PriceRequest};

    fn breakdown(condition: &str) -> PriceBreakdown {
        let request = PriceRequest::new("smartphones", "Apple", "iPhone 15", condition);
        calculate_price(&request, 2024).unwrap().breakdown
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_confidence_buckets() {
        assert_eq!(confidence_multiplier(81), 1.1);
        assert_eq!(confidence_multiplier(80), 1.0);
        assert_eq!(confidence_multiplier(61), 1.0);
        assert_eq!(confidence_multiplier(60), 0.9);
        assert_eq!(confidence_multiplier(0), 0.9);
    }

    #[test]
    fn test_condition_confidence() {
        assert_eq!(condition_confidence("Like New"), 92);
        assert_eq!(condition_confidence("For Parts"), 50);
        assert_eq!(condition_confidence("Mint"), 40);
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-5.0), 0.0);
        assert_eq!(clamp_score(42.5), 42.5);
        assert_eq!(clamp_score(130.0), 100.0);
        assert_eq!(clamp_score(f64::NAN), 0.0);
    }

    #[test]
    fn test_good_smartphone() {
        let analysis = analyze_sustainability("smartphones", "Good", &breakdown("Good")).unwrap();
        let potential = &analysis.recycling_potential;

        assert_eq!(analysis.confidence, 82);
        // 85 * (0.65 / 0.9) * 0.9 * 1.1
        assert!(close(potential.reuse, 60.775));
        assert!(close(potential.recycle, 99.0));
        assert!(close(potential.refurbish, 80.0 * (0.5 + 0.5 * 0.65 / 0.9) * 1.1));

        let expected = 0.4 * potential.reuse + 0.35 * potential.recycle + 0.25 * potential.refurbish;
        assert!(close(analysis.sustainability_score, expected));

        let carbon = &analysis.carbon_footprint;
        assert!(close(carbon.reuse_savings_tons, 0.07 * 0.60775));
        // Recycling saves more than reuse here.
        assert!(close(carbon.net_tons, 0.07 - 0.065));
    }

    #[test]
    fn test_worse_condition_scores_lower() {
        let good = analyze_sustainability("smartphones", "Good", &breakdown("Good")).unwrap();
        let poor = analyze_sustainability("smartphones", "Poor", &breakdown("Poor")).unwrap();
        assert!(poor.sustainability_score < good.sustainability_score);
        assert!(poor.recycling_potential.reuse < good.recycling_potential.reuse);
    }

    #[test]
    fn test_scores_stay_in_range() {
        for kind in DeviceKind::ALL {
            for condition in Condition::ALL {
                let b = PriceBreakdown {
                    base_price: 1000.0,
                    age_multiplier: 1.3,
                    condition_multiplier: condition.multiplier(),
                    storage_multiplier: 1.0,
                    accessory_bonus: 0,
                    device_age: -3,
                };
                let analysis = analyze_sustainability(kind.key(), condition.label(), &b).unwrap();
                for score in [
                    analysis.recycling_potential.reuse,
                    analysis.recycling_potential.recycle,
                    analysis.recycling_potential.refurbish,
                    analysis.sustainability_score,
                ] {
                    assert!((0.0..=100.0).contains(&score));
                }
                assert!(analysis.carbon_footprint.net_tons >= 0.0);
            }
        }
    }

    #[test]
    fn test_unknown_device_type() {
        assert!(analyze_sustainability("watches", "Good", &breakdown("Good")).is_none());
    }
}
