//! Multiplier tables consulted by the price estimator.
//!
//! Lookups by label are deliberately lenient: an unknown condition prices at
//! [`DEFAULT_CONDITION_MULTIPLIER`], an unknown storage tier at
//! [`DEFAULT_STORAGE_MULTIPLIER`] and an unknown accessory adds nothing.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONDITION_MULTIPLIER: f64 = 0.5;
pub const DEFAULT_STORAGE_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_STORAGE: &str = "128GB";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    LikeNew,
    Excellent,
    Good,
    Fair,
    Poor,
    ForParts,
}

impl Condition {
    pub const ALL: [Condition; 6] = [
        Condition::LikeNew,
        Condition::Excellent,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
        Condition::ForParts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::LikeNew => "Like New",
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
            Condition::ForParts => "For Parts",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Condition::LikeNew => "Perfect condition, no wear",
            Condition::Excellent => "Minor wear, fully functional",
            Condition::Good => "Normal wear, works perfectly",
            Condition::Fair => "Heavy wear, some issues",
            Condition::Poor => "Significant damage, barely works",
            Condition::ForParts => "Broken, for parts only",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Condition::LikeNew => 0.9,
            Condition::Excellent => 0.8,
            Condition::Good => 0.65,
            Condition::Fair => 0.45,
            Condition::Poor => 0.25,
            Condition::ForParts => 0.15,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|condition| condition.label() == label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageTier {
    Gb16,
    Gb32,
    Gb64,
    Gb128,
    Gb256,
    Gb512,
    Tb1,
    Tb2,
}

impl StorageTier {
    pub const ALL: [StorageTier; 8] = [
        StorageTier::Gb16,
        StorageTier::Gb32,
        StorageTier::Gb64,
        StorageTier::Gb128,
        StorageTier::Gb256,
        StorageTier::Gb512,
        StorageTier::Tb1,
        StorageTier::Tb2,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StorageTier::Gb16 => "16GB",
            StorageTier::Gb32 => "32GB",
            StorageTier::Gb64 => "64GB",
            StorageTier::Gb128 => "128GB",
            StorageTier::Gb256 => "256GB",
            StorageTier::Gb512 => "512GB",
            StorageTier::Tb1 => "1TB",
            StorageTier::Tb2 => "2TB",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            StorageTier::Gb16 => 0.7,
            StorageTier::Gb32 => 0.8,
            StorageTier::Gb64 => 0.9,
            StorageTier::Gb128 => 1.0,
            StorageTier::Gb256 => 1.15,
            StorageTier::Gb512 => 1.3,
            StorageTier::Tb1 => 1.5,
            StorageTier::Tb2 => 1.8,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.label() == label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accessory {
    OriginalBox,
    Charger,
    Cables,
    Manual,
    CaseCover,
}

impl Accessory {
    pub const ALL: [Accessory; 5] = [
        Accessory::OriginalBox,
        Accessory::Charger,
        Accessory::Cables,
        Accessory::Manual,
        Accessory::CaseCover,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Accessory::OriginalBox => "Original Box",
            Accessory::Charger => "Charger",
            Accessory::Cables => "Cables",
            Accessory::Manual => "Manual",
            Accessory::CaseCover => "Case/Cover",
        }
    }

    /// Fraction of the pre-bonus estimate this accessory adds.
    pub fn bonus_rate(&self) -> f64 {
        match self {
            Accessory::OriginalBox => 0.05,
            Accessory::Charger => 0.03,
            Accessory::Cables => 0.02,
            Accessory::Manual => 0.01,
            Accessory::CaseCover => 0.02,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|accessory| accessory.label() == label)
    }
}

pub fn condition_multiplier(label: &str) -> f64 {
    Condition::from_label(label)
        .map(|condition| condition.multiplier())
        .unwrap_or(DEFAULT_CONDITION_MULTIPLIER)
}

pub fn storage_multiplier(label: &str) -> f64 {
    StorageTier::from_label(label)
        .map(|tier| tier.multiplier())
        .unwrap_or(DEFAULT_STORAGE_MULTIPLIER)
}

pub fn accessory_rate(label: &str) -> f64 {
    Accessory::from_label(label)
        .map(|accessory| accessory.bonus_rate())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_lookup() {
        assert_eq!(condition_multiplier("Like New"), 0.9);
        assert_eq!(condition_multiplier("Good"), 0.65);
        assert_eq!(condition_multiplier("For Parts"), 0.15);
    }

    #[test]
    fn test_unknown_condition_falls_back() {
        assert_eq!(condition_multiplier("Mint"), 0.5);
        assert_eq!(condition_multiplier(""), 0.5);
        // Labels are case-sensitive.
        assert_eq!(condition_multiplier("good"), 0.5);
    }

    #[test]
    fn test_storage_lookup() {
        assert_eq!(storage_multiplier("16GB"), 0.7);
        assert_eq!(storage_multiplier(DEFAULT_STORAGE), 1.0);
        assert_eq!(storage_multiplier("2TB"), 1.8);
        assert_eq!(storage_multiplier("3TB"), 1.0);
    }

    #[test]
    fn test_accessory_rates() {
        let total: f64 = Accessory::ALL.iter().map(Accessory::bonus_rate).sum();
        assert!((total - 0.13).abs() < 1e-12);
        assert_eq!(accessory_rate("Original Box"), 0.05);
        assert_eq!(accessory_rate("Screen Protector"), 0.0);
    }

    #[test]
    fn test_multipliers_are_in_range() {
        for condition in Condition::ALL {
            let value = condition.multiplier();
            assert!(value > 0.0 && value <= 1.0, "{} out of range", condition.label());
        }
        for tier in StorageTier::ALL {
            assert!(tier.multiplier() > 0.0);
        }
    }

    #[test]
    fn test_labels_round_trip() {
        for condition in Condition::ALL {
            assert_eq!(Condition::from_label(condition.label()), Some(condition));
        }
        for tier in StorageTier::ALL {
            assert_eq!(StorageTier::from_label(tier.label()), Some(tier));
        }
        for accessory in Accessory::ALL {
            assert_eq!(Accessory::from_label(accessory.label()), Some(accessory));
        }
    }
}
