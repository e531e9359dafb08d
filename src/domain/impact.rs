//! Material composition and environmental footprint per device kind.

use serde::Serialize;

use super::catalog::DeviceKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Rarity {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Rarity {
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::VeryLow => "Very Low",
            Rarity::Low => "Low",
            Rarity::Medium => "Medium",
            Rarity::High => "High",
            Rarity::VeryHigh => "Very High",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub name: &'static str,
    pub grams: f64,
    pub value_usd: f64,
    pub recyclable: bool,
    pub rarity: Rarity,
}

const fn material(
    name: &'static str,
    grams: f64,
    value_usd: f64,
    recyclable: bool,
    rarity: Rarity,
) -> Material {
    Material {
        name,
        grams,
        value_usd,
        recyclable,
        rarity,
    }
}

static SMARTPHONE_MATERIALS: &[Material] = &[
    material("Gold (Au)", 0.025, 1.80, true, Rarity::VeryHigh),
    material("Silver (Ag)", 0.25, 0.30, true, Rarity::High),
    material("Copper (Cu)", 15.0, 0.20, true, Rarity::Medium),
    material("Palladium (Pd)", 0.01, 0.67, true, Rarity::VeryHigh),
    material("Platinum (Pt)", 0.003, 0.09, true, Rarity::VeryHigh),
    material("Indium (In)", 0.08, 0.06, true, Rarity::High),
    material("Tantalum (Ta)", 0.3, 0.12, true, Rarity::High),
    material("Rare Earth Elements", 1.5, 2.00, true, Rarity::VeryHigh),
    material("Neodymium (Nd)", 0.6, 0.90, true, Rarity::VeryHigh),
    material("Lithium (Li)", 2.5, 0.40, true, Rarity::Medium),
    material("Cobalt (Co)", 6.0, 0.60, true, Rarity::High),
    material("Nickel (Ni)", 4.0, 0.06, true, Rarity::Medium),
    material("Aluminum (Al)", 20.0, 0.12, true, Rarity::Low),
    material("Tin (Sn)", 1.5, 0.045, true, Rarity::Medium),
    material("Silicon (Si)", 12.0, 0.12, false, Rarity::Low),
    material("Glass (SiO2)", 25.0, 0.008, false, Rarity::VeryLow),
    material("Plastic (Various)", 60.0, 0.06, false, Rarity::VeryLow),
];

static TABLET_MATERIALS: &[Material] = &[
    material("Gold (Au)", 0.05, 3.68, true, Rarity::VeryHigh),
    material("Silver (Ag)", 0.4, 0.46, true, Rarity::High),
    material("Copper (Cu)", 30.0, 0.375, true, Rarity::Medium),
    material("Rare Earth Elements", 2.5, 3.75, true, Rarity::VeryHigh),
    material("Lithium (Li)", 6.0, 1.00, true, Rarity::Medium),
    material("Cobalt (Co)", 10.0, 1.00, true, Rarity::High),
    material("Aluminum (Al)", 100.0, 0.60, true, Rarity::Low),
    material("Plastic (Various)", 120.0, 0.12, false, Rarity::VeryLow),
];

static LAPTOP_MATERIALS: &[Material] = &[
    material("Gold (Au)", 0.1, 7.35, true, Rarity::VeryHigh),
    material("Silver (Ag)", 0.8, 0.92, true, Rarity::High),
    material("Copper (Cu)", 120.0, 1.50, true, Rarity::Medium),
    material("Rare Earth Elements", 5.0, 7.50, true, Rarity::VeryHigh),
    material("Lithium (Li)", 15.0, 2.50, true, Rarity::Medium),
    material("Cobalt (Co)", 25.0, 2.50, true, Rarity::High),
    material("Aluminum (Al)", 500.0, 3.00, true, Rarity::Low),
    material("Plastic (Various)", 400.0, 0.40, false, Rarity::VeryLow),
];

pub fn material_composition(kind: DeviceKind) -> &'static [Material] {
    match kind {
        DeviceKind::Smartphone => SMARTPHONE_MATERIALS,
        DeviceKind::Tablet => TABLET_MATERIALS,
        DeviceKind::Laptop => LAPTOP_MATERIALS,
    }
}

/// Inclusive `(low, high)` range.
pub type Range = (f64, f64);

fn midpoint((low, high): Range) -> f64 {
    (low + high) / 2.0
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalImpact {
    pub manufacturing_co2_kg: f64,
    pub manufacturing_water_liters: f64,
    pub manufacturing_energy_kwh: f64,
    pub recycling_co2_saved_kg: Range,
    pub recycling_water_saved_liters: Range,
    pub recycling_energy_saved_kwh: Range,
    /// Share of contained metals recovered, in percent.
    pub metal_recovery_pct: Range,
    pub average_lifespan_years: f64,
}

static SMARTPHONE_IMPACT: EnvironmentalImpact = EnvironmentalImpact {
    manufacturing_co2_kg: 70.0,
    manufacturing_water_liters: 18_500.0,
    manufacturing_energy_kwh: 1_200.0,
    recycling_co2_saved_kg: (60.0, 70.0),
    recycling_water_saved_liters: (15_000.0, 18_500.0),
    recycling_energy_saved_kwh: (1_000.0, 1_200.0),
    metal_recovery_pct: (80.0, 95.0),
    average_lifespan_years: 2.5,
};

static TABLET_IMPACT: EnvironmentalImpact = EnvironmentalImpact {
    manufacturing_co2_kg: 180.0,
    manufacturing_water_liters: 45_000.0,
    manufacturing_energy_kwh: 2_800.0,
    recycling_co2_saved_kg: (150.0, 180.0),
    recycling_water_saved_liters: (38_000.0, 45_000.0),
    recycling_energy_saved_kwh: (2_400.0, 2_800.0),
    metal_recovery_pct: (85.0, 95.0),
    average_lifespan_years: 4.0,
};

static LAPTOP_IMPACT: EnvironmentalImpact = EnvironmentalImpact {
    manufacturing_co2_kg: 350.0,
    manufacturing_water_liters: 120_000.0,
    manufacturing_energy_kwh: 5_500.0,
    recycling_co2_saved_kg: (300.0, 350.0),
    recycling_water_saved_liters: (100_000.0, 120_000.0),
    recycling_energy_saved_kwh: (4_500.0, 5_500.0),
    metal_recovery_pct: (90.0, 98.0),
    average_lifespan_years: 5.0,
};

pub fn environmental_impact(kind: DeviceKind) -> &'static EnvironmentalImpact {
    match kind {
        DeviceKind::Smartphone => &SMARTPHONE_IMPACT,
        DeviceKind::Tablet => &TABLET_IMPACT,
        DeviceKind::Laptop => &LAPTOP_IMPACT,
    }
}

/// Headline figures for recycling one device of the given kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
    pub co2_saved_kg: f64,
    pub water_saved_liters: f64,
    pub energy_saved_kwh: f64,
    pub valuable_metals: Vec<&'static str>,
    pub material_value_usd: f64,
}

pub fn impact_summary(kind: DeviceKind) -> ImpactSummary {
    let impact = environmental_impact(kind);
    let materials = material_composition(kind);

    ImpactSummary {
        co2_saved_kg: midpoint(impact.recycling_co2_saved_kg),
        water_saved_liters: midpoint(impact.recycling_water_saved_liters),
        energy_saved_kwh: midpoint(impact.recycling_energy_saved_kwh),
        valuable_metals: materials
            .iter()
            .filter(|m| m.recyclable && m.rarity >= Rarity::High)
            .map(|m| m.name)
            .collect(),
        material_value_usd: materials.iter().map(|m| m.value_usd).sum(),
    }
}
