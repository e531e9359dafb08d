//! Device pricing and recycling guidance lives here.

pub mod analysis;
pub mod app_state;
pub mod catalog;
pub mod impact;
pub mod pricing;
pub mod recycling;
pub mod report;
pub mod tables;

pub use analysis::{analyze_sustainability, SustainabilityAnalysis};
pub use app_state::{AppState, EstimatorForm, PersistedState};
pub use catalog::{brands, category_label, device_types, find_device, models, DeviceKind, DeviceSpec};
pub use impact::{environmental_impact, impact_summary, material_composition, ImpactSummary, Material};
pub use pricing::{
    calculate_price, calculate_price_now, PriceBreakdown, PriceError, PriceQuote, PriceRequest,
    PriceResponse, Valuation,
};
pub use recycling::{recycling_options, RecyclingOptions};
pub use report::{AnalysisSource, DeviceAnalysis};
pub use tables::{Accessory, Condition, StorageTier};
