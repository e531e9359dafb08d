use serde::Serialize;

use super::analysis::{analyze_sustainability, SustainabilityAnalysis};
use super::catalog::{category_label, DeviceKind};
use super::impact::{impact_summary, material_composition, ImpactSummary, Material};
use super::pricing::{PriceRequest, Valuation};
use super::recycling::{recycling_options, RecyclingOptions};

/// Where a valuation came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AnalysisSource {
    Backend,
    OfflineFallback,
}

impl AnalysisSource {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisSource::Backend => "Analysis service",
            AnalysisSource::OfflineFallback => "Offline estimate",
        }
    }
}

/// Everything the results panel shows for one analysed device.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAnalysis {
    pub request: PriceRequest,
    pub category: &'static str,
    pub valuation: Valuation,
    pub source: AnalysisSource,
    pub impact: Option<ImpactSummary>,
    pub materials: &'static [Material],
    pub sustainability: Option<SustainabilityAnalysis>,
    pub recycling: RecyclingOptions,
}

impl DeviceAnalysis {
    pub fn assemble(request: PriceRequest, valuation: Valuation, source: AnalysisSource) -> Self {
        let kind = DeviceKind::from_key(&request.device_type);
        let sustainability = valuation.breakdown.as_ref().and_then(|breakdown| {
            analyze_sustainability(&request.device_type, &request.condition, breakdown)
        });

        Self {
            category: category_label(&request.device_type).unwrap_or("Device"),
            impact: kind.map(impact_summary),
            materials: kind.map(material_composition).unwrap_or_default(),
            sustainability,
            recycling: recycling_options(None),
            request,
            valuation,
            source,
        }
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.request.brand, self.request.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::calculate_price;

    fn request() -> PriceRequest {
        PriceRequest::new("laptops", "Apple", "MacBook Air M2", "Excellent")
    }

    #[test]
    fn test_assemble_local_quote() {
        let quote = calculate_price(&request(), 2025).unwrap();
        let analysis =
            DeviceAnalysis::assemble(request(), quote.into(), AnalysisSource::OfflineFallback);

        assert_eq!(analysis.category, "Laptops");
        assert_eq!(analysis.title(), "Apple MacBook Air M2");
        assert_eq!(analysis.impact.as_ref().unwrap().co2_saved_kg, 325.0);
        assert!(!analysis.materials.is_empty());
        assert!(analysis.sustainability.is_some());
        assert_eq!(analysis.recycling.total(), 14);
    }

    #[test]
    fn test_backend_valuation_without_breakdown() {
        let valuation = Valuation {
            min_price: 400,
            max_price: 540,
            estimated_value: 470,
            breakdown: None,
        };
        let analysis = DeviceAnalysis::assemble(request(), valuation, AnalysisSource::Backend);

        assert!(analysis.sustainability.is_none());
        assert!(analysis.impact.is_some());
        assert_eq!(analysis.valuation.range_label(), "$400 - $540");
    }
}
