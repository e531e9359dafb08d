//! Resale price estimation for catalog devices.
//!
//! The estimate is `base_price * age * condition * storage`, plus an accessory
//! bonus computed against that pre-bonus figure. The quoted range is ±15% of
//! the unrounded estimate.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::debug;

use super::catalog::{find_device, DeviceSpec};
use super::tables::{condition_multiplier, storage_multiplier, Accessory, DEFAULT_STORAGE};

const RANGE_LOW: f64 = 0.85;
const RANGE_HIGH: f64 = 1.15;

/// Everything the estimator needs to price one device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequest {
    pub device_type: String,
    pub brand: String,
    pub model: String,
    pub condition: String,
    #[serde(default = "default_storage")]
    pub storage: String,
    #[serde(default)]
    pub accessories: Vec<String>,
}

fn default_storage() -> String {
    DEFAULT_STORAGE.to_string()
}

impl PriceRequest {
    /// A request with the default storage tier and no accessories.
    pub fn new(
        device_type: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            device_type: device_type.into(),
            brand: brand.into(),
            model: model.into(),
            condition: condition.into(),
            storage: default_storage(),
            accessories: Vec::new(),
        }
    }

    pub fn with_storage(mut self, storage: impl Into<String>) -> Self {
        self.storage = storage.into();
        self
    }

    pub fn with_accessories<I, S>(mut self, accessories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accessories = accessories.into_iter().map(Into::into).collect();
        self
    }

    /// Recognised accessories, each counted once. Unknown labels are skipped.
    fn included_accessories(&self) -> Vec<Accessory> {
        let mut included = Vec::with_capacity(self.accessories.len());
        for label in &self.accessories {
            match Accessory::from_label(label) {
                Some(accessory) if !included.contains(&accessory) => included.push(accessory),
                Some(_) => {}
                None => debug!(accessory = %label, "Ignoring unknown accessory"),
            }
        }
        included
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_price: f64,
    /// Rounded to two decimals.
    pub age_multiplier: f64,
    pub condition_multiplier: f64,
    pub storage_multiplier: f64,
    /// Rounded to whole dollars.
    pub accessory_bonus: i64,
    pub device_age: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub min_price: i64,
    pub max_price: i64,
    pub estimated_value: i64,
    pub breakdown: PriceBreakdown,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceError {
    #[error("Device not found in database")]
    DeviceNotFound {
        device_type: String,
        brand: String,
        model: String,
    },
    #[error("Error calculating price: {0}")]
    Calculation(String),
}

/// JSON shape of a pricing result: either the quote or `{ "error": "..." }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceResponse {
    Quote(PriceQuote),
    Error { error: String },
}

impl From<Result<PriceQuote, PriceError>> for PriceResponse {
    fn from(result: Result<PriceQuote, PriceError>) -> Self {
        match result {
            Ok(quote) => PriceResponse::Quote(quote),
            Err(err) => PriceResponse::Error {
                error: err.to_string(),
            },
        }
    }
}

/// A price range as shown to the user, whichever source produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    pub min_price: i64,
    pub max_price: i64,
    pub estimated_value: i64,
    #[serde(default)]
    pub breakdown: Option<PriceBreakdown>,
}

impl Valuation {
    pub fn range_label(&self) -> String {
        format!("${} - ${}", self.min_price, self.max_price)
    }
}

impl From<PriceQuote> for Valuation {
    fn from(quote: PriceQuote) -> Self {
        Self {
            min_price: quote.min_price,
            max_price: quote.max_price,
            estimated_value: quote.estimated_value,
            breakdown: Some(quote.breakdown),
        }
    }
}

/// Depreciation by age: 10% a year for the first three years (floor 0.4),
/// then 5% a year from 0.7 (floor 0.2).
pub fn age_multiplier(device_age: i32) -> f64 {
    if device_age <= 3 {
        (1.0 - device_age as f64 * 0.1).max(0.4)
    } else {
        (0.7 - (device_age - 3) as f64 * 0.05).max(0.2)
    }
}

pub fn current_year() -> i32 {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .year()
}

pub fn calculate_price_now(request: &PriceRequest) -> Result<PriceQuote, PriceError> {
    calculate_price(request, current_year())
}

pub fn calculate_price(request: &PriceRequest, current_year: i32) -> Result<PriceQuote, PriceError> {
    let device = find_device(&request.device_type, &request.brand, &request.model).ok_or_else(
        || PriceError::DeviceNotFound {
            device_type: request.device_type.clone(),
            brand: request.brand.clone(),
            model: request.model.clone(),
        },
    )?;

    price_spec(device, request, current_year)
}

/// Prices an already resolved catalog entry.
fn price_spec(
    device: DeviceSpec,
    request: &PriceRequest,
    current_year: i32,
) -> Result<PriceQuote, PriceError> {
    if !device.base_price.is_finite() || device.base_price <= 0.0 {
        return Err(PriceError::Calculation(format!(
            "invalid base price {} for {} {}",
            device.base_price, request.brand, request.model
        )));
    }

    let device_age = current_year - device.release_year;
    let age = age_multiplier(device_age);
    let condition = condition_multiplier(&request.condition);
    let storage = storage_multiplier(&request.storage);

    let base_estimate = device.base_price * age * condition * storage;
    let accessory_bonus: f64 = request
        .included_accessories()
        .iter()
        .map(|accessory| base_estimate * accessory.bonus_rate())
        .sum();
    let estimate = base_estimate + accessory_bonus;

    if !estimate.is_finite() || estimate < 0.0 {
        return Err(PriceError::Calculation(format!(
            "estimate for {} {} is not a valid amount ({estimate})",
            request.brand, request.model
        )));
    }

    let quote = PriceQuote {
        min_price: (estimate * RANGE_LOW).round() as i64,
        max_price: (estimate * RANGE_HIGH).round() as i64,
        estimated_value: estimate.round() as i64,
        breakdown: PriceBreakdown {
            base_price: device.base_price,
            age_multiplier: (age * 100.0).round() / 100.0,
            condition_multiplier: condition,
            storage_multiplier: storage,
            accessory_bonus: accessory_bonus.round() as i64,
            device_age,
        },
    };

    debug!(
        brand = %request.brand,
        model = %request.model,
        estimate = quote.estimated_value,
        min = quote.min_price,
        max = quote.max_price,
        "Priced device"
    );

    Ok(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::all_devices;
    use crate::domain::tables::{Condition, StorageTier};

    fn iphone_15(condition: &str) -> PriceRequest {
        PriceRequest::new("smartphones", "Apple", "iPhone 15", condition)
    }

    #[test]
    fn test_one_year_old_phone_in_good_condition() {
        let quote = calculate_price(&iphone_15("Good"), 2024).unwrap();

        assert_eq!(quote.estimated_value, 293);
        assert_eq!(quote.min_price, 249);
        assert_eq!(quote.max_price, 336);
        assert_eq!(
            quote.breakdown,
            PriceBreakdown {
                base_price: 500.0,
                age_multiplier: 0.9,
                condition_multiplier: 0.65,
                storage_multiplier: 1.0,
                accessory_bonus: 0,
                device_age: 1,
            }
        );
    }

    #[test]
    fn test_age_multiplier_switches_at_three_years() {
        assert!((age_multiplier(0) - 1.0).abs() < 1e-9);
        assert!((age_multiplier(3) - 0.7).abs() < 1e-9);
        assert!((age_multiplier(4) - 0.65).abs() < 1e-9);
        assert!((age_multiplier(5) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_age_multiplier_floor() {
        assert_eq!(age_multiplier(20), 0.2);
        assert_eq!(age_multiplier(100), 0.2);
        for age in 0..60 {
            assert!(age_multiplier(age) >= 0.2);
        }
    }

    #[test]
    fn test_unknown_condition_prices_at_half() {
        let quote = calculate_price(&iphone_15("Mint"), 2024).unwrap();
        assert_eq!(quote.breakdown.condition_multiplier, 0.5);
        // 500 * 0.9 * 0.5 = 225
        assert_eq!(quote.estimated_value, 225);
    }

    #[test]
    fn test_unknown_storage_prices_at_one() {
        let request = iphone_15("Good").with_storage("3TB");
        let quote = calculate_price(&request, 2024).unwrap();
        assert_eq!(quote.breakdown.storage_multiplier, 1.0);
        assert_eq!(quote.estimated_value, 293);
    }

    #[test]
    fn test_storage_tier_scales_estimate() {
        let request = iphone_15("Good").with_storage("256GB");
        let quote = calculate_price(&request, 2024).unwrap();
        assert_eq!(quote.breakdown.storage_multiplier, 1.15);
        // 292.5 * 1.15 = 336.375
        assert_eq!(quote.estimated_value, 336);
    }

    #[test]
    fn test_accessory_bonus_is_additive() {
        let request = iphone_15("Good").with_accessories(["Original Box", "Charger"]);
        let quote = calculate_price(&request, 2024).unwrap();

        // 0.08 * 292.5 = 23.4, not 292.5 * (1.05 * 1.03 - 1)
        assert_eq!(quote.breakdown.accessory_bonus, 23);
        assert_eq!(quote.estimated_value, 316);
        assert_eq!(quote.min_price, 269);
        assert_eq!(quote.max_price, 363);
    }

    #[test]
    fn test_unknown_and_repeated_accessories() {
        let request = iphone_15("Good").with_accessories(["Charger", "Charger", "Sticker"]);
        let quote = calculate_price(&request, 2024).unwrap();

        // Only one charger at 3%: 292.5 * 0.03 = 8.775
        assert_eq!(quote.breakdown.accessory_bonus, 9);
        assert_eq!(quote.estimated_value, 301);
    }

    #[test]
    fn test_missing_model_is_an_error() {
        let request = PriceRequest::new("smartphones", "Apple", "iPhone 99", "Good");
        let err = calculate_price(&request, 2024).unwrap_err();

        assert!(matches!(err, PriceError::DeviceNotFound { ref model, .. } if model == "iPhone 99"));
        assert_eq!(err.to_string(), "Device not found in database");
    }

    #[test]
    fn test_old_device_hits_age_floor() {
        let request = PriceRequest::new("smartphones", "Apple", "iPhone 7", "Like New");
        let quote = calculate_price(&request, 2036).unwrap();

        assert_eq!(quote.breakdown.device_age, 20);
        assert_eq!(quote.breakdown.age_multiplier, 0.2);
        // 50 * 0.2 * 0.9 = 9
        assert_eq!(quote.estimated_value, 9);
    }

    #[test]
    fn test_range_holds_across_catalog() {
        let accessory_sets: [&[&str]; 3] = [
            &[],
            &["Manual"],
            &["Original Box", "Charger", "Cables", "Manual", "Case/Cover"],
        ];

        for (device_type, brand, model, _) in all_devices() {
            for condition in Condition::ALL {
                for tier in StorageTier::ALL {
                    for accessories in accessory_sets {
                        let request = PriceRequest::new(device_type, brand, model, condition.label())
                            .with_storage(tier.label())
                            .with_accessories(accessories.iter().copied());
                        let quote = calculate_price(&request, 2026).unwrap();

                        assert!(quote.min_price >= 0);
                        assert!(quote.min_price <= quote.estimated_value);
                        assert!(quote.estimated_value <= quote.max_price);

                        let b = &quote.breakdown;
                        let rate: f64 = accessories
                            .iter()
                            .map(|label| Accessory::from_label(label).unwrap().bonus_rate())
                            .sum();
                        let raw = b.base_price
                            * b.age_multiplier
                            * b.condition_multiplier
                            * b.storage_multiplier
                            * (1.0 + rate);
                        assert!((quote.min_price as f64 - raw * 0.85).abs() <= 0.5 + 1e-6);
                        assert!((quote.max_price as f64 - raw * 1.15).abs() <= 0.5 + 1e-6);
                    }
                }
            }
        }
    }

    #[test]
    fn test_request_defaults_when_deserialized() {
        let request: PriceRequest = serde_json::from_str(
            r#"{"deviceType":"tablets","brand":"Microsoft","model":"Surface Go 3","condition":"Fair"}"#,
        )
        .unwrap();

        assert_eq!(request.storage, "128GB");
        assert!(request.accessories.is_empty());
    }

    #[test]
    fn test_response_shapes() {
        let ok: PriceResponse = calculate_price(&iphone_15("Good"), 2024).into();
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["estimatedValue"], 293);
        assert_eq!(json["breakdown"]["deviceAge"], 1);

        let missing = PriceRequest::new("laptops", "Dell", "XPS 99", "Good");
        let err: PriceResponse = calculate_price(&missing, 2024).into();
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({ "error": "Device not found in database" })
        );
    }

    #[test]
    fn test_unusable_base_price_is_a_calculation_error() {
        for base_price in [0.0, -1.0, f64::NAN] {
            let spec = DeviceSpec {
                base_price,
                release_year: 2023,
            };
            let err = price_spec(spec, &iphone_15("Good"), 2024).unwrap_err();

            assert!(matches!(err, PriceError::Calculation(_)));
            assert!(err.to_string().starts_with("Error calculating price: "));

            let json = serde_json::to_value(PriceResponse::from(Err(err))).unwrap();
            assert!(json["error"]
                .as_str()
                .unwrap()
                .starts_with("Error calculating price: "));
        }
    }

    #[test]
    fn test_overflowing_estimate_is_a_calculation_error() {
        let spec = DeviceSpec {
            base_price: f64::MAX,
            release_year: 2024,
        };
        let request = iphone_15("Like New").with_storage("2TB");
        let err = price_spec(spec, &request, 2024).unwrap_err();
        assert!(matches!(err, PriceError::Calculation(ref msg) if msg.contains("not a valid amount")));
    }
}
