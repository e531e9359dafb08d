use serde::{Deserialize, Serialize};

use super::pricing::PriceRequest;
use super::report::DeviceAnalysis;
use super::tables::DEFAULT_STORAGE;

/// The estimator form. Picking a device type resets the brand and model,
/// picking a brand resets the model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorForm {
    pub device_type: String,
    pub brand: String,
    pub model: String,
    pub condition: String,
    pub storage: String,
    pub accessories: Vec<String>,
}

impl Default for EstimatorForm {
    fn default() -> Self {
        Self {
            device_type: String::new(),
            brand: String::new(),
            model: String::new(),
            condition: String::new(),
            storage: DEFAULT_STORAGE.to_string(),
            accessories: Vec::new(),
        }
    }
}

impl EstimatorForm {
    pub fn set_device_type(&mut self, device_type: impl Into<String>) {
        self.device_type = device_type.into();
        self.brand.clear();
        self.model.clear();
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.brand = brand.into();
        self.model.clear();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn set_condition(&mut self, condition: impl Into<String>) {
        self.condition = condition.into();
    }

    pub fn set_storage(&mut self, storage: impl Into<String>) {
        self.storage = storage.into();
    }

    pub fn has_accessory(&self, label: &str) -> bool {
        self.accessories.iter().any(|a| a == label)
    }

    pub fn toggle_accessory(&mut self, label: &str) {
        if self.has_accessory(label) {
            self.accessories.retain(|a| a != label);
        } else {
            self.accessories.push(label.to_string());
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.device_type, &self.brand, &self.model, &self.condition]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn to_request(&self) -> Option<PriceRequest> {
        if !self.is_complete() {
            return None;
        }
        let storage = if self.storage.is_empty() {
            DEFAULT_STORAGE
        } else {
            self.storage.as_str()
        };
        Some(
            PriceRequest::new(&self.device_type, &self.brand, &self.model, &self.condition)
                .with_storage(storage)
                .with_accessories(self.accessories.iter().cloned()),
        )
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub form: EstimatorForm,
    /// Result of the last completed analysis.
    pub analysis: Option<DeviceAnalysis>,
    pub is_analyzing: bool,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.form = persisted.form;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            form: self.form.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub form: EstimatorForm,
}
