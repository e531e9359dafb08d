//! Static device catalog: category -> brand -> model -> base price and release year.

use serde::{Deserialize, Serialize};

/// Pricing facts for a single catalog model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSpec {
    /// Like-new value at release, in USD.
    pub base_price: f64,
    pub release_year: i32,
}

#[derive(Debug)]
pub struct ModelEntry {
    pub name: &'static str,
    pub spec: DeviceSpec,
}

#[derive(Debug)]
pub struct BrandEntry {
    pub name: &'static str,
    pub models: &'static [ModelEntry],
}

#[derive(Debug)]
pub struct CategoryEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: DeviceKind,
    pub brands: &'static [BrandEntry],
}

/// Typed view of a catalog category key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    Smartphone,
    Laptop,
    Tablet,
}

impl DeviceKind {
    pub const ALL: [DeviceKind; 3] = [DeviceKind::Smartphone, DeviceKind::Laptop, DeviceKind::Tablet];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "smartphones" => Some(DeviceKind::Smartphone),
            "laptops" => Some(DeviceKind::Laptop),
            "tablets" => Some(DeviceKind::Tablet),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DeviceKind::Smartphone => "smartphones",
            DeviceKind::Laptop => "laptops",
            DeviceKind::Tablet => "tablets",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            DeviceKind::Smartphone => "📱",
            DeviceKind::Laptop => "💻",
            DeviceKind::Tablet => "📲",
        }
    }
}

const fn model(name: &'static str, base_price: f64, release_year: i32) -> ModelEntry {
    ModelEntry {
        name,
        spec: DeviceSpec {
            base_price,
            release_year,
        },
    }
}

pub static DEVICE_CATALOG: &[CategoryEntry] = &[
    CategoryEntry {
        key: "smartphones",
        label: "Smartphones",
        kind: DeviceKind::Smartphone,
        brands: &[
            BrandEntry {
                name: "Apple",
                models: &[
                    model("iPhone 15 Pro Max", 800.0, 2023),
                    model("iPhone 15 Pro", 700.0, 2023),
                    model("iPhone 15", 500.0, 2023),
                    model("iPhone 14 Pro Max", 650.0, 2022),
                    model("iPhone 14 Pro", 550.0, 2022),
                    model("iPhone 14", 400.0, 2022),
                    model("iPhone 13 Pro Max", 500.0, 2021),
                    model("iPhone 13 Pro", 450.0, 2021),
                    model("iPhone 13", 350.0, 2021),
                    model("iPhone 12 Pro Max", 400.0, 2020),
                    model("iPhone 12 Pro", 350.0, 2020),
                    model("iPhone 12", 280.0, 2020),
                    model("iPhone 11 Pro Max", 300.0, 2019),
                    model("iPhone 11 Pro", 250.0, 2019),
                    model("iPhone 11", 200.0, 2019),
                    model("iPhone XS Max", 200.0, 2018),
                    model("iPhone XS", 180.0, 2018),
                    model("iPhone XR", 150.0, 2018),
                    model("iPhone X", 120.0, 2017),
                    model("iPhone 8 Plus", 100.0, 2017),
                    model("iPhone 8", 80.0, 2017),
                    model("iPhone 7 Plus", 70.0, 2016),
                    model("iPhone 7", 50.0, 2016),
                ],
            },
            BrandEntry {
                name: "Samsung",
                models: &[
                    model("Galaxy S24 Ultra", 600.0, 2024),
                    model("Galaxy S24+", 500.0, 2024),
                    model("Galaxy S24", 400.0, 2024),
                    model("Galaxy S23 Ultra", 500.0, 2023),
                    model("Galaxy S23+", 400.0, 2023),
                    model("Galaxy S23", 320.0, 2023),
                    model("Galaxy S22 Ultra", 400.0, 2022),
                    model("Galaxy S22+", 320.0, 2022),
                    model("Galaxy S22", 250.0, 2022),
                    model("Galaxy S21 Ultra", 350.0, 2021),
                    model("Galaxy S21+", 280.0, 2021),
                    model("Galaxy S21", 220.0, 2021),
                    model("Galaxy Note 20 Ultra", 300.0, 2020),
                    model("Galaxy Note 20", 250.0, 2020),
                    model("Galaxy S20 Ultra", 280.0, 2020),
                    model("Galaxy S20+", 220.0, 2020),
                    model("Galaxy S20", 180.0, 2020),
                    model("Galaxy Note 10+", 200.0, 2019),
                    model("Galaxy Note 10", 170.0, 2019),
                    model("Galaxy S10+", 150.0, 2019),
                    model("Galaxy S10", 120.0, 2019),
                ],
            },
            BrandEntry {
                name: "Google",
                models: &[
                    model("Pixel 8 Pro", 450.0, 2023),
                    model("Pixel 8", 350.0, 2023),
                    model("Pixel 7 Pro", 350.0, 2022),
                    model("Pixel 7", 280.0, 2022),
                    model("Pixel 6 Pro", 280.0, 2021),
                    model("Pixel 6", 220.0, 2021),
                    model("Pixel 5", 150.0, 2020),
                    model("Pixel 4 XL", 120.0, 2019),
                    model("Pixel 4", 100.0, 2019),
                ],
            },
            BrandEntry {
                name: "OnePlus",
                models: &[
                    model("OnePlus 12", 400.0, 2024),
                    model("OnePlus 11", 320.0, 2023),
                    model("OnePlus 10 Pro", 280.0, 2022),
                    model("OnePlus 9 Pro", 220.0, 2021),
                    model("OnePlus 9", 180.0, 2021),
                    model("OnePlus 8 Pro", 150.0, 2020),
                    model("OnePlus 8", 120.0, 2020),
                ],
            },
        ],
    },
    CategoryEntry {
        key: "laptops",
        label: "Laptops",
        kind: DeviceKind::Laptop,
        brands: &[
            BrandEntry {
                name: "Apple",
                models: &[
                    model("MacBook Pro 16\" M3", 1800.0, 2023),
                    model("MacBook Pro 14\" M3", 1400.0, 2023),
                    model("MacBook Air M3", 900.0, 2024),
                    model("MacBook Pro 16\" M2", 1500.0, 2022),
                    model("MacBook Pro 14\" M2", 1200.0, 2022),
                    model("MacBook Air M2", 800.0, 2022),
                    model("MacBook Pro 16\" M1", 1200.0, 2021),
                    model("MacBook Pro 14\" M1", 1000.0, 2021),
                    model("MacBook Air M1", 650.0, 2020),
                    model("MacBook Pro 16\" Intel", 800.0, 2019),
                    model("MacBook Pro 13\" Intel", 600.0, 2020),
                    model("MacBook Air Intel", 400.0, 2020),
                ],
            },
            BrandEntry {
                name: "Dell",
                models: &[
                    model("XPS 15 (2024)", 1000.0, 2024),
                    model("XPS 13 (2024)", 800.0, 2024),
                    model("XPS 15 (2023)", 900.0, 2023),
                    model("XPS 13 (2023)", 700.0, 2023),
                    model("XPS 15 (2022)", 800.0, 2022),
                    model("XPS 13 (2022)", 600.0, 2022),
                    model("Inspiron 15 7000", 400.0, 2023),
                    model("Inspiron 14 5000", 300.0, 2023),
                    model("Latitude 7420", 500.0, 2021),
                    model("Latitude 5520", 350.0, 2021),
                ],
            },
            BrandEntry {
                name: "HP",
                models: &[
                    model("Spectre x360 16", 900.0, 2023),
                    model("Spectre x360 14", 700.0, 2023),
                    model("EliteBook 850 G9", 600.0, 2022),
                    model("Pavilion 15", 350.0, 2023),
                    model("Envy 13", 450.0, 2022),
                    model("ProBook 450 G9", 400.0, 2022),
                ],
            },
            BrandEntry {
                name: "Lenovo",
                models: &[
                    model("ThinkPad X1 Carbon Gen 11", 1000.0, 2023),
                    model("ThinkPad X1 Carbon Gen 10", 850.0, 2022),
                    model("ThinkPad T14 Gen 4", 600.0, 2023),
                    model("ThinkPad T14 Gen 3", 500.0, 2022),
                    model("IdeaPad 5 Pro", 400.0, 2023),
                    model("Legion 5 Pro", 800.0, 2023),
                    model("Yoga 9i", 700.0, 2023),
                ],
            },
            BrandEntry {
                name: "ASUS",
                models: &[
                    model("ZenBook Pro 16X", 1200.0, 2023),
                    model("ZenBook 14", 600.0, 2023),
                    model("ROG Zephyrus G15", 900.0, 2023),
                    model("VivoBook S15", 400.0, 2023),
                    model("TUF Gaming A15", 500.0, 2023),
                ],
            },
        ],
    },
    CategoryEntry {
        key: "tablets",
        label: "Tablets",
        kind: DeviceKind::Tablet,
        brands: &[
            BrandEntry {
                name: "Apple",
                models: &[
                    model("iPad Pro 12.9\" M4", 800.0, 2024),
                    model("iPad Pro 11\" M4", 650.0, 2024),
                    model("iPad Air M2", 450.0, 2024),
                    model("iPad Pro 12.9\" M2", 700.0, 2022),
                    model("iPad Pro 11\" M2", 550.0, 2022),
                    model("iPad Air M1", 400.0, 2022),
                    model("iPad 10th Gen", 250.0, 2022),
                    model("iPad 9th Gen", 200.0, 2021),
                    model("iPad mini 6", 350.0, 2021),
                ],
            },
            BrandEntry {
                name: "Samsung",
                models: &[
                    model("Galaxy Tab S9 Ultra", 700.0, 2023),
                    model("Galaxy Tab S9+", 550.0, 2023),
                    model("Galaxy Tab S9", 450.0, 2023),
                    model("Galaxy Tab S8 Ultra", 600.0, 2022),
                    model("Galaxy Tab S8+", 450.0, 2022),
                    model("Galaxy Tab S8", 350.0, 2022),
                    model("Galaxy Tab A8", 150.0, 2022),
                ],
            },
            BrandEntry {
                name: "Microsoft",
                models: &[
                    model("Surface Pro 10", 800.0, 2024),
                    model("Surface Pro 9", 650.0, 2022),
                    model("Surface Pro 8", 550.0, 2021),
                    model("Surface Go 4", 300.0, 2023),
                    model("Surface Go 3", 250.0, 2021),
                ],
            },
        ],
    },
];

pub fn category(device_type: &str) -> Option<&'static CategoryEntry> {
    DEVICE_CATALOG.iter().find(|entry| entry.key == device_type)
}

/// Category keys in catalog order.
pub fn device_types() -> impl Iterator<Item = &'static str> {
    DEVICE_CATALOG.iter().map(|entry| entry.key)
}

pub fn category_label(device_type: &str) -> Option<&'static str> {
    category(device_type).map(|entry| entry.label)
}

pub fn brands(device_type: &str) -> Vec<&'static str> {
    category(device_type)
        .map(|entry| entry.brands.iter().map(|brand| brand.name).collect())
        .unwrap_or_default()
}

pub fn models(device_type: &str, brand: &str) -> Vec<&'static str> {
    category(device_type)
        .and_then(|entry| entry.brands.iter().find(|b| b.name == brand))
        .map(|brand| brand.models.iter().map(|m| m.name).collect())
        .unwrap_or_default()
}

pub fn find_device(device_type: &str, brand: &str, model: &str) -> Option<DeviceSpec> {
    category(device_type)?
        .brands
        .iter()
        .find(|b| b.name == brand)?
        .models
        .iter()
        .find(|m| m.name == model)
        .map(|m| m.spec)
}

/// Every `(device_type, brand, model, spec)` tuple in the catalog.
pub fn all_devices() -> impl Iterator<Item = (&'static str, &'static str, &'static str, DeviceSpec)> {
    DEVICE_CATALOG.iter().flat_map(|category| {
        category.brands.iter().flat_map(move |brand| {
            brand
                .models
                .iter()
                .map(move |m| (category.key, brand.name, m.name, m.spec))
        })
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_device_types_in_catalog_order() {
        let types: Vec<_> = device_types().collect();
        assert_eq!(types, vec!["smartphones", "laptops", "tablets"]);
    }

    #[test]
    fn test_find_device() {
        let spec = find_device("smartphones", "Apple", "iPhone 15").unwrap();
        assert_eq!(spec.base_price, 500.0);
        assert_eq!(spec.release_year, 2023);

        let spec = find_device("laptops", "Apple", "MacBook Pro 16\" M3").unwrap();
        assert_eq!(spec.base_price, 1800.0);
    }

    #[test]
    fn test_find_device_misses() {
        assert!(find_device("smartphones", "Apple", "iPhone 99").is_none());
        assert!(find_device("smartphones", "Nokia", "3310").is_none());
        assert!(find_device("watches", "Apple", "iPhone 15").is_none());
        // Brands are scoped to their category.
        assert!(find_device("tablets", "Google", "Pixel 8").is_none());
    }

    #[test]
    fn test_brands_and_models() {
        assert_eq!(brands("tablets"), vec!["Apple", "Samsung", "Microsoft"]);
        assert!(brands("toasters").is_empty());
        assert_eq!(models("smartphones", "Google").len(), 9);
        assert!(models("smartphones", "Microsoft").is_empty());
    }

    #[test]
    fn test_catalog_entries_are_sane() {
        let mut seen = HashSet::new();
        for (device_type, brand, model, spec) in all_devices() {
            assert!(spec.base_price > 0.0, "{brand} {model} has no base price");
            assert!((2010..=2030).contains(&spec.release_year));
            assert!(
                seen.insert((device_type, brand, model)),
                "duplicate entry {device_type}/{brand}/{model}"
            );
        }
        assert_eq!(seen.len(), 121);
    }

    #[test]
    fn test_kind_round_trips_through_key() {
        for kind in DeviceKind::ALL {
            assert_eq!(DeviceKind::from_key(kind.key()), Some(kind));
        }
        for entry in DEVICE_CATALOG {
            assert_eq!(DeviceKind::from_key(entry.key), Some(entry.kind));
        }
    }
}
