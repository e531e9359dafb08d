//! Static directory of places to sell, trade in, recycle or donate a device.

use serde::{Serialize, Serializer};
use tracing::debug;

/// Serialized as `false` or `"Some locations"`, the shape directory consumers expect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pickup {
    No,
    SomeLocations,
}

impl Serialize for Pickup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Pickup::No => serializer.serialize_bool(false),
            Pickup::SomeLocations => serializer.serialize_str("Some locations"),
        }
    }
}

impl Pickup {
    pub fn label(&self) -> &'static str {
        match self {
            Pickup::No => "Drop-off only",
            Pickup::SomeLocations => "Pickup at some locations",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellOnlineOption {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub rating: f32,
    pub payment_time: &'static str,
    pub shipping_free: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeInOption {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub rating: f32,
    pub devices: &'static [&'static str],
    pub payment_method: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecyclingCenter {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub rating: f32,
    pub cost: &'static str,
    pub pickup: Pickup,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationOption {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub rating: f32,
    pub tax_deductible: bool,
    pub pickup: Pickup,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecyclingOptions {
    pub sell_online: &'static [SellOnlineOption],
    pub trade_in: &'static [TradeInOption],
    pub recycling: &'static [RecyclingCenter],
    pub donation: &'static [DonationOption],
}

impl RecyclingOptions {
    pub fn total(&self) -> usize {
        self.sell_online.len() + self.trade_in.len() + self.recycling.len() + self.donation.len()
    }
}

static SELL_ONLINE: &[SellOnlineOption] = &[
    SellOnlineOption {
        name: "Gazelle",
        url: "https://gazelle.com",
        description: "Instant quotes for phones, tablets, and laptops",
        rating: 4.2,
        payment_time: "1-2 days",
        shipping_free: true,
    },
    SellOnlineOption {
        name: "Swappa",
        url: "https://swappa.com",
        description: "Marketplace for used devices with buyer protection",
        rating: 4.5,
        payment_time: "Varies",
        shipping_free: false,
    },
    SellOnlineOption {
        name: "Amazon Trade-In",
        url: "https://amazon.com/tradein",
        description: "Trade devices for Amazon gift cards",
        rating: 4.0,
        payment_time: "2-3 days",
        shipping_free: true,
    },
    SellOnlineOption {
        name: "eBay",
        url: "https://ebay.com",
        description: "Auction or fixed-price selling platform",
        rating: 4.1,
        payment_time: "Varies",
        shipping_free: false,
    },
];

static TRADE_IN: &[TradeInOption] = &[
    TradeInOption {
        name: "Apple Trade In",
        url: "https://apple.com/trade-in",
        description: "Official Apple trade-in program",
        rating: 4.3,
        devices: &["iPhone", "iPad", "MacBook", "Apple Watch"],
        payment_method: "Credit or Gift Card",
    },
    TradeInOption {
        name: "Samsung Trade-In",
        url: "https://samsung.com/us/trade-in",
        description: "Samsung official trade-in program",
        rating: 4.1,
        devices: &["Galaxy phones", "Galaxy tablets", "Galaxy watches"],
        payment_method: "Credit towards new device",
    },
    TradeInOption {
        name: "Best Buy Trade-In",
        url: "https://bestbuy.com/site/electronics-recycling/trade-in/pcmcat149900050011.c",
        description: "Trade in any brand for Best Buy gift cards",
        rating: 4.0,
        devices: &["All electronics"],
        payment_method: "Gift Card",
    },
];

static RECYCLING: &[RecyclingCenter] = &[
    RecyclingCenter {
        name: "Best Buy Recycling",
        url: "https://bestbuy.com/site/services/recycling/pcmcat149900050025.c",
        description: "Free recycling for most electronics",
        rating: 4.4,
        cost: "Free",
        pickup: Pickup::No,
    },
    RecyclingCenter {
        name: "Staples Recycling",
        url: "https://staples.com/sbd/cre/marketing/sustainability-center/recycling-services",
        description: "Free recycling for small electronics",
        rating: 4.2,
        cost: "Free for small items",
        pickup: Pickup::No,
    },
    RecyclingCenter {
        name: "Call2Recycle",
        url: "https://call2recycle.org",
        description: "Battery and cell phone recycling program",
        rating: 4.5,
        cost: "Free",
        pickup: Pickup::No,
    },
    RecyclingCenter {
        name: "Earth911",
        url: "https://earth911.com",
        description: "Find local recycling centers",
        rating: 4.3,
        cost: "Varies",
        pickup: Pickup::SomeLocations,
    },
];

static DONATION: &[DonationOption] = &[
    DonationOption {
        name: "Goodwill",
        url: "https://goodwill.org",
        description: "Donate working electronics for tax deduction",
        rating: 4.1,
        tax_deductible: true,
        pickup: Pickup::SomeLocations,
    },
    DonationOption {
        name: "World Computer Exchange",
        url: "https://worldcomputerexchange.org",
        description: "Donate computers to developing countries",
        rating: 4.6,
        tax_deductible: true,
        pickup: Pickup::No,
    },
    DonationOption {
        name: "National Cristina Foundation",
        url: "https://cristina.org",
        description: "Donate technology to people with disabilities",
        rating: 4.5,
        tax_deductible: true,
        pickup: Pickup::No,
    },
];

/// Returns the recycling directory.
///
/// `location` is accepted for API compatibility but does not filter anything yet.
pub fn recycling_options(location: Option<&str>) -> RecyclingOptions {
    if let Some(location) = location {
        debug!(location, "Location filter requested; returning general directory");
    }

    RecyclingOptions {
        sell_online: SELL_ONLINE,
        trade_in: TRADE_IN,
        recycling: RECYCLING,
        donation: DONATION,
    }
}
