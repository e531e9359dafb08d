pub mod confidence_badge;
pub mod kpi_card;
pub mod option_card;
pub mod price_range;
pub mod toast;
