pub mod assets;
pub mod logging;
pub mod persistence;

pub const APP_NAME: &str = "EcoSpire";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}
