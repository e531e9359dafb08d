pub mod estimator;
pub mod recycling;
pub mod settings;

pub use estimator::EstimatorPage;
pub use recycling::RecyclingPage;
pub use settings::SettingsPage;
