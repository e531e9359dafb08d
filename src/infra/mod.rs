pub mod backend;

pub use backend::{estimate_with_fallback, AnalysisClient, BackendError};
