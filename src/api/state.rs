use crate::ml::QuantileSet;
use std::sync::Arc;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Pre-loaded quantile estimators, read-only after startup
    pub models: Arc<QuantileSet>,
}

impl AppState {
    pub fn new(models: Arc<QuantileSet>) -> Self {
        Self { models }
    }
}
