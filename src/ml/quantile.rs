//! Quantile bid estimators (pure Rust ONNX inference via `tract-onnx`).
//!
//! The three regression artifacts are trained offline; this module only loads
//! them and runs inference-by-lookup. Each artifact predicts one quantile of
//! the winning-bid distribution over the same integer feature vector.

use crate::config::ModelConfig;
use crate::error::{Result, WaiverBidError};

use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tract_onnx::prelude::*;

/// Number of features in the acquisition vector: waiver value tier,
/// regular-season weeks remaining, league budget percent remaining.
pub const FEATURE_COUNT: usize = 3;

/// A regression model trained for a single quantile of the winning-bid
/// distribution.
///
/// The trait is the seam between the HTTP layer and the ONNX runtime, so
/// handlers can be exercised without model artifacts on disk.
pub trait BidQuantileModel: Send + Sync {
    /// Evaluate the model on one fixed-order feature vector.
    fn estimate(&self, features: &[i64]) -> Result<f64>;
}

/// ONNX-backed estimator specialized to a fixed `[1, FEATURE_COUNT]` i64 input.
#[derive(Clone)]
pub struct OnnxQuantileModel {
    plan: TypedRunnableModel<TypedModel>,
}

impl std::fmt::Debug for OnnxQuantileModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxQuantileModel")
            .field("input_shape", &[1, FEATURE_COUNT])
            .finish()
    }
}

impl OnnxQuantileModel {
    /// Load an ONNX artifact and specialize it to the acquisition vector shape.
    pub fn load(path: &Path) -> Result<Self> {
        let model = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(|e| WaiverBidError::ModelLoad(format!("{}: {e}", path.display())))?;

        let plan = model
            .with_input_fact(
                0,
                InferenceFact::dt_shape(i64::datum_type(), tvec!(1, FEATURE_COUNT)),
            )
            .map_err(|e| {
                WaiverBidError::ModelLoad(format!("{}: input fact failed: {e}", path.display()))
            })?
            .into_optimized()
            .map_err(|e| {
                WaiverBidError::ModelLoad(format!("{}: optimize failed: {e}", path.display()))
            })?
            .into_runnable()
            .map_err(|e| {
                WaiverBidError::ModelLoad(format!("{}: runnable failed: {e}", path.display()))
            })?;

        Ok(Self { plan })
    }
}

impl BidQuantileModel for OnnxQuantileModel {
    fn estimate(&self, features: &[i64]) -> Result<f64> {
        if features.len() != FEATURE_COUNT {
            return Err(WaiverBidError::Validation(format!(
                "feature vector dim mismatch: got {}, expected {}",
                features.len(),
                FEATURE_COUNT
            )));
        }

        let tensor = tract_ndarray::ArrayD::<i64>::from_shape_vec(
            tract_ndarray::IxDyn(&[1, FEATURE_COUNT]),
            features.to_vec(),
        )
        .map_err(|e| WaiverBidError::Inference(format!("input reshape failed: {e}")))?
        .into_tvalue();

        let outputs = self
            .plan
            .run(tvec!(tensor))
            .map_err(|e| WaiverBidError::Inference(format!("onnx run failed: {e}")))?;
        let out = outputs
            .first()
            .ok_or_else(|| WaiverBidError::Inference("onnx produced no outputs".to_string()))?;

        // sklearn->ONNX exporters emit float32 outputs; accept float64 too.
        let value = match out.to_array_view::<f32>() {
            Ok(arr) => arr.iter().next().copied().map(f64::from),
            Err(_) => out
                .to_array_view::<f64>()
                .ok()
                .and_then(|arr| arr.iter().next().copied()),
        };

        value.ok_or_else(|| {
            WaiverBidError::Inference("onnx output is empty or not a float tensor".to_string())
        })
    }
}

/// Predicted winning-bid amounts at the 10th/50th/90th percentiles, each
/// rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BidRange {
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The three pre-loaded quantile estimators.
///
/// Loaded once at startup and immutable afterwards, so concurrent handlers can
/// share it behind an `Arc` without locking.
pub struct QuantileSet {
    p10: Arc<dyn BidQuantileModel>,
    p50: Arc<dyn BidQuantileModel>,
    p90: Arc<dyn BidQuantileModel>,
}

impl QuantileSet {
    /// Load all three artifacts. Any failure here is fatal to startup.
    pub fn load(config: &ModelConfig) -> Result<Self> {
        let p10 = OnnxQuantileModel::load(&config.p10_path())?;
        info!("Loaded 10th percentile model from {}", config.p10_path().display());
        let p50 = OnnxQuantileModel::load(&config.p50_path())?;
        info!("Loaded 50th percentile model from {}", config.p50_path().display());
        let p90 = OnnxQuantileModel::load(&config.p90_path())?;
        info!("Loaded 90th percentile model from {}", config.p90_path().display());

        Ok(Self::from_models(Arc::new(p10), Arc::new(p50), Arc::new(p90)))
    }

    /// Assemble a set from already-constructed estimators.
    pub fn from_models(
        p10: Arc<dyn BidQuantileModel>,
        p50: Arc<dyn BidQuantileModel>,
        p90: Arc<dyn BidQuantileModel>,
    ) -> Self {
        Self { p10, p50, p90 }
    }

    /// Evaluate all three estimators with the identical feature vector.
    ///
    /// The evaluations are independent; the first error aborts the request
    /// with no partial result.
    pub fn predict(&self, features: &[i64; FEATURE_COUNT]) -> Result<BidRange> {
        Ok(BidRange {
            p10: round2(self.p10.estimate(features)?),
            p50: round2(self.p50.estimate(features)?),
            p90: round2(self.p90.estimate(features)?),
        })
    }
}
