pub mod quantile;

pub use quantile::{BidQuantileModel, BidRange, OnnxQuantileModel, QuantileSet, FEATURE_COUNT};
