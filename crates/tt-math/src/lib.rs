//! Threshold Triage decision math.

pub mod thresholds;

pub use thresholds::{
    classify, compute_thresholds, decide, ThresholdError, ThresholdModel, ThresholdParams,
    Thresholds, DEFAULT_RV,
};
