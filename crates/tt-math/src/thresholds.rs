//! Expected-utility treatment thresholds.
//!
//! Two mutually exclusive formula sets. The standard model covers
//! anticoagulation scenarios where treatment reduces clot risk
//! (`RRrx < 1`); the reversed model covers hormonal-exposure scenarios
//! where the intervention increases clot risk (`RRrx > 1`), which flips
//! both the threshold ordering and the decision polarity.
//!
//! Standard:
//! ```text
//! Pt  = RV * (RRbleed - 1) * H / (1 - RRrx)
//! Ptt = ((RRt * Tp + (1 - Tp)) / RRt) * Pt
//! pVTE < Ptt -> NoRx | pVTE > Pt -> Rx | else Test
//! ```
//!
//! Reversed:
//! ```text
//! Pt  = RV * H / (RRrx - 1)
//! Ptt = Pt * (RRt * Tp + (1 - Tp))
//! pVTE < Pt -> Rx | pVTE > Ptt -> NoRx | else Test
//! ```

use serde::Serialize;
use thiserror::Error;
use tt_common::Decision;

/// Normalized reference value. The catalog never overrides it.
pub const DEFAULT_RV: f64 = 1.0;

/// Which formula set applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdModel {
    Standard,
    Reversed,
}

impl ThresholdModel {
    /// Select the model from a record's `isReversed` flag.
    pub fn for_reversed(is_reversed: bool) -> Self {
        if is_reversed {
            ThresholdModel::Reversed
        } else {
            ThresholdModel::Standard
        }
    }
}

/// Inputs to the threshold computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdParams {
    /// Normalized reference value, `DEFAULT_RV` unless a study overrides it.
    pub rv: f64,
    /// Baseline hazard / annual event rate.
    pub h: f64,
    /// Relative risk of thrombosis under treatment or intervention.
    pub rr_rx: f64,
    /// Relative risk of the thrombosis-related event under exposure.
    pub rr_t: f64,
    /// Treatment-period weighting factor, in [0, 1].
    pub tp: f64,
    /// Relative risk of major bleeding under treatment. Ignored by the
    /// reversed model, where it is fixed to the neutral value 1.
    pub rr_bleed: f64,
}

/// Derived probability boundaries.
///
/// For the standard model `Ptt <= Pt` whenever `RRt >= 1`; the reversed
/// model orders them the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    #[serde(rename = "Pt")]
    pub pt: f64,
    #[serde(rename = "Ptt")]
    pub ptt: f64,
}

/// Errors raised for parameters outside the model's domain.
#[derive(Debug, Error, PartialEq)]
pub enum ThresholdError {
    #[error("RRrx must not equal 1 (got {rr_rx})")]
    DegenerateRrRx { rr_rx: f64 },

    #[error("RRt must be positive (got {rr_t})")]
    NonPositiveRrT { rr_t: f64 },

    #[error("non-finite {what} computed from parameters")]
    NonFinite { what: &'static str },
}

/// Compute both decision thresholds for the given model.
pub fn compute_thresholds(
    model: ThresholdModel,
    params: &ThresholdParams,
) -> Result<Thresholds, ThresholdError> {
    if params.rr_rx == 1.0 {
        return Err(ThresholdError::DegenerateRrRx {
            rr_rx: params.rr_rx,
        });
    }

    let thresholds = match model {
        ThresholdModel::Standard => {
            if params.rr_t <= 0.0 {
                return Err(ThresholdError::NonPositiveRrT { rr_t: params.rr_t });
            }
            let pt = params.rv * (params.rr_bleed - 1.0) * params.h / (1.0 - params.rr_rx);
            let ptt = ((params.rr_t * params.tp + (1.0 - params.tp)) / params.rr_t) * pt;
            Thresholds { pt, ptt }
        }
        ThresholdModel::Reversed => {
            let pt = params.rv * params.h / (params.rr_rx - 1.0);
            let ptt = pt * (params.rr_t * params.tp + (1.0 - params.tp));
            Thresholds { pt, ptt }
        }
    };

    if !thresholds.pt.is_finite() {
        return Err(ThresholdError::NonFinite { what: "Pt" });
    }
    if !thresholds.ptt.is_finite() {
        return Err(ThresholdError::NonFinite { what: "Ptt" });
    }

    Ok(thresholds)
}

/// Map a probability onto the three-way decision partition.
///
/// The arms are evaluated in a fixed order, so the result is unique even
/// for parameter tuples where the thresholds invert (observed for two
/// reversed rows with `RRt < 1`).
pub fn classify(model: ThresholdModel, p_vte: f64, thresholds: &Thresholds) -> Decision {
    match model {
        ThresholdModel::Standard => {
            if p_vte < thresholds.ptt {
                Decision::NoRx
            } else if p_vte > thresholds.pt {
                Decision::Rx
            } else {
                Decision::Test
            }
        }
        ThresholdModel::Reversed => {
            if p_vte < thresholds.pt {
                Decision::Rx
            } else if p_vte > thresholds.ptt {
                Decision::NoRx
            } else {
                Decision::Test
            }
        }
    }
}

/// Compute thresholds and classify in one step.
pub fn decide(
    model: ThresholdModel,
    p_vte: f64,
    params: &ThresholdParams,
) -> Result<Decision, ThresholdError> {
    let thresholds = compute_thresholds(model, params)?;
    Ok(classify(model, p_vte, &thresholds))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_params() -> ThresholdParams {
        // R1 low
        ThresholdParams {
            rv: DEFAULT_RV,
            h: 0.005,
            rr_rx: 0.15,
            rr_t: 1.65,
            tp: 0.38,
            rr_bleed: 2.17,
        }
    }

    #[test]
    fn test_standard_r1_low() {
        let t = compute_thresholds(ThresholdModel::Standard, &standard_params()).unwrap();

        // Pt = 1 * (2.17 - 1) * 0.005 / (1 - 0.15)
        assert!((t.pt - 0.006_882_352_941).abs() < 1e-9);
        // Ptt = ((1.65 * 0.38 + 0.62) / 1.65) * Pt
        assert!((t.ptt / t.pt - 0.755_757_575_8).abs() < 1e-9);

        // pVTE = 0.10 >> Pt, so treat.
        assert_eq!(
            classify(ThresholdModel::Standard, 0.10, &t),
            Decision::Rx
        );
    }

    #[test]
    fn test_reversed_r15() {
        let params = ThresholdParams {
            rv: DEFAULT_RV,
            h: 0.0595,
            rr_rx: 3.5,
            rr_t: 5.89,
            tp: 0.0685,
            rr_bleed: 1.0,
        };
        let t = compute_thresholds(ThresholdModel::Reversed, &params).unwrap();

        // Pt = 1 * 0.0595 / (3.5 - 1) = 0.0238
        assert!((t.pt - 0.0238).abs() < 1e-12);
        assert!(t.ptt >= t.pt);

        // pVTE = 0.00035 << Pt: hormonal exposure is acceptable.
        assert_eq!(
            classify(ThresholdModel::Reversed, 0.00035, &t),
            Decision::Rx
        );
    }

    #[test]
    fn test_standard_boundaries_are_test() {
        let t = compute_thresholds(ThresholdModel::Standard, &standard_params()).unwrap();

        // Exactly on either boundary falls into the Test band.
        assert_eq!(classify(ThresholdModel::Standard, t.pt, &t), Decision::Test);
        assert_eq!(classify(ThresholdModel::Standard, t.ptt, &t), Decision::Test);
        // Just inside the band.
        let mid = (t.ptt + t.pt) / 2.0;
        assert_eq!(classify(ThresholdModel::Standard, mid, &t), Decision::Test);
    }

    #[test]
    fn test_standard_below_ptt_is_norx() {
        let t = compute_thresholds(ThresholdModel::Standard, &standard_params()).unwrap();
        assert_eq!(
            classify(ThresholdModel::Standard, t.ptt * 0.5, &t),
            Decision::NoRx
        );
    }

    #[test]
    fn test_reversed_above_ptt_is_norx() {
        let params = ThresholdParams {
            rv: DEFAULT_RV,
            h: 0.0595,
            rr_rx: 3.5,
            rr_t: 3.87,
            tp: 0.142,
            rr_bleed: 1.0,
        };
        let t = compute_thresholds(ThresholdModel::Reversed, &params).unwrap();
        assert_eq!(
            classify(ThresholdModel::Reversed, t.ptt * 2.0, &t),
            Decision::NoRx
        );
        assert_eq!(classify(ThresholdModel::Reversed, t.pt, &t), Decision::Test);
    }

    #[test]
    fn test_degenerate_rr_rx_rejected() {
        let mut params = standard_params();
        params.rr_rx = 1.0;
        assert_eq!(
            compute_thresholds(ThresholdModel::Standard, &params),
            Err(ThresholdError::DegenerateRrRx { rr_rx: 1.0 })
        );
        assert_eq!(
            compute_thresholds(ThresholdModel::Reversed, &params),
            Err(ThresholdError::DegenerateRrRx { rr_rx: 1.0 })
        );
    }

    #[test]
    fn test_zero_rr_t_rejected() {
        let mut params = standard_params();
        params.rr_t = 0.0;
        assert_eq!(
            compute_thresholds(ThresholdModel::Standard, &params),
            Err(ThresholdError::NonPositiveRrT { rr_t: 0.0 })
        );
    }

    #[test]
    fn test_model_selection() {
        assert_eq!(
            ThresholdModel::for_reversed(false),
            ThresholdModel::Standard
        );
        assert_eq!(ThresholdModel::for_reversed(true), ThresholdModel::Reversed);
    }
}
