//! Recommendation record and categorical enums.
//!
//! Serialized field names match the artifact consumed by the web
//! calculator (`pVTE`, `RRrx`, `ashDecision`, ...), so the JSON document
//! produced here is a drop-in replacement for the hand-maintained one.

use serde::{Deserialize, Serialize};

/// Clinical decision for a recommendation.
///
/// `Unknown` is the sentinel for an unresolved reference lookup. It is
/// never a valid value in the reference workbook and never compares as a
/// match, including against another `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    NoRx,
    Test,
    Rx,
    Unknown,
}

impl Decision {
    /// All values the reference workbook may carry.
    pub const KNOWN: [Decision; 3] = [Decision::NoRx, Decision::Test, Decision::Rx];

    /// Whether this is one of the three valid clinical decisions.
    pub fn is_known(self) -> bool {
        self != Decision::Unknown
    }

    /// Match semantics for verification: both sides must be known and equal.
    pub fn matches(self, other: Decision) -> bool {
        self.is_known() && self == other
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::NoRx => write!(f, "NoRx"),
            Decision::Test => write!(f, "Test"),
            Decision::Rx => write!(f, "Rx"),
            Decision::Unknown => write!(f, "Unknown"),
        }
    }
}

impl std::str::FromStr for Decision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NoRx" => Ok(Decision::NoRx),
            "Test" => Ok(Decision::Test),
            "Rx" => Ok(Decision::Rx),
            "Unknown" => Ok(Decision::Unknown),
            other => Err(format!("unrecognized decision value: {other:?}")),
        }
    }
}

/// Recommendation family, fixed partition of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    #[serde(rename = "R1-R10")]
    R1R10,
    #[serde(rename = "R11-R14")]
    R11R14,
    #[serde(rename = "R15-R20")]
    R15R20,
    #[serde(rename = "R21-R23")]
    R21R23,
}

impl Group {
    pub const ALL: [Group; 4] = [Group::R1R10, Group::R11R14, Group::R15R20, Group::R21R23];

    /// Record count this family must contribute to the catalog.
    pub fn expected_count(self) -> usize {
        match self {
            Group::R1R10 => 20,
            Group::R11R14 => 16,
            Group::R15R20 => 21,
            Group::R21R23 => 12,
        }
    }

    /// Total catalog size. Hard completeness invariant, not a derived value.
    pub const TOTAL: usize = 69;
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Group::R1R10 => write!(f, "R1-R10"),
            Group::R11R14 => write!(f, "R11-R14"),
            Group::R15R20 => write!(f, "R15-R20"),
            Group::R21R23 => write!(f, "R21-R23"),
        }
    }
}

/// Bleeding-risk variant for the R1-R10 family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BleedingRisk {
    Low,
    High,
}

impl BleedingRisk {
    pub const ALL: [BleedingRisk; 2] = [BleedingRisk::Low, BleedingRisk::High];

    /// Hazard constant selected by variant.
    pub fn hazard(self) -> f64 {
        match self {
            BleedingRisk::Low => 0.005,
            BleedingRisk::High => 0.015,
        }
    }

    /// Lowercase id suffix ("R1 low", "R1 high").
    pub fn id_suffix(self) -> &'static str {
        match self {
            BleedingRisk::Low => "low",
            BleedingRisk::High => "high",
        }
    }

    /// Uppercase label used in description suffixes.
    pub fn label(self) -> &'static str {
        match self {
            BleedingRisk::Low => "LOW",
            BleedingRisk::High => "HIGH",
        }
    }
}

/// One clinical decision scenario.
///
/// Records are constructed once by the catalog builder and are immutable
/// afterwards. `h_low`/`h_high` both exist in the artifact schema; the
/// builder always fills them from a single hazard value, and the verifier
/// flags a divergent pair rather than silently picking one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,

    #[serde(rename = "pVTE")]
    pub p_vte: f64,

    #[serde(rename = "Tp")]
    pub tp: f64,

    #[serde(rename = "RRt")]
    pub rr_t: f64,

    #[serde(rename = "RRrx")]
    pub rr_rx: f64,

    #[serde(rename = "H_low")]
    pub h_low: f64,

    #[serde(rename = "H_high")]
    pub h_high: f64,

    #[serde(rename = "RRbleed")]
    pub rr_bleed: f64,

    /// Display precision for `p_vte`, a deterministic function of its
    /// magnitude under the owning family's tiering policy.
    pub decimals: u8,

    pub description: String,

    #[serde(rename = "ashDecision")]
    pub ash_decision: Decision,

    pub category: String,

    pub group: Group,

    #[serde(
        rename = "bleedingRisk",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bleeding_risk: Option<BleedingRisk>,

    #[serde(rename = "isReversed", default, skip_serializing_if = "is_false")]
    pub is_reversed: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Recommendation {
    /// The hazard used for threshold computation.
    pub fn hazard(&self) -> f64 {
        self.h_low
    }

    /// True when the legacy hazard pair disagrees. Reportable, not fatal.
    pub fn hazard_diverges(&self) -> bool {
        self.h_low != self.h_high
    }
}
