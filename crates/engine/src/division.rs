use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Product division ("Sparte") of a transaction.
///
/// The division decides how the assessment sum turns into the commission
/// pool: whether the entry rate is read as per mille or percent, and whether
/// the sum is annualized first. Serialized names keep the German labels used
/// by the persisted settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    #[default]
    #[serde(rename = "Leben")]
    Life,
    #[serde(rename = "Sach")]
    PropertyCasualty,
    #[serde(rename = "KV")]
    Health,
}

/// Unit convention of a division, resolved once per computation.
///
/// `unit_divisor` is 1000 for per-mille rates and 100 for percent rates.
/// `pre_multiply` scales the input sum before any rate applies; health
/// insurance quotes a monthly premium, so its factor of 8 produces the
/// annualized base the rates refer to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DivisionPolicy {
    pub unit_divisor: f64,
    pub pre_multiply: f64,
}

impl Division {
    pub const ALL: [Division; 3] = [
        Division::Life,
        Division::PropertyCasualty,
        Division::Health,
    ];

    /// German display label, matching the persisted serde names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Division::Life => "Leben",
            Division::PropertyCasualty => "Sach",
            Division::Health => "KV",
        }
    }

    #[must_use]
    pub const fn policy(self) -> DivisionPolicy {
        match self {
            Division::Life => DivisionPolicy {
                unit_divisor: 1000.0,
                pre_multiply: 1.0,
            },
            Division::PropertyCasualty => DivisionPolicy {
                unit_divisor: 100.0,
                pre_multiply: 1.0,
            },
            Division::Health => DivisionPolicy {
                unit_divisor: 1000.0,
                pre_multiply: 8.0,
            },
        }
    }
}

impl core::fmt::Display for Division {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Division {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Leben" => Ok(Division::Life),
            "Sach" => Ok(Division::PropertyCasualty),
            "KV" => Ok(Division::Health),
            other => Err(EngineError::UnknownDivision(other.to_string())),
        }
    }
}
