//! Errors the engine can raise.
//!
//! The distribution computation itself never fails; errors come from the
//! editor's save validation, label parsing and CSV export.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(
        "\"{upper_name}\" ({upper_rate}%) is below \"{lower_name}\" ({lower_rate}%): higher levels must keep higher rates"
    )]
    RateOrder {
        upper_name: String,
        upper_rate: f64,
        lower_name: String,
        lower_rate: f64,
    },
    #[error("unknown division: {0}")]
    UnknownDivision(String),
    #[error("export failed: {0}")]
    Export(String),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::RateOrder {
                    upper_name: a_upper,
                    upper_rate: a_upper_rate,
                    lower_name: a_lower,
                    lower_rate: a_lower_rate,
                },
                Self::RateOrder {
                    upper_name: b_upper,
                    upper_rate: b_upper_rate,
                    lower_name: b_lower,
                    lower_rate: b_lower_rate,
                },
            ) => {
                a_upper == b_upper
                    && a_upper_rate == b_upper_rate
                    && a_lower == b_lower
                    && a_lower_rate == b_lower_rate
            }
            (Self::UnknownDivision(a), Self::UnknownDivision(b)) => a == b,
            (Self::Export(a), Self::Export(b)) => a == b,
            _ => false,
        }
    }
}
