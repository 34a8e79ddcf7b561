//! The rate configuration consumed by the engine and the editor.
//!
//! A `RateConfig` is a plain value owned by the screen that loaded it. The
//! `store` crate fills in these defaults for keys missing from persisted
//! settings; nothing here is global state.

use serde::{Deserialize, Serialize};

use crate::{Division, Level};

/// Default revenue level ("Umsatzgeber"): Ebene 6.
pub const DEFAULT_REVENUE_LEVEL: usize = 6;

/// Default number of levels shown by the editor (expandable to 10).
pub const DEFAULT_VISIBLE_LEVELS: usize = 7;

/// Entry rates defining the 100% pool per division.
///
/// Life and health are per mille of the assessment sum; property/casualty
/// is percent of the net premium.
pub const DEFAULT_ENTRY_RATES: DivisionRates = DivisionRates {
    life: 44.0,
    property_casualty: 22.5,
    health: 8.0,
};

/// Overhead ("Zuführer") rates paid on top of the pool.
pub const DEFAULT_OVERHEAD_RATES: DivisionRates = DivisionRates {
    life: 0.0,
    property_casualty: 0.0,
    health: 0.3,
};

/// One rate per division, stored under the German division labels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DivisionRates {
    #[serde(rename = "Leben")]
    pub life: f64,
    #[serde(rename = "Sach")]
    pub property_casualty: f64,
    #[serde(rename = "KV")]
    pub health: f64,
}

impl DivisionRates {
    #[must_use]
    pub const fn get(self, division: Division) -> f64 {
        match division {
            Division::Life => self.life,
            Division::PropertyCasualty => self.property_casualty,
            Division::Health => self.health,
        }
    }
}

/// Snapshot of everything the distribution engine needs besides the
/// transaction inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    pub entry_rates: DivisionRates,
    pub overhead_rates: DivisionRates,
    pub levels: Vec<Level>,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            entry_rates: DEFAULT_ENTRY_RATES,
            overhead_rates: DEFAULT_OVERHEAD_RATES,
            levels: default_levels(),
        }
    }
}

/// The stock 10-entry level table.
#[must_use]
pub fn default_levels() -> Vec<Level> {
    let rates = [85.0, 80.0, 75.0, 70.0, 65.0, 60.0, 55.0, 50.0, 45.0, 40.0];
    rates
        .iter()
        .enumerate()
        .map(|(index, rate)| {
            let name = match index {
                0 => "Strukturführer (S0)".to_string(),
                1 => "Leiter (S1)".to_string(),
                _ => format!("Ebene {index}"),
            };
            Level::new(name, *rate)
        })
        .collect()
}
