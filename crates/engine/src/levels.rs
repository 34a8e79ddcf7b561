//! The hierarchy level table and the difference principle.
//!
//! Index 0 is the structure leader; higher indices sit lower in the
//! hierarchy. A valid table keeps rates non-increasing top to bottom, so a
//! superior never carries a smaller rate than a subordinate.

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// One distributor level: a display name and its override rate in percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub rate: f64,
}

impl Level {
    pub fn new(name: impl Into<String>, rate: f64) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }
}

/// Percentage points `index` receives under the difference principle with
/// the revenue level at `pivot`.
///
/// The pivot level keeps its full rate, every level above it earns only the
/// margin over the level directly below, and levels below the pivot earn
/// nothing from this transaction.
#[must_use]
pub fn difference_at(levels: &[Level], pivot: usize, index: usize) -> f64 {
    if index == pivot {
        levels[index].rate
    } else if index < pivot {
        levels[index].rate - levels[index + 1].rate
    } else {
        0.0
    }
}

/// Total percentage points paid out of the pool for a given revenue level.
///
/// The per-level differences telescope, so for a monotone table this equals
/// the structure leader's own rate.
#[must_use]
pub fn total_percentage(levels: &[Level], pivot: usize) -> f64 {
    if levels.is_empty() {
        return 0.0;
    }
    let pivot = pivot.min(levels.len() - 1);
    (0..=pivot)
        .map(|index| difference_at(levels, pivot, index))
        .sum()
}

/// Checks that rates never increase going down the hierarchy.
///
/// On violation the error names both offending levels and their rates.
pub fn ensure_descending(levels: &[Level]) -> ResultEngine<()> {
    for pair in levels.windows(2) {
        if pair[0].rate < pair[1].rate {
            return Err(EngineError::RateOrder {
                upper_name: pair[0].name.clone(),
                upper_rate: pair[0].rate,
                lower_name: pair[1].name.clone(),
                lower_rate: pair[1].rate,
            });
        }
    }
    Ok(())
}
