//! The distribution engine: turns one transaction into the per-level
//! commission breakdown.

use crate::{Division, RateConfig, levels};

/// Name of the optional leading overhead entry.
pub const OVERHEAD_NAME: &str = "Zuführer (Overhead)";

/// One line of the breakdown.
///
/// `rate` is the level's listed rate, `difference` the percentage points it
/// actually receives under the difference principle, `amount` the currency
/// share of the pool. For the overhead entry `rate` and `difference` are
/// both the raw overhead rate.
#[derive(Clone, Debug, PartialEq)]
pub struct ShareEntry {
    pub name: String,
    pub rate: f64,
    pub difference: f64,
    pub amount: f64,
}

/// Full breakdown of one transaction: overhead entry first when active,
/// then levels from the structure leader down to the revenue level.
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution {
    pub entries: Vec<ShareEntry>,
    pub total_amount: f64,
    pub total_difference: f64,
}

/// Computes the commission breakdown for one transaction.
///
/// Pure and O(levels): safe to call on every keystroke of the sum field.
/// Nothing is rounded here; rounding happens at presentation only. A
/// `revenue_level` past the end of the table is clamped to the last level,
/// and an empty table yields at most the overhead entry.
#[must_use]
pub fn distribute(
    sum: f64,
    division: Division,
    revenue_level: usize,
    config: &RateConfig,
    overhead_active: bool,
) -> Distribution {
    let policy = division.policy();
    let base = sum * policy.pre_multiply;
    let pool = base * config.entry_rates.get(division) / policy.unit_divisor;

    let mut entries = Vec::new();

    // Paid on top of the pool, never out of it.
    if overhead_active {
        let overhead_rate = config.overhead_rates.get(division);
        entries.push(ShareEntry {
            name: OVERHEAD_NAME.to_string(),
            rate: overhead_rate,
            difference: overhead_rate,
            amount: base * overhead_rate / policy.unit_divisor,
        });
    }

    if !config.levels.is_empty() {
        let pivot = revenue_level.min(config.levels.len() - 1);
        for (index, level) in config.levels[..=pivot].iter().enumerate() {
            let difference = levels::difference_at(&config.levels, pivot, index);
            entries.push(ShareEntry {
                name: level.name.clone(),
                rate: level.rate,
                difference,
                amount: pool * difference / 100.0,
            });
        }
    }

    let total_amount = entries.iter().map(|entry| entry.amount).sum();
    let total_difference = entries.iter().map(|entry| entry.difference).sum();

    Distribution {
        entries,
        total_amount,
        total_difference,
    }
}
