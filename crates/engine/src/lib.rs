//! Core of the commission calculator: division policies, the rate
//! configuration, the distribution engine and the level-table editor.
//!
//! Everything in this crate is pure and synchronous. Persistence lives in
//! the `store` crate; rendering is the host application's concern.

pub use config::{
    DEFAULT_ENTRY_RATES, DEFAULT_OVERHEAD_RATES, DEFAULT_REVENUE_LEVEL, DEFAULT_VISIBLE_LEVELS,
    DivisionRates, RateConfig, default_levels,
};
pub use distribution::{Distribution, ShareEntry, distribute};
pub use division::{Division, DivisionPolicy};
pub use editor::{EditState, LevelSettings, LevelTableEditor, SaveOutcome};
pub use error::EngineError;
pub use export::to_csv;
pub use levels::Level;

mod config;
mod distribution;
mod division;
mod editor;
mod error;
mod export;
mod levels;
pub mod util;

type ResultEngine<T> = Result<T, EngineError>;
