//! Editing logic for the level table.
//!
//! The editor owns a working copy of the table plus the revenue level and
//! visible-level count, and keeps the committed snapshot around so an edit
//! gesture can be discarded. Edits clamp neighbouring rates immediately
//! (see `set_rate`), so the table is monotone after every single change.

use crate::{Level, ResultEngine, levels};

/// Tolerance for the advisory 100% check, in percentage points.
const TOTAL_TOLERANCE: f64 = 0.1;

/// Everything a commit persists as a unit.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelSettings {
    pub levels: Vec<Level>,
    pub revenue_level: usize,
    pub visible_levels: usize,
}

/// Lifecycle of the current edit gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditState {
    Idle,
    Editing,
    Committed,
}

/// Result of a regular save attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveOutcome {
    Saved(LevelSettings),
    /// The difference-principle total misses 100% by more than the
    /// tolerance. Advisory only: the caller may prompt the user and call
    /// `commit_anyway`.
    TotalMismatch { total: f64 },
}

#[derive(Clone, Debug)]
pub struct LevelTableEditor {
    working: LevelSettings,
    committed: LevelSettings,
    state: EditState,
}

impl LevelTableEditor {
    #[must_use]
    pub fn new(settings: LevelSettings) -> Self {
        Self {
            working: settings.clone(),
            committed: settings,
            state: EditState::Idle,
        }
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.working.levels
    }

    #[must_use]
    pub fn revenue_level(&self) -> usize {
        self.working.revenue_level
    }

    #[must_use]
    pub fn visible_levels(&self) -> usize {
        self.working.visible_levels
    }

    #[must_use]
    pub fn state(&self) -> EditState {
        self.state
    }

    /// Difference-principle total for the working table, for live display.
    #[must_use]
    pub fn total_percentage(&self) -> f64 {
        levels::total_percentage(&self.working.levels, self.working.revenue_level)
    }

    /// Sets level `index` to `value` (clamped to 0..=100) and restores
    /// monotonicity around it in one pass.
    ///
    /// Raising a level pulls every superior up to at least `value`; lowering
    /// one pushes every subordinate down to at most `value`. A subordinate
    /// can never out-rate a superior, so the table is valid again before the
    /// next edit. Out-of-range indices are ignored.
    pub fn set_rate(&mut self, index: usize, value: f64) {
        let levels = &mut self.working.levels;
        if index >= levels.len() {
            return;
        }

        let value = value.clamp(0.0, 100.0);
        levels[index].rate = value;
        for level in &mut levels[..index] {
            if level.rate < value {
                level.rate = value;
            }
        }
        for level in &mut levels[index + 1..] {
            if level.rate > value {
                level.rate = value;
            }
        }

        self.state = EditState::Editing;
    }

    /// Marks level `index` as the revenue level. Out-of-range indices are
    /// ignored.
    pub fn set_revenue_level(&mut self, index: usize) {
        if index >= self.working.levels.len() {
            return;
        }
        self.working.revenue_level = index;
        self.state = EditState::Editing;
    }

    /// Shows the full table (up to 10 levels).
    pub fn expand(&mut self) {
        if self.working.visible_levels < 10 {
            self.working.visible_levels = 10;
            self.state = EditState::Editing;
        }
    }

    /// Shrinks the display back to 7 levels.
    pub fn collapse(&mut self) {
        if self.working.visible_levels > 7 {
            self.working.visible_levels = 7;
            self.state = EditState::Editing;
        }
    }

    /// Attempts to commit the working state.
    ///
    /// A monotonicity violation rejects the save and leaves the editor in
    /// `Editing` (it cannot arise through `set_rate`, but tables loaded from
    /// storage are checked all the same). A total off 100% by more than the
    /// tolerance withholds the commit as `TotalMismatch`; everything else
    /// commits and returns the snapshot to persist.
    pub fn commit(&mut self) -> ResultEngine<SaveOutcome> {
        if let Err(err) = levels::ensure_descending(&self.working.levels) {
            self.state = EditState::Editing;
            return Err(err);
        }

        let total = self.total_percentage();
        if (total - 100.0).abs() > TOTAL_TOLERANCE {
            return Ok(SaveOutcome::TotalMismatch { total });
        }

        Ok(SaveOutcome::Saved(self.finish_commit()))
    }

    /// Commits despite a total-percentage mismatch. The monotonicity check
    /// still applies.
    pub fn commit_anyway(&mut self) -> ResultEngine<LevelSettings> {
        if let Err(err) = levels::ensure_descending(&self.working.levels) {
            self.state = EditState::Editing;
            return Err(err);
        }
        Ok(self.finish_commit())
    }

    /// Drops uncommitted changes and restores the last committed snapshot.
    pub fn discard(&mut self) {
        self.working = self.committed.clone();
        self.state = EditState::Idle;
    }

    fn finish_commit(&mut self) -> LevelSettings {
        self.committed = self.working.clone();
        self.state = EditState::Committed;
        self.committed.clone()
    }
}
