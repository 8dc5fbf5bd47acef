//! Linear undo/redo history over form snapshots.
//!
//! Each recorded entry is a full `FormState`. States are immutable and share
//! storage, so keeping every past state is cheap. The cursor points at the
//! snapshot matching the live form; entries after it are the redo branch and
//! are discarded as soon as a new state is recorded.

use fb_core::FormState;

pub struct History {
    snapshots: Vec<FormState>,
    /// `None` until the first snapshot is recorded.
    cursor: Option<usize>,
    /// Maximum number of snapshots kept (`None` = unbounded).
    max_depth: Option<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
            cursor: None,
            max_depth: None,
        }
    }

    /// History that keeps at most `max_depth` snapshots, dropping the oldest.
    pub fn with_limit(max_depth: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(max_depth.min(64)),
            cursor: None,
            max_depth: Some(max_depth.max(1)),
        }
    }

    /// Record `state` as the newest snapshot.
    ///
    /// Nothing is recorded until the form first becomes non-empty. After
    /// that every state is kept, including a return to an empty form.
    pub fn record(&mut self, state: FormState) {
        let Some(cursor) = self.cursor else {
            if state.is_empty() {
                return;
            }
            self.snapshots.push(state);
            self.cursor = Some(0);
            return;
        };

        // New edit discards the redo branch.
        self.snapshots.truncate(cursor + 1);
        self.snapshots.push(state);

        if let Some(max) = self.max_depth
            && self.snapshots.len() > max
        {
            self.snapshots.remove(0);
        }
        self.cursor = Some(self.snapshots.len() - 1);
        log::debug!(
            "history: recorded snapshot {} of {}",
            self.snapshots.len() - 1,
            self.snapshots.len()
        );
    }

    /// Step back one snapshot. Returns the state to restore, or `None` if
    /// there is nothing to undo.
    pub fn undo(&mut self) -> Option<FormState> {
        let cursor = self.cursor.filter(|&c| c > 0)?;
        self.cursor = Some(cursor - 1);
        log::debug!("history: undo to {}", cursor - 1);
        Some(self.snapshots[cursor - 1].clone())
    }

    /// Step forward one snapshot. Returns the state to restore, or `None` if
    /// there is nothing to redo.
    pub fn redo(&mut self) -> Option<FormState> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        log::debug!("history: redo to {}", cursor + 1);
        Some(self.snapshots[cursor + 1].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.snapshots.len())
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> Option<&FormState> {
        self.cursor.map(|c| &self.snapshots[c])
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
