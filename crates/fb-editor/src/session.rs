//! Form session: store, history and editor for one designer.
//!
//! The session is the only place that mutates the store. Every mutating
//! operation follows the same sequence:
//!
//! 1. produce the new `FormState` through the store;
//! 2. if anything changed, call `record_snapshot` with it.
//!
//! Undo and redo restore snapshots through the store *without* recording,
//! so moving through history never grows it.

use crate::field_editor::{CommitKind, FieldEditor, ValidationError};
use crate::history::History;
use crate::notice::Notice;
use fb_core::generator::{GeneratorConfig, generate_with};
use fb_core::lint::{LintDiagnostic, lint_form};
use fb_core::persist::{self, PersistError};
use fb_core::reorder::step_target;
use fb_core::{FieldId, FieldStore, FormState};

// ─── Config ───────────────────────────────────────────────────────────────

/// Configuration for a `FormSession`.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Maximum undo snapshots kept. Default: **unbounded**.
    pub history_limit: Option<usize>,
    /// Passed to the code generator.
    pub generator: GeneratorConfig,
}

// ─── Session ──────────────────────────────────────────────────────────────

pub struct FormSession {
    store: FieldStore,
    history: History,
    editor: FieldEditor,
    config: SessionConfig,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl FormSession {
    pub fn new(config: SessionConfig) -> Self {
        let history = match config.history_limit {
            Some(max) => History::with_limit(max),
            None => History::new(),
        };
        Self {
            store: FieldStore::new(),
            history,
            editor: FieldEditor::new(),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn fields(&self) -> &FormState {
        self.store.current_fields()
    }

    pub fn editor(&self) -> &FieldEditor {
        &self.editor
    }

    /// Draft setters live on the editor; committing goes through the session.
    pub fn editor_mut(&mut self) -> &mut FieldEditor {
        &mut self.editor
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Commit the editor draft as a new or updated field.
    pub fn commit_draft(&mut self) -> Result<Notice, ValidationError> {
        let committed = self.editor.commit(&mut self.store)?;
        self.record_snapshot(committed.state);
        Ok(match committed.kind {
            CommitKind::Added => Notice::field_added(&committed.label),
            CommitKind::Updated => Notice::field_updated(&committed.label),
        })
    }

    /// Load a field into the editor. `false` if there is no such field.
    pub fn start_edit(&mut self, id: FieldId) -> bool {
        self.editor.start_edit(&self.store, id)
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
    }

    /// Delete a field. `None` when the ID is not in the form.
    pub fn remove(&mut self, id: FieldId) -> Option<Notice> {
        let before = self.store.current_fields().clone();
        let after = self.store.remove(id);
        if after.ptr_eq(&before) {
            return None;
        }
        self.record_snapshot(after);
        Some(Notice::field_deleted())
    }

    /// Drag-and-drop move of `from` onto `to`'s slot. Returns whether the
    /// order changed.
    pub fn reorder(&mut self, from: FieldId, to: FieldId) -> bool {
        let before = self.store.current_fields().clone();
        let after = self.store.reorder(from, to);
        if after.ptr_eq(&before) {
            return false;
        }
        self.record_snapshot(after);
        true
    }

    /// Keyboard move of `id` by `offset` slots (negative = up).
    pub fn move_field(&mut self, id: FieldId, offset: isize) -> bool {
        match step_target(self.store.current_fields(), id, offset) {
            Some(target) => self.reorder(id, target),
            None => false,
        }
    }

    fn record_snapshot(&mut self, state: FormState) {
        self.history.record(state);
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Restore the previous snapshot. `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(state) => {
                self.store.restore(state);
                true
            }
            None => {
                log::debug!("session: nothing to undo");
                false
            }
        }
    }

    /// Restore the next snapshot. `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(state) => {
                self.store.restore(state);
                true
            }
            None => {
                log::debug!("session: nothing to redo");
                false
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Generated component source for the current fields.
    pub fn generate(&self) -> String {
        generate_with(self.store.current_fields(), &self.config.generator)
    }

    pub fn lint(&self) -> Vec<LintDiagnostic> {
        lint_form(self.store.current_fields())
    }

    /// "Save Form": the current fields as pretty JSON, plus the notice to show.
    pub fn save_json(&self) -> Result<(String, Notice), PersistError> {
        let json = persist::to_json_pretty(self.store.current_fields())?;
        log::debug!("session: saved {} fields", self.store.current_fields().len());
        Ok((json, Notice::form_saved()))
    }

    /// Compact MessagePack snapshot of the current fields.
    pub fn save_msgpack(&self) -> Result<Vec<u8>, PersistError> {
        persist::to_msgpack(self.store.current_fields())
    }
}
