//! Field editor: the draft behind the "Add / Edit Field" panel.
//!
//! The draft holds every attribute a field can have. Kind-specific attributes
//! survive kind changes; only the generator and renderers decide what a kind
//! actually uses.

use fb_core::model::{FieldDefinition, FieldKind, Options};
use fb_core::{FieldId, FieldStore, FormState};
use serde::Serialize;

/// Rejection raised by [`FieldEditor::commit`]. The draft is left as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("a field needs a label")]
    EmptyLabel,
}

/// Field properties being edited, everything except the ID.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FieldDraft {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    pub placeholder: Option<String>,
    pub options: Options,
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub accept: Option<String>,
}

impl FieldDraft {
    fn from_field(field: &FieldDefinition) -> Self {
        Self {
            kind: field.kind,
            label: field.label.clone(),
            placeholder: field.placeholder.clone(),
            options: field.options.clone(),
            required: field.required,
            min: field.min,
            max: field.max,
            step: field.step,
            accept: field.accept.clone(),
        }
    }

    fn into_field(self, id: FieldId) -> FieldDefinition {
        FieldDefinition {
            id,
            kind: self.kind,
            label: self.label,
            placeholder: self.placeholder,
            options: self.options,
            required: self.required,
            min: self.min,
            max: self.max,
            step: self.step,
            accept: self.accept,
        }
    }
}

/// Whether a commit created a field or replaced one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    Added,
    Updated,
}

/// Result of a successful [`FieldEditor::commit`].
#[derive(Debug, Clone, PartialEq)]
pub struct Committed {
    pub id: FieldId,
    pub kind: CommitKind,
    pub label: String,
    /// Store state after the commit.
    pub state: FormState,
}

#[derive(Debug, Clone, Default)]
pub struct FieldEditor {
    draft: FieldDraft,
    editing_id: Option<FieldId>,
}

impl FieldEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &FieldDraft {
        &self.draft
    }

    /// The field being edited, `None` when the draft will create a new field.
    pub fn editing_id(&self) -> Option<FieldId> {
        self.editing_id
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    // ─── Draft setters ───────────────────────────────────────────────────

    /// Change the kind. Other attributes are kept for when the kind changes back.
    pub fn set_kind(&mut self, kind: FieldKind) {
        self.draft.kind = kind;
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.draft.label = label.into();
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.draft.placeholder = Some(placeholder.into());
    }

    pub fn set_options<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.options = options.into_iter().map(Into::into).collect();
    }

    /// Parse the "Option 1, Option 2" text input: split on commas, trim each.
    /// An empty input clears the options.
    pub fn set_options_csv(&mut self, csv: &str) {
        if csv.trim().is_empty() {
            self.draft.options.clear();
            return;
        }
        self.set_options(csv.split(',').map(str::trim));
    }

    pub fn set_required(&mut self, required: bool) {
        self.draft.required = required;
    }

    pub fn set_min(&mut self, min: f64) {
        self.draft.min = finite(min);
    }

    pub fn set_max(&mut self, max: f64) {
        self.draft.max = finite(max);
    }

    pub fn set_step(&mut self, step: f64) {
        self.draft.step = finite(step);
    }

    pub fn set_accept(&mut self, accept: impl Into<String>) {
        self.draft.accept = Some(accept.into());
    }

    // ─── Lifecycle ───────────────────────────────────────────────────────

    /// Load the field `id` into the draft. Returns `false` (and changes
    /// nothing) if the store has no such field.
    pub fn start_edit(&mut self, store: &FieldStore, id: FieldId) -> bool {
        let Some(field) = store.get(id) else {
            return false;
        };
        log::debug!("editor: editing {id}");
        self.draft = FieldDraft::from_field(field);
        self.editing_id = Some(id);
        true
    }

    /// Drop the draft and any edit in progress.
    pub fn cancel(&mut self) {
        self.draft = FieldDraft::default();
        self.editing_id = None;
    }

    /// Validate the draft and write it into `store`.
    ///
    /// An edit keeps the original ID. If the edited field has since left the
    /// store (deleted, or undone away) the draft is added as a new field with
    /// a fresh ID instead, so a removed ID is never brought back.
    pub fn commit(&mut self, store: &mut FieldStore) -> Result<Committed, ValidationError> {
        if self.draft.label.trim().is_empty() {
            return Err(ValidationError::EmptyLabel);
        }

        let (id, kind) = match self.editing_id {
            Some(id) if store.current_fields().contains(id) => (id, CommitKind::Updated),
            _ => (FieldId::fresh(), CommitKind::Added),
        };

        let draft = std::mem::take(&mut self.draft);
        self.editing_id = None;
        let label = draft.label.clone();
        let state = store.commit(draft.into_field(id));
        log::debug!("editor: {kind:?} {id}");

        Ok(Committed {
            id,
            kind,
            label,
            state,
        })
    }
}

fn finite(n: f64) -> Option<f64> {
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_label_is_rejected_and_draft_kept() {
        let mut store = FieldStore::new();
        let mut editor = FieldEditor::new();
        editor.set_kind(FieldKind::Number);
        editor.set_placeholder("42");
        assert_eq!(editor.commit(&mut store), Err(ValidationError::EmptyLabel));
        editor.set_label("   ");
        assert_eq!(editor.commit(&mut store), Err(ValidationError::EmptyLabel));
        assert!(store.current_fields().is_empty());
        assert_eq!(editor.draft().kind, FieldKind::Number);
        assert_eq!(editor.draft().placeholder.as_deref(), Some("42"));
    }

    #[test]
    fn commit_new_assigns_fresh_id_and_resets() {
        let mut store = FieldStore::new();
        let mut editor = FieldEditor::new();
        editor.set_label("Email");
        editor.set_required(true);
        let committed = editor.commit(&mut store).unwrap();
        assert_eq!(committed.kind, CommitKind::Added);
        assert_eq!(committed.state.len(), 1);
        assert_eq!(committed.state[0].id, committed.id);
        assert!(committed.state[0].required);
        assert_eq!(editor.draft(), &FieldDraft::default());
        assert!(!editor.is_editing());
    }

    #[test]
    fn edit_keeps_id_and_slot() {
        let mut store = FieldStore::new();
        let mut editor = FieldEditor::new();
        editor.set_label("A");
        let a = editor.commit(&mut store).unwrap().id;
        editor.set_label("B");
        let b = editor.commit(&mut store).unwrap().id;

        assert!(editor.start_edit(&store, a));
        assert_eq!(editor.draft().label, "A");
        editor.set_label("A2");
        let committed = editor.commit(&mut store).unwrap();
        assert_eq!(committed.kind, CommitKind::Updated);
        assert_eq!(committed.id, a);
        assert_eq!(store.current_fields().ids(), vec![a, b]);
        assert_eq!(store.current_fields()[0].label, "A2");
    }

    #[test]
    fn kind_change_keeps_unrelated_attributes() {
        let mut editor = FieldEditor::new();
        editor.set_kind(FieldKind::SingleSelect);
        editor.set_options_csv("Red, Green ,Blue");
        editor.set_kind(FieldKind::Text);
        editor.set_kind(FieldKind::RadioGroup);
        assert_eq!(editor.draft().options.as_slice(), ["Red", "Green", "Blue"]);
    }

    #[test]
    fn options_csv_edge_cases() {
        let mut editor = FieldEditor::new();
        editor.set_options_csv("a,,b,");
        assert_eq!(editor.draft().options.as_slice(), ["a", "", "b", ""]);
        editor.set_options_csv("  ");
        assert!(editor.draft().options.is_empty());
    }

    #[test]
    fn start_edit_missing_id_is_noop() {
        let store = FieldStore::new();
        let mut editor = FieldEditor::new();
        editor.set_label("keep");
        assert!(!editor.start_edit(&store, FieldId::fresh()));
        assert_eq!(editor.draft().label, "keep");
        assert!(!editor.is_editing());
    }

    #[test]
    fn edit_of_removed_field_adds_new() {
        let mut store = FieldStore::new();
        let mut editor = FieldEditor::new();
        editor.set_label("Gone");
        let id = editor.commit(&mut store).unwrap().id;
        editor.start_edit(&store, id);
        store.remove(id);
        let committed = editor.commit(&mut store).unwrap();
        assert_eq!(committed.kind, CommitKind::Added);
        assert_ne!(committed.id, id);
    }

    #[test]
    fn non_finite_bounds_are_unset() {
        let mut editor = FieldEditor::new();
        editor.set_min(f64::NAN);
        editor.set_max(f64::INFINITY);
        editor.set_step(0.5);
        assert_eq!(editor.draft().min, None);
        assert_eq!(editor.draft().max, None);
        assert_eq!(editor.draft().step, Some(0.5));
    }

    #[test]
    fn cancel_resets() {
        let mut store = FieldStore::new();
        let mut editor = FieldEditor::new();
        editor.set_label("X");
        let id = editor.commit(&mut store).unwrap().id;
        editor.start_edit(&store, id);
        editor.cancel();
        assert!(!editor.is_editing());
        assert_eq!(editor.draft().label, "");
    }
}
