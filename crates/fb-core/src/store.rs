//! Field store: the single source of truth for the ordered field list.
//!
//! Every mutator returns the new `FormState`. Previously returned states are
//! never modified, so callers may keep them around (undo history does).
//! Operations that change nothing hand back the current state itself, which
//! callers can detect with `FormState::ptr_eq`.

use crate::id::FieldId;
use crate::model::{FieldDefinition, FormState};
use crate::reorder;

#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    state: FormState,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing field list.
    pub fn from_state(state: FormState) -> Self {
        Self { state }
    }

    pub fn current_fields(&self) -> &FormState {
        &self.state
    }

    pub fn get(&self, id: FieldId) -> Option<&FieldDefinition> {
        self.state.get(id)
    }

    /// Append `field`, or replace the field with the same ID in its slot.
    pub fn commit(&mut self, field: FieldDefinition) -> FormState {
        let next: FormState = match self.state.position(field.id) {
            Some(idx) => {
                log::debug!("store: replace {} at {idx}", field.id);
                let mut fields = self.state.to_vec();
                fields[idx] = field;
                FormState::from_unique(fields)
            }
            None => {
                log::debug!("store: append {}", field.id);
                let mut fields = self.state.to_vec();
                fields.push(field);
                FormState::from_unique(fields)
            }
        };
        self.replace(next)
    }

    /// Drop the field with `id`. Absent IDs are a no-op.
    pub fn remove(&mut self, id: FieldId) -> FormState {
        if !self.state.contains(id) {
            return self.state.clone();
        }
        log::debug!("store: remove {id}");
        let next = FormState::from_unique(
            self.state.iter().filter(|f| f.id != id).cloned().collect(),
        );
        self.replace(next)
    }

    /// Move `from` into `to`'s slot. See [`reorder::reorder`].
    pub fn reorder(&mut self, from: FieldId, to: FieldId) -> FormState {
        let next = reorder::reorder(&self.state, from, to);
        self.replace(next)
    }

    /// Swap in a previously recorded state wholesale (undo / redo).
    pub fn restore(&mut self, state: FormState) -> FormState {
        self.replace(state)
    }

    fn replace(&mut self, next: FormState) -> FormState {
        self.state = next;
        self.state.clone()
    }
}
