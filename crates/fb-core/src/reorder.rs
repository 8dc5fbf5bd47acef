//! Reorder engine: drag-and-drop moves over the field list.
//!
//! Moves are expressed purely in terms of field IDs. Resolving pointer
//! positions to a target field is the caller's job.

use crate::id::FieldId;
use crate::model::FormState;

/// Move the field `from` into the slot currently held by `to`.
///
/// Returns `fields` itself (same allocation) when `from == to` or either ID
/// is absent. Otherwise this is a single-element move: every field between
/// the two slots shifts by one to close the gap.
#[must_use]
pub fn reorder(fields: &FormState, from: FieldId, to: FieldId) -> FormState {
    if from == to {
        return fields.clone();
    }
    let (Some(from_idx), Some(to_idx)) = (fields.position(from), fields.position(to)) else {
        return fields.clone();
    };
    log::trace!("reorder {from} [{from_idx}] -> {to} [{to_idx}]");
    FormState::from_unique(move_item(fields, from_idx, to_idx))
}

/// Remove the element at `from` and reinsert it at `to`.
/// Out-of-range indices leave the order untouched.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if from >= out.len() || to >= out.len() || from == to {
        return out;
    }
    let item = out.remove(from);
    out.insert(to, item);
    out
}

/// Resolve a keyboard move ("this field, `offset` slots down") to the ID of
/// the field whose slot it should take. Clamped to the list bounds; `None`
/// when the field is absent or already at the edge.
pub fn step_target(fields: &FormState, id: FieldId, offset: isize) -> Option<FieldId> {
    let idx = fields.position(id)?;
    let last = fields.len().checked_sub(1)?;
    let target = idx.saturating_add_signed(offset).min(last);
    (target != idx).then(|| fields[target].id)
}
