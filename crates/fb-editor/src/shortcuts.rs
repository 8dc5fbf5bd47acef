//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s.
//! The shortcut map lives in Rust so it's shared across WASM and native.
//!
//! Field-level actions (delete, move) apply to whichever field row has
//! keyboard focus; the host passes that ID along with the action.

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── History ──
    Undo,
    Redo,

    // ── Editor ──
    CommitDraft,
    CancelEdit,

    // ── Focused field ──
    DeleteField,
    MoveFieldUp,
    MoveFieldDown,

    // ── Form ──
    SaveForm,
    ToggleCode,
}

impl ShortcutAction {
    /// Name reported back to JS.
    pub const fn name(self) -> &'static str {
        match self {
            ShortcutAction::Undo => "undo",
            ShortcutAction::Redo => "redo",
            ShortcutAction::CommitDraft => "commitDraft",
            ShortcutAction::CancelEdit => "cancelEdit",
            ShortcutAction::DeleteField => "deleteField",
            ShortcutAction::MoveFieldUp => "moveFieldUp",
            ShortcutAction::MoveFieldDown => "moveFieldDown",
            ShortcutAction::SaveForm => "saveForm",
            ShortcutAction::ToggleCode => "toggleCode",
        }
    }
}

/// Resolves key events into shortcut actions.
///
/// Uses platform-aware modifier detection: on macOS `meta` is ⌘,
/// on other platforms `ctrl` serves the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Delete"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        // ── Modifier combos first (most specific) ──
        if cmd && shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "s" | "S" => Some(ShortcutAction::SaveForm),
                "e" | "E" => Some(ShortcutAction::ToggleCode),
                "Enter" => Some(ShortcutAction::CommitDraft),
                _ => None,
            };
        }

        if alt {
            return match key {
                "ArrowUp" => Some(ShortcutAction::MoveFieldUp),
                "ArrowDown" => Some(ShortcutAction::MoveFieldDown),
                _ => None,
            };
        }

        if shift {
            return None;
        }

        // ── Single keys (no modifiers) ──
        match key {
            "Escape" => Some(ShortcutAction::CancelEdit),
            "Delete" | "Backspace" => Some(ShortcutAction::DeleteField),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_redo_with_ctrl_or_meta() {
        assert_eq!(
            ShortcutMap::resolve("z", true, false, false, false),
            Some(ShortcutAction::Undo)
        );
        assert_eq!(
            ShortcutMap::resolve("z", false, false, false, true),
            Some(ShortcutAction::Undo)
        );
        assert_eq!(
            ShortcutMap::resolve("Z", false, true, false, true),
            Some(ShortcutAction::Redo)
        );
        assert_eq!(
            ShortcutMap::resolve("y", true, false, false, false),
            Some(ShortcutAction::Redo)
        );
    }

    #[test]
    fn plain_z_is_unbound() {
        assert_eq!(ShortcutMap::resolve("z", false, false, false, false), None);
    }

    #[test]
    fn alt_arrows_move_field() {
        assert_eq!(
            ShortcutMap::resolve("ArrowUp", false, false, true, false),
            Some(ShortcutAction::MoveFieldUp)
        );
        assert_eq!(
            ShortcutMap::resolve("ArrowDown", false, false, true, false),
            Some(ShortcutAction::MoveFieldDown)
        );
        assert_eq!(ShortcutMap::resolve("ArrowDown", false, false, false, false), None);
    }

    #[test]
    fn editor_keys() {
        assert_eq!(
            ShortcutMap::resolve("Enter", true, false, false, false),
            Some(ShortcutAction::CommitDraft)
        );
        assert_eq!(
            ShortcutMap::resolve("Escape", false, false, false, false),
            Some(ShortcutAction::CancelEdit)
        );
        assert_eq!(
            ShortcutMap::resolve("Backspace", false, false, false, false),
            Some(ShortcutAction::DeleteField)
        );
        // Plain Enter is left to the focused input.
        assert_eq!(ShortcutMap::resolve("Enter", false, false, false, false), None);
    }

    #[test]
    fn action_names() {
        assert_eq!(ShortcutAction::SaveForm.name(), "saveForm");
        assert_eq!(ShortcutAction::ToggleCode.name(), "toggleCode");
    }
}
