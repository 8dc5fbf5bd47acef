//! WASM bridge for FB — exposes the form designer session to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. Every method returns plain
//! values or JSON strings so the JS side never handles Rust types directly.

mod logger;

use fb_core::FieldId;
use fb_core::generator::generate_with;
use fb_core::model::{FieldKind, FormState};
use fb_editor::shortcuts::{ShortcutAction, ShortcutMap};
use fb_editor::{FormSession, Notice, SessionConfig};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

// ─── UI config ───────────────────────────────────────────────────────────

/// Light or dark presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Presentation state handed to the render layer. Never affects the form.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    pub theme: Theme,
    pub show_code: bool,
}

// ─── Designer ────────────────────────────────────────────────────────────

/// The main WASM-facing form designer.
///
/// Holds the session (fields, history, draft) and UI config. All interaction
/// from the page goes through this struct.
#[wasm_bindgen]
pub struct FormDesigner {
    session: FormSession,
    ui: UiConfig,
}

impl Default for FormDesigner {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl FormDesigner {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook_setup();
        logger::init(log::LevelFilter::Info);

        Self {
            session: FormSession::new(SessionConfig::default()),
            ui: UiConfig::default(),
        }
    }

    // ─── Draft API ───────────────────────────────────────────────────────

    /// Set the draft's kind by wire name. Returns `false` for unknown kinds.
    pub fn set_draft_kind(&mut self, kind: &str) -> bool {
        match FieldKind::from_name(kind) {
            Some(kind) => {
                self.session.editor_mut().set_kind(kind);
                true
            }
            None => false,
        }
    }

    pub fn set_draft_label(&mut self, label: &str) {
        self.session.editor_mut().set_label(label);
    }

    pub fn set_draft_placeholder(&mut self, placeholder: &str) {
        self.session.editor_mut().set_placeholder(placeholder);
    }

    /// Options as typed into the comma-separated input.
    pub fn set_draft_options(&mut self, csv: &str) {
        self.session.editor_mut().set_options_csv(csv);
    }

    pub fn set_draft_required(&mut self, required: bool) {
        self.session.editor_mut().set_required(required);
    }

    pub fn set_draft_min(&mut self, min: f64) {
        self.session.editor_mut().set_min(min);
    }

    pub fn set_draft_max(&mut self, max: f64) {
        self.session.editor_mut().set_max(max);
    }

    pub fn set_draft_step(&mut self, step: f64) {
        self.session.editor_mut().set_step(step);
    }

    pub fn set_draft_accept(&mut self, accept: &str) {
        self.session.editor_mut().set_accept(accept);
    }

    /// The draft as JSON, for populating the editor panel.
    pub fn draft_json(&self) -> String {
        to_json(self.session.editor().draft(), "{}")
    }

    /// ID of the field being edited, or `""` when adding a new one.
    pub fn editing_id(&self) -> String {
        self.session
            .editor()
            .editing_id()
            .map(|id| id.as_str().to_string())
            .unwrap_or_default()
    }

    /// Commit the draft. Returns `{"ok":true,"notice":{...}}` or
    /// `{"ok":false,"error":"...","notice":{...}}`.
    pub fn commit_draft(&mut self) -> String {
        self.commit_outcome().to_string()
    }

    /// Load a field into the editor. Returns `true` if the field exists.
    pub fn start_edit(&mut self, field_id: &str) -> bool {
        match FieldId::lookup(field_id) {
            Some(id) => self.session.start_edit(id),
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.session.cancel_edit();
    }

    // ─── Field list API ──────────────────────────────────────────────────

    /// Current fields as a JSON array.
    pub fn fields_json(&self) -> String {
        to_json(self.session.fields(), "[]")
    }

    /// Delete a field. Returns `{"ok":true,"notice":{...}}` or
    /// `{"ok":false}` if there is no such field.
    pub fn remove_field(&mut self, field_id: &str) -> String {
        match FieldId::lookup(field_id).and_then(|id| self.session.remove(id)) {
            Some(notice) => ok_with_notice(&notice).to_string(),
            None => r#"{"ok":false}"#.to_string(),
        }
    }

    /// Drop `from_id` onto `to_id`'s slot. Returns `true` if the order changed.
    pub fn reorder(&mut self, from_id: &str, to_id: &str) -> bool {
        match (FieldId::lookup(from_id), FieldId::lookup(to_id)) {
            (Some(from), Some(to)) => self.session.reorder(from, to),
            _ => false,
        }
    }

    /// Move a field `offset` slots (negative = up). Returns `true` if moved.
    pub fn move_field(&mut self, field_id: &str, offset: i32) -> bool {
        match FieldId::lookup(field_id) {
            Some(id) => self.session.move_field(id, offset as isize),
            None => false,
        }
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Undo the last change.
    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    /// Redo the last undone change.
    pub fn redo(&mut self) -> bool {
        self.session.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.session.can_redo()
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Generated component source.
    pub fn generate_code(&self) -> String {
        self.session.generate()
    }

    /// Save: returns `{"ok":true,"json":"...","notice":{...}}`.
    pub fn save_form(&self) -> String {
        self.save_outcome().to_string()
    }

    /// MessagePack snapshot of the fields (a `Uint8Array` in JS). Empty on
    /// encoding failure.
    pub fn save_form_msgpack(&self) -> Vec<u8> {
        self.session.save_msgpack().unwrap_or_else(|e| {
            log::error!("msgpack snapshot failed: {e}");
            Vec::new()
        })
    }

    /// Notice for the host to show after it tried to copy the generated code.
    pub fn copy_notice_json(&self, copied: bool) -> String {
        let notice = if copied {
            Notice::code_copied()
        } else {
            Notice::copy_failed()
        };
        to_json(&notice, "{}")
    }

    /// Lint diagnostics as a JSON array.
    pub fn lint_json(&self) -> String {
        to_json(&self.session.lint(), "[]")
    }

    // ─── UI config ───────────────────────────────────────────────────────

    pub fn set_theme(&mut self, is_dark: bool) {
        self.ui.theme = if is_dark { Theme::Dark } else { Theme::Light };
    }

    pub fn toggle_code(&mut self) -> bool {
        self.ui.show_code = !self.ui.show_code;
        self.ui.show_code
    }

    pub fn ui_config_json(&self) -> String {
        to_json(&self.ui, "{}")
    }

    // ─── Keyboard Shortcut API ───────────────────────────────────────────

    /// Handle a keyboard event. `focused_id` is the field row with focus
    /// (`""` for none). Returns a JSON string:
    /// `{"changed":bool, "action":"<action_name>"}`. Commit and save also
    /// carry their outcome (`"ok"`, `"notice"`, and `"error"` or `"json"`),
    /// the same payload `commit_draft` / `save_form` return.
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
        focused_id: &str,
    ) -> String {
        let action = match ShortcutMap::resolve(key, ctrl, shift, alt, meta) {
            Some(a) => a,
            None => return r#"{"changed":false,"action":"none"}"#.to_string(),
        };
        let focused = FieldId::lookup(focused_id);
        let (changed, outcome) = self.dispatch_action(action, focused);
        let mut result = serde_json::json!({ "changed": changed, "action": action.name() });
        if let (Some(map), Some(Value::Object(extra))) = (result.as_object_mut(), outcome) {
            map.extend(extra);
        }
        result.to_string()
    }
}

impl FormDesigner {
    /// Run a shortcut action. Returns whether the field list changed, plus
    /// the outcome payload for actions that produce one.
    fn dispatch_action(
        &mut self,
        action: ShortcutAction,
        focused: Option<FieldId>,
    ) -> (bool, Option<Value>) {
        let changed = match action {
            ShortcutAction::Undo => self.session.undo(),
            ShortcutAction::Redo => self.session.redo(),
            ShortcutAction::CommitDraft => {
                let outcome = self.commit_outcome();
                let ok = outcome["ok"] == true;
                return (ok, Some(outcome));
            }
            ShortcutAction::CancelEdit => {
                self.session.cancel_edit();
                false
            }
            ShortcutAction::DeleteField => {
                focused.is_some_and(|id| self.session.remove(id).is_some())
            }
            ShortcutAction::MoveFieldUp => {
                focused.is_some_and(|id| self.session.move_field(id, -1))
            }
            ShortcutAction::MoveFieldDown => {
                focused.is_some_and(|id| self.session.move_field(id, 1))
            }
            ShortcutAction::ToggleCode => {
                self.toggle_code();
                false
            }
            ShortcutAction::SaveForm => return (false, Some(self.save_outcome())),
        };
        (changed, None)
    }

    fn commit_outcome(&mut self) -> Value {
        match self.session.commit_draft() {
            Ok(notice) => ok_with_notice(&notice),
            Err(e) => {
                log::warn!("commit rejected: {e}");
                error_with_notice(&e.to_string(), &Notice::invalid(e.to_string()))
            }
        }
    }

    fn save_outcome(&self) -> Value {
        match self.session.save_json() {
            Ok((json, notice)) => {
                log::info!("{json}");
                serde_json::json!({ "ok": true, "json": json, "notice": notice })
            }
            Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }),
        }
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────

fn to_json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| fallback.to_string())
}

fn ok_with_notice(notice: &Notice) -> Value {
    serde_json::json!({ "ok": true, "notice": notice })
}

fn error_with_notice(error: &str, notice: &Notice) -> Value {
    serde_json::json!({ "ok": false, "error": error, "notice": notice })
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("FB WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone functions (no designer needed) ───────────────────────────

/// The kind catalogue for the render layer:
/// `[{"kind":"text","label":"Text","placeholder":true,...}, ...]`.
#[wasm_bindgen]
pub fn field_kinds() -> String {
    let kinds: Vec<_> = FieldKind::ALL
        .into_iter()
        .map(|k| {
            serde_json::json!({
                "kind": k.name(),
                "label": k.display_name(),
                "placeholder": k.uses_placeholder(),
                "options": k.uses_options(),
                "range": k.uses_range(),
                "accept": k.uses_accept(),
            })
        })
        .collect();
    serde_json::Value::Array(kinds).to_string()
}

/// Generate component source from a JSON field array.
/// Returns JSON `{"ok":true,"code":"..."}` or `{"ok":false,"error":"..."}`.
/// Arrays that repeat a field ID are rejected. Each ID read here is interned
/// for the life of the module (see `FieldId`'s `Deserialize`).
#[wasm_bindgen]
pub fn generate_from_json(fields_json: &str) -> String {
    match serde_json::from_str::<FormState>(fields_json) {
        Ok(state) => {
            let code = generate_with(&state, &Default::default());
            serde_json::json!({ "ok": true, "code": code }).to_string()
        }
        Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }).to_string(),
    }
}
