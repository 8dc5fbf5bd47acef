//! Core data model for FB forms.
//!
//! A form is an ordered list of `FieldDefinition`s. The order is both the
//! render order and the submission order. Every field carries the full set of
//! optional attributes regardless of its kind; consumers consult the kind's
//! capability methods (`uses_placeholder`, `uses_options`, ...) and ignore
//! whatever does not apply. Switching a field's kind therefore never loses
//! previously entered values.

use crate::id::FieldId;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

/// Slider lower bound when `min` is unset.
pub const DEFAULT_MIN: f64 = 0.0;
/// Slider upper bound when `max` is unset.
pub const DEFAULT_MAX: f64 = 100.0;
/// Slider step when `step` is unset.
pub const DEFAULT_STEP: f64 = 1.0;

// ─── Field kinds ─────────────────────────────────────────────────────────

/// The closed set of field types a form can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FieldKind {
    #[default]
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "textarea")]
    MultilineText,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "select")]
    SingleSelect,
    #[serde(rename = "switch")]
    Toggle,
    #[serde(rename = "checkbox")]
    Checkbox,
    #[serde(rename = "radio")]
    RadioGroup,
    #[serde(rename = "slider")]
    RangeSlider,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "file")]
    File,
    #[serde(rename = "color")]
    Color,
}

impl FieldKind {
    /// All kinds, in the order the kind picker lists them.
    pub const ALL: [FieldKind; 11] = [
        FieldKind::Text,
        FieldKind::MultilineText,
        FieldKind::Number,
        FieldKind::SingleSelect,
        FieldKind::Toggle,
        FieldKind::Checkbox,
        FieldKind::RadioGroup,
        FieldKind::RangeSlider,
        FieldKind::Date,
        FieldKind::File,
        FieldKind::Color,
    ];

    /// Wire name, shared by the JSON encoding and the JS bridge.
    pub const fn name(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::MultilineText => "textarea",
            FieldKind::Number => "number",
            FieldKind::SingleSelect => "select",
            FieldKind::Toggle => "switch",
            FieldKind::Checkbox => "checkbox",
            FieldKind::RadioGroup => "radio",
            FieldKind::RangeSlider => "slider",
            FieldKind::Date => "date",
            FieldKind::File => "file",
            FieldKind::Color => "color",
        }
    }

    /// Parse a wire name. Returns `None` for unknown kinds.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Human-readable name for the kind picker.
    pub const fn display_name(self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::MultilineText => "Textarea",
            FieldKind::Number => "Number",
            FieldKind::SingleSelect => "Select",
            FieldKind::Toggle => "Switch",
            FieldKind::Checkbox => "Checkbox",
            FieldKind::RadioGroup => "Radio",
            FieldKind::RangeSlider => "Slider",
            FieldKind::Date => "Date",
            FieldKind::File => "File Upload",
            FieldKind::Color => "Color Picker",
        }
    }

    pub const fn uses_placeholder(self) -> bool {
        matches!(
            self,
            FieldKind::Text
                | FieldKind::MultilineText
                | FieldKind::Number
                | FieldKind::SingleSelect
                | FieldKind::File
                | FieldKind::Color
        )
    }

    pub const fn uses_options(self) -> bool {
        matches!(self, FieldKind::SingleSelect | FieldKind::RadioGroup)
    }

    /// Only sliders read `min` / `max` / `step`.
    pub const fn uses_range(self) -> bool {
        matches!(self, FieldKind::RangeSlider)
    }

    pub const fn uses_accept(self) -> bool {
        matches!(self, FieldKind::File)
    }
}

// ─── Field definition ────────────────────────────────────────────────────

/// Choice list for select and radio fields. Most forms have a handful.
pub type Options = SmallVec<[String; 4]>;

/// One form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub options: Options,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
}

impl FieldDefinition {
    /// A field of `kind` with the given label and every optional attribute unset.
    pub fn new(id: FieldId, kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            placeholder: None,
            options: Options::new(),
            required: false,
            min: None,
            max: None,
            step: None,
            accept: None,
        }
    }

    pub fn effective_min(&self) -> f64 {
        self.min.unwrap_or(DEFAULT_MIN)
    }

    pub fn effective_max(&self) -> f64 {
        self.max.unwrap_or(DEFAULT_MAX)
    }

    pub fn effective_step(&self) -> f64 {
        self.step.unwrap_or(DEFAULT_STEP)
    }

    /// Placeholder text if this kind shows one, `""` when unset.
    pub fn placeholder_text(&self) -> Option<&str> {
        self.kind
            .uses_placeholder()
            .then(|| self.placeholder.as_deref().unwrap_or(""))
    }

    /// Options if this kind shows them.
    pub fn active_options(&self) -> &[String] {
        if self.kind.uses_options() {
            &self.options
        } else {
            &[]
        }
    }

    /// Accepted file patterns if this kind uses them, `""` when unset.
    pub fn accept_text(&self) -> Option<&str> {
        self.kind
            .uses_accept()
            .then(|| self.accept.as_deref().unwrap_or(""))
    }
}

// ─── Form state ──────────────────────────────────────────────────────────

/// An immutable, cheaply clonable snapshot of the ordered field list.
///
/// Mutating operations never touch an existing `FormState`; they build a new
/// one. Holding on to old states (as undo history does) is always safe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState(Arc<[FieldDefinition]>);

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.0
    }

    pub fn get(&self, id: FieldId) -> Option<&FieldDefinition> {
        self.0.iter().find(|f| f.id == id)
    }

    pub fn position(&self, id: FieldId) -> Option<usize> {
        self.0.iter().position(|f| f.id == id)
    }

    pub fn contains(&self, id: FieldId) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> Vec<FieldId> {
        self.0.iter().map(|f| f.id).collect()
    }

    /// True when both values share the same backing allocation, i.e. one
    /// was produced from the other by an operation that changed nothing.
    pub fn ptr_eq(&self, other: &FormState) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for FormState {
    type Target = [FieldDefinition];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A field list was rejected because two entries share an ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate field id \"{0}\"")]
pub struct DuplicateFieldId(pub FieldId);

impl FormState {
    /// Build a state from fields the crate already knows to have distinct IDs.
    pub(crate) fn from_unique(fields: Vec<FieldDefinition>) -> Self {
        debug_assert!(first_duplicate(&fields).is_none());
        FormState(fields.into())
    }
}

fn first_duplicate(fields: &[FieldDefinition]) -> Option<FieldId> {
    let mut seen = HashSet::with_capacity(fields.len());
    fields.iter().map(|f| f.id).find(|id| !seen.insert(*id))
}

impl TryFrom<Vec<FieldDefinition>> for FormState {
    type Error = DuplicateFieldId;

    fn try_from(fields: Vec<FieldDefinition>) -> Result<Self, Self::Error> {
        match first_duplicate(&fields) {
            Some(id) => Err(DuplicateFieldId(id)),
            None => Ok(FormState(fields.into())),
        }
    }
}

impl<'a> IntoIterator for &'a FormState {
    type Item = &'a FieldDefinition;
    type IntoIter = std::slice::Iter<'a, FieldDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for FormState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for FormState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Vec::<FieldDefinition>::deserialize(deserializer)?;
        FormState::try_from(fields).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_roundtrip() {
        for kind in FieldKind::ALL {
            assert_eq!(FieldKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(FieldKind::from_name("richtext"), None);
    }

    #[test]
    fn capability_matrix() {
        let placeholder: Vec<_> = FieldKind::ALL
            .into_iter()
            .filter(|k| k.uses_placeholder())
            .collect();
        assert_eq!(
            placeholder,
            vec![
                FieldKind::Text,
                FieldKind::MultilineText,
                FieldKind::Number,
                FieldKind::SingleSelect,
                FieldKind::File,
                FieldKind::Color,
            ]
        );
        assert!(FieldKind::RadioGroup.uses_options());
        assert!(!FieldKind::Checkbox.uses_options());
        assert!(FieldKind::RangeSlider.uses_range());
        assert!(FieldKind::File.uses_accept());
        assert!(!FieldKind::Text.uses_accept());
    }

    #[test]
    fn irrelevant_attributes_are_ignored_not_cleared() {
        let mut field = FieldDefinition::new(FieldId::intern("fav"), FieldKind::SingleSelect, "Fav");
        field.options = Options::from_vec(vec!["a".into(), "b".into()]);
        field.kind = FieldKind::Toggle;
        assert!(field.active_options().is_empty());
        assert_eq!(field.options.len(), 2);
        field.kind = FieldKind::RadioGroup;
        assert_eq!(field.active_options(), ["a", "b"]);
    }

    #[test]
    fn slider_defaults() {
        let field = FieldDefinition::new(FieldId::intern("vol"), FieldKind::RangeSlider, "Volume");
        assert_eq!(field.effective_min(), 0.0);
        assert_eq!(field.effective_max(), 100.0);
        assert_eq!(field.effective_step(), 1.0);
    }

    #[test]
    fn form_state_clone_shares_storage() {
        let state = FormState::from_unique(vec![FieldDefinition::new(
            FieldId::intern("a"),
            FieldKind::Text,
            "A",
        )]);
        let copy = state.clone();
        assert!(state.ptr_eq(&copy));
        assert_eq!(state.position(FieldId::intern("a")), Some(0));
        assert!(!state.contains(FieldId::intern("zzz_missing")));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let a = FieldDefinition::new(FieldId::intern("dup"), FieldKind::Text, "A");
        let b = FieldDefinition::new(FieldId::intern("dup"), FieldKind::Number, "B");
        assert_eq!(
            FormState::try_from(vec![a.clone(), b]),
            Err(DuplicateFieldId(FieldId::intern("dup")))
        );
        assert_eq!(FormState::try_from(vec![a]).map(|s| s.len()), Ok(1));
    }

    #[test]
    fn deserializing_repeated_id_fails() {
        let json = r#"[
            {"id":"x","type":"text","label":"A","required":false},
            {"id":"x","type":"text","label":"B","required":false}
        ]"#;
        let err = serde_json::from_str::<FormState>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate field id \"x\""), "{err}");
    }
}
