//! Lint diagnostics for form definitions.
//!
//! Reports structural issues in the field list without modifying it. These
//! concern the form being designed, never data submitted through it.

use crate::id::FieldId;
use crate::model::FieldDefinition;
use std::collections::HashSet;

// ─── Diagnostic types ────────────────────────────────────────────────────

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    /// Should be fixed — the generated form will misbehave.
    Warning,
    /// Informational — likely confusing for form users.
    Info,
}

/// A single lint diagnostic for a field.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LintDiagnostic {
    /// The field this diagnostic refers to.
    pub field_id: FieldId,
    /// Human-readable message.
    pub message: String,
    pub severity: LintSeverity,
    /// Short rule identifier (e.g. "empty-options", "slider-range").
    pub rule: &'static str,
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Run all lint rules over the field list and return diagnostics in field order.
#[must_use]
pub fn lint_form(fields: &[FieldDefinition]) -> Vec<LintDiagnostic> {
    let mut diags = Vec::new();
    for field in fields {
        lint_options(field, &mut diags);
        lint_slider(field, &mut diags);
    }
    lint_duplicate_labels(fields, &mut diags);
    diags
}

// ─── Rules ────────────────────────────────────────────────────────────────

fn lint_options(field: &FieldDefinition, diags: &mut Vec<LintDiagnostic>) {
    if !field.kind.uses_options() {
        return;
    }
    if field.options.is_empty() {
        diags.push(LintDiagnostic {
            field_id: field.id,
            message: format!("`{}` has no options to choose from.", field.label),
            severity: LintSeverity::Warning,
            rule: "empty-options",
        });
        return;
    }

    let mut seen = HashSet::new();
    for option in &field.options {
        if option.trim().is_empty() {
            diags.push(LintDiagnostic {
                field_id: field.id,
                message: format!("`{}` has a blank option; it will be left out.", field.label),
                severity: LintSeverity::Info,
                rule: "blank-option",
            });
        } else if !seen.insert(option.as_str()) {
            diags.push(LintDiagnostic {
                field_id: field.id,
                message: format!("`{}` lists option \"{option}\" more than once.", field.label),
                severity: LintSeverity::Warning,
                rule: "duplicate-option",
            });
        }
    }
}

fn lint_slider(field: &FieldDefinition, diags: &mut Vec<LintDiagnostic>) {
    if !field.kind.uses_range() {
        return;
    }
    let (min, max, step) = (
        field.effective_min(),
        field.effective_max(),
        field.effective_step(),
    );
    if min >= max {
        diags.push(LintDiagnostic {
            field_id: field.id,
            message: format!("`{}` has min {min} not below max {max}.", field.label),
            severity: LintSeverity::Warning,
            rule: "slider-range",
        });
    }
    if step <= 0.0 {
        diags.push(LintDiagnostic {
            field_id: field.id,
            message: format!("`{}` has non-positive step {step}.", field.label),
            severity: LintSeverity::Warning,
            rule: "slider-step",
        });
    }
}

/// Flag every field after the first that repeats an earlier label.
fn lint_duplicate_labels(fields: &[FieldDefinition], diags: &mut Vec<LintDiagnostic>) {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.label.trim()) {
            diags.push(LintDiagnostic {
                field_id: field.id,
                message: format!("Label `{}` is used by more than one field.", field.label),
                severity: LintSeverity::Info,
                rule: "duplicate-label",
            });
        }
    }
}
