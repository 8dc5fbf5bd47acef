//! Code generator: FormState → form component source (TSX).
//!
//! Output is a single self-contained React component built from the
//! `@/components/ui` primitives. Generation is a pure function of the field
//! list and the config: the same input always yields byte-identical text.

use crate::model::{FieldDefinition, FieldKind};
use std::fmt::Write;

// ─── Config ───────────────────────────────────────────────────────────────

/// Configuration for `generate_with`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Name of the exported component. Default: **GeneratedForm**.
    pub component_name: String,
    /// Card title shown above the form. Default: **Generated Form**.
    pub title: String,
    /// Submit button text. Default: **Submit**.
    pub submit_label: String,
    /// Module prefix for UI primitive imports. Default: **@/components/ui**.
    pub ui_import_root: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            component_name: "GeneratedForm".to_string(),
            title: "Generated Form".to_string(),
            submit_label: "Submit".to_string(),
            ui_import_root: "@/components/ui".to_string(),
        }
    }
}

/// Placeholder shown by an empty select trigger.
const SELECT_FALLBACK_PLACEHOLDER: &str = "Select an option";

/// `(module, exported names)` for the import header, in emission order.
const UI_IMPORTS: &[(&str, &str)] = &[
    ("button", "Button"),
    ("card", "Card, CardContent, CardFooter, CardHeader, CardTitle"),
    ("input", "Input"),
    ("label", "Label"),
    (
        "select",
        "Select, SelectContent, SelectItem, SelectTrigger, SelectValue",
    ),
    ("textarea", "Textarea"),
    ("switch", "Switch"),
    ("checkbox", "Checkbox"),
    ("radio-group", "RadioGroup, RadioGroupItem"),
    ("slider", "Slider"),
    ("date-picker", "DatePicker"),
];

/// Nesting depth of field blocks inside `<form>`.
const FIELD_DEPTH: usize = 5;

// ─── Public API ───────────────────────────────────────────────────────────

/// Generate component source with the default config.
#[must_use]
pub fn generate(fields: &[FieldDefinition]) -> String {
    generate_with(fields, &GeneratorConfig::default())
}

/// Generate component source for `fields` in order.
#[must_use]
pub fn generate_with(fields: &[FieldDefinition], config: &GeneratorConfig) -> String {
    let mut out = String::with_capacity(2048 + fields.len() * 256);

    emit_header(&mut out, config);
    for field in fields {
        log::trace!("generate {} ({})", field.id, field.kind.name());
        emit_field(&mut out, field);
    }
    emit_footer(&mut out, config);

    out
}

// ─── Header / footer ──────────────────────────────────────────────────────

fn emit_header(out: &mut String, config: &GeneratorConfig) {
    for (module, names) in UI_IMPORTS {
        let _ = writeln!(
            out,
            "import {{ {names} }} from \"{}/{module}\"",
            config.ui_import_root
        );
    }
    out.push('\n');

    let _ = writeln!(out, "export default function {}() {{", config.component_name);
    out.push_str("  const onSubmit = (event: React.FormEvent<HTMLFormElement>) => {\n");
    out.push_str("    event.preventDefault()\n");
    out.push_str("    // Handle form submission\n");
    out.push_str("  }\n");
    out.push('\n');
    out.push_str("  return (\n");
    out.push_str("    <Card className=\"w-full max-w-2xl mx-auto\">\n");
    out.push_str("      <CardHeader>\n");
    let _ = writeln!(
        out,
        "        <CardTitle>{}</CardTitle>",
        escape_text(&config.title)
    );
    out.push_str("      </CardHeader>\n");
    out.push_str("      <CardContent>\n");
    out.push_str("        <form onSubmit={onSubmit} className=\"space-y-4\">\n");
}

fn emit_footer(out: &mut String, config: &GeneratorConfig) {
    indent(out, FIELD_DEPTH);
    let _ = writeln!(
        out,
        "<Button type=\"submit\">{}</Button>",
        escape_text(&config.submit_label)
    );
    out.push_str("        </form>\n");
    out.push_str("      </CardContent>\n");
    out.push_str("    </Card>\n");
    out.push_str("  )\n");
    out.push_str("}\n");
}

// ─── Field blocks ─────────────────────────────────────────────────────────

fn emit_field(out: &mut String, field: &FieldDefinition) {
    let id = field.id.as_str();
    let depth = FIELD_DEPTH + 1;

    indent(out, FIELD_DEPTH);
    out.push_str("<div className=\"space-y-2\">\n");

    indent(out, depth);
    let _ = writeln!(
        out,
        "<Label htmlFor=\"{}\">{}{}</Label>",
        escape_attr(id),
        escape_text(&field.label),
        if field.required { " *" } else { "" }
    );

    match field.kind {
        FieldKind::Text | FieldKind::Number | FieldKind::File | FieldKind::Color => {
            let mut attrs = vec![
                attr("type", field.kind.name()),
                attr("id", id),
                attr("placeholder", field.placeholder_text().unwrap_or("")),
            ];
            if field.required {
                attrs.push("required".to_string());
            }
            if let Some(accept) = field.accept_text()
                && !accept.is_empty()
            {
                attrs.push(attr("accept", accept));
            }
            emit_self_closing(out, depth, "Input", &attrs);
        }
        FieldKind::MultilineText => {
            let mut attrs = vec![
                attr("id", id),
                attr("placeholder", field.placeholder_text().unwrap_or("")),
            ];
            if field.required {
                attrs.push("required".to_string());
            }
            emit_self_closing(out, depth, "Textarea", &attrs);
        }
        FieldKind::SingleSelect => emit_select(out, field, depth),
        FieldKind::Toggle => emit_simple_control(out, field, depth, "Switch"),
        FieldKind::Checkbox => emit_simple_control(out, field, depth, "Checkbox"),
        FieldKind::RadioGroup => emit_radio_group(out, field, depth),
        FieldKind::RangeSlider => {
            let attrs = [
                attr("id", id),
                format!("min={{{}}}", format_num(field.effective_min())),
                format!("max={{{}}}", format_num(field.effective_max())),
                format!("step={{{}}}", format_num(field.effective_step())),
            ];
            emit_self_closing(out, depth, "Slider", &attrs);
        }
        FieldKind::Date => {
            emit_self_closing(out, depth, "DatePicker", &[attr("id", id)]);
        }
    }

    indent(out, FIELD_DEPTH);
    out.push_str("</div>\n");
}

fn emit_simple_control(out: &mut String, field: &FieldDefinition, depth: usize, tag: &str) {
    let mut attrs = vec![attr("id", field.id.as_str())];
    if field.required {
        attrs.push("required".to_string());
    }
    emit_self_closing(out, depth, tag, &attrs);
}

fn emit_select(out: &mut String, field: &FieldDefinition, depth: usize) {
    let placeholder = match field.placeholder_text() {
        Some(p) if !p.is_empty() => p,
        _ => SELECT_FALLBACK_PLACEHOLDER,
    };

    indent(out, depth);
    out.push_str(if field.required {
        "<Select required>\n"
    } else {
        "<Select>\n"
    });
    indent(out, depth + 1);
    let _ = writeln!(out, "<SelectTrigger id=\"{}\">", escape_attr(field.id.as_str()));
    indent(out, depth + 2);
    let _ = writeln!(
        out,
        "<SelectValue placeholder=\"{}\" />",
        escape_attr(placeholder)
    );
    indent(out, depth + 1);
    out.push_str("</SelectTrigger>\n");
    indent(out, depth + 1);
    out.push_str("<SelectContent>\n");
    for option in emitted_options(field) {
        indent(out, depth + 2);
        let _ = writeln!(
            out,
            "<SelectItem value=\"{}\">{}</SelectItem>",
            escape_attr(option),
            escape_text(option)
        );
    }
    indent(out, depth + 1);
    out.push_str("</SelectContent>\n");
    indent(out, depth);
    out.push_str("</Select>\n");
}

fn emit_radio_group(out: &mut String, field: &FieldDefinition, depth: usize) {
    let id = field.id.as_str();
    let mut attrs = vec![attr("id", id)];
    if field.required {
        attrs.push("required".to_string());
    }

    indent(out, depth);
    let _ = writeln!(out, "<RadioGroup {}>", attrs.join(" "));
    for (i, option) in emitted_options(field).enumerate() {
        let item_id = format!("{id}-{i}");
        indent(out, depth + 1);
        out.push_str("<div className=\"flex items-center space-x-2\">\n");
        indent(out, depth + 2);
        let _ = writeln!(
            out,
            "<RadioGroupItem value=\"{}\" id=\"{}\" />",
            escape_attr(option),
            escape_attr(&item_id)
        );
        indent(out, depth + 2);
        let _ = writeln!(
            out,
            "<Label htmlFor=\"{}\">{}</Label>",
            escape_attr(&item_id),
            escape_text(option)
        );
        indent(out, depth + 1);
        out.push_str("</div>\n");
    }
    indent(out, depth);
    out.push_str("</RadioGroup>\n");
}

/// Options that make it into the output. Blank entries (e.g. from a trailing
/// comma) have no usable value and are skipped.
fn emitted_options(field: &FieldDefinition) -> impl Iterator<Item = &str> {
    field
        .active_options()
        .iter()
        .map(String::as_str)
        .filter(|o| !o.trim().is_empty())
}

// ─── Helpers ──────────────────────────────────────────────────────────────

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn emit_self_closing(out: &mut String, depth: usize, tag: &str, attrs: &[String]) {
    indent(out, depth);
    let _ = writeln!(out, "<{tag} {} />", attrs.join(" "));
}

fn attr(name: &str, value: &str) -> String {
    format!("{name}=\"{}\"", escape_attr(value))
}

/// Escape a value for a double-quoted JSX attribute.
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text placed between JSX tags. Braces would open an expression.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a bound for a JSX numeric expression: `100`, `0.5`, `-3`.
fn format_num(n: f64) -> String {
    if n == 0.0 {
        // Avoid emitting `-0`.
        return "0".to_string();
    }
    format!("{n}")
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::FieldId;
    use crate::model::Options;

    fn field(id: &str, kind: FieldKind, label: &str) -> FieldDefinition {
        FieldDefinition::new(FieldId::intern(id), kind, label)
    }

    #[test]
    fn empty_form_is_header_and_footer() {
        let out = generate(&[]);
        assert!(out.starts_with("import { Button } from \"@/components/ui/button\"\n"));
        assert!(out.contains("export default function GeneratedForm() {"));
        assert!(out.contains("<CardTitle>Generated Form</CardTitle>"));
        assert!(out.ends_with("  )\n}\n"));
        assert!(!out.contains("<div className=\"space-y-2\">"));
    }

    #[test]
    fn text_field_block() {
        let mut f = field("g_name", FieldKind::Text, "Name");
        f.required = true;
        f.placeholder = Some("Jane".into());
        let out = generate(&[f]);
        assert!(out.contains("            <Label htmlFor=\"g_name\">Name *</Label>\n"));
        assert!(out.contains(
            "            <Input type=\"text\" id=\"g_name\" placeholder=\"Jane\" required />\n"
        ));
    }

    #[test]
    fn accept_only_emitted_for_file() {
        let mut file = field("g_upload", FieldKind::File, "CV");
        file.accept = Some(".pdf,.doc".into());
        let mut text = field("g_text", FieldKind::Text, "T");
        text.accept = Some(".pdf".into());
        let out = generate(&[file, text]);
        assert!(out.contains(
            "<Input type=\"file\" id=\"g_upload\" placeholder=\"\" accept=\".pdf,.doc\" />"
        ));
        assert!(out.contains("<Input type=\"text\" id=\"g_text\" placeholder=\"\" />"));
    }

    #[test]
    fn placeholder_ignored_for_kinds_without_one() {
        let mut f = field("g_toggle", FieldKind::Toggle, "On");
        f.placeholder = Some("ignored".into());
        let out = generate(&[f]);
        assert!(!out.contains("ignored"));
        assert!(out.contains("<Switch id=\"g_toggle\" />"));
    }

    #[test]
    fn slider_uses_defaults_and_set_bounds() {
        let plain = field("g_s1", FieldKind::RangeSlider, "S1");
        let mut custom = field("g_s2", FieldKind::RangeSlider, "S2");
        custom.min = Some(-5.0);
        custom.max = Some(5.0);
        custom.step = Some(0.5);
        let out = generate(&[plain, custom]);
        assert!(out.contains("<Slider id=\"g_s1\" min={0} max={100} step={1} />"));
        assert!(out.contains("<Slider id=\"g_s2\" min={-5} max={5} step={0.5} />"));
    }

    #[test]
    fn select_lists_options_and_falls_back_placeholder() {
        let mut f = field("g_color", FieldKind::SingleSelect, "Color");
        f.options = Options::from_vec(vec!["Red".into(), "".into(), "Blue".into()]);
        let out = generate(&[f]);
        assert!(out.contains("<SelectValue placeholder=\"Select an option\" />"));
        assert!(out.contains("<SelectItem value=\"Red\">Red</SelectItem>"));
        assert!(out.contains("<SelectItem value=\"Blue\">Blue</SelectItem>"));
        assert!(!out.contains("<SelectItem value=\"\">"));
    }

    #[test]
    fn radio_item_ids_are_scoped_to_field() {
        let mut f = field("g_size", FieldKind::RadioGroup, "Size");
        f.options = Options::from_vec(vec!["S".into(), "M".into()]);
        let out = generate(&[f]);
        assert!(out.contains("<RadioGroup id=\"g_size\">"));
        assert!(out.contains("<RadioGroupItem value=\"S\" id=\"g_size-0\" />"));
        assert!(out.contains("<Label htmlFor=\"g_size-1\">M</Label>"));
    }

    #[test]
    fn escapes_markup_in_labels_and_attributes() {
        let mut f = field("g_esc", FieldKind::Text, "A <b> & {x}");
        f.placeholder = Some("say \"hi\"".into());
        let out = generate(&[f]);
        assert!(out.contains(">A &lt;b&gt; &amp; &#123;x&#125;</Label>"));
        assert!(out.contains("placeholder=\"say &quot;hi&quot;\""));
    }

    #[test]
    fn custom_config() {
        let config = GeneratorConfig {
            component_name: "SignupForm".into(),
            title: "Sign up".into(),
            submit_label: "Create account".into(),
            ui_import_root: "~/ui".into(),
        };
        let out = generate_with(&[], &config);
        assert!(out.contains("import { Button } from \"~/ui/button\""));
        assert!(out.contains("export default function SignupForm() {"));
        assert!(out.contains("<CardTitle>Sign up</CardTitle>"));
        assert!(out.contains("<Button type=\"submit\">Create account</Button>"));
    }

    #[test]
    fn format_num_cases() {
        assert_eq!(format_num(100.0), "100");
        assert_eq!(format_num(-0.0), "0");
        assert_eq!(format_num(0.25), "0.25");
    }
}
