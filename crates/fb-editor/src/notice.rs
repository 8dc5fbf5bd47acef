//! User-facing notices (toasts) emitted by session operations.
//!
//! The session only describes what happened; showing it is up to the host.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn field_added(label: &str) -> Self {
        Self::info(
            "Field Added",
            format!("The field \"{label}\" has been added successfully."),
        )
    }

    pub fn field_updated(label: &str) -> Self {
        Self::info(
            "Field Updated",
            format!("The field \"{label}\" has been updated successfully."),
        )
    }

    pub fn field_deleted() -> Self {
        Self::destructive("Field Deleted", "The field has been removed from the form.")
    }

    pub fn form_saved() -> Self {
        Self::info(
            "Form Saved",
            "Your form configuration has been saved successfully.",
        )
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::destructive("Invalid Field", message)
    }

    /// Generated code landed on the clipboard.
    pub fn code_copied() -> Self {
        Self::info("Code Copied", "The form code has been copied to your clipboard.")
    }

    pub fn copy_failed() -> Self {
        Self::destructive(
            "Copy Failed",
            "Failed to copy code to clipboard. Please try again.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_notices() {
        let copied = Notice::code_copied();
        assert_eq!(copied.title, "Code Copied");
        assert_eq!(copied.variant, NoticeVariant::Default);

        let failed = Notice::copy_failed();
        assert_eq!(failed.title, "Copy Failed");
        assert_eq!(failed.variant, NoticeVariant::Destructive);
        assert!(failed.description.contains("Please try again"));
    }
}
