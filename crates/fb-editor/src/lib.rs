pub mod field_editor;
pub mod history;
pub mod notice;
pub mod session;
pub mod shortcuts;

pub use field_editor::{CommitKind, Committed, FieldDraft, FieldEditor, ValidationError};
pub use history::History;
pub use notice::{Notice, NoticeVariant};
pub use session::{FormSession, SessionConfig};
pub use shortcuts::{ShortcutAction, ShortcutMap};
