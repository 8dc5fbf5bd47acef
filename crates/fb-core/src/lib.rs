pub mod generator;
pub mod id;
pub mod lint;
pub mod model;
pub mod persist;
pub mod reorder;
pub mod store;

pub use generator::{GeneratorConfig, generate, generate_with};
pub use id::FieldId;
pub use lint::{LintDiagnostic, LintSeverity, lint_form};
pub use model::*;
pub use persist::PersistError;
pub use reorder::reorder;
pub use store::FieldStore;
