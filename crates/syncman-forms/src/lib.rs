//! Runtime compilation of form definitions for SyncMan
//!
//! Form definitions extracted from the plugin archive are compiled into form
//! modules the host application can load by name. Compilation shells out to
//! an external generator, normalizes the generated text for the host's
//! runtime (translation shorthand, icon lookup calls, application name), and
//! retires the source definition once its compiled counterpart is written.
//!
//! # Example
//!
//! ```no_run
//! use syncman_forms::{FormCompiler, UicProcess};
//! use std::path::Path;
//!
//! let codegen = UicProcess::new("pyuic4");
//! let compiler = FormCompiler::new(codegen, "calibre");
//! let compiled_forms = compiler.compile_all(Path::new("plugins/SyncMan_resources"))?;
//! # Ok::<(), syncman_forms::FormError>(())
//! ```

mod codegen;
mod compiler;
mod error;

pub mod rewrite;

pub use codegen::{FnCodegen, UiCodegen, UicProcess};
pub use compiler::{FormCompiler, window_title};
pub use error::FormError;

/// Result type for form compilation operations.
pub type FormResult<T> = Result<T, FormError>;

/// File extension of form definition files.
pub const FORM_EXTENSION: &str = "ui";

/// Stem suffix marking a compiled form module, e.g. `syncman_ui.ui`.
pub const COMPILED_STEM_SUFFIX: &str = "_ui";
