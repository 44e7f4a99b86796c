//! Text normalization applied to generated form code.
//!
//! The external generator emits code written against the toolkit's stock
//! runtime; the host application resolves translations and images through
//! its own shorthand helpers instead. The rewrites below bridge that gap and
//! are applied in a fixed order by [`apply_all`].
//!
//! The patterns are deliberately narrow. In particular, a quoted literal
//! whose closing quote is escaped must not be matched; loosening that rule
//! corrupts strings with embedded quotes.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Placeholder token the generator emits for the application name.
pub const APP_NAME_TOKEN: &str = "__appname__";

/// Generated import of the bundled image-resource module.
const IMAGES_IMPORT: &str = "import images_rc";

/// Date-format literal that must stay untranslated.
const DATE_FORMAT_LITERAL: &str = "MMM yyyy";

// Matches translate calls wrapping a double-quoted literal. The literal is
// a run of non-quote characters or escape pairs, so a closing quote that is
// itself escaped never terminates the match. `def _translate(...)`
// definition lines are captured into group 1 and left untouched by the
// replacement.
#[allow(clippy::unwrap_used)] // Safe: pattern is a compile-time constant
static TRANSLATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?:QtGui\.QApplication\.translate|(def )?_translate)\(.+?,\s+"((?:[^"\\]|\\.)+?)",.+?\)"#,
    )
    .unwrap()
});

// Matches quoted `:/images/<name>` resource paths. The name may contain
// neither quote kind, and the branches keep single- and double-quoted paths
// apart so the replacement can preserve the original quote character.
#[allow(clippy::unwrap_used)] // Safe: pattern is a compile-time constant
static RESOURCE_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"':/images/([^'"]+)'|":/images/([^'"]+)""#).unwrap());

/// Replace every application-name placeholder with the host's literal name.
#[must_use]
pub fn replace_app_name(text: &str, app_name: &str) -> String {
    text.replace(APP_NAME_TOKEN, app_name)
}

/// Drop the generated import of the bundled image-resource module.
///
/// Images are resolved at runtime through the host's icon lookup, not via
/// the generated import.
#[must_use]
pub fn strip_image_imports(text: &str) -> String {
    text.replace(IMAGES_IMPORT, "")
}

/// Collapse recognized translation calls to the host's single-argument
/// shorthand, `_("<literal>")`.
///
/// Both `QtGui.QApplication.translate(...)` and `_translate(...)` call
/// syntaxes are recognized; `def _translate` definitions and literals ending
/// in an escaped quote are left untouched.
#[must_use]
pub fn rewrite_translations(text: &str) -> String {
    TRANSLATE_RE
        .replace_all(text, |caps: &Captures| {
            if caps.get(1).is_some() {
                caps[0].to_string()
            } else {
                format!("_(\"{}\")", &caps[2])
            }
        })
        .into_owned()
}

/// Collapse the translated date-format literal back to a bare string.
///
/// `"MMM yyyy"` is a format pattern, not user-visible text; translating it
/// would break date rendering. Runs after [`rewrite_translations`].
#[must_use]
pub fn exempt_date_format(text: &str) -> String {
    text.replace(
        &format!("_(\"{DATE_FORMAT_LITERAL}\")"),
        &format!("\"{DATE_FORMAT_LITERAL}\""),
    )
}

/// Rewrite quoted `:/images/<name>` resource paths into the host's icon
/// lookup call `I(<name>)`, preserving the original quote character.
#[must_use]
pub fn rewrite_resource_paths(text: &str) -> String {
    RESOURCE_PATH_RE
        .replace_all(text, |caps: &Captures| {
            if let Some(name) = caps.get(1) {
                format!("I('{}')", name.as_str())
            } else {
                format!("I(\"{}\")", &caps[2])
            }
        })
        .into_owned()
}

/// Apply every rewrite in the fixed order the pipeline requires.
#[must_use]
pub fn apply_all(text: &str, app_name: &str) -> String {
    let text = replace_app_name(text, app_name);
    let text = strip_image_imports(&text);
    let text = rewrite_translations(&text);
    let text = exempt_date_format(&text);
    rewrite_resource_paths(&text)
}

#[cfg(test)]
#[path = "rewrite/rewrite_tests.rs"]
mod rewrite_tests;
