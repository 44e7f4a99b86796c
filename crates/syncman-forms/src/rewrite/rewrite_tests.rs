#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Translation call rewriting
// ============================================================================

#[test_case(
    r#"self.label.setText(_translate("Context", "Hello World", None))"#,
    r#"self.label.setText(_("Hello World"))"#;
    "underscore call syntax"
)]
#[test_case(
    r#"self.label.setText(QtGui.QApplication.translate("Dialog", "Open", None, QtGui.QApplication.UnicodeUTF8))"#,
    r#"self.label.setText(_("Open"))"#;
    "qualified call syntax"
)]
#[test_case(
    r#"a = _translate("D", "One", None); b = _translate("D", "Two", None)"#,
    r#"a = _("One"); b = _("Two")"#;
    "multiple calls on one line"
)]
#[test_case(
    r#"self.label.setText(_translate("Dialog", "say \"hi\" now", None))"#,
    r#"self.label.setText(_("say \"hi\" now"))"#;
    "embedded escaped quotes preserved"
)]
fn rewrite_translations___collapses_to_shorthand(input: &str, expected: &str) {
    assert_eq!(rewrite_translations(input), expected);
}

#[test]
fn rewrite_translations___escaped_closing_quote___left_unrewritten() {
    // The literal's closing quote is escaped, so the narrow pattern must not
    // terminate there and the call stays untouched.
    let input = r#"self.label.setText(_translate("Context", "Can't stop\", None)"#;

    assert_eq!(rewrite_translations(input), input);
}

#[test]
fn rewrite_translations___def_line___left_unrewritten() {
    let input = r#"def _translate(ctx, "Hello", None)"#;

    assert_eq!(rewrite_translations(input), input);
}

#[test]
fn rewrite_translations___no_translate_calls___is_identity() {
    let input = "self.gridLayout = QtGui.QGridLayout(Dialog)";

    assert_eq!(rewrite_translations(input), input);
}

// ============================================================================
// Date-format exemption
// ============================================================================

#[test]
fn exempt_date_format___collapses_to_bare_literal() {
    let input = r#"self.date_format.setText(_("MMM yyyy"))"#;

    assert_eq!(
        exempt_date_format(input),
        r#"self.date_format.setText("MMM yyyy")"#
    );
}

#[test]
fn apply_all___date_format_translate_call___becomes_bare_literal() {
    let input = r#"self.date_format.setText(_translate("Dialog", "MMM yyyy", None))"#;

    assert_eq!(
        apply_all(input, "calibre"),
        r#"self.date_format.setText("MMM yyyy")"#
    );
}

#[test]
fn exempt_date_format___other_literals___untouched() {
    let input = r#"self.label.setText(_("MMM dd yyyy"))"#;

    assert_eq!(exempt_date_format(input), input);
}

// ============================================================================
// Resource path rewriting
// ============================================================================

#[test_case(
    "icon.addPixmap(QtGui.QPixmap(':/images/icon.png'))",
    "icon.addPixmap(QtGui.QPixmap(I('icon.png')))";
    "single quoted path"
)]
#[test_case(
    r#"icon.addPixmap(QtGui.QPixmap(":/images/icon.png"))"#,
    r#"icon.addPixmap(QtGui.QPixmap(I("icon.png")))"#;
    "double quoted path"
)]
#[test_case(
    "':/images/a.png' and \":/images/b.png\"",
    "I('a.png') and I(\"b.png\")";
    "mixed quoting preserved per occurrence"
)]
fn rewrite_resource_paths___rewrites_to_icon_lookup(input: &str, expected: &str) {
    assert_eq!(rewrite_resource_paths(input), expected);
}

#[test]
fn rewrite_resource_paths___name_containing_quote___left_unrewritten() {
    let input = r#"':/images/we"ird.png'"#;

    assert_eq!(rewrite_resource_paths(input), input);
}

#[test]
fn rewrite_resource_paths___other_prefixes___left_unrewritten() {
    let input = "':/icons/icon.png'";

    assert_eq!(rewrite_resource_paths(input), input);
}

// ============================================================================
// App name and image imports
// ============================================================================

#[test]
fn replace_app_name___substitutes_every_occurrence() {
    let input = "Dialog.setWindowTitle(__appname__ + ' - ' + __appname__)";

    assert_eq!(
        replace_app_name(input, "calibre"),
        "Dialog.setWindowTitle(calibre + ' - ' + calibre)"
    );
}

#[test]
fn strip_image_imports___removes_import_statement() {
    let input = "from PyQt4 import QtGui\nimport images_rc\n";

    let output = strip_image_imports(input);

    assert!(!output.contains("images_rc"));
    assert!(output.contains("from PyQt4 import QtGui"));
}

// ============================================================================
// Full pipeline
// ============================================================================

#[test]
fn apply_all___applies_every_rewrite() {
    let input = concat!(
        "import images_rc\n",
        "Dialog.setWindowTitle(_translate(\"Dialog\", \"__appname__ Sync\", None))\n",
        "icon.addPixmap(QtGui.QPixmap(':/images/wizard.png'))\n",
    );

    let output = apply_all(input, "calibre");

    assert!(!output.contains("images_rc"));
    assert!(output.contains(r#"_("calibre Sync")"#));
    assert!(output.contains("I('wizard.png')"));
}
