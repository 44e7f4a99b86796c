#![allow(non_snake_case)]
#![allow(clippy::unwrap_used)]

use super::*;
use std::path::PathBuf;

#[test]
fn FnCodegen___wraps_closure() {
    let codegen = FnCodegen(|form: &Path| Ok(format!("generated from {}", form.display())));

    let text = codegen.generate(Path::new("syncman.ui")).unwrap();

    assert_eq!(text, "generated from syncman.ui");
}

#[cfg(unix)]
#[test]
fn UicProcess___generate___captures_stdout() {
    let codegen = UicProcess::new("echo").arg("-n").arg("generated for");

    let text = codegen.generate(Path::new("syncman.ui")).unwrap();

    assert_eq!(text, "generated for syncman.ui");
}

#[cfg(unix)]
#[test]
fn UicProcess___generate___nonzero_exit___returns_codegen_error() {
    let codegen = UicProcess::new("false");

    let result = codegen.generate(Path::new("syncman.ui"));

    let err = result.unwrap_err();
    assert!(matches!(err, FormError::Codegen { .. }));
    assert!(err.to_string().contains("syncman.ui"));
}

#[test]
fn UicProcess___generate___missing_program___returns_codegen_error() {
    let codegen = UicProcess::new("definitely-not-a-real-generator");

    let result = codegen.generate(&PathBuf::from("syncman.ui"));

    assert!(matches!(result, Err(FormError::Codegen { .. })));
}
