//! The checked-in Material Design header must match the generator.

use std::path::PathBuf;

use mdi_codegen::HeaderOptions;

fn icons_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../thirdparty/material-design-icons")
}

#[test]
fn checked_in_header_is_current() {
    let dir = icons_dir();
    let generated = mdi_codegen::generate(&dir.join("codepoints"), &HeaderOptions::default()).unwrap();
    let checked_in = std::fs::read_to_string(dir.join("icons.h")).unwrap();
    assert_eq!(generated, checked_in, "run `cargo xtask codegen` to refresh icons.h");
}
