//! Test utilities and snapshot macros.

use entigraph_core::sdl;

use crate::{Catalog, Error, Namespace, compile_schema};

/// Compile and render as SDL, panicking on failure.
pub fn expect_sdl(catalog: &Catalog, namespaces: &[Namespace]) -> String {
    match compile_schema(catalog, namespaces) {
        Ok(schema) => schema.sdl(&sdl::Config::new()),
        Err(err) => panic!("expected schema to compile, got: {err}"),
    }
}

/// Compile expecting failure.
pub fn expect_error(catalog: &Catalog, namespaces: &[Namespace]) -> Error {
    match compile_schema(catalog, namespaces) {
        Ok(schema) => panic!(
            "expected compilation to fail, got:\n{}",
            schema.sdl(&sdl::Config::new())
        ),
        Err(err) => err,
    }
}

/// Inline snapshot of the compiled SDL.
#[macro_export]
macro_rules! shot_sdl {
    ($catalog:expr, $namespaces:expr, @$snapshot:literal) => {{
        let output = $crate::test_utils::expect_sdl(&$catalog, &$namespaces);
        insta::assert_snapshot!(output, @$snapshot);
    }};
}

/// Inline snapshot of the compilation error message.
#[macro_export]
macro_rules! shot_error {
    ($catalog:expr, $namespaces:expr, @$snapshot:literal) => {{
        let output = $crate::test_utils::expect_error(&$catalog, &$namespaces).to_string();
        insta::assert_snapshot!(output, @$snapshot);
    }};
}
