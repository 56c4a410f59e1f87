use std::{error::Error, path::Path};

use test_utils::check_run;

const SRC_PATH: &str = "demos/errors.gl";
const EXPECTED: &str = "Error: variable declared twice a\nError: Division by zero\n1\n";

/// A runtime error aborts only the top-level statement that raised it;
/// the symbol table keeps whatever state the failed statement left it in
/// and execution continues with the next statement (spec.md §7/§9).
#[test]
fn recovers_from_runtime_errors_per_statement() -> Result<(), Box<dyn Error>> {
    check_run(env!("CARGO_BIN_EXE_glint"), Path::new(SRC_PATH), EXPECTED)
}
