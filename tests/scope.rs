use std::{error::Error, path::Path};

use test_utils::check_run;

const SRC_PATH: &str = "demos/scope.gl";
const EXPECTED: &str = "2\n1\n";

#[test]
fn runs_scope_demo() -> Result<(), Box<dyn Error>> {
    check_run(env!("CARGO_BIN_EXE_glint"), Path::new(SRC_PATH), EXPECTED)
}
