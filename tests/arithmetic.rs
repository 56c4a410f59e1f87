use std::{error::Error, path::Path};

use test_utils::check_run;

const SRC_PATH: &str = "demos/arithmetic.gl";
const EXPECTED: &str = "8\n3.3333333333333335\n";

#[test]
fn runs_arithmetic_demo() -> Result<(), Box<dyn Error>> {
    check_run(env!("CARGO_BIN_EXE_glint"), Path::new(SRC_PATH), EXPECTED)
}
