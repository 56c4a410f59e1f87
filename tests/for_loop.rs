use std::{error::Error, path::Path};

use test_utils::check_run;

const SRC_PATH: &str = "demos/for_loop.gl";
const EXPECTED: &str = "10\n";

#[test]
fn runs_for_loop_demo() -> Result<(), Box<dyn Error>> {
    check_run(env!("CARGO_BIN_EXE_glint"), Path::new(SRC_PATH), EXPECTED)
}
