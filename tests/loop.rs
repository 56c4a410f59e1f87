use std::{error::Error, path::Path};

use test_utils::check_run;

const SRC_PATH: &str = "demos/loop.gl";
const EXPECTED: &str = "0\n1\n2\n";

#[test]
fn runs_loop_demo() -> Result<(), Box<dyn Error>> {
    check_run(env!("CARGO_BIN_EXE_glint"), Path::new(SRC_PATH), EXPECTED)
}
