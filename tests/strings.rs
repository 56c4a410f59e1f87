use std::{error::Error, path::Path};

use test_utils::check_run;

const SRC_PATH: &str = "demos/strings.gl";
const EXPECTED: &str = "hi!\nA\nempty default\n";

#[test]
fn runs_strings_demo() -> Result<(), Box<dyn Error>> {
    check_run(env!("CARGO_BIN_EXE_glint"), Path::new(SRC_PATH), EXPECTED)
}
