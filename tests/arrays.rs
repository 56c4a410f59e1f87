use std::{error::Error, path::Path};

use test_utils::check_run;

const SRC_PATH: &str = "demos/arrays.gl";
const EXPECTED: &str = "1\n9\n3\n[1, 9, 3]\n";

#[test]
fn runs_arrays_demo() -> Result<(), Box<dyn Error>> {
    check_run(env!("CARGO_BIN_EXE_glint"), Path::new(SRC_PATH), EXPECTED)
}
