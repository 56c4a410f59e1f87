use std::{error::Error, path::Path, process::Command, str};

/// Runs the interpreter binary at `bin_path` against `src_path` and asserts
/// its combined stdout equals `expected_stdout` exactly. Callers pass
/// `env!("CARGO_BIN_EXE_glint")` for `bin_path` so the binary path resolves
/// without depending on the build profile directory layout.
pub fn check_run(bin_path: &str, src_path: &Path, expected_stdout: &str) -> Result<(), Box<dyn Error>> {
    let output = Command::new(bin_path).arg(src_path).output()?;
    let stdout = str::from_utf8(&output.stdout)?;
    assert_eq!(stdout, expected_stdout);
    assert!(
        output.status.success(),
        "glint exited with status {:?}, stdout: {stdout}",
        output.status.code()
    );
    Ok(())
}
