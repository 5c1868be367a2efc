use assert_cmd::Command;
use std::path::Path;

/// sleepvault run from `dir` with no configuration leaking in from the environment
pub fn sleepvault_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sleepvault").unwrap();
    cmd.current_dir(dir);
    cmd.env_remove("SLEEPVAULT_CONFIG");
    cmd.env_remove("SLEEPVAULT_THEME");
    cmd.env_remove("RUST_LOG");
    cmd
}
