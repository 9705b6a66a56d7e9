use std::process::ExitCode;

fn main() -> ExitCode {
    buildinfo::app::startup::startup()
}
