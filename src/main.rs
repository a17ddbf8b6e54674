//! Binary entrypoint for the `cmdsrv-client` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match cmdsrv_client::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
