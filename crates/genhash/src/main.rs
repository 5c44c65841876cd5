use std::{env, io, process::ExitCode};

use tracing_subscriber::EnvFilter;

use genhash::{Sha512Crypt, cli};

fn main() -> ExitCode {
    // usage: genhash <PASSWORD> <SALT>
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("LOG_LEVEL"))
        .with_writer(io::stderr)
        .init();

    match cli::run(env::args_os().collect(), &Sha512Crypt) {
        Ok(hash) => {
            println!("{hash}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = %err, "no hash produced");
            println!("{}", err.user_message());
            ExitCode::from(err.exit_code())
        }
    }
}
