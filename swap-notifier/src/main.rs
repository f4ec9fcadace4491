#![warn(
    unused_extern_crates,
    missing_debug_implementations,
    rust_2018_idioms,
    clippy::dbg_macro
)]
#![cfg_attr(not(test), warn(clippy::unwrap_used))]
#![forbid(unsafe_code)]

use anyhow::Context;
use std::fmt::Display;
use structopt::clap::ErrorKind;
use swap_notifier::{trace, Action, Client, Endpoints, Options};

const MISSING_ENV_VARIABLE: i32 = 1;
const INVALID_PARAMETER: i32 = 2;

trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self, code: i32) -> T;
}

impl<T, E> UnwrapOrExit<T> for Result<T, E>
where
    E: Display,
{
    fn unwrap_or_exit(self, code: i32) -> T {
        match self {
            Ok(success) => success,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(code);
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let options = Options::from_args_safe().unwrap_or_else(|e| match e.kind {
        ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
        _ => {
            eprintln!("{}", e.message);
            std::process::exit(INVALID_PARAMETER);
        }
    });

    trace::init_tracing(options.log_level).context("could not initialize tracing")?;

    let endpoints = Endpoints::from_env().unwrap_or_exit(MISSING_ENV_VARIABLE);
    let action = Action::from_options(&options).unwrap_or_exit(INVALID_PARAMETER);

    let notification = match action.notification(&endpoints) {
        Some(notification) => notification,
        None => {
            tracing::debug!("no action selected, nothing to notify");
            return Ok(());
        }
    };

    let response = Client::new().notify(&notification).await?;
    println!("{:?}", response);

    Ok(())
}
