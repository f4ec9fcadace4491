#![warn(
    unused_extern_crates,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::fallible_impl_from,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
    clippy::dbg_macro
)]
#![cfg_attr(not(test), warn(clippy::unwrap_used))]
#![forbid(unsafe_code)]

pub mod action;
pub mod cli;
pub mod config;
pub mod notifier;
pub mod trace;

pub use action::{Action, Notification, ParameterError, Payload, TradeId};
pub use cli::Options;
pub use config::{ConfigError, Endpoints};
pub use notifier::Client;

/// The only market both services trade on.
pub const SYMBOL: &str = "ETH-BTC";
