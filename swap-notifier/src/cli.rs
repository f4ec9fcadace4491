use structopt::StructOpt;
use tracing::level_filters::LevelFilter;

#[derive(StructOpt, Debug, Clone)]
#[structopt(
    name = "swap-notifier",
    about = "Notifies the exchange and trading services about HTLC events of an ETH-BTC trade."
)]
pub struct Options {
    /// Notify the exchange service that the buy order HTLC on Bitcoin was funded
    #[structopt(long = "btc-funded")]
    pub btc_funded: bool,

    /// Notify the trading service that the buy order contract on Ethereum was
    /// deployed
    #[structopt(long = "eth-deployed")]
    pub eth_deployed: bool,

    /// Notify the exchange service that the secret was revealed
    #[structopt(long = "btc-redeem")]
    pub btc_redeem: bool,

    /// The trade id
    #[structopt(short = "u", long = "uid")]
    pub uid: Option<String>,

    /// Id of the Bitcoin transaction funding the HTLC
    #[structopt(short = "t", long = "txid")]
    pub txid: Option<String>,

    /// Output index of the HTLC within the funding transaction
    #[structopt(short = "v", long = "vout")]
    pub vout: Option<String>,

    /// Address of the deployed Ethereum HTLC
    #[structopt(short = "c", long = "contract")]
    pub contract: Option<String>,

    /// The revealed secret
    #[structopt(short = "s", long = "secret")]
    pub secret: Option<String>,

    /// Log level, logs are written to stderr
    #[structopt(long = "log-level", default_value = "info")]
    pub log_level: LevelFilter,
}

impl Options {
    /// Unlike [`StructOpt::from_args`] this leaves exiting to the caller, so
    /// usage errors can share the exit code of other parameter errors.
    pub fn from_args_safe() -> Result<Self, structopt::clap::Error> {
        Self::from_iter_safe(std::env::args_os())
    }
}
