use crate::{cli::Options, config::Endpoints, SYMBOL};
use serde::Serialize;
use std::{fmt, num::ParseIntError};

const BTC_FUNDED: &str = "--btc-funded";
const ETH_DEPLOYED: &str = "--eth-deployed";
const BTC_REDEEM: &str = "--btc-redeem";

const UID: &str = "-u/--uid";
const TXID: &str = "-t/--txid";
const VOUT: &str = "-v/--vout";
const CONTRACT: &str = "-c/--contract";
const SECRET: &str = "-s/--secret";

/// Identifies one trade on both services, passed through verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TradeId(String);

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TradeId {
    fn from(id: &str) -> Self {
        TradeId(id.to_owned())
    }
}

/// The one event this invocation reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// The Bitcoin HTLC of the buy order was funded.
    BtcFunded {
        trade_id: TradeId,
        transaction_id: String,
        vout: u32,
    },
    /// The Ethereum HTLC of the buy order was deployed.
    EthDeployed {
        trade_id: TradeId,
        contract_address: String,
    },
    /// The secret was revealed while redeeming.
    BtcRedeem { trade_id: TradeId, secret: String },
    NoAction,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    #[error("{action} requires {parameter} to be set")]
    Missing {
        action: &'static str,
        parameter: &'static str,
    },
    #[error("{parameter} must be an integer, got '{value}': {source}")]
    NotAnInteger {
        parameter: &'static str,
        value: String,
        source: ParseIntError,
    },
}

impl Action {
    /// If more than one action flag is set the first one in the order
    /// `--btc-funded`, `--eth-deployed`, `--btc-redeem` wins.
    pub fn from_options(options: &Options) -> Result<Self, ParameterError> {
        if options.btc_funded {
            let trade_id = required(&options.uid, BTC_FUNDED, UID)?;
            let transaction_id = required(&options.txid, BTC_FUNDED, TXID)?;
            let vout = required(&options.vout, BTC_FUNDED, VOUT)?;
            let vout = vout
                .trim()
                .parse::<u32>()
                .map_err(|source| ParameterError::NotAnInteger {
                    parameter: VOUT,
                    value: vout.clone(),
                    source,
                })?;

            return Ok(Action::BtcFunded {
                trade_id: TradeId(trade_id),
                transaction_id,
                vout,
            });
        }

        if options.eth_deployed {
            let trade_id = required(&options.uid, ETH_DEPLOYED, UID)?;
            let contract_address = required(&options.contract, ETH_DEPLOYED, CONTRACT)?;

            return Ok(Action::EthDeployed {
                trade_id: TradeId(trade_id),
                contract_address,
            });
        }

        if options.btc_redeem {
            let trade_id = required(&options.uid, BTC_REDEEM, UID)?;
            let secret = required(&options.secret, BTC_REDEEM, SECRET)?;

            return Ok(Action::BtcRedeem {
                trade_id: TradeId(trade_id),
                secret,
            });
        }

        Ok(Action::NoAction)
    }

    /// `None` for [`Action::NoAction`], there is nobody to tell.
    pub fn notification(&self, endpoints: &Endpoints) -> Option<Notification> {
        let notification = match self {
            Action::BtcFunded {
                trade_id,
                transaction_id,
                vout,
            } => Notification {
                url: format!(
                    "{}/trades/{}/{}/buy-order-htlc-funded",
                    endpoints.exchange_service(),
                    SYMBOL,
                    trade_id
                ),
                payload: Payload::HtlcFunded(BuyOrderHtlcFunded {
                    transaction_id: transaction_id.clone(),
                    vout: *vout,
                }),
            },
            Action::EthDeployed {
                trade_id,
                contract_address,
            } => Notification {
                url: format!(
                    "{}/cli/trades/{}/{}/buy-order-contract-deployed",
                    endpoints.trading_service(),
                    SYMBOL,
                    trade_id
                ),
                payload: Payload::ContractDeployed(BuyOrderContractDeployed {
                    contract_address: contract_address.clone(),
                }),
            },
            Action::BtcRedeem { trade_id, secret } => Notification {
                url: format!(
                    "{}/trades/{}/{}/buy-order-secret-revealed",
                    endpoints.exchange_service(),
                    SYMBOL,
                    trade_id
                ),
                payload: Payload::SecretRevealed(BuyOrderSecretRevealed {
                    secret: secret.clone(),
                }),
            },
            Action::NoAction => return None,
        };

        Some(notification)
    }
}

fn required(
    value: &Option<String>,
    action: &'static str,
    parameter: &'static str,
) -> Result<String, ParameterError> {
    match value.as_deref() {
        Some(value) if !value.is_empty() => Ok(value.to_owned()),
        _ => Err(ParameterError::Missing { action, parameter }),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub url: String,
    pub payload: Payload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    HtlcFunded(BuyOrderHtlcFunded),
    ContractDeployed(BuyOrderContractDeployed),
    SecretRevealed(BuyOrderSecretRevealed),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuyOrderHtlcFunded {
    pub transaction_id: String,
    pub vout: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuyOrderContractDeployed {
    pub contract_address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuyOrderSecretRevealed {
    pub secret: String,
}
