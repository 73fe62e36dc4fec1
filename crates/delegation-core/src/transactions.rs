//! Owner administrative transactions.
//!
//! The dashboard never signs anything. An [`AdminAction`] is validated and
//! turned into an unsigned [`TransactionRequest`]; the owner signs it in the
//! web wallet reached through [`TransactionRequest::wallet_hook_url`].

use reqwest::Url;
use serde::Serialize;

use crate::address::Address;
use crate::denominate::nominate;
use crate::error::{DashboardError, DashboardResult};
use crate::query::{big_uint_hex, Argument};

pub const CHANGE_SERVICE_FEE: &str = "changeServiceFee";
pub const MODIFY_TOTAL_DELEGATION_CAP: &str = "modifyTotalDelegationCap";
pub const SET_AUTOMATIC_ACTIVATION: &str = "setAutomaticActivation";

/// Highest fee, in hundredths of a percent.
const MAX_SERVICE_FEE: u128 = 10_000;

/// Fee input accepts at most two decimals.
const SERVICE_FEE_DECIMALS: u32 = 2;

/// A validated owner action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum AdminAction {
    /// Fee in hundredths of a percent (`1250` = 12.5%)
    ChangeServiceFee { fee: u128 },
    /// Raw cap; zero removes the cap
    ModifyDelegationCap { amount: u128 },
    SetAutomaticActivation { enabled: bool },
}

impl AdminAction {
    /// Parse a fee typed as a percentage, e.g. `"12.5"`.
    pub fn change_service_fee(percent: &str) -> DashboardResult<Self> {
        let fee = nominate(percent, SERVICE_FEE_DECIMALS).map_err(|_| {
            DashboardError::InvalidAction(format!(
                "service fee must be a number with at most two decimals, got {:?}",
                percent
            ))
        })?;
        if fee > MAX_SERVICE_FEE {
            return Err(DashboardError::InvalidAction(format!(
                "service fee must be between 0 and 100, got {}",
                percent
            )));
        }
        Ok(AdminAction::ChangeServiceFee { fee })
    }

    /// Parse a cap typed in whole tokens.
    ///
    /// When the current active stake is known, a non-zero cap below it is
    /// refused.
    pub fn modify_delegation_cap(
        amount: &str,
        denomination: u32,
        active_stake: Option<u128>,
    ) -> DashboardResult<Self> {
        let raw = nominate(amount, denomination).map_err(|e| {
            DashboardError::InvalidAction(format!("delegation cap: {}", e))
        })?;

        if let Some(stake) = active_stake {
            if raw != 0 && raw < stake {
                return Err(DashboardError::InvalidAction(
                    "delegation cap must be zero or at least the total active stake".to_string(),
                ));
            }
        }
        Ok(AdminAction::ModifyDelegationCap { amount: raw })
    }

    pub fn set_automatic_activation(enabled: bool) -> Self {
        AdminAction::SetAutomaticActivation { enabled }
    }

    pub fn function_name(&self) -> &'static str {
        match self {
            AdminAction::ChangeServiceFee { .. } => CHANGE_SERVICE_FEE,
            AdminAction::ModifyDelegationCap { .. } => MODIFY_TOTAL_DELEGATION_CAP,
            AdminAction::SetAutomaticActivation { .. } => SET_AUTOMATIC_ACTIVATION,
        }
    }

    /// Transaction data field: `function@arg`.
    pub fn data(&self) -> String {
        let arg = match self {
            AdminAction::ChangeServiceFee { fee } => big_uint_hex(*fee),
            AdminAction::ModifyDelegationCap { amount } => big_uint_hex(*amount),
            AdminAction::SetAutomaticActivation { enabled } => {
                let text = if *enabled { "true" } else { "false" };
                Argument::from_utf8(text).as_hex().to_string()
            }
        };
        format!("{}@{}", self.function_name(), arg)
    }
}

/// An unsigned call to the delegation contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub receiver: Address,
    pub value: String,
    pub gas_limit: u64,
    pub data: String,
}

impl TransactionRequest {
    pub fn new(action: &AdminAction, receiver: Address, gas_limit: u64) -> Self {
        Self {
            receiver,
            value: "0".to_string(),
            gas_limit,
            data: action.data(),
        }
    }

    /// Web wallet URL that asks the owner to sign this transaction and
    /// then returns to `callback_url`.
    pub fn wallet_hook_url(&self, wallet_address: &str, callback_url: &str) -> DashboardResult<Url> {
        let base = format!("{}/hook/transaction", wallet_address.trim_end_matches('/'));
        let gas_limit = self.gas_limit.to_string();
        let receiver = self.receiver.to_bech32();

        Url::parse_with_params(
            &base,
            &[
                ("receiver", receiver.as_str()),
                ("value", self.value.as_str()),
                ("gasLimit", gas_limit.as_str()),
                ("data", self.data.as_str()),
                ("callbackUrl", callback_url),
            ],
        )
        .map_err(|e| DashboardError::InvalidConfig(format!("wallet address: {}", e)))
    }
}
