//! Contract view helpers.
//!
//! Wraps the raw queries the overview needs and maps their return values
//! into dashboard types.

use crate::address::Address;
use crate::config::DashboardConfig;
use crate::denominate::{denominate_amount, DenominateOptions};
use crate::error::{DashboardError, DashboardResult};
use crate::provider::NetworkProvider;
use crate::query::{Argument, Query, QueryResponse};
use crate::types::{BlsKey, ContractOverview, NetworkStake, NodeStatus};

pub const GET_TOTAL_ACTIVE_STAKE: &str = "getTotalActiveStake";
pub const GET_CONTRACT_CONFIG: &str = "getContractConfig";
pub const GET_BLS_KEYS_STATUS: &str = "getBlsKeysStatus";

/// Entries `getContractConfig` must return before the optional tail.
const CONTRACT_CONFIG_MIN_LEN: usize = 8;

/// Service fee is stored in hundredths of a percent.
const SERVICE_FEE_SCALE: u128 = 100;

/// View queries against one delegation contract.
pub struct ContractViews<P> {
    provider: P,
    delegation: Address,
    auction: Address,
    options: DenominateOptions,
}

impl<P: NetworkProvider> ContractViews<P> {
    pub fn new(provider: P, config: &DashboardConfig) -> DashboardResult<Self> {
        Ok(Self {
            provider,
            delegation: config.delegation_address()?,
            auction: config.auction_address()?,
            options: config.denominate_options(),
        })
    }

    pub fn delegation_contract(&self) -> &Address {
        &self.delegation
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Raw total of active stake in the contract.
    pub async fn total_active_stake(&self) -> DashboardResult<u128> {
        let query = Query::new(self.delegation, GET_TOTAL_ACTIVE_STAKE);
        let response = self.provider.query_contract(&query).await?;
        response.get(0)?.as_big_uint()
    }

    pub async fn contract_config(&self) -> DashboardResult<ContractOverview> {
        let query = Query::new(self.delegation, GET_CONTRACT_CONFIG);
        let response = self.provider.query_contract(&query).await?;
        contract_overview_from_response(&response, &self.options)
    }

    /// Validator keys registered by the contract in the auction contract.
    pub async fn bls_keys(&self) -> DashboardResult<Vec<BlsKey>> {
        let response = self.bls_keys_status().await?;
        Ok(bls_keys_from_response(&response))
    }

    /// Number of validator nodes, counted from the key/status pairs.
    pub async fn node_count(&self) -> DashboardResult<usize> {
        let response = self.bls_keys_status().await?;
        Ok(response.return_data.len() / 2)
    }

    pub async fn network_stake(&self) -> DashboardResult<NetworkStake> {
        self.provider.get_network_stake().await
    }

    async fn bls_keys_status(&self) -> DashboardResult<QueryResponse> {
        let query = Query::new(self.auction, GET_BLS_KEYS_STATUS)
            .with_arg(Argument::from_pubkey(&self.delegation));
        self.provider.query_contract(&query).await
    }
}

/// Map a `getContractConfig` answer.
///
/// Layout: owner, service fee, max cap, initial owner funds, automatic
/// activation, with cap, changeable fee, check cap on redelegate, then
/// optionally created nonce and unbond period.
pub fn contract_overview_from_response(
    response: &QueryResponse,
    options: &DenominateOptions,
) -> DashboardResult<ContractOverview> {
    if response.return_data.len() < CONTRACT_CONFIG_MIN_LEN {
        return Err(DashboardError::MalformedResponse(format!(
            "{} returned {} values, expected at least {}",
            GET_CONTRACT_CONFIG,
            response.return_data.len(),
            CONTRACT_CONFIG_MIN_LEN
        )));
    }

    let owner_address = match response.get(0)?.as_address() {
        Ok(address) => address.to_bech32(),
        Err(_) => String::new(),
    };

    let optional_number = |index: usize| -> DashboardResult<Option<u64>> {
        match response.return_data.get(index) {
            Some(data) if !data.is_empty() => data.as_number().map(Some),
            _ => Ok(None),
        }
    };

    Ok(ContractOverview {
        owner_address,
        service_fee: format_service_fee(response.get(1)?.as_big_uint()?),
        max_delegation_cap: denominate_amount(response.get(2)?.as_big_uint()?, options),
        initial_owner_funds: denominate_amount(response.get(3)?.as_big_uint()?, options),
        automatic_activation: response.get(4)?.as_bool(),
        with_delegation_cap: response.get(5)?.as_bool(),
        changeable_service_fee: response.get(6)?.as_bool(),
        check_cap_on_redelegate: response.get(7)?.as_bool(),
        created_nonce: optional_number(8)?,
        unbond_period: optional_number(9)?,
    })
}

/// `1250` → `"12.5"`, `1000` → `"10"`.
pub fn format_service_fee(raw: u128) -> String {
    let whole = raw / SERVICE_FEE_SCALE;
    let fraction = raw % SERVICE_FEE_SCALE;
    if fraction == 0 {
        return whole.to_string();
    }
    let fraction = format!("{:02}", fraction);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}

/// Pairs of (key, status) from `getBlsKeysStatus`.
pub fn bls_keys_from_response(response: &QueryResponse) -> Vec<BlsKey> {
    response
        .return_data
        .chunks_exact(2)
        .map(|pair| BlsKey {
            key_hex: pair[0].as_hex(),
            status: NodeStatus::parse(&pair[1].as_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ReturnData;

    fn response(values: Vec<Vec<u8>>) -> QueryResponse {
        QueryResponse {
            return_data: values.into_iter().map(ReturnData::from_bytes).collect(),
            return_code: "ok".to_string(),
            return_message: String::new(),
        }
    }

    fn be(value: u128) -> Vec<u8> {
        let bytes = value.to_be_bytes();
        let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
        bytes[start..].to_vec()
    }

    #[test]
    fn test_format_service_fee() {
        assert_eq!(format_service_fee(1000), "10");
        assert_eq!(format_service_fee(1250), "12.5");
        assert_eq!(format_service_fee(1205), "12.05");
        assert_eq!(format_service_fee(0), "0");
        assert_eq!(format_service_fee(10000), "100");
    }

    #[test]
    fn test_contract_overview_mapping() {
        let owner = hex::decode("0139472eff6886771a982f3083da5d421f24c29181e63888228dc81ca60d69e1")
            .unwrap();
        let cap = 5_000_000_000_000_000_000_000u128;
        let funds = 1_250_000_000_000_000_000_000u128;
        let resp = response(vec![
            owner,
            be(1250),
            be(cap),
            be(funds),
            b"true".to_vec(),
            vec![1],
            vec![],
            vec![1],
            be(1000),
            be(144),
        ]);

        let overview = contract_overview_from_response(&resp, &DenominateOptions::new(18, 2)).unwrap();
        assert_eq!(
            overview.owner_address,
            "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th"
        );
        assert_eq!(overview.service_fee, "12.5");
        assert_eq!(overview.max_delegation_cap, "5,000");
        assert_eq!(overview.initial_owner_funds, "1,250");
        assert!(overview.automatic_activation);
        assert!(overview.with_delegation_cap);
        assert!(!overview.changeable_service_fee);
        assert!(overview.check_cap_on_redelegate);
        assert_eq!(overview.created_nonce, Some(1000));
        assert_eq!(overview.unbond_period, Some(144));
    }

    #[test]
    fn test_contract_overview_false_activation() {
        let mut values = vec![vec![0u8; 32], be(0), be(0), be(0), b"false".to_vec()];
        values.extend([vec![], vec![], vec![]]);
        let overview =
            contract_overview_from_response(&response(values), &DenominateOptions::new(18, 2)).unwrap();
        assert!(!overview.automatic_activation);
        assert_eq!(overview.max_delegation_cap, "0");
        assert_eq!(overview.created_nonce, None);
    }

    #[test]
    fn test_contract_overview_too_short() {
        let resp = response(vec![vec![0u8; 32], be(1000)]);
        assert!(matches!(
            contract_overview_from_response(&resp, &DenominateOptions::new(18, 2)),
            Err(DashboardError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_bls_keys_pairs() {
        let resp = response(vec![
            vec![0xaa, 0xbb],
            b"staked".to_vec(),
            vec![0xcc],
            b"queued".to_vec(),
        ]);
        let keys = bls_keys_from_response(&resp);
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].key_hex, "aabb");
        assert_eq!(keys[0].status, NodeStatus::Staked);
        assert_eq!(keys[1].status, NodeStatus::Queued);
    }
}
