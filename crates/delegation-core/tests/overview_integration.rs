//! Overview integration tests
//!
//! Drive ContractViews and OverviewState::load through an in-memory
//! provider that answers like the gateway and API would.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use delegation_core::{
    AdminAction, ContractViews, DashboardConfig, DashboardError, DashboardResult, NetworkProvider,
    NetworkStake, NodeStatus, OverviewState, Query, QueryResponse, ReturnData, TransactionRequest,
};

// ============================================================================
// Test Utilities
// ============================================================================

const EGLD: u128 = 1_000_000_000_000_000_000;

/// Provider answering from canned responses keyed by function name.
#[derive(Default)]
struct StaticProvider {
    responses: HashMap<String, Vec<Vec<u8>>>,
    network_stake: Option<NetworkStake>,
    seen: Mutex<Vec<Query>>,
}

impl StaticProvider {
    fn with(mut self, func: &str, values: Vec<Vec<u8>>) -> Self {
        self.responses.insert(func.to_string(), values);
        self
    }

    fn with_stake(mut self, stake: NetworkStake) -> Self {
        self.network_stake = Some(stake);
        self
    }

    fn seen(&self) -> Vec<Query> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl NetworkProvider for StaticProvider {
    async fn query_contract(&self, query: &Query) -> DashboardResult<QueryResponse> {
        self.seen.lock().unwrap().push(query.clone());
        match self.responses.get(query.func.name()) {
            Some(values) => Ok(QueryResponse {
                return_data: values.iter().cloned().map(ReturnData::from_bytes).collect(),
                return_code: "ok".to_string(),
                return_message: String::new(),
            }),
            None => Err(DashboardError::ContractQuery {
                func: query.func.to_string(),
                code: "function not found".to_string(),
                message: "invalid function".to_string(),
            }),
        }
    }

    async fn get_network_stake(&self) -> DashboardResult<NetworkStake> {
        self.network_stake
            .clone()
            .ok_or_else(|| DashboardError::MalformedResponse("stake unavailable".to_string()))
    }
}

fn be(value: u128) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    bytes[start..].to_vec()
}

fn contract_config_values() -> Vec<Vec<u8>> {
    vec![
        hex::decode("0139472eff6886771a982f3083da5d421f24c29181e63888228dc81ca60d69e1").unwrap(),
        be(1000),
        be(10_000 * EGLD),
        be(1_250 * EGLD),
        b"true".to_vec(),
        vec![1],
        vec![1],
        vec![],
        be(4200),
    ]
}

fn full_provider() -> StaticProvider {
    StaticProvider::default()
        .with("getTotalActiveStake", vec![be(2_500 * EGLD + EGLD / 4)])
        .with("getContractConfig", contract_config_values())
        .with(
            "getBlsKeysStatus",
            vec![
                vec![0xaa; 96],
                b"staked".to_vec(),
                vec![0xbb; 96],
                b"queued".to_vec(),
            ],
        )
        .with_stake(NetworkStake {
            total_validators: 200,
            active_validators: 190,
            queue_size: 2,
            total_staked: 10_000 * EGLD,
        })
}

// ============================================================================
// View Tests
// ============================================================================

#[tokio::test]
async fn test_total_active_stake() {
    let config = DashboardConfig::default();
    let views = ContractViews::new(full_provider(), &config).unwrap();

    assert_eq!(views.total_active_stake().await.unwrap(), 2_500 * EGLD + EGLD / 4);
}

#[tokio::test]
async fn test_node_count_queries_auction_contract() {
    let config = DashboardConfig::default();
    let provider = Arc::new(full_provider());
    let views = ContractViews::new(provider.clone(), &config).unwrap();

    assert_eq!(views.node_count().await.unwrap(), 2);

    let seen = provider.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].address, config.auction_address().unwrap());
    assert_eq!(seen[0].func.name(), "getBlsKeysStatus");
    assert_eq!(
        seen[0].args[0].as_hex(),
        config.delegation_address().unwrap().hex()
    );
}

#[tokio::test]
async fn test_bls_keys_statuses() {
    let config = DashboardConfig::default();
    let views = ContractViews::new(full_provider(), &config).unwrap();

    let keys = views.bls_keys().await.unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0].status, NodeStatus::Staked);
    assert_eq!(keys[1].status, NodeStatus::Queued);
    assert_eq!(keys[0].key_hex.len(), 192);
}

#[tokio::test]
async fn test_contract_config() {
    let config = DashboardConfig::default();
    let views = ContractViews::new(full_provider(), &config).unwrap();

    let overview = views.contract_config().await.unwrap();
    assert_eq!(overview.service_fee, "10");
    assert_eq!(overview.max_delegation_cap, "10,000");
    assert_eq!(overview.initial_owner_funds, "1,250");
    assert!(overview.automatic_activation);
    assert!(!overview.check_cap_on_redelegate);
    assert_eq!(overview.created_after_secs(), Some(4200 * 6));
}

// ============================================================================
// Overview Loading Tests
// ============================================================================

#[tokio::test]
async fn test_load_fills_every_card() {
    let config = DashboardConfig::default();
    let views = ContractViews::new(full_provider(), &config).unwrap();

    let state = OverviewState::load(&views, &config).await;
    assert_eq!(state.total_active_stake, "2,500.25");
    assert_eq!(state.node_count, "2");

    let cards = state.cards(&config);
    assert_eq!(cards[0].percentage.as_deref(), Some("25.00% of total stake"));
    assert_eq!(cards[1].percentage.as_deref(), Some("1.00% of total nodes"));
    assert_eq!(cards[2].value, "10");
    assert_eq!(cards[3].value, "10,000");
    assert_eq!(cards[3].percentage.as_deref(), Some("25.00% filled"));
    assert_eq!(cards[4].value, "ON");
}

#[tokio::test]
async fn test_failed_fetch_keeps_placeholder() {
    let config = DashboardConfig::default();
    let provider = StaticProvider::default()
        .with("getContractConfig", contract_config_values())
        .with_stake(NetworkStake::default());
    let views = ContractViews::new(provider, &config).unwrap();

    let state = OverviewState::load(&views, &config).await;
    assert_eq!(state.total_active_stake, "...");
    assert_eq!(state.node_count, "...");
    assert!(state.contract.is_some());

    let cards = state.cards(&config);
    assert_eq!(cards[0].value, "...");
    assert_eq!(cards[0].percentage.as_deref(), Some("...% of total stake"));
    assert_eq!(cards[2].value, "10");
}

#[tokio::test]
async fn test_everything_failing_renders_placeholders() {
    let config = DashboardConfig::default();
    let views = ContractViews::new(StaticProvider::default(), &config).unwrap();

    let state = OverviewState::load(&views, &config).await;
    assert_eq!(state, OverviewState::default());
}

// ============================================================================
// Owner Action Tests
// ============================================================================

#[tokio::test]
async fn test_cap_checked_against_loaded_stake() {
    let config = DashboardConfig::default();
    let views = ContractViews::new(full_provider(), &config).unwrap();
    let stake = views.total_active_stake().await.unwrap();

    assert!(AdminAction::modify_delegation_cap("2500", config.denomination, Some(stake)).is_err());

    let action =
        AdminAction::modify_delegation_cap("3000", config.denomination, Some(stake)).unwrap();
    let tx = TransactionRequest::new(&action, *views.delegation_contract(), config.gas_limit);
    assert!(tx.data.starts_with("modifyTotalDelegationCap@"));
    assert_eq!(tx.receiver, config.delegation_address().unwrap());
    assert_eq!(tx.gas_limit, 12_000_000);
}
