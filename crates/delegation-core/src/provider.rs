//! Network calls made by the dashboard.
//!
//! [`NetworkProvider`] is the seam between the view code and the network:
//! the desktop app and CLI use [`ProxyProvider`] over HTTP, tests plug in
//! an in-memory implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::query::{Query, QueryResponse, RawQueryResponse};
use crate::types::NetworkStake;

/// Code the proxy puts in its envelope when the request was handled.
const PROXY_CODE_SUCCESSFUL: &str = "successful";

/// Read-only access to the chain.
#[async_trait]
pub trait NetworkProvider: Send + Sync {
    /// Run a contract view function.
    async fn query_contract(&self, query: &Query) -> DashboardResult<QueryResponse>;

    /// Network-wide staking statistics.
    async fn get_network_stake(&self) -> DashboardResult<NetworkStake>;
}

#[async_trait]
impl<P: NetworkProvider + ?Sized> NetworkProvider for Arc<P> {
    async fn query_contract(&self, query: &Query) -> DashboardResult<QueryResponse> {
        (**self).query_contract(query).await
    }

    async fn get_network_stake(&self) -> DashboardResult<NetworkStake> {
        (**self).get_network_stake().await
    }
}

#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    #[serde(default)]
    data: Option<ProxyData>,
    #[serde(default)]
    error: String,
    #[serde(default)]
    code: String,
}

#[derive(Debug, Deserialize)]
struct ProxyData {
    data: RawQueryResponse,
}

/// HTTP provider talking to the gateway (queries) and the API (stake).
#[derive(Clone, Debug)]
pub struct ProxyProvider {
    client: Client,
    gateway_address: String,
    api_address: String,
}

impl ProxyProvider {
    pub fn new(config: &DashboardConfig) -> DashboardResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.request_timeout_secs.min(5)))
            .build()?;

        Ok(Self {
            client,
            gateway_address: config.network.gateway_address.trim_end_matches('/').to_string(),
            api_address: config.network.api_address.trim_end_matches('/').to_string(),
        })
    }

    pub fn gateway_address(&self) -> &str {
        &self.gateway_address
    }

    pub fn api_address(&self) -> &str {
        &self.api_address
    }
}

#[async_trait]
impl NetworkProvider for ProxyProvider {
    async fn query_contract(&self, query: &Query) -> DashboardResult<QueryResponse> {
        let url = format!("{}/vm-values/query", self.gateway_address);
        tracing::debug!(func = %query.func, contract = %query.address, "Querying contract");

        let response = self.client.post(&url).json(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let envelope: ProxyEnvelope = serde_json::from_str(&body).map_err(|e| {
            if status.is_success() {
                DashboardError::Serialization(e)
            } else {
                DashboardError::ContractQuery {
                    func: query.func.to_string(),
                    code: status.to_string(),
                    message: body.clone(),
                }
            }
        })?;

        decode_envelope(query, envelope)
    }

    async fn get_network_stake(&self) -> DashboardResult<NetworkStake> {
        let url = format!("{}/stake", self.api_address);
        tracing::debug!(url = %url, "Fetching network stake");

        let stake = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<NetworkStake>()
            .await?;
        Ok(stake)
    }
}

fn decode_envelope(query: &Query, envelope: ProxyEnvelope) -> DashboardResult<QueryResponse> {
    if envelope.code != PROXY_CODE_SUCCESSFUL {
        return Err(DashboardError::ContractQuery {
            func: query.func.to_string(),
            code: envelope.code,
            message: envelope.error,
        });
    }

    let data = envelope
        .data
        .ok_or_else(|| DashboardError::MalformedResponse("missing data".to_string()))?;
    let response = QueryResponse::try_from(data.data)?;

    if !response.is_success() {
        return Err(DashboardError::ContractQuery {
            func: query.func.to_string(),
            code: response.return_code,
            message: response.return_message,
        });
    }
    Ok(response)
}
