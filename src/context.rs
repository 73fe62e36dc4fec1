//! Dashboard context provider.
//!
//! Built once in `main` and handed to the root of the app, so every
//! component reaches the same config and contract views.
//!
//! ## Usage
//!
//! ```ignore
//! let ctx = use_dashboard();
//! let views = ctx.views.clone();
//! spawn(async move {
//!     let stake = views.total_active_stake().await;
//! });
//! ```

use std::sync::Arc;

use delegation_core::{
    AdminAction, ContractViews, DashboardConfig, DashboardResult, NetworkProvider, ProxyProvider,
    TransactionRequest,
};
use dioxus::prelude::*;

/// Views over whichever provider the app was started with.
pub type SharedViews = Arc<ContractViews<Arc<dyn NetworkProvider>>>;

/// Config and contract views shared by all components.
#[derive(Clone)]
pub struct DashboardContext {
    pub config: Arc<DashboardConfig>,
    pub views: SharedViews,
}

/// A transaction ready to be signed in the web wallet.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedTransaction {
    pub request: TransactionRequest,
    pub wallet_url: String,
}

impl DashboardContext {
    /// Context talking to the configured gateway and API over HTTP.
    pub fn connect(config: DashboardConfig) -> DashboardResult<Self> {
        let provider: Arc<dyn NetworkProvider> = Arc::new(ProxyProvider::new(&config)?);
        Self::with_provider(config, provider)
    }

    pub fn with_provider(
        config: DashboardConfig,
        provider: Arc<dyn NetworkProvider>,
    ) -> DashboardResult<Self> {
        let views = ContractViews::new(provider, &config)?;
        Ok(Self {
            config: Arc::new(config),
            views: Arc::new(views),
        })
    }

    /// Build the unsigned transaction and wallet link for an owner action.
    pub fn prepare(&self, action: &AdminAction) -> DashboardResult<PreparedTransaction> {
        let request = TransactionRequest::new(
            action,
            *self.views.delegation_contract(),
            self.config.gas_limit,
        );
        let wallet_url = request
            .wallet_hook_url(
                &self.config.network.wallet_address,
                &self.config.contract_explorer_url(),
            )?
            .to_string();

        tracing::info!(data = %request.data, "Prepared owner transaction");
        Ok(PreparedTransaction {
            request,
            wallet_url,
        })
    }
}

/// Hook to access the dashboard context.
pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use async_trait::async_trait;
    use delegation_core::{DashboardError, NetworkStake, Query, QueryResponse};

    /// Provider that fails every call.
    pub struct OfflineProvider;

    #[async_trait]
    impl NetworkProvider for OfflineProvider {
        async fn query_contract(&self, query: &Query) -> DashboardResult<QueryResponse> {
            Err(DashboardError::ContractQuery {
                func: query.func.to_string(),
                code: "offline".to_string(),
                message: "no network in tests".to_string(),
            })
        }

        async fn get_network_stake(&self) -> DashboardResult<NetworkStake> {
            Err(DashboardError::MalformedResponse("offline".to_string()))
        }
    }

    pub fn offline_context(config: DashboardConfig) -> DashboardContext {
        DashboardContext::with_provider(config, Arc::new(OfflineProvider)).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::offline_context;
    use super::*;

    #[test]
    fn prepare_builds_wallet_link() {
        let ctx = offline_context(DashboardConfig::default());
        let prepared = ctx
            .prepare(&AdminAction::change_service_fee("10").unwrap())
            .unwrap();

        assert_eq!(prepared.request.data, "changeServiceFee@03e8");
        assert_eq!(prepared.request.gas_limit, 12_000_000);
        assert!(prepared
            .wallet_url
            .starts_with("https://wallet.elrond.com/hook/transaction?"));
        assert!(prepared.wallet_url.contains("gasLimit=12000000"));
        assert!(prepared.wallet_url.contains("callbackUrl=https%3A%2F%2Fexplorer.elrond.com"));
    }
}
