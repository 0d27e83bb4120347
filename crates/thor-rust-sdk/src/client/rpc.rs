use crate::client::builder::ThorClientBuilder;
use crate::client::config::ThorNetwork;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client as ReqwestClient;
use thor_rust_sdk_types::api_types::broadcast::{
    broadcast_tx_sync_request, BroadcastTxResult, JsonRpcResponse,
};
use thor_rust_sdk_types::transaction::TxRaw;
use thor_rust_sdk_types::{ThorError, ThorResult};
use tracing::{debug, info, warn};

const JSON_CONTENT_TYPE: &str = "application/json";
const REQUEST_ID: u64 = 1;

/// Anything that can put an encoded transaction on the network.
///
/// [`ThorRpcClient`] talks to a node directly; other implementations can route
/// through a relayer, a queue or a test double.
#[async_trait]
pub trait Broadcaster: Send + Sync {
    /// Broadcasts a base64 encoded transaction and returns the node's verdict.
    ///
    /// A rejection by the chain comes back as `Ok` with a non-zero code.
    async fn broadcast_tx_sync(&self, encoded_tx: &str) -> ThorResult<BroadcastTxResult>;

    /// Encodes `tx` and broadcasts it. Encoding errors are returned before
    /// any request is made.
    async fn broadcast_envelope(&self, tx: &TxRaw) -> ThorResult<BroadcastTxResult> {
        let encoded = tx.to_base64()?;
        self.broadcast_tx_sync(&encoded).await
    }
}

/// JSON-RPC client for a THORChain (Tendermint/CometBFT) RPC endpoint.
#[derive(Debug, Clone)]
pub struct ThorRpcClient {
    network: ThorNetwork,
    rpc_client: ReqwestClient,
}

impl ThorRpcClient {
    pub(crate) fn new(network: ThorNetwork, rpc_client: ReqwestClient) -> Self {
        Self {
            network,
            rpc_client,
        }
    }

    /// Create a builder for the `ThorRpcClient`
    pub fn builder(network: ThorNetwork) -> ThorClientBuilder {
        ThorClientBuilder::new(network, None)
    }

    pub fn network(&self) -> &ThorNetwork {
        &self.network
    }
}

#[async_trait]
impl Broadcaster for ThorRpcClient {
    async fn broadcast_tx_sync(&self, encoded_tx: &str) -> ThorResult<BroadcastTxResult> {
        let request = broadcast_tx_sync_request(REQUEST_ID, encoded_tx);
        debug!(
            network = self.network.name(),
            url = %self.network.rpc_url(),
            size = encoded_tx.len(),
            "Broadcasting transaction"
        );

        let response = self
            .rpc_client
            .post(self.network.rpc_url().clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ThorError::api(status.as_u16(), message));
        }

        let body: JsonRpcResponse<BroadcastTxResult> = response.json().await?;
        let result = body.into_result()?;

        match result.rejection() {
            None => info!(txn_hash = %result.hash, "Transaction accepted"),
            Some(rejection) => warn!(
                code = rejection.code,
                codespace = %rejection.codespace,
                log = %rejection.log,
                txn_hash = %rejection.hash,
                "Transaction rejected by chain"
            ),
        }

        Ok(result)
    }
}
