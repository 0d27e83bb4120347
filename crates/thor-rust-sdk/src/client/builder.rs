use crate::client::config::ThorNetwork;
use crate::client::rpc::ThorRpcClient;
use reqwest::{
    header::{self, HeaderMap, HeaderName, HeaderValue},
    Client as ReqwestClient, ClientBuilder as ReqwestClientBuilder,
};
use std::str::FromStr;
use std::time::Duration;
use thor_rust_sdk_types::headers::X_CLIENT_ID;
use thor_rust_sdk_types::ThorResult;

const USER_AGENT_VALUE: &str = concat!("thor-rust-sdk/", env!("CARGO_PKG_VERSION"));
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

pub struct ThorClientBuilder {
    rpc_client_builder: ReqwestClientBuilder,
    network: ThorNetwork,
    timeout: Duration,
    headers: HeaderMap,
}

impl ThorClientBuilder {
    /// A hidden constructor, please use `ThorRpcClient::builder()` to create
    pub fn new(network: ThorNetwork, headers: Option<&HeaderMap>) -> Self {
        let mut headers = headers.cloned().unwrap_or_default();
        let mut network = network;
        if let Some(client_id) = headers.remove(X_CLIENT_ID) {
            match client_id.to_str().map(str::to_owned) {
                Ok(id) => network = network.with_client_id(id),
                Err(_) => {
                    headers.insert(HeaderName::from_static(X_CLIENT_ID), client_id);
                }
            }
        }

        Self {
            rpc_client_builder: ReqwestClient::builder(),
            network,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            headers,
        }
    }

    pub fn network(mut self, network: ThorNetwork) -> Self {
        self.network = network;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the `X-Client-ID` taken from the network.
    pub fn client_id(mut self, client_id: &str) -> Self {
        self.network = self.network.with_client_id(client_id);
        self
    }

    /// Adds a default header. `X-Client-ID` is routed to the network's client
    /// id, so the last of `header` and `client_id` wins.
    pub fn header(mut self, header_key: &str, header_val: &str) -> ThorResult<Self> {
        let name = HeaderName::from_str(header_key)?;
        let value = HeaderValue::from_str(header_val)?;
        if name == X_CLIENT_ID {
            self.headers.remove(X_CLIENT_ID);
            self.network = self.network.with_client_id(header_val);
        } else {
            self.headers.insert(name, value);
        }
        Ok(self)
    }

    pub fn build(self) -> ThorResult<ThorRpcClient> {
        let mut headers = self.headers;
        if !headers.contains_key(X_CLIENT_ID) {
            headers.insert(
                HeaderName::from_static(X_CLIENT_ID),
                HeaderValue::from_str(self.network.client_id())?,
            );
        }
        headers
            .entry(header::USER_AGENT)
            .or_insert(HeaderValue::from_static(USER_AGENT_VALUE));

        let rpc_client = self
            .rpc_client_builder
            .default_headers(headers)
            .timeout(self.timeout)
            .build()?;

        Ok(ThorRpcClient::new(self.network, rpc_client))
    }
}

impl std::fmt::Debug for ThorClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThorClientBuilder")
            .field("network", &self.network)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
