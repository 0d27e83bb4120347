use thor_rust_sdk_types::ThorResult;
use url::Url;

const MAINNET_RPC_URL: &str = "https://rpc.ninerealms.com";
const STAGENET_RPC_URL: &str = "https://stagenet-rpc.ninerealms.com";
const LOCAL_RPC_URL: &str = "http://127.0.0.1:26657";

/// Sent as `X-Client-ID` unless overridden. Nine Realms gateways rate limit
/// anonymous callers.
pub const DEFAULT_CLIENT_ID: &str = concat!("thor-rust-sdk/", env!("CARGO_PKG_VERSION"));

/// An immutable definition of a network configuration
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ThorNetwork {
    name: &'static str,
    rpc_url: Url,
    client_id: String,
}

impl ThorNetwork {
    pub fn new(name: &'static str, rpc_url: Url) -> ThorNetwork {
        ThorNetwork {
            name,
            rpc_url,
            client_id: DEFAULT_CLIENT_ID.to_string(),
        }
    }

    pub fn mainnet() -> Self {
        Self::new("mainnet", Url::parse(MAINNET_RPC_URL).unwrap())
    }

    pub fn stagenet() -> Self {
        Self::new("stagenet", Url::parse(STAGENET_RPC_URL).unwrap())
    }

    pub fn localnet() -> Self {
        Self::new("localnet", Url::parse(LOCAL_RPC_URL).unwrap())
    }

    /// A network at an arbitrary RPC endpoint.
    pub fn custom(rpc_url: &str) -> ThorResult<Self> {
        Ok(Self::new("custom", Url::parse(rpc_url)?))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn with_rpc_url(mut self, rpc_url: Url) -> Self {
        self.rpc_url = rpc_url;
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }
}
