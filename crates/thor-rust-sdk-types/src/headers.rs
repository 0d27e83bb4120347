/// Identifies the calling client to public RPC gateways; some reject requests without it.
pub const X_CLIENT_ID: &str = "x-client-id";
