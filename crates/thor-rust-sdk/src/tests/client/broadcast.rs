use crate::client::config::ThorNetwork;
use crate::client::rpc::{Broadcaster, ThorRpcClient};
use serde_json::json;
use thor_rust_sdk_types::transaction::{TransactionAssembler, TypeUrl};
use thor_rust_sdk_types::ThorError;
use wiremock::{
    matchers::{body_json, method},
    Mock, MockServer, ResponseTemplate,
};

const ADDR: &str = "thor1a3eb9d2cbea51896c33209f2bb5ff979a44201a2";

async fn build_and_broadcast(
    client: &ThorRpcClient,
    assembler: TransactionAssembler,
) -> Result<u32, ThorError> {
    let encoded = assembler.assemble()?;
    Ok(client.broadcast_tx_sync(&encoded).await?.code)
}

#[tokio::test]
async fn test_local_error_prevents_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = ThorRpcClient::builder(ThorNetwork::custom(&server.uri()).unwrap())
        .build()
        .unwrap();
    let assembler = TransactionAssembler::new()
        .sender(ADDR)
        .recipient("thor1not-hex");

    let err = build_and_broadcast(&client, assembler).await.unwrap_err();
    assert!(err.is_local());
    assert!(matches!(err, ThorError::AddressFormat(_)));
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[tokio::test]
async fn test_deposit_type_url_roundtrip_through_mock() {
    let server = MockServer::start().await;
    let memo = "=:ETH.ETH:0x0000000000000000000000000000000000000000";
    let assembler = TransactionAssembler::new()
        .sender(ADDR)
        .recipient(ADDR)
        .type_url(TypeUrl::msg_deposit())
        .memo(memo);

    let tx = assembler.build().unwrap();
    let body = tx.body_bytes.as_bytes();
    assert!(contains(body, TypeUrl::MSG_DEPOSIT.as_bytes()));
    assert!(!contains(body, TypeUrl::MSG_SEND.as_bytes()));
    assert!(contains(body, memo.as_bytes()));

    let encoded = tx.to_base64().unwrap();
    assert_eq!(assembler.assemble().unwrap(), encoded);

    Mock::given(method("POST"))
        .and(body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "broadcast_tx_sync",
            "params": { "tx": encoded }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "code": 0, "log": "", "hash": "CAFE" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ThorRpcClient::builder(ThorNetwork::custom(&server.uri()).unwrap())
        .build()
        .unwrap();
    assert_eq!(build_and_broadcast(&client, assembler).await.unwrap(), 0);
}

// Talks to the public stagenet. The sender holds no funds, so the chain is
// expected to answer with a rejection rather than an acceptance.
#[tokio::test]
#[ignore]
async fn test_stagenet_broadcast() {
    let client = ThorRpcClient::builder(ThorNetwork::stagenet())
        .build()
        .expect("client should build");

    let tx = TransactionAssembler::new()
        .sender(ADDR)
        .recipient(ADDR)
        .memo("TEST")
        .build()
        .unwrap();

    let result = client
        .broadcast_envelope(&tx)
        .await
        .expect("stagenet should answer");
    println!("Stagenet response {:?}", result);
    assert!(!result.log.contains("illegal tag 0"));
}
