//! End-to-end checks of the assembled envelope against a known transaction.

use thor_rust_sdk_types::transaction::{assemble, ProtoEncode, TransactionAssembler, TypeUrl};
use thor_rust_sdk_types::wire::decode_varint;

const ADDR: &str = "thor1a3eb9d2cbea51896c33209f2bb5ff979a44201a2";

/// `ADDR` to itself, memo "TEST", sequence 0, gas 200000, `/types.MsgSend`,
/// 64 zero bytes as signature.
const GOLDEN_TX: &str = "CkgKPgoOL3R5cGVzLk1zZ1NlbmQSLAoUo+udLL6lGJbDMgnyu1/5eaRCAaISFKPrnSy+pRiWwzIJ8rtf+XmkQgGiEgRURVNUGAASCgoCGAASBBDAmgwaQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

const GOLDEN_BODY_HEX: &str = "0a3e0a0e2f74797065732e4d736753656e64122c0a14a3eb9d2cbea51896c33209f2bb5ff979a44201a21214a3eb9d2cbea51896c33209f2bb5ff979a44201a21204544553541800";

#[derive(Debug, PartialEq)]
enum Field<'a> {
    Varint(u64),
    Bytes(&'a [u8]),
}

/// Splits a message into its top-level fields. Panics on anything that is
/// not a well-formed varint or length-delimited field, or if a length prefix
/// points past the end of the buffer.
fn fields(mut buf: &[u8]) -> Vec<(u64, Field<'_>)> {
    let mut out = Vec::new();
    while !buf.is_empty() {
        let (tag, used) = decode_varint(buf).expect("tag");
        buf = &buf[used..];
        let number = tag >> 3;
        assert!(number >= 1, "field number must be at least 1");
        match tag & 0x7 {
            0 => {
                let (value, used) = decode_varint(buf).expect("varint value");
                buf = &buf[used..];
                out.push((number, Field::Varint(value)));
            }
            2 => {
                let (len, used) = decode_varint(buf).expect("length prefix");
                buf = &buf[used..];
                let len = len as usize;
                assert!(len <= buf.len(), "length prefix {} overruns {}", len, buf.len());
                out.push((number, Field::Bytes(&buf[..len])));
                buf = &buf[len..];
            }
            other => panic!("unexpected wire type {}", other),
        }
    }
    out
}

fn bytes<'a>(field: &(u64, Field<'a>)) -> &'a [u8] {
    match field.1 {
        Field::Bytes(b) => b,
        Field::Varint(v) => panic!("expected bytes, got varint {}", v),
    }
}

fn golden() -> String {
    assemble(ADDR, ADDR, "TEST", 0, 200_000, TypeUrl::msg_send(), &[0u8; 64]).unwrap()
}

#[test]
fn test_golden_transport_string() {
    assert_eq!(golden(), GOLDEN_TX);
}

#[test]
fn test_golden_is_deterministic() {
    assert_eq!(golden(), golden());

    let assembler = TransactionAssembler::new()
        .sender(ADDR)
        .recipient(ADDR)
        .memo("TEST")
        .signature(vec![0u8; 64]);
    assert_eq!(assembler.assemble().unwrap(), assembler.assemble().unwrap());
    assert_eq!(assembler.assemble().unwrap(), GOLDEN_TX);
}

#[test]
fn test_body_length_prefix_matches_body() {
    let tx = TransactionAssembler::new()
        .sender(ADDR)
        .recipient(ADDR)
        .memo("TEST")
        .build()
        .unwrap();
    assert_eq!(hex::encode(&tx.body_bytes), GOLDEN_BODY_HEX);

    let raw = base64::decode(GOLDEN_TX).unwrap();
    assert_eq!(raw, tx.encode().unwrap().to_vec());
    assert_eq!(raw[0], 0x0a);
    let (len, used) = decode_varint(&raw[1..]).unwrap();
    assert_eq!(len as usize, tx.body_bytes.len());
    assert_eq!(len, 72);
    assert_eq!(&raw[1 + used..1 + used + 72], tx.body_bytes.as_bytes());
}

#[test]
fn test_every_length_prefix_is_exact() {
    let raw = base64::decode(GOLDEN_TX).unwrap();
    let addr_bytes = hex::decode(&ADDR[5..]).unwrap();

    // TxRaw
    let tx_raw = fields(&raw);
    assert_eq!(
        tx_raw.iter().map(|(n, _)| *n).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(bytes(&tx_raw[2]), &[0u8; 64][..]);

    // TxBody
    let body = fields(bytes(&tx_raw[0]));
    assert_eq!(body.len(), 3);
    assert_eq!(body[1], (2, Field::Bytes(b"TEST")));
    assert_eq!(body[2], (3, Field::Varint(0)));

    // Any
    let any = fields(bytes(&body[0]));
    assert_eq!(any[0], (1, Field::Bytes(b"/types.MsgSend")));

    // MsgSend
    let msg = fields(bytes(&any[1]));
    assert_eq!(msg.len(), 2);
    assert_eq!(bytes(&msg[0]), addr_bytes.as_slice());
    assert_eq!(bytes(&msg[1]), addr_bytes.as_slice());

    // AuthInfo
    let auth = fields(bytes(&tx_raw[1]));
    assert_eq!(auth.len(), 2);
    assert_eq!(fields(bytes(&auth[0])), vec![(3, Field::Varint(0))]);
    assert_eq!(fields(bytes(&auth[1])), vec![(2, Field::Varint(200_000))]);
}

#[test]
fn test_fields_ascend_at_every_level() {
    let tx = TransactionAssembler::new()
        .sender(ADDR)
        .recipient("thor10000000000000000000000000000000000000001")
        .memo("=:BTC.BTC:bc1qaddress")
        .sequence(42)
        .timeout_height(1_000_000)
        .type_url(TypeUrl::msg_deposit())
        .signatures(vec![vec![9; 64], vec![8; 64]])
        .build()
        .unwrap();
    let raw = tx.encode().unwrap();

    fn assert_ascending(fields: &[(u64, Field<'_>)]) {
        let numbers: Vec<u64> = fields.iter().map(|(n, _)| *n).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        assert_eq!(numbers, sorted);
    }

    let tx_raw = fields(raw.as_bytes());
    assert_ascending(&tx_raw);
    assert_eq!(tx_raw.len(), 4);

    let body = fields(bytes(&tx_raw[0]));
    assert_ascending(&body);
    assert_eq!(body[2], (3, Field::Varint(1_000_000)));

    let any = fields(bytes(&body[0]));
    assert_ascending(&any);
    assert_eq!(any[0], (1, Field::Bytes(b"/types.MsgDeposit")));

    let auth = fields(bytes(&tx_raw[1]));
    assert_ascending(&auth);
    assert_eq!(fields(bytes(&auth[0])), vec![(3, Field::Varint(42))]);
}
