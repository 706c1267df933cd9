//! # Reference Digest Vectors
//!
//! Pins `DocumentBytes` + `sha256_digest` to vectors produced by a
//! reference JavaScript serializer (`JSON.stringify` followed by
//! `crypto.createHash("sha256")`). Web clients recompute certificate hashes
//! that way, so these must agree byte-for-byte.

use bcert_core::{sha256_digest, sha256_hex, DocumentBytes};
use serde_json::json;

fn digest_of(value: &serde_json::Value) -> String {
    let bytes = DocumentBytes::new(value).expect("serialization should succeed");
    sha256_digest(&bytes).to_hex()
}

#[test]
fn unsorted_object_matches_reference() {
    // JSON.stringify({b: 2, a: 1, c: "hello"})
    let value = json!({"b": 2, "a": 1, "c": "hello"});
    let bytes = DocumentBytes::new(&value).unwrap();
    assert_eq!(bytes.as_bytes(), br#"{"b":2,"a":1,"c":"hello"}"#);
    assert_eq!(
        digest_of(&value),
        "9dce46c3b6295601f59e69fd33d0e01e8112c633184332094c414838cfa23ccc"
    );
}

#[test]
fn empty_object_matches_reference() {
    assert_eq!(
        digest_of(&json!({})),
        "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
    );
}

#[test]
fn hex_helper_agrees_with_digest() {
    let bytes = DocumentBytes::new(&json!({"x": [1, 2, 3]})).unwrap();
    assert_eq!(sha256_hex(&bytes), sha256_digest(&bytes).to_hex());
}
