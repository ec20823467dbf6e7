//! Cache Key Module
//!
//! Deterministic key derivation from an operation name and its parameters.

use serde_json::Value;

// == Key Generation ==
/// Derives the cache key for an operation call.
///
/// The parameter value is serialized in a canonical form (object keys sorted
/// recursively), digested with CRC32, and rendered as 8 lowercase hex
/// characters: `operation:digest`. Two calls with the same operation and the
/// same parameter set produce the same key regardless of the order the
/// parameters were supplied in.
///
/// The digest is short and non-cryptographic; distinct parameter sets can in
/// principle collide, which is accepted at the scale of thousands of entries
/// rather than detected.
pub fn cache_key(operation: &str, params: &Value) -> String {
    let mut canonical = String::new();
    write_canonical(params, &mut canonical);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(canonical.as_bytes());

    format!("{}:{:08x}", operation, hasher.finalize())
}

/// Serializes a JSON value with object keys in sorted order, recursively.
///
/// `serde_json`'s default map keeps keys sorted already, but the contract
/// here is key stability, so the ordering is enforced rather than assumed.
fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut pairs: Vec<(&String, &Value)> = map.iter().collect();
            pairs.sort_by_key(|(name, _)| name.as_str());

            out.push('{');
            for (i, (name, item)) in pairs.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String((*name).clone()).to_string());
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}
