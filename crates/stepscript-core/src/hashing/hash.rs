//! blake3 sobre el JSON canónico: es la base de `TranspiledCode::fingerprint`.

use serde_json::Value;

use super::to_canonical_json;

/// Hash hex (64 caracteres) de un string.
pub fn hash_str(input: &str) -> String {
    blake3::hash(input.as_bytes()).to_hex().to_string()
}

/// Hash del JSON canonicalizado (independiente del orden de claves).
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_order_does_not_change_the_hash() {
        let a = hash_value(&json!({"code": ["x = 1"], "imports": "i"}));
        let b = hash_value(&json!({"imports": "i", "code": ["x = 1"]}));
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_ne!(a, hash_value(&json!({"imports": "i", "code": ["x = 2"]})));
    }
}
