//! Miscellaneous common types used throughout the Paysafe codebase.

/// Represents a key-value mapping in a Paysafe payload. The key is a `String`.
pub type Record<V> = std::collections::HashMap<String, V>;

/// Represents any JSON value. Used for serializing/deserializing arbitrary JSON data.
pub type AnyJson = serde_json::Value;
