//! Pixel payload mutation port

use serde_json::{Map, Value};

/// Hook that may rewrite the full pixel events payload right before it is
/// sent.
///
/// The payload has the shape `{ "data": [...events], "partner_agent": "..." }`.
/// Whatever the hook returns is exactly what goes over the wire. Closures of
/// type `Fn(Map<String, Value>) -> Map<String, Value>` implement this trait.
pub trait PayloadMutator: Send + Sync {
    /// Returns the payload to send.
    fn mutate(&self, payload: Map<String, Value>) -> Map<String, Value>;
}

impl<F> PayloadMutator for F
where
    F: Fn(Map<String, Value>) -> Map<String, Value> + Send + Sync,
{
    fn mutate(&self, payload: Map<String, Value>) -> Map<String, Value> {
        self(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_closure_is_a_mutator() {
        let mutator = |mut payload: Map<String, Value>| {
            payload.insert("test_event_code".to_string(), json!("TEST123"));
            payload
        };

        let out = mutator.mutate(Map::new());
        assert_eq!(out.get("test_event_code"), Some(&json!("TEST123")));
    }
}
