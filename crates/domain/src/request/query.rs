//! Query parameter types

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A query parameter key-value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// The parameter key
    pub key: String,
    /// The parameter value
    pub value: String,
}

impl QueryParam {
    /// Creates a new query parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An ordered collection of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams {
    items: Vec<QueryParam>,
}

impl QueryParams {
    /// Creates an empty query parameter collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a query parameter to the collection.
    pub fn add(&mut self, param: QueryParam) {
        self.items.push(param);
    }

    /// Builder-style variant of [`QueryParams::add`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(QueryParam::new(key, value));
        self
    }

    /// Appends every parameter of `other` after the existing ones.
    pub fn extend(&mut self, other: &Self) {
        self.items.extend(other.items.iter().cloned());
    }

    /// Returns the number of parameters.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Encodes the parameters as an `application/x-www-form-urlencoded` query
    /// string, without the leading `?`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if encoding fails.
    pub fn to_query_string(&self) -> DomainResult<String> {
        let pairs: Vec<(&str, &str)> = self
            .items
            .iter()
            .map(|p| (p.key.as_str(), p.value.as_str()))
            .collect();
        serde_urlencoded::to_string(pairs).map_err(|e| DomainError::InvalidUrl(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_param_creation() {
        let param = QueryParam::new("fields", "name");
        assert_eq!(param.key, "fields");
        assert_eq!(param.value, "name");
    }

    #[test]
    fn test_query_string_simple() {
        let params = QueryParams::new().with("fields", "name");
        assert_eq!(params.to_query_string().unwrap(), "fields=name");
    }

    #[test]
    fn test_query_string_escapes_values() {
        let params = QueryParams::new()
            .with("filter", r#"{"retailer_id":{"eq":"a b"}}"#)
            .with("fields", "id,product_group{id}");

        let encoded = params.to_query_string().unwrap();
        assert!(encoded.starts_with("filter=%7B%22retailer_id%22"));
        assert!(encoded.contains("&fields=id%2Cproduct_group%7Bid%7D"));
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut params = QueryParams::new().with("a", "1");
        params.extend(&QueryParams::new().with("b", "2"));
        assert_eq!(params.to_query_string().unwrap(), "a=1&b=2");
    }
}
