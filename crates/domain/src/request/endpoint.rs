//! Graph API endpoint definitions.

use super::{HttpMethod, QueryParams};
use crate::error::{DomainError, DomainResult};

/// A relative Graph API path template paired with its HTTP method.
///
/// Templates use `{name}` placeholders, e.g. `{catalog_id}/items_batch`.
/// Endpoints are defined once per operation and never mutated. Body fields
/// listed by [`Endpoint::with_json_fields`] go out as JSON text; every other
/// body field is form encoded as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: &'static str,
    method: HttpMethod,
    default_query: &'static [(&'static str, &'static str)],
    json_fields: &'static [&'static str],
}

impl Endpoint {
    /// Creates an endpoint without default query parameters.
    #[must_use]
    pub const fn new(method: HttpMethod, path: &'static str) -> Self {
        Self {
            path,
            method,
            default_query: &[],
            json_fields: &[],
        }
    }

    /// Attaches query parameters that are always sent with this endpoint.
    #[must_use]
    pub const fn with_query(mut self, query: &'static [(&'static str, &'static str)]) -> Self {
        self.default_query = query;
        self
    }

    /// Names body fields the remote API expects as JSON text.
    #[must_use]
    pub const fn with_json_fields(mut self, fields: &'static [&'static str]) -> Self {
        self.json_fields = fields;
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns true if the body field `name` is sent as JSON text.
    #[must_use]
    pub fn is_json_field(&self, name: &str) -> bool {
        self.json_fields.contains(&name)
    }

    /// Returns the endpoint's default query parameters.
    #[must_use]
    pub fn default_query(&self) -> QueryParams {
        self.default_query
            .iter()
            .fold(QueryParams::new(), |params, (k, v)| params.with(*k, *v))
    }

    /// Substitutes `{name}` placeholders with the given values.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPathParameter`] when a placeholder has no
    /// value, or the value is empty or contains `/`, `?` or `#`.
    pub fn render_path(&self, params: &[(&str, &str)]) -> DomainResult<String> {
        let mut rendered = String::with_capacity(self.path.len());
        let mut rest = self.path;

        while let Some(start) = rest.find('{') {
            rendered.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| DomainError::InvalidPathParameter {
                name: after.to_string(),
                reason: "unterminated placeholder".to_string(),
            })?;
            let name = &after[..end];
            let value = params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
                .ok_or_else(|| DomainError::InvalidPathParameter {
                    name: name.to_string(),
                    reason: "no value supplied".to_string(),
                })?;
            validate_segment(name, value)?;
            rendered.push_str(value);
            rest = &after[end + 1..];
        }
        rendered.push_str(rest);

        Ok(rendered)
    }
}

fn validate_segment(name: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidPathParameter {
            name: name.to_string(),
            reason: "value is empty".to_string(),
        });
    }
    if value.contains(['/', '?', '#']) {
        return Err(DomainError::InvalidPathParameter {
            name: name.to_string(),
            reason: format!("`{value}` is not a single path segment"),
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PERMISSIONS: Endpoint = Endpoint::new(HttpMethod::Delete, "{user_id}/permissions/{permission}");

    #[test]
    fn test_render_multiple_placeholders() {
        let path = PERMISSIONS
            .render_path(&[
                ("user_id", "2525362755165069"),
                ("permission", "manage_business_extension"),
            ])
            .unwrap();
        assert_eq!(path, "2525362755165069/permissions/manage_business_extension");
    }

    #[test]
    fn test_render_static_path() {
        let me = Endpoint::new(HttpMethod::Get, "me");
        assert_eq!(me.render_path(&[]).unwrap(), "me");
    }

    #[test]
    fn test_missing_parameter() {
        let result = PERMISSIONS.render_path(&[("user_id", "1")]);
        assert!(matches!(
            result,
            Err(DomainError::InvalidPathParameter { name, .. }) if name == "permission"
        ));
    }

    #[test]
    fn test_rejects_traversal() {
        let catalog = Endpoint::new(HttpMethod::Get, "{catalog_id}");
        assert!(catalog.render_path(&[("catalog_id", "../me")]).is_err());
        assert!(catalog.render_path(&[("catalog_id", "")]).is_err());
        assert!(catalog.render_path(&[("catalog_id", "1?fields=x")]).is_err());
    }

    #[test]
    fn test_default_query() {
        let catalog = Endpoint::new(HttpMethod::Get, "{catalog_id}").with_query(&[("fields", "name")]);
        assert_eq!(catalog.default_query().to_query_string().unwrap(), "fields=name");
        assert_eq!(catalog.method(), HttpMethod::Get);
    }

    #[test]
    fn test_json_fields() {
        let batch = Endpoint::new(HttpMethod::Post, "{catalog_id}/items_batch")
            .with_json_fields(&["requests"]);
        assert!(batch.is_json_field("requests"));
        assert!(!batch.is_json_field("item_type"));
        assert!(!Endpoint::new(HttpMethod::Post, "{pixel_id}/events").is_json_field("data"));
    }
}
