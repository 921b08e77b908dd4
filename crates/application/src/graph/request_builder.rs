//! Request composition
//!
//! Turns an endpoint, its parameters and an optional payload into a
//! [`RequestSpec`] carrying the bearer credential.

use serde_json::{Map, Value};

use graphlink_domain::{
    ApiCredential, DomainError, DomainResult, Endpoint, FormBody, GraphApiSettings, QueryParams,
    RequestBody, RequestSpec,
};

/// Header carrying the bearer credential.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

const ACCEPT_HEADER: &str = "Accept";
const ACCEPT_JSON: &str = "application/json";
const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// Composes authenticated Graph API requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    credential: ApiCredential,
    base: String,
}

impl RequestBuilder {
    /// Creates a builder for the configured host and API version.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the settings do not describe a
    /// usable base URL.
    pub fn new(credential: ApiCredential, settings: &GraphApiSettings) -> DomainResult<Self> {
        Ok(Self {
            credential,
            base: settings.versioned_base()?,
        })
    }

    /// Returns `{base_url}/{api_version}`.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Builds a request for `endpoint`.
    ///
    /// `query` is appended after the endpoint's default query parameters.
    /// `payload` is ignored for methods without a body. Fields the endpoint
    /// lists as JSON fields are sent as JSON text; everything else is form
    /// encoded as-is.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if a path parameter is invalid, the query
    /// cannot be encoded, or a payload value cannot be serialized.
    pub fn build(
        &self,
        endpoint: &Endpoint,
        path_params: &[(&str, &str)],
        query: &QueryParams,
        payload: Option<&Map<String, Value>>,
    ) -> DomainResult<RequestSpec> {
        let path = endpoint.render_path(path_params)?;

        let mut params = endpoint.default_query();
        params.extend(query);

        let mut url = format!("{}/{path}", self.base);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.to_query_string()?);
        }

        let mut request = RequestSpec::new(endpoint.method(), url);
        request
            .headers
            .set(AUTHORIZATION_HEADER, self.credential.authorization_value());
        request.headers.set(ACCEPT_HEADER, ACCEPT_JSON);

        if endpoint.method().has_body()
            && let Some(payload) = payload
        {
            request.body = RequestBody::Form(form_body(endpoint, payload)?);
            if let Some(content_type) = request.body.content_type() {
                request.headers.set(CONTENT_TYPE_HEADER, content_type);
            }
        }

        Ok(request)
    }
}

/// Copies a payload into form fields, serializing the endpoint's JSON fields.
fn form_body(endpoint: &Endpoint, payload: &Map<String, Value>) -> DomainResult<FormBody> {
    let mut form = FormBody::new();
    for (key, value) in payload {
        let field = if endpoint.is_json_field(key) {
            Value::String(
                serde_json::to_string(value).map_err(|e| DomainError::InvalidBody(e.to_string()))?,
            )
        } else {
            value.clone()
        };
        form.insert(key.clone(), field);
    }
    Ok(form)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use graphlink_domain::HttpMethod;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const CATALOG: Endpoint =
        Endpoint::new(HttpMethod::Get, "{catalog_id}").with_query(&[("fields", "name")]);
    const ITEMS_BATCH: Endpoint = Endpoint::new(HttpMethod::Post, "{catalog_id}/items_batch")
        .with_json_fields(&["requests"]);
    const PIXEL_EVENTS: Endpoint = Endpoint::new(HttpMethod::Post, "{pixel_id}/events");

    fn builder() -> RequestBuilder {
        RequestBuilder::new(
            ApiCredential::new("test-api-key-09869asfdasf56").unwrap(),
            &GraphApiSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_get_url_and_headers() {
        let request = builder()
            .build(&CATALOG, &[("catalog_id", "2536275516506259")], &QueryParams::new(), None)
            .unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url,
            "https://graph.facebook.com/v12.0/2536275516506259?fields=name"
        );
        assert_eq!(
            request.header("Authorization"),
            Some("Bearer test-api-key-09869asfdasf56")
        );
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_extra_query_follows_defaults() {
        let request = builder()
            .build(
                &CATALOG,
                &[("catalog_id", "1")],
                &QueryParams::new().with("limit", "5"),
                None,
            )
            .unwrap();
        assert!(request.url.ends_with("/1?fields=name&limit=5"));
    }

    #[test]
    fn test_json_fields_are_serialized() {
        let payload = json!({
            "allow_upsert": true,
            "requests": [{"method": "UPDATE", "data": {"id": "woo-belt_17"}}],
            "item_type": "PRODUCT_ITEM",
        });
        let request = builder()
            .build(
                &ITEMS_BATCH,
                &[("catalog_id", "1")],
                &QueryParams::new(),
                payload.as_object(),
            )
            .unwrap();

        let form = request.body.as_form().unwrap();
        assert_eq!(form.get("allow_upsert"), Some(&json!(true)));
        assert_eq!(form.get("item_type"), Some(&json!("PRODUCT_ITEM")));
        assert_eq!(
            form.get("requests"),
            Some(&json!(r#"[{"method":"UPDATE","data":{"id":"woo-belt_17"}}]"#))
        );
        assert_eq!(
            request.header("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[test]
    fn test_other_nested_values_stay_nested() {
        let payload = json!({
            "data": [{"event_name": "Purchase", "user_data": {"fbc": "c"}}],
            "partner_agent": "woocommerce-8.0-2.6.0",
        });
        let request = builder()
            .build(
                &PIXEL_EVENTS,
                &[("pixel_id", "1")],
                &QueryParams::new(),
                payload.as_object(),
            )
            .unwrap();

        let form = request.body.as_form().unwrap();
        assert_eq!(
            form.get("data"),
            Some(&json!([{"event_name": "Purchase", "user_data": {"fbc": "c"}}]))
        );
        assert_eq!(form.get("partner_agent"), Some(&json!("woocommerce-8.0-2.6.0")));
    }

    #[test]
    fn test_payload_ignored_for_get() {
        let payload = json!({"a": 1});
        let request = builder()
            .build(&CATALOG, &[("catalog_id", "1")], &QueryParams::new(), payload.as_object())
            .unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_invalid_path_parameter() {
        let result = builder().build(&CATALOG, &[("catalog_id", "a/b")], &QueryParams::new(), None);
        assert!(matches!(result, Err(DomainError::InvalidPathParameter { .. })));
    }

    #[test]
    fn test_custom_version_and_host() {
        let settings = GraphApiSettings {
            api_version: "v18.0".to_string(),
            base_url: "http://localhost:8080/".to_string(),
            ..GraphApiSettings::default()
        };
        let builder =
            RequestBuilder::new(ApiCredential::new("token").unwrap(), &settings).unwrap();
        assert_eq!(builder.base(), "http://localhost:8080/v18.0");
    }
}
