//! Graph API client
//!
//! Each operation is one round trip: build the request, send it through the
//! transport, decode the body, project it onto a typed view.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use graphlink_domain::{
    ApiCredential, BatchEnvelope, BatchRequestStatus, Catalog, DomainError, Endpoint, Event,
    GraphApiSettings, GraphUser, HttpMethod, ItemsBatchHandles, Page, PixelEventsReceipt,
    ProductIds, QueryParams, RawResponse, RequestSpec, StatusCode, SuccessResult,
};

use super::decoder::{decode, project};
use super::normalizer::events_payload;
use super::request_builder::RequestBuilder;
use crate::error::{GraphApiError, GraphApiResult};
use crate::ports::{PayloadMutator, Transport, TransportError};

const CATALOG: Endpoint = Endpoint::new(HttpMethod::Get, "{catalog_id}").with_query(&[("fields", "name")]);
const CATALOG_CHECK: Endpoint = Endpoint::new(HttpMethod::Get, "{catalog_id}");
const ME: Endpoint = Endpoint::new(HttpMethod::Get, "me");
const USER_PERMISSION: Endpoint =
    Endpoint::new(HttpMethod::Delete, "{user_id}/permissions/{permission}");
const ITEMS_BATCH: Endpoint =
    Endpoint::new(HttpMethod::Post, "{catalog_id}/items_batch").with_json_fields(&["requests"]);
const PIXEL_EVENTS: Endpoint = Endpoint::new(HttpMethod::Post, "{pixel_id}/events");
const PAGE: Endpoint = Endpoint::new(HttpMethod::Get, "{page_id}").with_query(&[("fields", "name,link")]);
const BATCH_STATUS: Endpoint =
    Endpoint::new(HttpMethod::Get, "{catalog_id}/check_batch_request_status");
const CATALOG_PRODUCTS: Endpoint = Endpoint::new(HttpMethod::Get, "{catalog_id}/products")
    .with_query(&[("fields", "id,product_group{id}")]);
const PRODUCT_ITEM: Endpoint = Endpoint::new(HttpMethod::Delete, "{product_item_id}");

/// Client for the commerce Graph API.
///
/// Holds only immutable state, so one instance can serve concurrent calls.
pub struct GraphApiClient<T: Transport> {
    transport: Arc<T>,
    requests: RequestBuilder,
    settings: GraphApiSettings,
    payload_mutator: Option<Arc<dyn PayloadMutator>>,
}

impl<T: Transport> GraphApiClient<T> {
    /// Creates a client.
    ///
    /// # Errors
    ///
    /// Returns [`GraphApiError::InvalidRequest`] if the settings do not
    /// describe a usable base URL.
    pub fn new(
        transport: Arc<T>,
        credential: ApiCredential,
        settings: GraphApiSettings,
    ) -> GraphApiResult<Self> {
        let requests = RequestBuilder::new(credential, &settings)?;
        Ok(Self {
            transport,
            requests,
            settings,
            payload_mutator: None,
        })
    }

    /// Registers the hook applied to pixel event payloads before sending.
    ///
    /// Replaces any previously registered hook.
    #[must_use]
    pub fn with_payload_mutator(mut self, mutator: impl PayloadMutator + 'static) -> Self {
        self.payload_mutator = Some(Arc::new(mutator));
        self
    }

    /// Fetches a catalog's id and name.
    ///
    /// # Errors
    ///
    /// Fails with any [`GraphApiError`] variant.
    pub async fn get_catalog(&self, catalog_id: &str) -> GraphApiResult<Catalog> {
        self.execute(&CATALOG, &[("catalog_id", catalog_id)], &QueryParams::new(), None)
            .await
    }

    /// Returns whether the catalog is reachable with the current credential.
    ///
    /// Only the status is inspected: 200 means valid, anything else invalid.
    ///
    /// # Errors
    ///
    /// Returns [`GraphApiError::Transport`] if the request could not be sent,
    /// or [`GraphApiError::InvalidRequest`] for a bad catalog id.
    pub async fn is_product_catalog_valid(&self, catalog_id: &str) -> GraphApiResult<bool> {
        let request = self.requests.build(
            &CATALOG_CHECK,
            &[("catalog_id", catalog_id)],
            &QueryParams::new(),
            None,
        )?;
        let response = self.send(&request).await?;
        Ok(response.status == StatusCode::OK)
    }

    /// Fetches the user the credential belongs to.
    ///
    /// # Errors
    ///
    /// Fails with any [`GraphApiError`] variant.
    pub async fn get_user(&self) -> GraphApiResult<GraphUser> {
        self.execute(&ME, &[], &QueryParams::new(), None).await
    }

    /// Revokes one permission previously granted by a user.
    ///
    /// # Errors
    ///
    /// Fails with any [`GraphApiError`] variant.
    pub async fn revoke_user_permission(
        &self,
        user_id: &str,
        permission: &str,
    ) -> GraphApiResult<SuccessResult> {
        self.execute(
            &USER_PERMISSION,
            &[("user_id", user_id), ("permission", permission)],
            &QueryParams::new(),
            None,
        )
        .await
    }

    /// Submits a batch of item operations to a catalog.
    ///
    /// # Errors
    ///
    /// Fails with any [`GraphApiError`] variant.
    pub async fn send_item_updates(
        &self,
        catalog_id: &str,
        envelope: &BatchEnvelope,
    ) -> GraphApiResult<ItemsBatchHandles> {
        let payload = to_payload(envelope)?;
        debug!(catalog_id, items = envelope.len(), "Sending item updates");
        self.execute(
            &ITEMS_BATCH,
            &[("catalog_id", catalog_id)],
            &QueryParams::new(),
            Some(&payload),
        )
        .await
    }

    /// Sends pixel events.
    ///
    /// Events are normalized into a copy; the caller's events are left as
    /// they were. A registered payload mutator sees the full payload last.
    ///
    /// # Errors
    ///
    /// Fails with any [`GraphApiError`] variant.
    pub async fn send_pixel_events(
        &self,
        pixel_id: &str,
        events: &[Event],
    ) -> GraphApiResult<PixelEventsReceipt> {
        let payload = events_payload(events, &self.settings.partner_agent());
        let payload = match &self.payload_mutator {
            Some(mutator) => mutator.mutate(payload),
            None => payload,
        };
        debug!(pixel_id, events = events.len(), "Sending pixel events");
        self.execute(
            &PIXEL_EVENTS,
            &[("pixel_id", pixel_id)],
            &QueryParams::new(),
            Some(&payload),
        )
        .await
    }

    /// Fetches a page's name and link.
    ///
    /// # Errors
    ///
    /// Fails with any [`GraphApiError`] variant.
    pub async fn get_page(&self, page_id: &str) -> GraphApiResult<Page> {
        self.execute(&PAGE, &[("page_id", page_id)], &QueryParams::new(), None)
            .await
    }

    /// Fetches the processing status of an items batch.
    ///
    /// # Errors
    ///
    /// Fails with any [`GraphApiError`] variant.
    pub async fn get_batch_requests_status(
        &self,
        catalog_id: &str,
        handle: &str,
    ) -> GraphApiResult<BatchRequestStatus> {
        self.execute(
            &BATCH_STATUS,
            &[("catalog_id", catalog_id)],
            &QueryParams::new().with("handle", handle),
            None,
        )
        .await
    }

    /// Looks up the remote product item and group ids for a retailer id.
    ///
    /// # Errors
    ///
    /// Fails with any [`GraphApiError`] variant.
    pub async fn get_product_ids(
        &self,
        catalog_id: &str,
        retailer_id: &str,
    ) -> GraphApiResult<ProductIds> {
        let filter = json!({ "retailer_id": { "eq": retailer_id } }).to_string();
        self.execute(
            &CATALOG_PRODUCTS,
            &[("catalog_id", catalog_id)],
            &QueryParams::new().with("filter", filter),
            None,
        )
        .await
    }

    /// Deletes a product item by its remote id.
    ///
    /// # Errors
    ///
    /// Fails with any [`GraphApiError`] variant.
    pub async fn delete_product_item(&self, product_item_id: &str) -> GraphApiResult<SuccessResult> {
        self.execute(
            &PRODUCT_ITEM,
            &[("product_item_id", product_item_id)],
            &QueryParams::new(),
            None,
        )
        .await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        path_params: &[(&str, &str)],
        query: &QueryParams,
        payload: Option<&Map<String, Value>>,
    ) -> GraphApiResult<R> {
        let request = self.requests.build(endpoint, path_params, query, payload)?;
        let body = decode(self.send(&request).await).inspect_err(|e| {
            if let GraphApiError::Remote {
                code,
                subcode,
                fbtrace_id,
                ..
            } = e
            {
                warn!(
                    url = %request.url,
                    code,
                    subcode,
                    fbtrace_id = fbtrace_id.as_deref(),
                    "Graph API returned an error"
                );
            }
        })?;
        project(body)
    }

    async fn send(&self, request: &RequestSpec) -> Result<RawResponse, TransportError> {
        debug!(method = %request.method, url = %request.url, "Sending Graph API request");
        let result = self.transport.send(request).await;
        match &result {
            Ok(response) => debug!(status = %response.status, "Received Graph API response"),
            Err(e) => debug!(error = %e, "Graph API transport failed"),
        }
        result
    }
}

fn to_payload(envelope: &BatchEnvelope) -> GraphApiResult<Map<String, Value>> {
    match serde_json::to_value(envelope) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(DomainError::InvalidBody("batch envelope is not an object".to_string()).into()),
        Err(e) => Err(DomainError::InvalidBody(e.to_string()).into()),
    }
}
