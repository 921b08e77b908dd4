//! Outbound request types: methods, headers, query strings, endpoint
//! templates and the composed [`RequestSpec`].

mod body;
mod endpoint;
mod header;
mod method;
mod query;
mod spec;

pub use body::{FormBody, RequestBody};
pub use endpoint::Endpoint;
pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use query::{QueryParam, QueryParams};
pub use spec::RequestSpec;
