//! The client handle shared by every endpoint module.

use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

use pharmadesk_http::{BearerAuth, Pipeline, ReqwestTransport, RequestDescriptor, Response};
use pharmadesk_session::SessionStore;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// Handle to the backend REST API.
///
/// Owns the middleware pipeline; every call goes through bearer injection,
/// so call sites never deal with the Authorization header themselves. Cheap
/// to share behind an `Arc`.
pub struct ApiClient {
    pipeline: Pipeline,
    base_url: Url,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Build a client over the given session store.
    pub fn new(config: ClientConfig, session: Arc<SessionStore>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| ApiError::ClientBuild { source })?;

        let transport = Arc::new(ReqwestTransport::new(http));
        let pipeline =
            Pipeline::new(transport).with(Arc::new(BearerAuth::new(Arc::clone(&session))));

        Ok(Self {
            pipeline,
            base_url: config.base_url,
            session,
        })
    }

    /// The session store this client reads tokens from.
    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|source| ApiError::InvalidUrl { source })
    }

    pub(crate) async fn get(&self, path: &str) -> ApiResult<Response> {
        let request = RequestDescriptor::new(Method::GET, self.endpoint(path)?);
        Ok(self.pipeline.execute(request).await?)
    }

    pub(crate) async fn post<T: Serialize>(&self, path: &str, payload: &T) -> ApiResult<Response> {
        self.dispatch(Method::POST, path, payload).await
    }

    pub(crate) async fn patch<T: Serialize>(&self, path: &str, payload: &T) -> ApiResult<Response> {
        self.dispatch(Method::PATCH, path, payload).await
    }

    pub(crate) async fn delete<T: Serialize>(&self, path: &str, payload: &T) -> ApiResult<Response> {
        self.dispatch(Method::DELETE, path, payload).await
    }

    async fn dispatch<T: Serialize>(
        &self,
        method: Method,
        path: &str,
        payload: &T,
    ) -> ApiResult<Response> {
        let request = RequestDescriptor::new(method, self.endpoint(path)?).with_json(payload)?;
        Ok(self.pipeline.execute(request).await?)
    }

    /// Turn a non-2xx response into the typed rejection, preferring the
    /// backend's `{"error": ...}` body over the bare status.
    pub(crate) fn rejection(response: &Response) -> ApiError {
        let message = response
            .json::<ErrorBody>()
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                response
                    .status()
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
        ApiError::Rejected {
            status: response.status(),
            message,
        }
    }

    /// Decode a successful body, or classify the rejection.
    pub(crate) fn expect_json<T: serde::de::DeserializeOwned>(response: &Response) -> ApiResult<T> {
        if response.is_success() {
            Ok(response.json::<T>()?)
        } else {
            Err(Self::rejection(response))
        }
    }

    /// Discard a successful body, or classify the rejection.
    pub(crate) fn expect_ok(response: &Response) -> ApiResult<()> {
        if response.is_success() {
            Ok(())
        } else {
            Err(Self::rejection(response))
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Lookup selector for the two-segment `GET /{entity}/{params}/{val}`
/// listing routes (`/user`, `/supplier`, `/medicine`).
///
/// The backend treats the literal value `all` as "no filter"; the other
/// variants map onto the filter names the mux routes expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    /// Every record.
    All,
    /// One record by numeric id.
    Id(i64),
    /// Records whose name matches the given fragment.
    Name(String),
    /// Records whose phone number matches the given fragment.
    PhoneNumber(String),
}

impl SearchFilter {
    /// The `{params}/{val}` path suffix for this filter.
    #[must_use]
    pub fn path_suffix(&self) -> String {
        match self {
            Self::All => "all/all".to_string(),
            Self::Id(id) => format!("id/{id}"),
            Self::Name(name) => format!("name/{name}"),
            Self::PhoneNumber(number) => format!("phone-number/{number}"),
        }
    }
}

/// Lookup selector for the single-segment `GET /{entity}/{val}` listing
/// routes (`/customer`, `/doctor`, `/patient`).
///
/// These route families take no `{params}` segment: the value is either the
/// literal `all` or a name fragment to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    /// Every record.
    All,
    /// Records whose name matches the given fragment.
    Name(String),
}

impl NameFilter {
    /// The `{val}` path segment for this filter.
    #[must_use]
    pub fn path_segment(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Name(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_filter_maps_to_route_segments() {
        assert_eq!(SearchFilter::All.path_suffix(), "all/all");
        assert_eq!(SearchFilter::Id(7).path_suffix(), "id/7");
        assert_eq!(
            SearchFilter::Name("doe".to_string()).path_suffix(),
            "name/doe"
        );
        assert_eq!(
            SearchFilter::PhoneNumber("0812".to_string()).path_suffix(),
            "phone-number/0812"
        );
    }

    #[test]
    fn name_filter_is_a_single_segment() {
        assert_eq!(NameFilter::All.path_segment(), "all");
        assert_eq!(NameFilter::Name("doe".to_string()).path_segment(), "doe");
    }
}
