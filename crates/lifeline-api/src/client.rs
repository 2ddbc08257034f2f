// Async HTTP client for the Lifeline content backend.
//
// Base: {origin}/api/{resource}
// Envelope: `{ data: ... }` or a bare array/object

use reqwest::header::{ACCEPT, CACHE_CONTROL, PRAGMA};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use crate::Error;
use crate::body::RequestBody;
use crate::error::status_message;
use crate::resource::Resource;
use crate::transport::TransportConfig;

const JSON: &str = "application/json";
const NO_CACHE: &str = "no-cache";

// ── Client ───────────────────────────────────────────────────────────

/// Raw JSON client for the content backend.
///
/// Returns unwrapped payloads as `serde_json::Value`; shaping records
/// into domain types is the caller's job. Every call is independent and
/// nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
    timeout_secs: u64,
}

impl RestClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a backend origin (e.g. `https://backend.example.com`).
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Url::parse(base_url)?;
        Ok(Self {
            http,
            base_url,
            timeout_secs: transport.timeout.as_secs(),
        })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            timeout_secs: 0,
        }
    }

    /// The backend origin.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// `{origin}{prefix}{resource}` or `{origin}{prefix}{resource}/{id}`.
    ///
    /// Any path already present on the origin is kept as a prefix; the id
    /// is pushed as a single percent-encoded segment.
    pub fn resource_url(&self, resource: Resource, id: Option<&str>) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        let prefix = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{prefix}{}", resource.base_path()));
        url.set_query(None);

        if let Some(id) = id {
            url.path_segments_mut()
                .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
                .push(id);
        }
        Ok(url)
    }

    fn require_id(resource: Resource, id: &str) -> Result<(), Error> {
        if id.trim().is_empty() {
            return Err(Error::MissingId(format!("{} id is required", resource.label())));
        }
        Ok(())
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// `GET {base}` bypassing caches. Accepts a bare array or `{ data: [...] }`.
    pub async fn list(&self, resource: Resource) -> Result<Vec<Value>, Error> {
        let url = self.resource_url(resource, None)?;
        debug!("GET {url}");

        let req = self
            .http
            .get(url)
            .header(ACCEPT, JSON)
            .header(CACHE_CONTROL, NO_CACHE)
            .header(PRAGMA, NO_CACHE);
        let body = self.send(req).await?;

        Ok(match body {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(items)) => items,
                Some(Value::Null) | None => Vec::new(),
                Some(other) => {
                    warn!(%resource, kind = value_kind(&other), "list envelope `data` is not an array");
                    Vec::new()
                }
            },
            other => {
                warn!(%resource, kind = value_kind(&other), "unexpected list body");
                Vec::new()
            }
        })
    }

    /// `GET {base}/{id}`.
    pub async fn get(&self, resource: Resource, id: &str) -> Result<Value, Error> {
        Self::require_id(resource, id)?;
        let url = self.resource_url(resource, Some(id))?;
        debug!("GET {url}");

        let req = self.http.get(url).header(ACCEPT, JSON);
        Ok(unwrap_data(self.send(req).await?))
    }

    /// `POST {base}` with a JSON or multipart body.
    pub async fn create(&self, resource: Resource, body: RequestBody) -> Result<Value, Error> {
        let url = self.resource_url(resource, None)?;
        debug!(multipart = body.is_multipart(), "POST {url}");

        let req = Self::attach(self.http.post(url), body)?;
        Ok(unwrap_data(self.send(req).await?))
    }

    /// `PUT {base}/{id}` with a JSON or multipart body.
    pub async fn update(
        &self,
        resource: Resource,
        id: &str,
        body: RequestBody,
    ) -> Result<Value, Error> {
        Self::require_id(resource, id)?;
        let url = self.resource_url(resource, Some(id))?;
        debug!(multipart = body.is_multipart(), "PUT {url}");

        let req = Self::attach(self.http.put(url), body)?;
        Ok(unwrap_data(self.send(req).await?))
    }

    /// `DELETE {base}/{id}`. Returns the parsed body, `{}` when empty.
    pub async fn delete(&self, resource: Resource, id: &str) -> Result<Value, Error> {
        Self::require_id(resource, id)?;
        let url = self.resource_url(resource, Some(id))?;
        debug!("DELETE {url}");

        let req = self.http.delete(url).header(ACCEPT, JSON);
        self.send(req).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    fn attach(
        req: reqwest::RequestBuilder,
        body: RequestBody,
    ) -> Result<reqwest::RequestBuilder, Error> {
        Ok(match body {
            RequestBody::Json(map) => req.header(ACCEPT, JSON).json(&Value::Object(map)),
            multipart @ RequestBody::Multipart { .. } => req.multipart(multipart.into_form()?),
        })
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<Value, Error> {
        let resp = req.send().await.map_err(|e| self.transport_error(e))?;
        self.handle_response(resp).await
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() && self.timeout_secs > 0 {
            Error::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            Error::Transport(err)
        }
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response(&self, resp: reqwest::Response) -> Result<Value, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let message = status_message(status, &body);
            debug!(status = status.as_u16(), %message, "request failed");
            return Err(Error::Status {
                status: status.as_u16(),
                message,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }
}

/// Strip a `{ data: ... }` envelope; a missing or null `data` yields the raw body.
fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.get("data").is_some_and(|d| !d.is_null()) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(base: &str) -> RestClient {
        RestClient::with_client(reqwest::Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn resource_url_without_prefix() {
        let c = client("https://backend.example.com");
        let url = c.resource_url(Resource::About, None).unwrap();
        assert_eq!(url.as_str(), "https://backend.example.com/api/about");
    }

    #[test]
    fn resource_url_keeps_origin_prefix_and_encodes_id() {
        let c = client("https://backend.example.com/cms/");
        let url = c.resource_url(Resource::PressRelease, Some("a b")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://backend.example.com/cms/api/press-release/a%20b"
        );
    }

    #[test]
    fn unwrap_data_prefers_envelope() {
        assert_eq!(unwrap_data(json!({"data": {"_id": "1"}})), json!({"_id": "1"}));
        assert_eq!(unwrap_data(json!({"_id": "1"})), json!({"_id": "1"}));
        assert_eq!(
            unwrap_data(json!({"data": null, "_id": "1"})),
            json!({"data": null, "_id": "1"})
        );
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = RestClient::require_id(Resource::Videos, "  ").unwrap_err();
        assert_eq!(err.to_string(), "Video id is required");
    }
}
