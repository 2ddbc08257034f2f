// ── Entity repositories ──
//
// One interface, two implementations: `HttpRepository` talks to the
// backend, `MemoryRepository` keeps records in process. Pages receive a
// repository by injection and never know which one they hold.

mod http;
mod memory;

use async_trait::async_trait;
use lifeline_api::RequestBody;
use serde_json::Value;

use crate::convert;
use crate::error::CoreError;
use crate::model::Entity;

pub use http::{AboutClient, GalleryClient, HttpRepository, PressReleaseClient, SlideClient, VideoClient};
pub use memory::MemoryRepository;

/// CRUD access to one entity type. Every returned record is normalized.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Full list in server order.
    async fn get_all(&self) -> Result<Vec<E>, CoreError>;

    async fn get_by_id(&self, id: &str) -> Result<E, CoreError>;

    async fn create(&self, body: RequestBody) -> Result<E, CoreError>;

    async fn update(&self, id: &str, body: RequestBody) -> Result<E, CoreError>;

    /// Returns the parsed response body, `{}` when the server sent none.
    async fn delete(&self, id: &str) -> Result<Value, CoreError>;
}

/// Shape a single-record response, rejecting non-object payloads.
pub(crate) fn shape<E: Entity>(raw: Value) -> Result<E, CoreError> {
    let kind = match &raw {
        Value::Object(_) => None,
        Value::Array(_) => Some("array"),
        Value::Null => Some("null"),
        _ => Some("scalar"),
    };
    match kind {
        None => convert::from_raw(raw, None).ok_or_else(|| CoreError::Request {
            message: format!("Unexpected {} record from server", E::KIND.label().to_lowercase()),
            status: None,
        }),
        Some(kind) => Err(CoreError::Request {
            message: format!("Unexpected response from server: expected an object, got {kind}"),
            status: None,
        }),
    }
}

/// Reject an empty id before any work is done.
pub(crate) fn require_id<E: Entity>(id: &str) -> Result<(), CoreError> {
    if id.trim().is_empty() {
        Err(CoreError::validation(
            format!("{} id is required", E::KIND.resource().label()),
            &["id"],
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AboutEntry, Video};
    use serde_json::json;

    #[test]
    fn shape_accepts_objects_only() {
        assert!(shape::<Video>(json!({ "_id": "1" })).is_ok());
        let err = shape::<Video>(json!([1])).err().map(|e| e.to_string());
        assert_eq!(
            err.as_deref(),
            Some("Unexpected response from server: expected an object, got array")
        );
    }

    #[test]
    fn blank_ids_are_rejected() {
        let err = require_id::<AboutEntry>("  ").err().map(|e| e.to_string());
        assert_eq!(err.as_deref(), Some("About id is required"));
        assert!(require_id::<AboutEntry>("a1").is_ok());
    }
}
