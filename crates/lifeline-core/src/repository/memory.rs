use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use lifeline_api::RequestBody;
use serde_json::{Map, Value, json};
use tokio::sync::Mutex;
use tracing::debug;

use super::{Repository, require_id, shape};
use crate::convert;
use crate::error::CoreError;
use crate::model::Entity;

/// In-process repository holding raw records.
///
/// Records go through the same normalization as HTTP responses. Uploaded
/// files are stored as `memory://{file_name}` references in the field the
/// backend would fill. Each instance is independent; nothing is shared
/// between instances.
pub struct MemoryRepository<E> {
    records: Mutex<Vec<Map<String, Value>>>,
    next_id: AtomicU64,
    requests: AtomicUsize,
    fail_next: Mutex<Option<String>>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> MemoryRepository<E> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Seed with raw records; non-objects are dropped.
    pub fn with_records(records: Vec<Value>) -> Self {
        let records: Vec<Map<String, Value>> = records
            .into_iter()
            .filter_map(|r| match r {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect();
        let next_id = u64::try_from(records.len()).unwrap_or(0) + 1;
        Self {
            next_id: AtomicU64::new(next_id),
            records: Mutex::new(records),
            requests: AtomicUsize::new(0),
            fail_next: Mutex::new(None),
            _entity: PhantomData,
        }
    }

    /// Number of operations that reached the store.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Make the next operation fail as a server error with `message`.
    pub async fn fail_next(&self, message: impl Into<String>) {
        *self.fail_next.lock().await = Some(message.into());
    }

    async fn enter(&self) -> Result<(), CoreError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        match self.fail_next.lock().await.take() {
            Some(message) => Err(CoreError::Request {
                message,
                status: Some(500),
            }),
            None => Ok(()),
        }
    }

    fn position(records: &[Map<String, Value>], id: &str) -> Option<usize> {
        records.iter().enumerate().position(|(i, record)| {
            let normalized = convert::normalize_record(E::FIELDS, Value::Object(record.clone()), Some(i));
            normalized.get("id").and_then(Value::as_str) == Some(id)
        })
    }

    fn not_found(id: &str) -> CoreError {
        CoreError::NotFound {
            entity: E::KIND.label().to_owned(),
            id: id.to_owned(),
        }
    }

    /// Flatten a request body into record fields, skipping blank values
    /// when `skip_blank` is set.
    fn body_fields(body: RequestBody, skip_blank: bool) -> Vec<(String, String)> {
        let mut out = Vec::new();
        match body {
            RequestBody::Json(map) => {
                for (key, value) in map {
                    if let Some(text) = convert::present_text(Some(&value)) {
                        out.push((key, text));
                    } else if !skip_blank {
                        out.push((key, String::new()));
                    }
                }
            }
            RequestBody::Multipart { fields, files } => {
                for (key, value) in fields {
                    if !(skip_blank && value.is_empty()) {
                        out.push((key, value));
                    }
                }
                for (part, upload) in files {
                    let target = E::FIELDS
                        .uploads
                        .iter()
                        .find(|(name, _)| *name == part)
                        .map_or(part.as_str(), |(_, field)| *field);
                    out.push((target.to_owned(), format!("memory://{}", upload.file_name)));
                }
            }
        }
        out
    }
}

impl<E: Entity> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn get_all(&self) -> Result<Vec<E>, CoreError> {
        self.enter().await?;
        let records = self.records.lock().await;
        let raw: Vec<Value> = records.iter().cloned().map(Value::Object).collect();
        Ok(convert::from_raw_list(raw))
    }

    async fn get_by_id(&self, id: &str) -> Result<E, CoreError> {
        require_id::<E>(id)?;
        self.enter().await?;
        let records = self.records.lock().await;
        let index = Self::position(&records, id).ok_or_else(|| Self::not_found(id))?;
        convert::from_raw(Value::Object(records[index].clone()), Some(index))
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, body: RequestBody) -> Result<E, CoreError> {
        self.enter().await?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();

        let mut record = Map::new();
        record.insert("_id".into(), json!(id));
        for (key, value) in Self::body_fields(body, false) {
            record.insert(key, Value::String(value));
        }
        record.insert("createdAt".into(), json!(Utc::now().to_rfc3339()));

        debug!(kind = %E::KIND, %id, "memory create");
        self.records.lock().await.push(record.clone());
        shape(Value::Object(record))
    }

    async fn update(&self, id: &str, body: RequestBody) -> Result<E, CoreError> {
        require_id::<E>(id)?;
        self.enter().await?;
        let mut records = self.records.lock().await;
        let index = Self::position(&records, id).ok_or_else(|| Self::not_found(id))?;

        let record = &mut records[index];
        for (key, value) in Self::body_fields(body, true) {
            record.insert(key, Value::String(value));
        }
        record.insert("updatedAt".into(), json!(Utc::now().to_rfc3339()));

        debug!(kind = %E::KIND, %id, "memory update");
        convert::from_raw(Value::Object(record.clone()), Some(index))
            .ok_or_else(|| Self::not_found(id))
    }

    async fn delete(&self, id: &str) -> Result<Value, CoreError> {
        require_id::<E>(id)?;
        self.enter().await?;
        let mut records = self.records.lock().await;
        let index = Self::position(&records, id).ok_or_else(|| Self::not_found(id))?;
        records.remove(index);

        debug!(kind = %E::KIND, %id, "memory delete");
        Ok(json!({ "message": format!("{} deleted", E::KIND.label()) }))
    }
}
