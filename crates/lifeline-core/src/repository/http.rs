use std::marker::PhantomData;

use async_trait::async_trait;
use lifeline_api::error::NOT_FOUND_MESSAGE;
use lifeline_api::{RequestBody, RestClient};
use serde_json::Value;
use tracing::info;

use super::{Repository, shape};
use crate::convert;
use crate::error::CoreError;
use crate::model::{AboutEntry, Entity, GalleryPhoto, PressRelease, SlideImage, Video};

pub type VideoClient = HttpRepository<Video>;
pub type GalleryClient = HttpRepository<GalleryPhoto>;
pub type AboutClient = HttpRepository<AboutEntry>;
pub type PressReleaseClient = HttpRepository<PressRelease>;
pub type SlideClient = HttpRepository<SlideImage>;

/// Entity client backed by the REST API.
///
/// Cloning is cheap; the underlying connection pool is shared.
pub struct HttpRepository<E> {
    client: RestClient,
    _entity: PhantomData<fn() -> E>,
}

impl<E> HttpRepository<E> {
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for HttpRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone())
    }
}

impl<E> std::fmt::Debug for HttpRepository<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRepository")
            .field("base_url", &self.client.base_url().as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for HttpRepository<E> {
    async fn get_all(&self) -> Result<Vec<E>, CoreError> {
        let raw = self.client.list(E::KIND.resource()).await?;
        Ok(convert::from_raw_list(raw))
    }

    async fn get_by_id(&self, id: &str) -> Result<E, CoreError> {
        let raw = self
            .client
            .get(E::KIND.resource(), id)
            .await
            .map_err(|e| record_error::<E>(e, id))?;
        shape(raw)
    }

    async fn create(&self, body: RequestBody) -> Result<E, CoreError> {
        let raw = self.client.create(E::KIND.resource(), body).await?;
        let created: E = shape(raw)?;
        info!(kind = %E::KIND, id = created.id(), "created");
        Ok(created)
    }

    async fn update(&self, id: &str, body: RequestBody) -> Result<E, CoreError> {
        let raw = self
            .client
            .update(E::KIND.resource(), id, body)
            .await
            .map_err(|e| record_error::<E>(e, id))?;
        let updated: E = shape(raw)?;
        info!(kind = %E::KIND, id, "updated");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<Value, CoreError> {
        let body = self
            .client
            .delete(E::KIND.resource(), id)
            .await
            .map_err(|e| record_error::<E>(e, id))?;
        info!(kind = %E::KIND, id, "deleted");
        Ok(body)
    }
}

/// A bare 404 on `{base}/{id}` means the record is gone. A 404 that
/// carries a server `message` keeps that message.
fn record_error<E: Entity>(err: lifeline_api::Error, id: &str) -> CoreError {
    let bare_not_found = err.is_not_found() && err.to_string() == NOT_FOUND_MESSAGE;
    if bare_not_found {
        CoreError::NotFound {
            entity: E::KIND.label().to_owned(),
            id: id.to_owned(),
        }
    } else {
        err.into()
    }
}
