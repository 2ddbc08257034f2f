//! Domain model and CRUD orchestration for the Lifeline admin.
//!
//! Sits between `lifeline-api` and a presentation layer (the CLI):
//!
//! - **Domain model** ([`model`]): `Video`, `GalleryPhoto`, `AboutEntry`,
//!   `PressRelease` and `SlideImage`, each normalized from raw backend
//!   records through a per-entity [`FieldMap`](convert::FieldMap).
//!
//! - **[`Repository`]**: CRUD interface per entity, implemented by
//!   [`HttpRepository`] against the REST API and by [`MemoryRepository`]
//!   for in-process use.
//!
//! - **[`CrudPage`]**: per-screen orchestrator for load, add/edit dialog with
//!   a [`Draft`], validation, submit, confirmed delete, and a full reload
//!   after every successful mutation. Stale list responses are discarded.
//!
//! - **[`Controller`]**: builds the shared HTTP client from a
//!   [`ClientConfig`] and vends repositories and pages.

pub mod config;
pub mod controller;
pub mod convert;
pub mod draft;
pub mod error;
pub mod model;
pub mod page;
pub mod preview;
pub mod repository;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ClientConfig, DEFAULT_API_URL, TlsVerification};
pub use controller::Controller;
pub use draft::{DialogMode, Draft};
pub use error::CoreError;
pub use page::{
    Confirm, CrudPage, DeleteDone, DeleteTicket, Dialog, Feedback, FeedbackKind, LoadTicket,
    PageState, SubmitDone, SubmitTicket,
};
pub use preview::{DataUrlPreview, PreviewProvider};
pub use repository::{
    AboutClient, GalleryClient, HttpRepository, MemoryRepository, PressReleaseClient, Repository,
    SlideClient, VideoClient,
};
pub use store::EntityList;

pub use lifeline_api::Upload;
pub use model::{
    AboutDraft, AboutEntry, Entity, EntityKind, GalleryDraft, GalleryPhoto, PressRelease,
    PressReleaseDraft, SlideDraft, SlideImage, Video, VideoDraft,
};
