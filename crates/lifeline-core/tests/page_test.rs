#![allow(clippy::unwrap_used)]
// CrudPage behaviour against the in-memory repository.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;

use lifeline_core::{
    AboutEntry, CoreError, CrudPage, FeedbackKind, GalleryPhoto, MemoryRepository, PageState,
    Repository, SlideImage, Upload, Video,
};

fn page_with<E: lifeline_core::Entity>(repo: &Arc<MemoryRepository<E>>) -> CrudPage<E> {
    let repo: Arc<dyn Repository<E>> = Arc::clone(repo) as Arc<dyn Repository<E>>;
    CrudPage::new(repo, Arc::new(|u: &Upload| format!("blob:{}", u.file_name)))
}

// ── Validation ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_about_with_only_name_sends_nothing() {
    let repo = Arc::new(MemoryRepository::<AboutEntry>::new());
    let mut page = page_with(&repo);

    page.open_add().unwrap();
    page.set_field("name", "Asha").unwrap();
    let err = page.submit().await.unwrap_err();

    match err {
        CoreError::Validation { message, fields } => {
            assert_eq!(
                message,
                "Please fill in all required fields: Name, Designation, Mobile, and Email"
            );
            assert_eq!(fields, vec!["designation", "mobile", "email"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(repo.request_count(), 0);
    assert!(page.dialog().is_some());
    assert_eq!(page.feedback().unwrap().kind, FeedbackKind::Error);
}

#[tokio::test]
async fn test_gallery_without_photo_sends_nothing() {
    let repo = Arc::new(MemoryRepository::<GalleryPhoto>::new());
    let mut page = page_with(&repo);

    page.open_add().unwrap();
    let err = page.submit().await.unwrap_err();

    assert_eq!(err.to_string(), "Please select a photo");
    assert_eq!(repo.request_count(), 0);
    assert!(page.dialog().is_some());
}

// ── Dialog lifecycle ────────────────────────────────────────────────

#[tokio::test]
async fn test_add_reloads_and_closes_dialog() {
    let repo = Arc::new(MemoryRepository::<Video>::new());
    let mut page = page_with(&repo);
    page.load().await.unwrap();

    page.open_add().unwrap();
    page.set_field("title", "Intro").unwrap();
    page.set_field("description", "Welcome").unwrap();
    page.select_file("video", Upload::new("v.mp4", "video/mp4", vec![0, 1]))
        .unwrap();
    assert_eq!(page.dialog().unwrap().draft.preview.as_deref(), Some("blob:v.mp4"));

    let created = page.submit().await.unwrap();
    assert_eq!(created.video_url.as_deref(), Some("memory://v.mp4"));

    assert_eq!(page.state(), &PageState::Idle);
    assert_eq!(page.items().len(), 1);
    assert_eq!(page.feedback().unwrap().message, "Video added successfully");
    // load, create, reload
    assert_eq!(repo.request_count(), 3);
}

#[tokio::test]
async fn test_cancel_discards_draft() {
    let repo = Arc::new(MemoryRepository::<Video>::new());
    let mut page = page_with(&repo);

    page.open_add().unwrap();
    page.set_field("title", "Draft").unwrap();
    page.cancel();

    assert_eq!(page.state(), &PageState::Idle);
    assert!(page.set_field("title", "x").is_err());
    page.open_add().unwrap();
    assert_eq!(page.dialog().unwrap().draft.title, "");
}

#[tokio::test]
async fn test_edit_of_unknown_id_is_not_found() {
    let repo = Arc::new(MemoryRepository::<AboutEntry>::new());
    let mut page = page_with(&repo);
    page.load().await.unwrap();

    let err = page.open_edit("ghost").unwrap_err();
    assert!(matches!(err, CoreError::NotFound { .. }));
}

#[tokio::test]
async fn test_second_submit_is_rejected_while_in_flight() {
    let repo = Arc::new(MemoryRepository::<SlideImage>::new());
    let mut page = page_with(&repo);

    page.open_add().unwrap();
    page.select_file("image", Upload::new("s.png", "image/png", vec![1]))
        .unwrap();
    let ticket = page.begin_submit().unwrap();
    assert!(page.is_busy());

    let err = page.begin_submit().unwrap_err();
    assert_eq!(err.to_string(), "A submission is already in progress");
    assert!(page.open_add().is_err());

    let done = ticket.send(&*repo).await;
    page.finish_submit(done).unwrap();
    assert_eq!(page.state(), &PageState::Idle);
}

#[tokio::test]
async fn test_failed_submit_restores_dialog() {
    let repo = Arc::new(MemoryRepository::<Video>::new());
    let mut page = page_with(&repo);

    page.open_add().unwrap();
    page.set_field("title", "Intro").unwrap();
    page.set_field("description", "Welcome").unwrap();
    repo.fail_next("").await;

    assert!(page.submit().await.is_err());
    assert_eq!(
        page.feedback().unwrap().message,
        "Error saving video. Please try again."
    );
    assert_eq!(page.dialog().unwrap().draft.description, "Welcome");
}

// ── Loading ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_stale_list_response_is_discarded() {
    let repo = Arc::new(MemoryRepository::<GalleryPhoto>::with_records(vec![
        json!({ "_id": "g1" }),
    ]));
    let mut page = page_with(&repo);

    let first = page.begin_load();
    let second = page.begin_load();

    let fresh = repo.get_all().await.unwrap();
    assert!(page.finish_load(second, Ok(fresh)).unwrap());
    assert!(!page.finish_load(first, Ok(Vec::new())).unwrap());

    assert_eq!(page.items().len(), 1);
    assert_eq!(page.state(), &PageState::Idle);
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_list() {
    let repo = Arc::new(MemoryRepository::<GalleryPhoto>::with_records(vec![
        json!({ "_id": "g1" }),
        json!({ "_id": "g2" }),
    ]));
    let mut page = page_with(&repo);
    page.load().await.unwrap();

    repo.fail_next("").await;
    assert!(page.load().await.is_err());

    assert_eq!(page.items().len(), 2);
    assert_eq!(
        page.state(),
        &PageState::Error("Failed to fetch photos".into())
    );
}

// ── Delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_declined_delete_does_nothing() {
    let repo = Arc::new(MemoryRepository::<AboutEntry>::with_records(vec![
        json!({ "_id": "a1", "name": "Asha" }),
    ]));
    let mut page = page_with(&repo);
    page.load().await.unwrap();

    let decline = |prompt: &str| {
        assert_eq!(prompt, "Are you sure you want to delete this about entry?");
        false
    };
    assert!(!page.delete("a1", &decline).await.unwrap());

    assert_eq!(page.items().len(), 1);
    assert_eq!(repo.request_count(), 1);
}

#[tokio::test]
async fn test_confirmed_delete_reloads() {
    let repo = Arc::new(MemoryRepository::<AboutEntry>::with_records(vec![
        json!({ "_id": "a1", "name": "Asha" }),
        json!({ "_id": "a2", "name": "Ravi" }),
    ]));
    let mut page = page_with(&repo);
    page.load().await.unwrap();

    assert!(page.delete("a1", &true).await.unwrap());

    let ids: Vec<String> = page.items().snapshot().iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids, vec!["a2"]);
    assert_eq!(page.feedback().unwrap().message, "About entry deleted successfully");
}

#[tokio::test]
async fn test_failed_delete_leaves_list_unchanged() {
    let repo = Arc::new(MemoryRepository::<AboutEntry>::with_records(vec![
        json!({ "_id": "a1", "name": "Asha" }),
    ]));
    let mut page = page_with(&repo);
    page.load().await.unwrap();

    repo.fail_next("Server error. Please try again later.").await;
    assert!(page.delete("a1", &true).await.is_err());

    assert_eq!(page.items().len(), 1);
    assert_eq!(page.state(), &PageState::Idle);
    let feedback = page.feedback().unwrap();
    assert_eq!(feedback.kind, FeedbackKind::Error);
    assert_eq!(feedback.message, "Server error. Please try again later.");
}
