//! Interactive service flows over an in-memory store.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use tabhop::error::TabhopError;
use tabhop::service::ShortcutService;
use tabhop::store::{MemoryStore, ShortcutStore};
use tabhop::Shortcut;

use crate::common::{NavEvent, RecordingNavigator, StaticTabs};

fn service_with(
    shortcuts: Vec<Shortcut>,
    current_url: &str,
) -> (ShortcutService, Arc<MemoryStore>, Arc<RecordingNavigator>) {
    let store = Arc::new(MemoryStore::with_shortcuts(shortcuts));
    let navigator = Arc::new(RecordingNavigator::new());
    let service = ShortcutService::new(
        store.clone(),
        Arc::new(StaticTabs::with_url(current_url)),
        navigator.clone(),
    );
    (service, store, navigator)
}

#[tokio::test]
async fn test_add_appends_and_persists() {
    let (service, store, _) = service_with(vec![Shortcut::new("a", "p", "t")], "");

    let list = service.add(Shortcut::new("b", "p2", "t2")).await.unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list[1].name, "b");
    assert_eq!(store.load().await.unwrap(), list);
}

#[tokio::test]
async fn test_add_rejects_invalid_fields() {
    let (service, store, _) = service_with(Vec::new(), "");

    let err = service.add(Shortcut::new("", "p", "t")).await.unwrap_err();
    assert!(matches!(err, TabhopError::InvalidInput { .. }));
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_rejects_looping_auto_execute() {
    let (service, store, _) = service_with(Vec::new(), "");

    let mut shortcut = Shortcut::new("same", "^/foo$", "/foo");
    shortcut.auto_execute = true;
    let err = service.add(shortcut).await.unwrap_err();

    assert!(matches!(err, TabhopError::LoopRejected { .. }));
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_replaces_in_place() {
    let (service, _, _) = service_with(
        vec![Shortcut::new("a", "p", "t"), Shortcut::new("b", "p", "t")],
        "",
    );

    let list = service.update(1, Shortcut::new("b2", "p", "t")).await.unwrap();

    assert_eq!(list.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(), ["a", "b2"]);
}

#[tokio::test]
async fn test_update_out_of_bounds_fails() {
    let (service, _, _) = service_with(vec![Shortcut::new("a", "p", "t")], "");
    assert!(service.update(1, Shortcut::new("x", "p", "t")).await.is_err());
}

#[tokio::test]
async fn test_remove_shifts_later_indices_down() {
    let (service, _, _) = service_with(
        vec![
            Shortcut::new("a", "p", "t"),
            Shortcut::new("b", "p", "t"),
            Shortcut::new("c", "p", "t"),
        ],
        "",
    );

    let list = service.remove(1).await.unwrap();

    assert_eq!(list.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(), ["a", "c"]);
}

#[tokio::test]
async fn test_reorder_moves_and_persists() {
    let (service, store, _) = service_with(
        vec![
            Shortcut::new("a", "p", "t"),
            Shortcut::new("b", "p", "t"),
            Shortcut::new("c", "p", "t"),
        ],
        "",
    );

    let list = service.reorder(2, 0).await.unwrap();

    assert_eq!(list.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(), ["c", "a", "b"]);
    assert_eq!(store.load().await.unwrap(), list);
}

#[tokio::test]
async fn test_replace_all_gates_every_entry() {
    let (service, store, _) = service_with(vec![Shortcut::new("keep", "p", "t")], "");

    let mut looper = Shortcut::new("same", "^/foo$", "/foo");
    looper.auto_execute = true;
    let err = service
        .replace_all(vec![Shortcut::new("ok", "p", "t"), looper])
        .await
        .unwrap_err();

    assert!(matches!(err, TabhopError::LoopRejected { .. }));
    // The previous list survives a rejected import
    assert_eq!(store.load().await.unwrap()[0].name, "keep");
}

#[tokio::test]
async fn test_apply_navigates_the_active_tab() {
    let shortcut = Shortcut::new("jump", r"^https://a\.dev/(.*)$", "https://b.dev/$1");
    let (service, _, navigator) = service_with(vec![shortcut.clone()], "https://a.dev/x");

    let destination = service.apply(&shortcut).await.unwrap();

    assert_eq!(destination, "https://b.dev/x");
    assert_eq!(
        navigator.events(),
        vec![NavEvent::ActiveTab("https://b.dev/x".to_string())]
    );
}

#[tokio::test]
async fn test_apply_honors_open_new_tab() {
    let mut shortcut = Shortcut::new("jump", r"a\.dev/(.*)", "b.dev/$1");
    shortcut.open_new_tab = true;
    let (service, _, navigator) = service_with(vec![shortcut.clone()], "https://a.dev/x");

    let destination = service.apply(&shortcut).await.unwrap();

    // The bare destination is normalized before dispatch
    assert_eq!(destination, "https://b.dev/x");
    assert_eq!(
        navigator.events(),
        vec![NavEvent::NewTab("https://b.dev/x".to_string())]
    );
}

#[tokio::test]
async fn test_apply_surfaces_no_match() {
    let shortcut = Shortcut::new("jump", r"^https://other\.dev", "t");
    let (service, _, navigator) = service_with(vec![shortcut.clone()], "https://a.dev/x");

    let err = service.apply(&shortcut).await.unwrap_err();

    assert!(matches!(err, TabhopError::NoMatch { .. }));
    assert!(navigator.events().is_empty());
}

#[tokio::test]
async fn test_apply_with_undetectable_url_is_invalid_input() {
    let shortcut = Shortcut::new("jump", "p", "t");
    let (service, _, _) = service_with(vec![shortcut.clone()], "");

    assert!(matches!(
        service.apply(&shortcut).await.unwrap_err(),
        TabhopError::InvalidInput { .. }
    ));
}

#[tokio::test]
async fn test_apply_at_uses_positional_identity() {
    let (service, _, navigator) = service_with(
        vec![
            Shortcut::new("first", r"a\.dev", "https://one.dev"),
            Shortcut::new("second", r"a\.dev/(.*)", "https://two.dev/$1"),
        ],
        "https://a.dev/x",
    );

    service.apply_at(1).await.unwrap();

    assert_eq!(
        navigator.events(),
        vec![NavEvent::ActiveTab("https://two.dev/x".to_string())]
    );
    assert!(service.apply_at(2).await.is_err());
}
