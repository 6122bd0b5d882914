use super::*;

#[test]
fn store_handles_share_entries() {
    let store = MemoryStore::new();
    let other = store.clone();
    store.save("theme", "dark").unwrap();
    assert_eq!(other.load("theme").as_deref(), Some("dark"));
}

#[test]
fn read_only_store_rejects_writes_and_keeps_old_value() {
    let store = MemoryStore::new().with_entry("theme", "light");
    store.set_read_only(true);
    assert!(matches!(
        store.save("theme", "dark"),
        Err(ThemeError::StorageWrite(_))
    ));
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn locate_requires_matching_control_id() {
    let page = MemoryDocument::with_control("theme-toggle");
    assert!(page.locate("theme-toggle").is_some());
    assert!(page.locate("themeToggle").is_none());
    assert!(MemoryDocument::new().locate("theme-toggle").is_none());
}

#[test]
fn show_theme_sets_label_and_title() {
    let page = MemoryDocument::with_control("theme-toggle");
    assert_eq!(page.label(), None);
    page.show_theme(Theme::Dark);
    assert_eq!(page.label().as_deref(), Some("☀️"));
    assert_eq!(page.title().as_deref(), Some("Switch to light mode"));
}

#[test]
fn bound_control_is_reported_and_markable() {
    let page = MemoryDocument::with_control("theme-toggle");
    assert!(!page.control_bound());
    page.mark_control_bound();
    assert!(page.is_control_bound());
    assert!(MemoryDocument::with_bound_control("theme-toggle").control_bound());
}
