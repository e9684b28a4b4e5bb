use super::*;

// =============================================================
// MemoryTokenStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::default();
    assert!(store.get().is_none());
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryTokenStore::default();
    store.set("T1");
    assert_eq!(store.get().as_deref(), Some("T1"));
}

#[test]
fn memory_store_set_replaces_previous_token() {
    let store = MemoryTokenStore::default();
    store.set("T1");
    store.set("T2");
    assert_eq!(store.get().as_deref(), Some("T2"));
}

#[test]
fn memory_store_clear_removes_token() {
    let store = MemoryTokenStore::default();
    store.set("T1");
    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn memory_store_clear_when_empty_is_a_noop() {
    let store = MemoryTokenStore::default();
    store.clear();
    assert!(store.get().is_none());
}

// =============================================================
// BrowserTokenStore outside a browser
// =============================================================

#[test]
fn browser_store_fails_open_without_a_browser() {
    // No window means no storage medium; reads come back empty and
    // writes are dropped rather than panicking.
    let store = BrowserTokenStore;
    store.set("T1");
    assert!(store.get().is_none());
    store.clear();
    assert!(store.get().is_none());
}
