use shelfcli::management::{FavoritesManager, ReadingListManager};
use shelfcli::store::{MemoryBackend, PersistentStore};
use shelfcli::types::BookRecommendation;

// Helper function to create a test book
fn create_test_book(title: &str, author: &str) -> BookRecommendation {
    BookRecommendation {
        title: title.to_string(),
        author: author.to_string(),
        summary: format!("A summary of {}", title),
        purchase_link: "https://example.com/buy".to_string(),
        cover_image_url: "https://example.com/cover.jpg".to_string(),
    }
}

async fn empty_favorites() -> FavoritesManager<MemoryBackend> {
    FavoritesManager::load(PersistentStore::new(MemoryBackend::new())).await
}

async fn empty_lists() -> ReadingListManager<MemoryBackend> {
    ReadingListManager::load(PersistentStore::new(MemoryBackend::new())).await
}

#[tokio::test]
async fn test_toggle_adds_then_removes() {
    let mut favorites = empty_favorites().await;
    let book = create_test_book("SPQR", "Mary Beard");

    assert!(favorites.toggle(book.clone()).await);
    assert!(favorites.is_favorite("SPQR"));
    assert_eq!(favorites.count(), 1);

    assert!(!favorites.toggle(book).await);
    assert!(!favorites.is_favorite("SPQR"));
    assert_eq!(favorites.count(), 0);
}

#[tokio::test]
async fn test_toggle_twice_is_idempotent() {
    let mut favorites = empty_favorites().await;
    let keeper = create_test_book("The Silk Roads", "Peter Frankopan");
    favorites.toggle(keeper.clone()).await;

    let book = create_test_book("SPQR", "Mary Beard");
    favorites.toggle(book.clone()).await;
    favorites.toggle(book).await;

    assert_eq!(favorites.all(), &[keeper]);
}

#[tokio::test]
async fn test_toggle_matches_on_title_only() {
    let mut favorites = empty_favorites().await;
    favorites.toggle(create_test_book("SPQR", "Mary Beard")).await;

    // Same title, different author: still the same book
    let now_favorited = favorites
        .toggle(create_test_book("SPQR", "Someone Else"))
        .await;

    assert!(!now_favorited);
    assert_eq!(favorites.count(), 0);
}

#[tokio::test]
async fn test_favorites_persist_across_reload() {
    let backend = MemoryBackend::new();

    let mut favorites = FavoritesManager::load(PersistentStore::new(&backend)).await;
    favorites.toggle(create_test_book("SPQR", "Mary Beard")).await;

    let reloaded = FavoritesManager::load(PersistentStore::new(&backend)).await;
    assert!(reloaded.is_favorite("SPQR"));
    assert_eq!(reloaded.count(), 1);
}

#[tokio::test]
async fn test_create_list_returns_usable_id() {
    let mut lists = empty_lists().await;

    let id = lists.create_list("Ancient History").await;

    // Chaining: create-then-add in one user action
    assert!(lists.add_book(&id, create_test_book("SPQR", "Mary Beard")).await);

    let list = lists.get(&id).unwrap();
    assert_eq!(list.name, "Ancient History");
    assert_eq!(list.books.len(), 1);
    assert!(list.created_at > 0);
}

#[tokio::test]
async fn test_list_ids_are_unique() {
    let mut lists = empty_lists().await;

    let a = lists.create_list("Same Name").await;
    let b = lists.create_list("Same Name").await;

    assert_ne!(a, b);
    assert_eq!(lists.count(), 2);
}

#[tokio::test]
async fn test_add_book_deduplicates_by_title() {
    let mut lists = empty_lists().await;
    let id = lists.create_list("Ancient History").await;

    assert!(lists.add_book(&id, create_test_book("SPQR", "Mary Beard")).await);
    assert!(!lists.add_book(&id, create_test_book("SPQR", "Mary Beard")).await);
    assert!(!lists.add_book(&id, create_test_book("SPQR", "Someone Else")).await);

    let spqr_count = lists
        .get(&id)
        .unwrap()
        .books
        .iter()
        .filter(|b| b.title == "SPQR")
        .count();
    assert_eq!(spqr_count, 1);
}

#[tokio::test]
async fn test_add_book_preserves_insertion_order() {
    let mut lists = empty_lists().await;
    let id = lists.create_list("Reading Order").await;

    lists.add_book(&id, create_test_book("Zulu", "A")).await;
    lists.add_book(&id, create_test_book("Alpha", "B")).await;

    let titles: Vec<&str> = lists
        .get(&id)
        .unwrap()
        .books
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Zulu", "Alpha"]);
}

#[tokio::test]
async fn test_add_book_unknown_list_is_noop() {
    let mut lists = empty_lists().await;
    lists.create_list("Ancient History").await;

    assert!(!lists.add_book("missing", create_test_book("SPQR", "Mary Beard")).await);
}

#[tokio::test]
async fn test_remove_book() {
    let mut lists = empty_lists().await;
    let id = lists.create_list("Ancient History").await;
    lists.add_book(&id, create_test_book("SPQR", "Mary Beard")).await;

    assert!(lists.remove_book(&id, "SPQR").await);
    assert!(lists.get(&id).unwrap().books.is_empty());

    // Absent title and unknown id are silent no-ops
    assert!(!lists.remove_book(&id, "SPQR").await);
    assert!(!lists.remove_book("missing", "SPQR").await);
}

#[tokio::test]
async fn test_delete_list() {
    let mut lists = empty_lists().await;
    let id = lists.create_list("Ancient History").await;

    assert!(lists.delete_list(&id).await);
    assert!(lists.get(&id).is_none());
    assert_eq!(lists.count(), 0);

    assert!(!lists.delete_list(&id).await);
}

#[tokio::test]
async fn test_delete_selected_list_clears_callers_selection() {
    let mut lists = empty_lists().await;
    let id = lists.create_list("Ancient History").await;

    // The consuming view owns the selection; the manager stays agnostic
    let mut selected: Option<String> = Some(id.clone());

    lists.delete_list(&id).await;
    if selected.as_deref() == Some(id.as_str()) {
        selected = None;
    }

    assert!(selected.is_none());
}

#[tokio::test]
async fn test_find_by_id_and_unique_name() {
    let mut lists = empty_lists().await;
    let id = lists.create_list("Ancient History").await;
    lists.create_list("Ambiguous").await;
    lists.create_list("Ambiguous").await;

    assert_eq!(lists.find(&id).unwrap().id, id);
    assert_eq!(lists.find("Ancient History").unwrap().id, id);
    assert!(lists.find("Ambiguous").is_none());
    assert!(lists.find("Missing").is_none());
}

#[tokio::test]
async fn test_lists_persist_across_reload() {
    let backend = MemoryBackend::new();

    let id = {
        let mut lists = ReadingListManager::load(PersistentStore::new(&backend)).await;
        let id = lists.create_list("Ancient History").await;
        lists.add_book(&id, create_test_book("SPQR", "Mary Beard")).await;
        id
    };

    let reloaded = ReadingListManager::load(PersistentStore::new(&backend)).await;
    let list = reloaded.get(&id).unwrap();
    assert_eq!(list.id, id);
    assert_eq!(list.books.len(), 1);
}

#[tokio::test]
async fn test_deleting_list_leaves_favorites_alone() {
    let backend = MemoryBackend::new();

    let mut favorites = FavoritesManager::load(PersistentStore::new(&backend)).await;
    favorites.toggle(create_test_book("SPQR", "Mary Beard")).await;

    let mut lists = ReadingListManager::load(PersistentStore::new(&backend)).await;
    let id = lists.create_list("Ancient History").await;
    lists.add_book(&id, create_test_book("SPQR", "Mary Beard")).await;
    lists.delete_list(&id).await;

    assert_eq!(lists.count(), 0);
    assert!(favorites.is_favorite("SPQR"));

    let reloaded = FavoritesManager::load(PersistentStore::new(&backend)).await;
    assert!(reloaded.is_favorite("SPQR"));
}
