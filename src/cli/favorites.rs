use tabled::Table;

use crate::{
    info,
    management::FavoritesManager,
    store::{FileBackend, PersistentStore},
    success,
    types::BookTableRow,
    warning,
};

/// Displays the favorites set as a table, in insertion order.
pub async fn list_favorites() {
    let favorites = FavoritesManager::load(PersistentStore::new(FileBackend::new())).await;

    if favorites.count() == 0 {
        info!("You haven't added any books to your favorites yet.");
        return;
    }

    let rows: Vec<BookTableRow> = favorites
        .all()
        .iter()
        .map(|book| BookTableRow {
            title: book.title.clone(),
            author: book.author.clone(),
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}

/// Toggles an already-favorited book off by title.
pub async fn remove_favorite(title: String) {
    let mut favorites = FavoritesManager::load(PersistentStore::new(FileBackend::new())).await;

    let Some(book) = favorites.find(&title).cloned() else {
        warning!("No favorite titled '{}'.", title);
        return;
    };

    favorites.toggle(book).await;
    success!("Removed '{}' from favorites.", title);
}
