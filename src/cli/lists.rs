use colored::Colorize;
use tabled::Table;

use crate::{
    info,
    management::{FavoritesManager, ReadingListManager},
    store::{FileBackend, PersistentStore},
    success,
    types::{BookTableRow, ListTableRow},
    utils, warning,
};

/// Displays all reading lists as a table.
pub async fn list_lists() {
    let lists = ReadingListManager::load(PersistentStore::new(FileBackend::new())).await;

    if lists.count() == 0 {
        info!("No reading lists yet. Create one with: shelfcli lists create <name>");
        return;
    }

    let rows: Vec<ListTableRow> = lists
        .all()
        .iter()
        .map(|list| ListTableRow {
            id: list.id.clone(),
            name: list.name.clone(),
            books: list.books.len(),
            created: utils::format_created(list.created_at),
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}

/// Creates a new empty reading list and prints its id.
pub async fn create_list(name: String) {
    let mut lists = ReadingListManager::load(PersistentStore::new(FileBackend::new())).await;
    let id = lists.create_list(&name).await;
    success!("Created reading list '{}' ({})", name, id);
}

/// Deletes a reading list resolved by id or unique name.
pub async fn delete_list(list: String) {
    let mut lists = ReadingListManager::load(PersistentStore::new(FileBackend::new())).await;

    let Some(id) = lists.find(&list).map(|l| l.id.clone()) else {
        warning!("No reading list '{}'.", list);
        return;
    };

    lists.delete_list(&id).await;
    success!("Deleted reading list '{}'.", list);
}

/// Displays the books of one reading list.
pub async fn show_list(list: String) {
    let lists = ReadingListManager::load(PersistentStore::new(FileBackend::new())).await;

    let Some(found) = lists.find(&list) else {
        warning!("No reading list '{}'.", list);
        return;
    };

    println!(
        "{name} ({count} book{plural})",
        name = found.name.bold(),
        count = found.books.len(),
        plural = if found.books.len() != 1 { "s" } else { "" }
    );

    if found.books.is_empty() {
        info!("This list is empty. Add books with: shelfcli lists add-book <list> <title>");
        return;
    }

    let rows: Vec<BookTableRow> = found
        .books
        .iter()
        .map(|book| BookTableRow {
            title: book.title.clone(),
            author: book.author.clone(),
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}

/// Copies a favorited book into a reading list. The favorites set is the
/// CLI's source of full book records between invocations.
pub async fn add_book(list: String, title: String) {
    let favorites = FavoritesManager::load(PersistentStore::new(FileBackend::new())).await;

    let Some(book) = favorites.find(&title).cloned() else {
        warning!(
            "No favorite titled '{}'. Favorite it first with: shelfcli recommend ... --favorite <N>",
            title
        );
        return;
    };

    let mut lists = ReadingListManager::load(PersistentStore::new(FileBackend::new())).await;
    let Some(id) = lists.find(&list).map(|l| l.id.clone()) else {
        warning!("No reading list '{}'.", list);
        return;
    };

    if lists.add_book(&id, book).await {
        success!("Added '{}' to '{}'.", title, list);
    } else {
        info!("'{}' is already on '{}'.", title, list);
    }
}

/// Removes a book from a reading list by title.
pub async fn remove_book(list: String, title: String) {
    let mut lists = ReadingListManager::load(PersistentStore::new(FileBackend::new())).await;

    let Some(id) = lists.find(&list).map(|l| l.id.clone()) else {
        warning!("No reading list '{}'.", list);
        return;
    };

    if lists.remove_book(&id, &title).await {
        success!("Removed '{}' from '{}'.", title, list);
    } else {
        warning!("'{}' is not on '{}'.", title, list);
    }
}
