use crate::{
    store::{FAVORITES_KEY, PersistentStore, StoreBackend},
    types::BookRecommendation,
};

/// Owns the set of favorited books, unique by title. Insertion order is kept
/// for stable display. Every mutation persists the full set through the store.
pub struct FavoritesManager<B: StoreBackend> {
    books: Vec<BookRecommendation>,
    store: PersistentStore<B>,
}

impl<B: StoreBackend> FavoritesManager<B> {
    pub async fn load(store: PersistentStore<B>) -> Self {
        let books = store.load(FAVORITES_KEY).await;
        Self { books, store }
    }

    /// Removes the book when a same-title entry exists, appends it otherwise.
    /// Returns whether the book is favorited after the call. Persistence
    /// failures are absorbed by the store; the in-memory set stays
    /// authoritative either way.
    pub async fn toggle(&mut self, book: BookRecommendation) -> bool {
        let favorited = if self.is_favorite(&book.title) {
            self.books.retain(|b| b.title != book.title);
            false
        } else {
            self.books.push(book);
            true
        };

        self.store.save(FAVORITES_KEY, &self.books).await;
        favorited
    }

    pub fn is_favorite(&self, title: &str) -> bool {
        self.books.iter().any(|b| b.title == title)
    }

    pub fn find(&self, title: &str) -> Option<&BookRecommendation> {
        self.books.iter().find(|b| b.title == title)
    }

    pub fn all(&self) -> &[BookRecommendation] {
        &self.books
    }

    pub fn count(&self) -> usize {
        self.books.len()
    }
}
