use crate::{
    store::{PersistentStore, READING_LISTS_KEY, StoreBackend},
    types::{BookRecommendation, ReadingList},
    utils,
};

/// Owns the ordered collection of reading lists. List names are free-form and
/// need not be unique; the generated id is the stable handle. Every mutation
/// persists the complete list-of-lists through the store.
pub struct ReadingListManager<B: StoreBackend> {
    lists: Vec<ReadingList>,
    store: PersistentStore<B>,
}

impl<B: StoreBackend> ReadingListManager<B> {
    pub async fn load(store: PersistentStore<B>) -> Self {
        let lists = store.load(READING_LISTS_KEY).await;
        Self { lists, store }
    }

    /// Creates an empty list and returns its id for immediate chaining,
    /// e.g. create-then-add-book in one user action.
    pub async fn create_list(&mut self, name: &str) -> String {
        let list = ReadingList {
            id: utils::generate_list_id(),
            name: name.to_string(),
            books: Vec::new(),
            created_at: utils::now_timestamp(),
        };
        let id = list.id.clone();

        self.lists.push(list);
        self.persist().await;
        id
    }

    /// Removes the list with the matching id. No-op if absent. Clearing any
    /// "currently selected" list in a consuming view is the caller's job.
    pub async fn delete_list(&mut self, id: &str) -> bool {
        let before = self.lists.len();
        self.lists.retain(|list| list.id != id);

        let removed = self.lists.len() != before;
        if removed {
            self.persist().await;
        }
        removed
    }

    /// Appends the book to the list only if no existing entry shares its
    /// title. Silent no-op on a duplicate title or an unknown id.
    pub async fn add_book(&mut self, id: &str, book: BookRecommendation) -> bool {
        let Some(list) = self.lists.iter_mut().find(|list| list.id == id) else {
            return false;
        };
        if list.books.iter().any(|b| b.title == book.title) {
            return false;
        }

        list.books.push(book);
        self.persist().await;
        true
    }

    /// Removes the entry with the matching title from the list. Silent no-op
    /// if the title is absent or the id doesn't match any list.
    pub async fn remove_book(&mut self, id: &str, title: &str) -> bool {
        let Some(list) = self.lists.iter_mut().find(|list| list.id == id) else {
            return false;
        };

        let before = list.books.len();
        list.books.retain(|b| b.title != title);

        let removed = list.books.len() != before;
        if removed {
            self.persist().await;
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&ReadingList> {
        self.lists.iter().find(|list| list.id == id)
    }

    /// Resolves a list by id first, then by name if exactly one list carries
    /// that name. A CLI affordance; ambiguous names resolve to nothing.
    pub fn find(&self, query: &str) -> Option<&ReadingList> {
        if let Some(list) = self.get(query) {
            return Some(list);
        }

        let mut matches = self.lists.iter().filter(|list| list.name == query);
        match (matches.next(), matches.next()) {
            (Some(list), None) => Some(list),
            _ => None,
        }
    }

    pub fn all(&self) -> &[ReadingList] {
        &self.lists
    }

    pub fn count(&self) -> usize {
        self.lists.len()
    }

    async fn persist(&self) {
        self.store.save(READING_LISTS_KEY, &self.lists).await;
    }
}
