mod favorites;
mod lists;

pub use favorites::FavoritesManager;
pub use lists::ReadingListManager;
