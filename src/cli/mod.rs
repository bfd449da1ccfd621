//! # CLI Module
//!
//! This module provides the command-line interface layer for shelfcli, an AI
//! librarian for historical literature. It implements all user-facing commands
//! and coordinates between the recommendation client, the search session, and
//! the state managers.
//!
//! ## Overview
//!
//! The CLI module is the rendering layer of the application: it consumes state
//! snapshots from the managers and the search session and turns them into
//! cards and tables. None of the core invariants live here; mutation always
//! goes through the managers.
//!
//! ## Command Categories
//!
//! ### Search
//!
//! - [`recommend`] - Runs one recommendation search and renders the results,
//!   optionally favoriting results or adding them to a reading list in the
//!   same invocation
//!
//! ### Favorites
//!
//! - [`list_favorites`] - Displays the favorites set as a table
//! - [`remove_favorite`] - Toggles a favorited book off by title
//!
//! ### Reading Lists
//!
//! - [`list_lists`] - Displays all reading lists
//! - [`create_list`] - Creates a new empty list
//! - [`delete_list`] - Deletes a list by id or unique name
//! - [`show_list`] - Displays the books of one list
//! - [`add_book`] - Copies a favorited book into a list
//! - [`remove_book`] - Removes a book from a list by title

mod favorites;
mod lists;
mod recommend;

pub use favorites::{list_favorites, remove_favorite};
pub use lists::{add_book, create_list, delete_list, list_lists, remove_book, show_list};
pub use recommend::recommend;
