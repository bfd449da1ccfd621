use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error,
    gemini::{GeminiClient, RecommendError},
    info,
    management::{FavoritesManager, ReadingListManager},
    session::{SearchSession, SearchState},
    store::{FileBackend, PersistentStore},
    success,
    types::{AudienceLevel, BookRecommendation},
    utils, warning,
};

/// Runs one recommendation search and renders the outcome.
///
/// Builds the Gemini client (terminating immediately when the API key is
/// missing), drives a search session with a progress spinner, and prints the
/// resulting recommendation cards and related-topic suggestions. The
/// `favorite` indexes (1-based, referring to the printed cards) are toggled
/// into the favorites set, and `add_to` copies every printed result into the
/// named reading list, creating it first when `create` is set.
pub async fn recommend(
    topic: String,
    level: AudienceLevel,
    favorite: Vec<usize>,
    add_to: Option<String>,
    create: bool,
) {
    let client = match GeminiClient::from_env() {
        Ok(client) => client,
        Err(RecommendError::MissingCredentials(msg)) => {
            error!("{}", msg);
        }
        Err(e) => {
            error!("Cannot initialize the Gemini client. Err: {:?}", e);
        }
    };

    let mut session = SearchSession::new(level);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching recommendations...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let submitted = session.search(&client, &topic).await;
    pb.finish_and_clear();

    if let Err(validation) = submitted {
        error!("{}", validation.message);
    }

    let (recommendations, related_topics) = match session.state() {
        SearchState::Success {
            recommendations,
            related_topics,
        } => (recommendations.clone(), related_topics.clone()),
        SearchState::Failed { message } => {
            error!("{}", message);
        }
        // search() always leaves Success or Failed behind
        _ => return,
    };

    if recommendations.is_empty() {
        info!(
            "We couldn't find any book recommendations for that topic. Please try a different search term."
        );
        return;
    }

    for (i, book) in recommendations.iter().enumerate() {
        print_card(i + 1, book);
    }

    if !related_topics.is_empty() {
        info!("Related topics: {}", related_topics.join(", "));
    }

    save_favorites(&favorite, &recommendations).await;

    if let Some(list_query) = add_to {
        add_to_list(&list_query, create, &recommendations).await;
    }
}

fn print_card(index: usize, book: &BookRecommendation) {
    println!(
        "{index}. {title} — {author}",
        index = index,
        title = book.title.bold(),
        author = book.author
    );
    println!("   {}", utils::truncate_summary(&book.summary, 400));
    println!("   Buy:   {}", book.purchase_link);
    println!("   Cover: {}", book.cover_image_url);
    println!();
}

async fn save_favorites(indexes: &[usize], recommendations: &[BookRecommendation]) {
    if indexes.is_empty() {
        return;
    }

    let mut favorites = FavoritesManager::load(PersistentStore::new(FileBackend::new())).await;
    for &index in indexes {
        let Some(book) = index.checked_sub(1).and_then(|i| recommendations.get(i)) else {
            warning!("No result #{} to favorite.", index);
            continue;
        };

        if favorites.toggle(book.clone()).await {
            success!("Added '{}' to favorites.", book.title);
        } else {
            success!("Removed '{}' from favorites.", book.title);
        }
    }
}

async fn add_to_list(list_query: &str, create: bool, recommendations: &[BookRecommendation]) {
    let mut lists = ReadingListManager::load(PersistentStore::new(FileBackend::new())).await;

    let list_id = match lists.find(list_query) {
        Some(list) => list.id.clone(),
        None if create => {
            let id = lists.create_list(list_query).await;
            success!("Created reading list '{}' ({})", list_query, id);
            id
        }
        None => {
            warning!(
                "No reading list '{}'. Pass --create to create it.",
                list_query
            );
            return;
        }
    };

    let mut added = 0;
    for book in recommendations {
        if lists.add_book(&list_id, book.clone()).await {
            added += 1;
        }
    }

    success!("Added {} book(s) to '{}'.", added, list_query);
}
