use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Audience the recommendations are tuned for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AudienceLevel {
    #[default]
    General,
    Undergraduate,
    Graduate,
}

/// A single book suggestion as returned by the provider. The title acts as
/// the natural key: two recommendations with the same title are the same book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecommendation {
    pub title: String,
    pub author: String,
    pub summary: String,
    #[serde(rename = "purchaseLink")]
    pub purchase_link: String,
    #[serde(rename = "coverImageURL")]
    pub cover_image_url: String,
}

/// Validated result of one recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<BookRecommendation>,
    #[serde(rename = "relatedTopics", default)]
    pub related_topics: Vec<String>,
}

/// A user-named, ordered collection of books, unique by title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingList {
    pub id: String,
    pub name: String,
    pub books: Vec<BookRecommendation>,
    #[serde(rename = "createdAt")]
    pub created_at: u64,
}

#[derive(Tabled)]
pub struct BookTableRow {
    pub title: String,
    pub author: String,
}

#[derive(Tabled)]
pub struct ListTableRow {
    pub id: String,
    pub name: String,
    pub books: usize,
    pub created: String,
}
