use std::time::Duration;

use reqwest::Client;
use serde_json::{Value, json};

use crate::{
    config,
    types::{AudienceLevel, BookRecommendation, RecommendationSet},
};

#[derive(Debug)]
pub enum RecommendError {
    MissingCredentials(String),
    HttpError(reqwest::Error),
    ProviderError(String),
    SerdeError(serde_json::Error),
}

impl From<reqwest::Error> for RecommendError {
    fn from(err: reqwest::Error) -> Self {
        RecommendError::HttpError(err)
    }
}

impl From<serde_json::Error> for RecommendError {
    fn from(err: serde_json::Error) -> Self {
        RecommendError::SerdeError(err)
    }
}

/// Returns the fixed audience description for a level.
///
/// The three descriptions trade accessibility against scholarly rigor and are
/// interpolated verbatim into the prompt to condition the recommendations.
pub fn audience_description(level: AudienceLevel) -> &'static str {
    match level {
        AudienceLevel::General => {
            "general readers with no prior background knowledge. Recommend accessible, \
             engaging popular histories that explain concepts clearly without assuming expertise."
        }
        AudienceLevel::Undergraduate => {
            "undergraduate students with some foundational knowledge. Recommend well-researched \
             books that balance accessibility with academic rigor, including some scholarly works."
        }
        AudienceLevel::Graduate => {
            "graduate students and academics seeking advanced scholarship. Recommend \
             authoritative academic works, primary sources, and historiographical texts that \
             engage with scholarly debates."
        }
    }
}

fn build_prompt(topic: &str, level: AudienceLevel) -> String {
    format!(
        "Role: You are a specialized AI assistant named \"Historian's Bookshelf.\" Your purpose \
         is to act as an expert librarian, recommending history books to users.\n\n\
         Target Audience: Your recommendations should be appropriate for {audience}\n\n\
         Task:\n\
         1. Based on the user's input topic, recommend up to 5 specific, well-regarded history \
         books. The user's topic is: \"{topic}\".\n\
         2. For each book, provide its full title and author.\n\
         3. For each book, write a short, one-paragraph summary of its contents, explaining why \
         it is a good recommendation for their topic. The summary should be engaging and \
         informative, highlighting the book's key themes or unique perspective.\n\
         4. For each book, provide a direct URL link to a major online bookstore (like Amazon) \
         where it can be purchased.\n\
         5. For each book, provide a publicly accessible, direct URL to its cover image (e.g., a \
         URL ending in .jpg or .png from a source like Goodreads, Wikipedia, or an online \
         bookstore).\n\
         6. After providing the book recommendations, suggest 3-4 related historical topics that \
         the user might also be interested in. These topics should be different from the \
         original query but thematically connected.\n\
         7. The output must be formatted as a single JSON object that strictly adheres to the \
         provided schema. Do not include any markdown formatting like ```json. If you can't find \
         any relevant books, return an empty array for 'recommendations'.",
        audience = audience_description(level),
        topic = topic,
    )
}

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recommendations": {
                "type": "ARRAY",
                "description": "A list of up to 5 book recommendations.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": {
                            "type": "STRING",
                            "description": "The full title of the recommended book."
                        },
                        "author": {
                            "type": "STRING",
                            "description": "The full name of the book's author."
                        },
                        "summary": {
                            "type": "STRING",
                            "description": "A short, one-paragraph summary of the book's contents."
                        },
                        "purchaseLink": {
                            "type": "STRING",
                            "description": "A URL to a major online bookstore where the book can be purchased."
                        },
                        "coverImageURL": {
                            "type": "STRING",
                            "description": "A publicly accessible, direct URL to the book's cover image."
                        }
                    },
                    "required": ["title", "author", "summary", "purchaseLink", "coverImageURL"]
                }
            },
            "relatedTopics": {
                "type": "ARRAY",
                "description": "An array of 3-4 related historical topics the user might also be interested in.",
                "items": { "type": "STRING" }
            }
        },
        "required": ["recommendations", "relatedTopics"]
    })
}

fn validated_recommendation(item: &Value) -> Option<BookRecommendation> {
    fn non_empty(item: &Value, field: &str) -> Option<String> {
        item.get(field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    Some(BookRecommendation {
        title: non_empty(item, "title")?,
        author: non_empty(item, "author")?,
        summary: non_empty(item, "summary")?,
        purchase_link: non_empty(item, "purchaseLink")?,
        cover_image_url: non_empty(item, "coverImageURL")?,
    })
}

/// Parses and validates the model's JSON payload text.
///
/// The text must be a JSON object; anything else fails the whole call with
/// `RecommendError::SerdeError`. Within a parsed object the handling is
/// lenient: recommendation items missing any of the five required fields (or
/// carrying empty strings for them) are dropped silently, at most five items
/// are kept, and `relatedTopics` degrades to an empty list when absent or not
/// an array of strings.
pub fn parse_recommendation_payload(text: &str) -> Result<RecommendationSet, RecommendError> {
    let parsed: Value = serde_json::from_str(text)?;

    let recommendations = parsed
        .get("recommendations")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(validated_recommendation)
                .take(5)
                .collect()
        })
        .unwrap_or_default();

    let related_topics = parsed
        .get("relatedTopics")
        .and_then(Value::as_array)
        .map(|topics| {
            topics
                .iter()
                .filter_map(|t| t.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Ok(RecommendationSet {
        recommendations,
        related_topics,
    })
}

/// Client for the Gemini generateContent API.
///
/// Construction fails fast when the API key is missing, so a misconfigured
/// installation never gets as far as issuing a request.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiClient {
    /// Builds a client from the `GEMINI_*` environment configuration.
    ///
    /// # Errors
    ///
    /// Returns `RecommendError::MissingCredentials` if `GEMINI_API_KEY` is not
    /// set. This is the application's fatal startup condition; callers are
    /// expected to abort rather than continue without a provider.
    pub fn from_env() -> Result<Self, RecommendError> {
        let api_key = config::gemini_api_key().map_err(RecommendError::MissingCredentials)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            api_key,
            api_url: config::gemini_api_url(),
            model: config::gemini_model(),
        })
    }

    /// Fetches book recommendations for a topic from the Gemini API.
    ///
    /// Issues exactly one `generateContent` request conditioned on the topic
    /// and the audience level, constrained to the recommendation response
    /// schema with temperature 0.7. The model is instructed to return an
    /// empty `recommendations` array rather than fabricate results.
    ///
    /// # Arguments
    ///
    /// * `topic` - Non-empty historical topic to recommend books for
    /// * `level` - Audience the recommendations should be tuned for
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(RecommendationSet)` - 0-5 validated recommendations plus related topics
    /// - `Err(RecommendError)` - network error, provider error, or malformed response
    ///
    /// # Error Handling
    ///
    /// There is no retry and no partial result: any failure during the call is
    /// surfaced as a single error and the caller decides whether to resubmit.
    /// Individual malformed recommendation items are the one exception; they
    /// are dropped during validation without failing the batch.
    ///
    /// # Example
    ///
    /// ```
    /// let client = GeminiClient::from_env()?;
    /// let set = client.fetch_recommendations("The Silk Road", AudienceLevel::General).await?;
    /// println!("{} books, {} related topics", set.recommendations.len(), set.related_topics.len());
    /// ```
    pub async fn fetch_recommendations(
        &self,
        topic: &str,
        level: AudienceLevel,
    ) -> Result<RecommendationSet, RecommendError> {
        let api_url = format!(
            "{uri}/models/{model}:generateContent",
            uri = self.api_url,
            model = self.model
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(topic, level) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
                "temperature": 0.7
            }
        });

        let response = self
            .http
            .post(&api_url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let envelope: Value = response.json().await?;
        let text = envelope["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                RecommendError::ProviderError("response contained no candidate text".to_string())
            })?;

        parse_recommendation_payload(text.trim())
    }
}
