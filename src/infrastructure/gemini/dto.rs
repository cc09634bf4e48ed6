//! Wire types for the `generateContent` endpoint and the catalog payloads.
//!
//! Payload types deserialize leniently; `TryFrom` conversions reject anything
//! the screens could not render.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::{
    Article, Book, BookDetails, Conference, DeviceCategory, DeviceDetails, DeviceFromApi,
    Malfunction,
};
use crate::domain::errors::ContentError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Plain-text request.
    #[must_use]
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user(prompt)],
            generation_config: None,
        }
    }

    /// Request constrained to JSON matching `schema`.
    #[must_use]
    pub fn json(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            contents: vec![Content::user(prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    ///
    /// # Errors
    /// Returns `EmptyResponse` when the prompt was blocked or no text came back.
    pub fn into_text(self) -> Result<String, ContentError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ContentError::empty(format!("prompt blocked: {reason}")));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ContentError::empty("no candidates"))?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            let reason = candidate
                .finish_reason
                .unwrap_or_else(|| "no text".to_string());
            return Err(ContentError::empty(reason));
        }
        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// API error body.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

fn required(field: impl FnOnce() -> String, value: String) -> Result<String, ContentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContentError::invalid(field(), "is empty"));
    }
    Ok(trimmed.to_string())
}

fn non_empty<T>(field: &str, items: Vec<T>) -> Result<Vec<T>, ContentError> {
    if items.is_empty() {
        return Err(ContentError::invalid(field, "has no entries"));
    }
    Ok(items)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesPayload {
    #[serde(default)]
    pub categories: Vec<CategoryWire>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWire {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub devices: Vec<DeviceWire>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceWire {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
}

impl TryFrom<CategoriesPayload> for Vec<DeviceCategory> {
    type Error = ContentError;

    fn try_from(payload: CategoriesPayload) -> Result<Self, Self::Error> {
        non_empty("categories", payload.categories)?
            .into_iter()
            .enumerate()
            .map(|(i, wire)| {
                let name = required(|| format!("categories[{i}].name"), wire.name)?;
                let devices = wire
                    .devices
                    .into_iter()
                    .enumerate()
                    .map(|(j, d)| {
                        let device_name =
                            required(|| format!("categories[{i}].devices[{j}].name"), d.name)?;
                        Ok(DeviceFromApi::new(device_name, d.image_url.trim()))
                    })
                    .collect::<Result<Vec<_>, ContentError>>()?;
                Ok(DeviceCategory {
                    name,
                    description: wire.description.trim().to_string(),
                    devices,
                })
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetailsWire {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub principle: String,
    #[serde(default)]
    pub malfunctions: Vec<MalfunctionWire>,
}

#[derive(Debug, Deserialize)]
pub struct MalfunctionWire {
    #[serde(default)]
    pub fault: String,
    #[serde(default)]
    pub solution: String,
}

impl DeviceDetailsWire {
    /// Validates the payload, falling back to `requested_name` when no name came back.
    ///
    /// # Errors
    /// Returns `Invalid` when the principle or a malfunction field is empty.
    pub fn validate(self, requested_name: &str) -> Result<DeviceDetails, ContentError> {
        let name = if self.name.trim().is_empty() {
            requested_name.to_string()
        } else {
            self.name.trim().to_string()
        };
        let principle = required(|| "principle".to_string(), self.principle)?;
        let malfunctions = self
            .malfunctions
            .into_iter()
            .enumerate()
            .map(|(i, m)| {
                Ok(Malfunction::new(
                    required(|| format!("malfunctions[{i}].fault"), m.fault)?,
                    required(|| format!("malfunctions[{i}].solution"), m.solution)?,
                ))
            })
            .collect::<Result<Vec<_>, ContentError>>()?;

        Ok(DeviceDetails {
            name,
            principle,
            malfunctions,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct BooksPayload {
    #[serde(default)]
    pub books: Vec<BookWire>,
}

#[derive(Debug, Deserialize)]
pub struct BookWire {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl TryFrom<BooksPayload> for Vec<Book> {
    type Error = ContentError;

    fn try_from(payload: BooksPayload) -> Result<Self, Self::Error> {
        non_empty("books", payload.books)?
            .into_iter()
            .enumerate()
            .map(|(i, b)| {
                Ok(Book::new(
                    required(|| format!("books[{i}].title"), b.title)?,
                    required(|| format!("books[{i}].author"), b.author)?,
                    b.description.trim(),
                ))
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct BookSummaryWire {
    #[serde(default)]
    pub summary: String,
}

impl BookSummaryWire {
    /// Attaches the summary to the requested book.
    ///
    /// # Errors
    /// Returns `Invalid` when the summary is empty.
    pub fn validate(self, book: &Book) -> Result<BookDetails, ContentError> {
        let summary = required(|| "summary".to_string(), self.summary)?;
        Ok(BookDetails::new(book.clone(), summary))
    }
}

#[derive(Debug, Deserialize)]
pub struct ArticlesPayload {
    #[serde(default)]
    pub articles: Vec<ArticleWire>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleWire {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: String,
    #[serde(default)]
    pub journal: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub url: String,
}

impl TryFrom<ArticlesPayload> for Vec<Article> {
    type Error = ContentError;

    fn try_from(payload: ArticlesPayload) -> Result<Self, Self::Error> {
        non_empty("articles", payload.articles)?
            .into_iter()
            .enumerate()
            .map(|(i, a)| {
                Ok(Article {
                    title: required(|| format!("articles[{i}].title"), a.title)?,
                    authors: a.authors.trim().to_string(),
                    journal: a.journal.trim().to_string(),
                    summary: a.summary.trim().to_string(),
                    url: required(|| format!("articles[{i}].url"), a.url)?,
                })
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct ConferencesPayload {
    #[serde(default)]
    pub conferences: Vec<ConferenceWire>,
}

#[derive(Debug, Deserialize)]
pub struct ConferenceWire {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
}

impl TryFrom<ConferencesPayload> for Vec<Conference> {
    type Error = ContentError;

    fn try_from(payload: ConferencesPayload) -> Result<Self, Self::Error> {
        non_empty("conferences", payload.conferences)?
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                Ok(Conference {
                    name: required(|| format!("conferences[{i}].name"), c.name)?,
                    location: c.location.trim().to_string(),
                    date: c.date.trim().to_string(),
                    description: c.description.trim().to_string(),
                    url: required(|| format!("conferences[{i}].url"), c.url)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"{\"a\":"},{"text":"1}"}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();

        assert_eq!(response.into_text().unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_into_text_reports_block_reason() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();

        let err = response.into_text().unwrap_err();

        assert!(matches!(err, ContentError::EmptyResponse { ref reason } if reason.contains("SAFETY")));
    }

    #[test]
    fn test_into_text_rejects_missing_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            response.into_text(),
            Err(ContentError::EmptyResponse { .. })
        ));
    }

    #[test]
    fn test_json_request_serializes_generation_config() {
        let request = GenerateContentRequest::json("hi", serde_json::json!({"type": "OBJECT"}));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
    }

    #[test]
    fn test_categories_are_trimmed_and_validated() {
        let payload: CategoriesPayload = serde_json::from_str(
            r#"{"categories":[{"name":" Imaging ","description":"d","devices":[{"name":"MRI","imageUrl":"u"}]}]}"#,
        )
        .unwrap();

        let categories: Vec<DeviceCategory> = payload.try_into().unwrap();

        assert_eq!(categories[0].name, "Imaging");
        assert_eq!(categories[0].devices[0].image_url, "u");
    }

    #[test]
    fn test_category_with_blank_device_name_is_rejected() {
        let payload: CategoriesPayload = serde_json::from_str(
            r#"{"categories":[{"name":"Imaging","devices":[{"name":"  "}]}]}"#,
        )
        .unwrap();

        let err = Vec::<DeviceCategory>::try_from(payload).unwrap_err();

        assert_eq!(
            err.to_string(),
            "content failed validation: categories[0].devices[0].name is empty"
        );
    }

    #[test]
    fn test_empty_book_list_is_rejected() {
        let payload: BooksPayload = serde_json::from_str(r#"{"books":[]}"#).unwrap();
        assert!(Vec::<Book>::try_from(payload).is_err());
    }

    #[test]
    fn test_device_details_fall_back_to_requested_name() {
        let wire: DeviceDetailsWire = serde_json::from_str(
            r#"{"principle":"Uses magnets.","malfunctions":[{"fault":"Quench","solution":"Call vendor"}]}"#,
        )
        .unwrap();

        let details = wire.validate("MRI").unwrap();

        assert_eq!(details.name, "MRI");
        assert_eq!(details.malfunctions.len(), 1);
    }

    #[test]
    fn test_article_without_url_is_rejected() {
        let payload: ArticlesPayload =
            serde_json::from_str(r#"{"articles":[{"title":"T","url":""}]}"#).unwrap();
        assert!(Vec::<Article>::try_from(payload).is_err());
    }
}
