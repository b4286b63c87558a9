use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/v1/documents`.
///
/// Serializes as `{"document":{"title":..,"content":..,"slug":..}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateDocumentRequest {
    pub document: DocumentFields,
}

/// The document fields sent to the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentFields {
    pub title: String,
    pub content: String,
    pub slug: String,
}

impl CreateDocumentRequest {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            document: DocumentFields {
                title: title.into(),
                content: content.into(),
                slug: slug.into(),
            },
        }
    }
}

/// Response body of `POST /api/v1/documents`.
///
/// Every field is optional on the wire, and `null` or a non-string value
/// reads as absent. A body carrying a textual `error` is a failure even when
/// the HTTP status is 200.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateDocumentResponse {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrOther {
    Text(String),
    Other(IgnoredAny),
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrOther::deserialize(deserializer)? {
        StringOrOther::Text(text) => Some(text),
        StringOrOther::Other(_) => None,
    })
}

/// Reference to a document the service accepted.
///
/// Missing parts are empty strings: the page URL degrades instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishedDocRef {
    pub username: String,
    pub slug: String,
}

impl From<CreateDocumentResponse> for PublishedDocRef {
    fn from(resp: CreateDocumentResponse) -> Self {
        Self {
            username: resp.username.unwrap_or_default(),
            slug: resp.slug.unwrap_or_default(),
        }
    }
}
