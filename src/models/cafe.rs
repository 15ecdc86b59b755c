use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cafe {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub map_url: String,
    #[serde(deserialize_with = "text_or_number")]
    pub seats: String,
    #[serde(default)]
    pub coffee_price: Option<String>,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub has_toilet: bool,
    pub can_take_calls: bool,
    pub img_url: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_id: Option<i32>,
}

/// Seats are stored as free text by the backend, but older rows carry a bare number.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seats {
        Text(String),
        Count(i64),
    }

    Ok(match Seats::deserialize(deserializer)? {
        Seats::Text(text) => text,
        Seats::Count(count) => count.to_string(),
    })
}

/// Body returned by `/all`, `/search_name` and `/search_loc`.
///
/// The backend nests its not-found error under `cafes` and answers 404, so
/// both `{"cafes": {"error": ..}}` and a top-level `{"error": ..}` are accepted.
#[derive(Debug, Deserialize)]
pub struct CafeListResponse {
    #[serde(default)]
    cafes: Option<CafesField>,
    #[serde(default)]
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CafesField {
    List(Vec<Cafe>),
    Error { error: ErrorBody },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "Not Found", default)]
    not_found: Option<String>,
}

impl ErrorBody {
    fn into_listing(self) -> Result<Listing, ClientError> {
        self.not_found.map(Listing::NotFound).ok_or_else(|| {
            ClientError::UnexpectedPayload("error object without a \"Not Found\" message".into())
        })
    }
}

impl CafeListResponse {
    pub fn into_listing(self) -> Result<Listing, ClientError> {
        if let Some(error) = self.error {
            return error.into_listing();
        }

        match self.cafes {
            Some(CafesField::List(cafes)) => Ok(Listing::Cafes(cafes)),
            Some(CafesField::Error { error }) => error.into_listing(),
            None => Err(ClientError::UnexpectedPayload(
                "response has no `cafes` field".into(),
            )),
        }
    }
}

/// Body returned by `/random`.
#[derive(Debug, Deserialize)]
pub struct RandomCafeResponse {
    pub cafe: Cafe,
}

/// What one render pass receives: either the cafes in server order or the
/// server's not-found message.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Cafes(Vec<Cafe>),
    NotFound(String),
}

impl Listing {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Cafes(cafes) => cafes.len(),
            Self::NotFound(_) => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
pub(crate) fn sample_cafe(id: i32, author_id: Option<i32>) -> Cafe {
    Cafe {
        id,
        name: format!("Cafe {id}"),
        location: "Shoreditch".to_string(),
        map_url: "https://maps.example.com/?q=cafe".to_string(),
        seats: "20-30".to_string(),
        coffee_price: Some("2.80 £".to_string()),
        has_wifi: true,
        has_sockets: false,
        has_toilet: true,
        can_take_calls: false,
        img_url: "https://img.example.com/cafe.jpg".to_string(),
        author_name: Some("Ada".to_string()),
        author_id,
    }
}
