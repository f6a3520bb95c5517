use serde::{Deserialize, Serialize};

/// A catalog item as served by the remote product resource.
///
/// `rating` defaults to `{rate: 0, count: 0}` when the server omits it,
/// which is common on create/update echoes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub rating: Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

impl Product {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        rating: Rating,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category: category.into(),
            rating,
        }
    }
}

impl Rating {
    pub fn new(rate: f64, count: u64) -> Self {
        Self { rate, count }
    }
}

/// Upsert payload for [`crate::clients::CatalogClient::save`].
///
/// `id` present means update, absent means create. Optional fields are left
/// out of the JSON body entirely rather than sent as null.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub price: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}
