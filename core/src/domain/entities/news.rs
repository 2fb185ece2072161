//! News entities served by `GET /news`.

use serde::{Deserialize, Serialize};

/// One news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Image URL or reference
    #[serde(default)]
    pub image: String,
}

/// Response of `GET /news`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsList {
    #[serde(default)]
    pub items: Vec<NewsItem>,
}

impl NewsList {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self { items }
    }

    /// Look up one item by id
    pub fn find(&self, id: &str) -> Option<&NewsItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
