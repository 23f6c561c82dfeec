use crate::domain::suggestions::{AcceptedLink, CategoryId, LinkIdentity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkSource {
    Curated,
    Ai,
}

/// Entry of a session's link collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: CategoryId,
    pub source: LinkSource,
    pub added_at: DateTime<Utc>,
}

impl LinkItem {
    pub fn from_suggestion(link: AcceptedLink, added_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: link.title,
            description: link.description,
            url: link.url,
            category: link.category,
            source: LinkSource::Ai,
            added_at,
        }
    }

    pub fn identity(&self) -> LinkIdentity {
        LinkIdentity::new(self.url.clone(), Some(self.title.clone()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    TitleAsc,
    TitleDesc,
    CategoryAsc,
    DateAsc,
    #[default]
    DateDesc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title-asc" => Ok(SortOrder::TitleAsc),
            "title-desc" => Ok(SortOrder::TitleDesc),
            "category-asc" => Ok(SortOrder::CategoryAsc),
            "date-asc" => Ok(SortOrder::DateAsc),
            "date-desc" => Ok(SortOrder::DateDesc),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}
