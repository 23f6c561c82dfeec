use super::model::{LinkItem, SortOrder};
use crate::domain::suggestions::CategoryId;
use std::cmp::Ordering;

fn compare_titles(a: &LinkItem, b: &LinkItem) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

pub fn filter_by_category(links: Vec<LinkItem>, category: Option<CategoryId>) -> Vec<LinkItem> {
    match category {
        Some(category) => links.into_iter().filter(|l| l.category == category).collect(),
        None => links,
    }
}

/// Stable sort; category order is by display name, ties broken by title
pub fn sort_links(links: &mut [LinkItem], order: SortOrder) {
    match order {
        SortOrder::TitleAsc => links.sort_by(compare_titles),
        SortOrder::TitleDesc => links.sort_by(|a, b| compare_titles(b, a)),
        SortOrder::CategoryAsc => links.sort_by(|a, b| {
            a.category
                .as_str()
                .cmp(b.category.as_str())
                .then_with(|| compare_titles(a, b))
        }),
        SortOrder::DateAsc => links.sort_by_key(|l| l.added_at),
        SortOrder::DateDesc => links.sort_by(|a, b| b.added_at.cmp(&a.added_at)),
    }
}
