//! Typed pagination envelope returned by list endpoints.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use crate::errors::MappingError;
use crate::forms::page::PageParams;

const PAGINATION_SCHEMA: &str = "PaginationModel";

/// Pages always linked at each end of the table navigation.
const EDGE_PAGES: u64 = 2;
/// Pages linked before the current one.
const PAGES_BEFORE: u64 = 2;
/// Pages linked after the current one.
const PAGES_AFTER: u64 = 4;

/// Linked page numbers for `current_page` out of `last_page`, `None` marks a gap.
///
/// An out-of-range `current_page` is clamped to the nearest existing page.
fn page_window(last_page: u64, current_page: u64) -> Vec<Option<u64>> {
    if last_page == 0 {
        return Vec::new();
    }

    let current = current_page.clamp(1, last_page);
    let linked: BTreeSet<u64> = [
        1..=EDGE_PAGES.min(last_page),
        current.saturating_sub(PAGES_BEFORE).max(1)
            ..=current.saturating_add(PAGES_AFTER).min(last_page),
        last_page.saturating_sub(EDGE_PAGES - 1).max(1)..=last_page,
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut window = Vec::with_capacity(linked.len() + 2);
    let mut previous = 0;
    for page in linked {
        if page - previous > 1 {
            window.push(None);
        }
        window.push(Some(page));
        previous = page;
    }
    window
}

/// A page of mapped items together with the server-side total.
///
/// `items` keeps the order the server returned and is never truncated locally.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total_items: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(total_items: u64, items: Vec<T>) -> Self {
        Self { total_items, items }
    }

    /// Builds a page from a raw `{totalItems, items}` payload, mapping every item in order.
    pub fn from_pagination<F>(payload: &Value, map_item: F) -> Result<Self, MappingError>
    where
        F: FnMut(&Value) -> Result<T, MappingError>,
    {
        let object = payload.as_object().ok_or(MappingError::NotAnObject {
            schema: PAGINATION_SCHEMA,
        })?;

        let total_items = object
            .get("totalItems")
            .and_then(Value::as_u64)
            .ok_or_else(|| MappingError::Decode {
                schema: PAGINATION_SCHEMA,
                message: "`totalItems` must be a non-negative integer".to_string(),
            })?;

        let items = match object.get("items") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(raw)) => raw.iter().map(map_item).collect::<Result<_, _>>()?,
            Some(_) => {
                return Err(MappingError::Decode {
                    schema: PAGINATION_SCHEMA,
                    message: "`items` must be an array".to_string(),
                });
            }
        };

        Ok(Self { total_items, items })
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            total_items: self.total_items,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages needed to show `total_items` with `page_size` rows each.
    pub fn total_pages(&self, page_size: u64) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.total_items.div_ceil(page_size)
    }

    /// Page links for a table showing `current_page` (1-based) of `page_size` rows.
    pub fn page_window(&self, page_size: u64, current_page: u64) -> Vec<Option<u64>> {
        page_window(self.total_pages(page_size), current_page)
    }

    /// The page as rendered for the listing `params` requested.
    pub fn view(&self, params: &PageParams) -> PageView<'_, T> {
        PageView {
            total_items: self.total_items,
            current_page: params.current_page(),
            pages: self.page_window(params.max_results, params.current_page()),
            items: &self.items,
        }
    }
}

/// A listing page together with its navigation links.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<'a, T> {
    pub total_items: u64,
    pub current_page: u64,
    pub pages: Vec<Option<u64>>,
    pub items: &'a [T],
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn as_label(value: &Value) -> Result<String, MappingError> {
        value
            .as_str()
            .map(str::to_uppercase)
            .ok_or_else(|| MappingError::Decode {
                schema: "Label",
                message: "not a string".to_string(),
            })
    }

    #[test]
    fn preserves_item_order_and_count() {
        let payload = json!({ "totalItems": 10, "items": ["a", "b", "c"] });

        let page = Page::from_pagination(&payload, as_label).unwrap();

        assert_eq!(page.total_items, 10);
        assert_eq!(page.items, ["A", "B", "C"]);
    }

    #[test]
    fn missing_items_yield_empty_page() {
        let page = Page::from_pagination(&json!({ "totalItems": 0 }), as_label).unwrap();

        assert!(page.is_empty());
    }

    #[test]
    fn item_mapping_failure_aborts_page() {
        let payload = json!({ "totalItems": 2, "items": ["a", 1] });

        assert!(Page::from_pagination(&payload, as_label).is_err());
    }

    #[test]
    fn rejects_negative_total() {
        let err = Page::from_pagination(&json!({ "totalItems": -1, "items": [] }), as_label)
            .unwrap_err();

        assert!(matches!(err, MappingError::Decode { schema: "PaginationModel", .. }));
    }

    #[test]
    fn window_collapses_distant_pages() {
        let page: Page<()> = Page::new(200, Vec::new());

        assert_eq!(page.total_pages(10), 20);
        assert_eq!(
            page.page_window(10, 10),
            [
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20)
            ]
        );
    }

    #[test]
    fn short_listings_link_every_page() {
        let page: Page<()> = Page::new(45, Vec::new());

        assert_eq!(page.page_window(20, 1), [Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn current_page_past_the_end_is_clamped() {
        let page: Page<()> = Page::new(10, Vec::new());

        assert_eq!(
            page.page_window(1, u64::MAX),
            [Some(1), Some(2), None, Some(8), Some(9), Some(10)]
        );
        assert_eq!(page.page_window(1, 0), page.page_window(1, 1));
    }

    #[test]
    fn window_is_empty_without_items() {
        let page: Page<()> = Page::new(0, Vec::new());

        assert!(page.page_window(20, 1).is_empty());
        assert_eq!(page.total_pages(0), 0);
    }

    #[test]
    fn view_follows_requested_offset() {
        let page = Page::new(100, vec!["a", "b"]);

        let view = page.view(&PageParams {
            start_index: 40,
            max_results: 20,
        });

        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "totalItems": 100,
                "currentPage": 3,
                "pages": [1, 2, 3, 4, 5],
                "items": ["a", "b"]
            })
        );
    }
}
