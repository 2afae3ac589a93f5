use serde::Serialize;

use crate::UserRecord;

/// Pagination metadata reported alongside a user listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Page number echoed by the API.
    pub page: Option<i64>,
    /// Page size echoed by the API.
    pub per_page: Option<i64>,
    /// Total number of users known to the API.
    pub total: Option<i64>,
    /// Total number of pages known to the API.
    pub total_pages: Option<i64>,
}

/// One page of users in the order the API returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPage {
    /// Users on this page.
    pub users: Vec<UserRecord>,
    /// Pagination metadata for this page.
    pub pagination: Pagination,
}

impl UserPage {
    /// Page returned when the API answers an out-of-range page with an empty body.
    #[must_use]
    pub fn degenerate() -> Self {
        Self {
            users: Vec::new(),
            pagination: Pagination {
                page: Some(1),
                per_page: Some(0),
                total: Some(0),
                total_pages: Some(1),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UserPage;

    #[test]
    fn degenerate_page_serializes_with_camel_case_pagination() {
        let json = serde_json::to_string(&UserPage::degenerate());

        assert_eq!(
            json.ok().as_deref(),
            Some(r#"{"users":[],"pagination":{"page":1,"perPage":0,"total":0,"totalPages":1}}"#)
        );
    }
}
