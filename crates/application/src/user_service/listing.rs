use tracing::debug;
use userlink_core::AppResult;
use userlink_domain::{Pagination, UserPage};

use super::payload::{MissingKey, ResponseBody, optional_integer, take_key, users_from_value};
use super::{UserService, ensure_success, request_failed};

impl UserService {
    /// Fetches one page of users, keeping the order the API returned.
    ///
    /// An empty body is answered with [`UserPage::degenerate`]; the API
    /// responds that way to out-of-range pages.
    pub async fn fetch_paginated_users(&self, page: i64) -> AppResult<UserPage> {
        let path = format!("users?page={page}");
        debug!(page, path = %path, "fetching user page");

        let response = self
            .transport
            .get(&path)
            .await
            .and_then(ensure_success)
            .map_err(|error| request_failed("fetch_paginated_users", &error))?;

        let body = ResponseBody::decode(&response.body);
        if matches!(body, ResponseBody::Empty) {
            debug!(page, "empty user page body, using degenerate page");
            return Ok(UserPage::degenerate());
        }

        let mut body = body.into_object(MissingKey::Data)?;
        let data = take_key(&mut body, "data", MissingKey::Data)?;
        if !body.contains_key("page") {
            return Err(MissingKey::Page.into());
        }

        let users = users_from_value(data)?;
        let per_page = optional_integer(&body, "per_page")?
            .unwrap_or_else(|| i64::try_from(users.len()).unwrap_or(i64::MAX));

        Ok(UserPage {
            pagination: Pagination {
                page: optional_integer(&body, "page")?,
                per_page: Some(per_page),
                total: optional_integer(&body, "total")?,
                total_pages: optional_integer(&body, "total_pages")?,
            },
            users,
        })
    }

    /// Fetches the first page of users.
    pub async fn fetch_first_page(&self) -> AppResult<UserPage> {
        self.fetch_paginated_users(1).await
    }
}
