use tracing::{debug, warn};
use userlink_core::{AppError, AppResult};
use userlink_domain::UserRecord;

use super::payload::{MissingKey, ResponseBody, take_key, user_from_value};
use super::{UserService, ensure_success, request_failed};

impl UserService {
    /// Fetches a single user by remote identifier.
    ///
    /// Fails with [`AppError::UserNotFound`] when the API answers 404.
    pub async fn fetch_user_by_id(&self, id: i64) -> AppResult<UserRecord> {
        let path = format!("users/{id}");
        debug!(user_id = id, path = %path, "fetching user");

        let response = self
            .transport
            .get(&path)
            .await
            .and_then(ensure_success)
            .map_err(|error| {
                if error.is_not_found() {
                    warn!(user_id = id, "user not found");
                    AppError::UserNotFound(id)
                } else {
                    request_failed("fetch_user_by_id", &error)
                }
            })?;

        let mut body = ResponseBody::decode(&response.body).into_object(MissingKey::Data)?;
        let data = take_key(&mut body, "data", MissingKey::Data)?;

        user_from_value(data)
    }
}
