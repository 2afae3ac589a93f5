use serde_json::json;
use tracing::debug;
use userlink_core::AppResult;

use super::payload::{MissingKey, ResponseBody, coerce_id, take_key};
use super::{UserService, ensure_success, request_failed};

impl UserService {
    /// Creates a remote user and returns the identifier the API assigned.
    ///
    /// The remaining fields echoed back by the API are discarded.
    pub async fn create_user(&self, name: &str, job: &str) -> AppResult<i64> {
        debug!("creating user");

        let response = self
            .transport
            .post("users", &json!({ "name": name, "job": job }))
            .await
            .and_then(ensure_success)
            .map_err(|error| request_failed("create_user", &error))?;

        let mut body = ResponseBody::decode(&response.body).into_object(MissingKey::Id)?;
        let id = coerce_id(&take_key(&mut body, "id", MissingKey::Id)?)?;

        debug!(user_id = id, "user created");
        Ok(id)
    }
}
