//! Smoke check that drives the user API client against a live endpoint.

#![forbid(unsafe_code)]

mod probe_config;

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use userlink_application::UserService;
use userlink_core::{AppError, AppResult};
use userlink_infrastructure::ReqwestUserApiTransport;

use crate::probe_config::ProbeConfig;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ProbeConfig::load()?;
    let service = build_user_service(&config)?;

    info!(
        user_id = config.user_id,
        page = config.page,
        "userlink-probe started"
    );

    match service.fetch_user_by_id(config.user_id).await {
        Ok(user) => match serde_json::to_string(&user) {
            Ok(user_json) => info!(user = %user_json, "fetched user"),
            Err(error) => warn!(user_id = user.id(), error = %error, "failed to encode user"),
        },
        Err(AppError::UserNotFound(id)) => warn!(user_id = id, "user does not exist"),
        Err(error) => return Err(error),
    }

    let page = service.fetch_paginated_users(config.page).await?;
    info!(
        page = ?page.pagination.page,
        per_page = ?page.pagination.per_page,
        total = ?page.pagination.total,
        total_pages = ?page.pagination.total_pages,
        user_count = page.users.len(),
        "fetched user page"
    );

    let created_id = service.create_user("John Doe", "Developer").await?;
    info!(user_id = created_id, "created user");

    Ok(())
}

fn build_user_service(config: &ProbeConfig) -> AppResult<UserService> {
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|error| {
            AppError::Configuration(format!("failed to build HTTP client: {error}"))
        })?;
    let transport = ReqwestUserApiTransport::new(http_client, config.base_url.as_str())?;
    info!(base_url = %transport.base_url(), "user API transport ready");

    Ok(UserService::new(Arc::new(transport)))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
