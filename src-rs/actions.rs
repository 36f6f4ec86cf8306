//! Request-scoped calendar actions. Each function runs one request to
//! completion against an explicit settings snapshot and a store handle,
//! and answers with a `{"success": bool, "data": ...}` JSON body.

use anyhow::Result;
use serde_json::{json, Value};

use crate::config::CalendarSettings;
use crate::dates;
use crate::llm::models::provider_base::ProviderClient;
use crate::llm::models::provider_handle::create_client;
use crate::llm::outline::clean_outline;
use crate::llm::prompts::{build_outline_prompt, build_suggestion_prompt, MAX_RECENT_TITLES};
use crate::llm::retry::{call_with_retry, DEFAULT_MAX_RETRIES};
use crate::store::{CalendarStore, PostQuery, PostStatus};

pub const SUGGESTION_MAX_TOKENS: u32 = 500;
pub const OUTLINE_MAX_TOKENS: u32 = 1500;
pub const HEALTH_PROBE_MAX_TOKENS: u32 = 10;

fn success(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

fn failure(message: impl Into<String>) -> Value {
    json!({ "success": false, "data": message.into() })
}

fn storage_failure(err: anyhow::Error) -> Value {
    log::error!("store operation failed: {err:#}");
    failure(err.to_string())
}

/// One provider round trip with bounded retry. The alternate format pulls
/// the cause chain into the message so HTTP status text survives for the
/// caller and for health classification.
async fn invoke_provider(
    settings: &CalendarSettings,
    prompt: &str,
    max_tokens: u32,
) -> Result<String, String> {
    let client = create_client(settings.provider, settings.api_key.clone());
    log::debug!(
        "dispatching {} token request to {}",
        max_tokens,
        settings.provider.display_name()
    );
    call_with_retry(
        || async { client.invoke(prompt, max_tokens).await },
        DEFAULT_MAX_RETRIES,
    )
    .await
    .map_err(|err| format!("{err:#}"))
}

/// Posts for one calendar span, inclusive `YYYY-MM-DD` day bounds.
pub async fn get_posts(store: &dyn CalendarStore, start_day: &str, end_day: &str) -> Value {
    if dates::parse_day(start_day).is_none() || dates::parse_day(end_day).is_none() {
        return failure("Invalid date format");
    }
    match store.posts_between(start_day, end_day) {
        Ok(posts) => success(json!(posts)),
        Err(err) => storage_failure(err),
    }
}

/// Paged post listing for the sidebar browser. An unknown status name
/// behaves like no filter, matching a cleared dropdown.
pub async fn get_all_posts(
    store: &dyn CalendarStore,
    page: usize,
    per_page: usize,
    search: &str,
    status: &str,
) -> Value {
    let query = PostQuery {
        page: page.max(1),
        per_page: if per_page == 0 { 20 } else { per_page },
        search: search.trim().to_string(),
        status: PostStatus::from_name(status),
    };
    match store.query_posts(&query) {
        Ok(listing) => success(json!(listing)),
        Err(err) => storage_failure(err),
    }
}

/// Asks the configured provider for 3 post ideas for `date` (`YYYY-MM-DD`).
/// `data` on success is the raw `Title: X | Desc: Y` response text.
pub async fn get_suggestions(
    store: &dyn CalendarStore,
    settings: &CalendarSettings,
    date: &str,
) -> Value {
    if !settings.has_api_key() {
        return failure("API key not configured");
    }
    let Some(target) = dates::parse_day(date) else {
        return failure("Invalid date format");
    };
    let recent_titles = match store.recent_titles(MAX_RECENT_TITLES) {
        Ok(titles) => titles,
        Err(err) => return storage_failure(err),
    };

    let prompt = build_suggestion_prompt(settings, target, dates::today(), &recent_titles);
    log::info!(
        "requesting suggestions from {} for {date}",
        settings.provider.provider_name()
    );
    match invoke_provider(settings, &prompt, SUGGESTION_MAX_TOKENS).await {
        Ok(text) => success(json!(text)),
        Err(message) => failure(message),
    }
}

/// Generates a writing guide for a draft created from a suggestion, stores
/// it as the post content, and returns the cleaned text.
pub async fn generate_outline(
    store: &dyn CalendarStore,
    settings: &CalendarSettings,
    post_id: u64,
) -> Value {
    if post_id == 0 {
        return failure("Invalid post ID");
    }
    if !settings.has_api_key() {
        return failure("API key not configured");
    }
    let post = match store.post(post_id) {
        Ok(Some(post)) => post,
        Ok(None) => return failure("Post not found"),
        Err(err) => return storage_failure(err),
    };
    let suggestion = match store.suggestion_for(post_id) {
        Ok(Some(suggestion)) => suggestion,
        Ok(None) => return failure("No AI suggestion found for this post"),
        Err(err) => return storage_failure(err),
    };

    let prompt = build_outline_prompt(
        &post.title,
        &suggestion,
        &settings.site_context,
        &settings.tone,
    );
    log::info!(
        "generating outline for post {post_id} via {}",
        settings.provider.provider_name()
    );
    let outline = match invoke_provider(settings, &prompt, OUTLINE_MAX_TOKENS).await {
        Ok(text) => clean_outline(&text),
        Err(message) => return failure(message),
    };

    if let Err(err) = store.set_content(post_id, &outline) {
        return storage_failure(err);
    }
    success(json!({
        "outline": outline,
        "message": "Outline generated successfully!",
    }))
}

/// Reschedules a post. `new_date` must be a valid `YYYY-MM-DD HH:MM:SS`.
pub async fn update_post_date(store: &dyn CalendarStore, post_id: u64, new_date: &str) -> Value {
    if post_id == 0 || new_date.is_empty() {
        return failure("Invalid parameters");
    }
    if !dates::validate_date_time(new_date) {
        return failure("Invalid date format");
    }
    match store.update_post_date(post_id, new_date) {
        Ok(()) => success(Value::Null),
        Err(err) => storage_failure(err),
    }
}

/// Creates a draft at `date`, keeping the suggestion description attached
/// so an outline can be generated later.
pub async fn create_draft(
    store: &dyn CalendarStore,
    title: &str,
    description: &str,
    date: &str,
) -> Value {
    let title = title.trim();
    if title.is_empty() {
        return failure("Title is required");
    }
    if !dates::validate_date_time(date) {
        return failure("Invalid date format");
    }
    match store.create_draft(title, description, date) {
        Ok(record) => success(json!({
            "id": record.id,
            "editUrl": record.edit_url,
        })),
        Err(err) => storage_failure(err),
    }
}

pub async fn trash_post(store: &dyn CalendarStore, post_id: u64) -> Value {
    if post_id == 0 {
        return failure("Invalid post ID");
    }
    match store.post(post_id) {
        Ok(Some(_)) => {}
        Ok(None) => return failure("Post not found"),
        Err(err) => return storage_failure(err),
    }
    match store.trash_post(post_id) {
        Ok(()) => success(Value::Null),
        Err(err) => storage_failure(err),
    }
}

/// Probes the configured model with a minimal request and maps the result
/// onto a coarse health status for the settings screen.
pub async fn check_model_health(settings: &CalendarSettings) -> Value {
    if !settings.has_api_key() {
        return failure("API key not configured");
    }

    let probe = invoke_provider(settings, "Test", HEALTH_PROBE_MAX_TOKENS).await;
    let (status, message) = match &probe {
        Ok(_) => ("available", "Model is available and responding".to_string()),
        Err(detail) => {
            let lowered = detail.to_lowercase();
            if lowered.contains("model") || lowered.contains("not found") {
                (
                    "unavailable",
                    "Model may be unavailable or deprecated".to_string(),
                )
            } else if detail.contains("401") || detail.contains("403") {
                ("auth_error", "API key authentication failed".to_string())
            } else {
                ("error", detail.clone())
            }
        }
    };

    success(json!({
        "provider": settings.provider.provider_name(),
        "status": status,
        "message": message,
    }))
}
