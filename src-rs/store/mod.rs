pub mod memory;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Publication state of a calendar post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Publish,
    Draft,
    Pending,
    Future,
    Trash,
}

impl PostStatus {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "publish" => Some(PostStatus::Publish),
            "draft" => Some(PostStatus::Draft),
            "pending" => Some(PostStatus::Pending),
            "future" => Some(PostStatus::Future),
            "trash" => Some(PostStatus::Trash),
            _ => None,
        }
    }

    pub fn status_name(&self) -> &'static str {
        match self {
            PostStatus::Publish => "publish",
            PostStatus::Draft => "draft",
            PostStatus::Pending => "pending",
            PostStatus::Future => "future",
            PostStatus::Trash => "trash",
        }
    }
}

/// One post as the calendar surface sees it. `date` is a local
/// `YYYY-MM-DD HH:MM:SS` timestamp, which sorts chronologically as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub status: PostStatus,
    #[serde(rename = "editUrl")]
    pub edit_url: String,
    pub category: String,
}

/// Paged listing for the sidebar post browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<PostRecord>,
    pub total: usize,
    pub pages: usize,
    pub current_page: usize,
}

/// Filters for [`CalendarStore::query_posts`].
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub page: usize,
    pub per_page: usize,
    pub search: String,
    pub status: Option<PostStatus>,
}

/// Storage seam between the action layer and whatever holds the posts.
pub trait CalendarStore: Send + Sync {
    /// Posts whose date falls on a day within `[start_day, end_day]`,
    /// both `YYYY-MM-DD`, trashed posts excluded.
    fn posts_between(&self, start_day: &str, end_day: &str) -> Result<Vec<PostRecord>>;

    /// Paged listing ordered by date descending, trashed posts excluded.
    fn query_posts(&self, query: &PostQuery) -> Result<PostPage>;

    /// Creates a draft scheduled at `date`. `description` is retained so a
    /// later outline request can recover the idea the draft came from.
    fn create_draft(&self, title: &str, description: &str, date: &str) -> Result<PostRecord>;

    fn post(&self, post_id: u64) -> Result<Option<PostRecord>>;

    fn update_post_date(&self, post_id: u64, date: &str) -> Result<()>;

    fn trash_post(&self, post_id: u64) -> Result<()>;

    /// The stored suggestion description for a draft, if it was created
    /// from one.
    fn suggestion_for(&self, post_id: u64) -> Result<Option<String>>;

    fn set_content(&self, post_id: u64, content: &str) -> Result<()>;

    /// Most recent post titles, newest first. Blank titles and the stock
    /// "Hello World" sample post are skipped.
    fn recent_titles(&self, limit: usize) -> Result<Vec<String>>;
}
