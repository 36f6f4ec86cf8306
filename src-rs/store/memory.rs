use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use anyhow::{bail, Result};

use crate::store::{CalendarStore, PostPage, PostQuery, PostRecord, PostStatus};

#[derive(Debug, Clone)]
struct StoredPost {
    record: PostRecord,
    suggestion: Option<String>,
    content: String,
    from_calendar: bool,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    posts: BTreeMap<u64, StoredPost>,
}

/// In-process post store guarded by a mutex. Writes are last-write-wins.
#[derive(Debug, Default)]
pub struct MemoryCalendarStore {
    inner: Mutex<Inner>,
}

impl MemoryCalendarStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still guards a consistent map; recover the guard
    // instead of propagating the panic.
    fn locked(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Seeds a post directly, bypassing draft creation.
    pub fn add_post(&self, title: &str, date: &str, status: PostStatus, category: &str) -> u64 {
        let mut inner = self.locked();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.posts.insert(
            id,
            StoredPost {
                record: PostRecord {
                    id,
                    title: title.to_string(),
                    date: date.to_string(),
                    status,
                    edit_url: edit_url(id),
                    category: category.to_string(),
                },
                suggestion: None,
                content: String::new(),
                from_calendar: false,
            },
        );
        id
    }

    /// Whether the post was created through the calendar draft flow.
    pub fn from_calendar(&self, post_id: u64) -> bool {
        let inner = self.locked();
        inner
            .posts
            .get(&post_id)
            .map(|post| post.from_calendar)
            .unwrap_or(false)
    }
}

fn edit_url(id: u64) -> String {
    format!("post.php?post={id}&action=edit")
}

fn matches_query(record: &PostRecord, query: &PostQuery) -> bool {
    if record.status == PostStatus::Trash {
        return false;
    }
    if let Some(status) = query.status {
        if record.status != status {
            return false;
        }
    }
    if !query.search.is_empty() {
        let needle = query.search.to_lowercase();
        if !record.title.to_lowercase().contains(&needle) {
            return false;
        }
    }
    true
}

impl CalendarStore for MemoryCalendarStore {
    fn posts_between(&self, start_day: &str, end_day: &str) -> Result<Vec<PostRecord>> {
        let inner = self.locked();
        let mut posts: Vec<PostRecord> = inner
            .posts
            .values()
            .filter(|post| post.record.status != PostStatus::Trash)
            .filter(|post| {
                let day = post.record.date.get(..10).unwrap_or("");
                day >= start_day && day <= end_day
            })
            .map(|post| post.record.clone())
            .collect();
        posts.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(posts)
    }

    fn query_posts(&self, query: &PostQuery) -> Result<PostPage> {
        let inner = self.locked();
        let mut matched: Vec<PostRecord> = inner
            .posts
            .values()
            .filter(|post| matches_query(&post.record, query))
            .map(|post| post.record.clone())
            .collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date));

        let per_page = query.per_page.max(1);
        let page = query.page.max(1);
        let total = matched.len();
        let pages = total.div_ceil(per_page);
        let posts = matched
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();
        Ok(PostPage {
            posts,
            total,
            pages,
            current_page: page,
        })
    }

    fn create_draft(&self, title: &str, description: &str, date: &str) -> Result<PostRecord> {
        let mut inner = self.locked();
        inner.next_id += 1;
        let id = inner.next_id;
        let record = PostRecord {
            id,
            title: title.to_string(),
            date: date.to_string(),
            status: PostStatus::Draft,
            edit_url: edit_url(id),
            category: String::new(),
        };
        let suggestion = if description.trim().is_empty() {
            None
        } else {
            Some(description.to_string())
        };
        inner.posts.insert(
            id,
            StoredPost {
                record: record.clone(),
                suggestion,
                content: String::new(),
                from_calendar: true,
            },
        );
        Ok(record)
    }

    fn post(&self, post_id: u64) -> Result<Option<PostRecord>> {
        let inner = self.locked();
        Ok(inner.posts.get(&post_id).map(|post| post.record.clone()))
    }

    fn update_post_date(&self, post_id: u64, date: &str) -> Result<()> {
        let mut inner = self.locked();
        let Some(post) = inner.posts.get_mut(&post_id) else {
            bail!("Post {post_id} not found");
        };
        post.record.date = date.to_string();
        Ok(())
    }

    fn trash_post(&self, post_id: u64) -> Result<()> {
        let mut inner = self.locked();
        let Some(post) = inner.posts.get_mut(&post_id) else {
            bail!("Post {post_id} not found");
        };
        post.record.status = PostStatus::Trash;
        Ok(())
    }

    fn suggestion_for(&self, post_id: u64) -> Result<Option<String>> {
        let inner = self.locked();
        Ok(inner
            .posts
            .get(&post_id)
            .and_then(|post| post.suggestion.clone()))
    }

    fn set_content(&self, post_id: u64, content: &str) -> Result<()> {
        let mut inner = self.locked();
        let Some(post) = inner.posts.get_mut(&post_id) else {
            bail!("Post {post_id} not found");
        };
        post.content = content.to_string();
        Ok(())
    }

    fn recent_titles(&self, limit: usize) -> Result<Vec<String>> {
        let inner = self.locked();
        let mut posts: Vec<&StoredPost> = inner
            .posts
            .values()
            .filter(|post| post.record.status != PostStatus::Trash)
            .collect();
        posts.sort_by(|a, b| b.record.date.cmp(&a.record.date));
        Ok(posts
            .into_iter()
            .map(|post| post.record.title.trim().to_string())
            .filter(|title| !title.is_empty())
            .filter(|title| !title.to_lowercase().contains("hello world"))
            .take(limit)
            .collect())
    }
}
