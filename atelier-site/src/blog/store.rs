use std::sync::{Arc, Mutex};

use anyhow::Result;
use beacon_lib::manager::NotificationManager;
use beacon_lib::storage::KeyValueStore;
use uuid::Uuid;

use crate::blog::samples;
use crate::models::{BlogPost, BlogPostPatch, NewBlogPost};

/// Storage key for the persisted post collection.
pub const BLOG_POSTS_KEY: &str = "blogPosts";

/// Client-managed blog content store.
///
/// Posts live in memory and are mirrored to local storage on every mutation.
/// Publishing a post (on create, or on an update that flips it to published)
/// notifies the notification manager.
#[derive(Clone)]
pub struct BlogStore {
    storage: Arc<dyn KeyValueStore>,
    notifications: NotificationManager,
    posts: Arc<Mutex<Vec<BlogPost>>>,
}

impl BlogStore {
    /// Load persisted posts, seeding sample content on first run.
    pub fn load(storage: Arc<dyn KeyValueStore>, notifications: NotificationManager) -> Self {
        let posts = match storage.get(BLOG_POSTS_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<BlogPost>>(&json) {
                Ok(posts) => posts,
                Err(e) => {
                    log::warn!("Discarding unreadable blog store: {}", e);
                    samples::sample_posts()
                }
            },
            Ok(None) => {
                let seeded = samples::sample_posts();
                if let Ok(json) = serde_json::to_string(&seeded) {
                    if let Err(e) = storage.set(BLOG_POSTS_KEY, &json) {
                        log::warn!("Failed to persist seed posts: {}", e);
                    }
                }
                seeded
            }
            Err(e) => {
                log::warn!("Failed to read blog store: {}", e);
                samples::sample_posts()
            }
        };

        Self {
            storage,
            notifications,
            posts: Arc::new(Mutex::new(posts)),
        }
    }

    fn save(&self, posts: &[BlogPost]) -> Result<()> {
        let json = serde_json::to_string(posts)?;
        self.storage.set(BLOG_POSTS_KEY, &json)?;
        Ok(())
    }

    /// Create a post. Announces it when it lands already published.
    pub async fn add_post(&self, new_post: NewBlogPost) -> Result<BlogPost> {
        let post = BlogPost {
            id: Uuid::new_v4().to_string(),
            title: new_post.title,
            slug: new_post.slug,
            content: new_post.content,
            excerpt: new_post.excerpt,
            tags: new_post.tags,
            published_at: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            published: new_post.published,
            reading_time: new_post.reading_time,
        };

        {
            let mut posts = self.posts.lock().unwrap();
            posts.push(post.clone());
            self.save(&posts)?;
        }

        if post.published {
            self.notifications.notify_blog_published(&post.title).await;
        }
        Ok(post)
    }

    /// Merge-update a post. Announces it exactly when the update flips it
    /// from unpublished to published. `None` when the id is unknown.
    pub async fn update_post(&self, id: &str, patch: BlogPostPatch) -> Result<Option<BlogPost>> {
        let (updated, newly_published) = {
            let mut posts = self.posts.lock().unwrap();
            let post = match posts.iter_mut().find(|p| p.id == id) {
                Some(post) => post,
                None => return Ok(None),
            };
            let was_published = post.published;

            if let Some(title) = patch.title {
                post.title = title;
            }
            if let Some(slug) = patch.slug {
                post.slug = slug;
            }
            if let Some(content) = patch.content {
                post.content = content;
            }
            if let Some(excerpt) = patch.excerpt {
                post.excerpt = excerpt;
            }
            if let Some(tags) = patch.tags {
                post.tags = tags;
            }
            if let Some(published) = patch.published {
                post.published = published;
            }
            if let Some(reading_time) = patch.reading_time {
                post.reading_time = reading_time;
            }

            let updated = post.clone();
            let newly_published = !was_published && updated.published;
            self.save(&posts)?;
            (updated, newly_published)
        };

        if newly_published {
            self.notifications
                .notify_blog_published(&updated.title)
                .await;
        }
        Ok(Some(updated))
    }

    /// Delete a post. Returns whether anything was removed.
    pub fn delete_post(&self, id: &str) -> Result<bool> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        let removed = posts.len() < before;
        if removed {
            self.save(&posts)?;
        }
        Ok(removed)
    }

    /// All posts including drafts, for the admin view.
    pub fn posts(&self) -> Vec<BlogPost> {
        self.posts.lock().unwrap().clone()
    }

    /// Published posts, newest publication date first.
    pub fn list_published(&self) -> Vec<BlogPost> {
        let mut published: Vec<BlogPost> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.published)
            .cloned()
            .collect();
        published.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        published
    }

    /// Published post with the given slug, if any.
    pub fn find_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == slug && p.published)
            .cloned()
    }

    /// Case-insensitive search over title, content and tags of published
    /// posts.
    pub fn search(&self, query: &str) -> Vec<BlogPost> {
        let query = query.to_lowercase();
        self.posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                p.published
                    && (p.title.to_lowercase().contains(&query)
                        || p.content.to_lowercase().contains(&query)
                        || p.tags.iter().any(|t| t.to_lowercase().contains(&query)))
            })
            .cloned()
            .collect()
    }

    /// Published posts carrying the exact tag.
    pub fn posts_by_tag(&self, tag: &str) -> Vec<BlogPost> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.published && p.tags.iter().any(|t| t == tag))
            .cloned()
            .collect()
    }

    /// Every tag used by a published post, in first-seen order.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for post in self.posts.lock().unwrap().iter() {
            if !post.published {
                continue;
            }
            for tag in &post.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }
}
