//! Demo feed model: the posts shown under the pull-to-refresh wrapper.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

pub const FEED_STORAGE_KEY: &str = "ptr_demo_feed";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub image: Option<String>,
    pub likes: u32,
    pub time: String,
}

impl Post {
    fn seed(id: u64, author: &str, avatar: &str, content: &str, image: &str, likes: u32, time: &str) -> Self {
        Self {
            id,
            author: author.to_string(),
            avatar: avatar.to_string(),
            content: content.to_string(),
            image: Some(image.to_string()),
            likes,
            time: time.to_string(),
        }
    }

    /// The post a successful refresh puts at the top of the feed.
    pub fn fresh(id: u64, refresh_no: u32, likes: u32) -> Self {
        Self {
            id,
            author: "Fresh Update".to_string(),
            avatar: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=150&h=150&fit=crop&crop=face".to_string(),
            content: format!(
                "New content loaded! This is refresh #{refresh_no}. Pull down again to see more updates. 🔄"
            ),
            image: Some("https://images.unsplash.com/photo-1557804506-669a67965ba0?w=500&h=300&fit=crop".to_string()),
            likes,
            time: "now".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub posts: Vec<Post>,
    pub refresh_count: u32,
}

impl Default for Feed {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Feed {
    pub fn seeded() -> Self {
        let posts = vec![
            Post::seed(
                1,
                "Sarah Chen",
                "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face",
                "Just finished an amazing hike in the mountains! The view was absolutely breathtaking. Nature never ceases to amaze me. 🏔️✨",
                "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=500&h=300&fit=crop",
                42,
                "2h ago",
            ),
            Post::seed(
                2,
                "Marcus Rodriguez",
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
                "Coffee and code - the perfect combination for a productive morning! ☕💻 Working on some exciting new features today.",
                "https://images.unsplash.com/photo-1509042239860-f550ce710b93?w=500&h=300&fit=crop",
                28,
                "4h ago",
            ),
            Post::seed(
                3,
                "Emma Thompson",
                "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face",
                "Sunset photography session was incredible! The colors were absolutely magical. 📸🌅",
                "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=500&h=300&fit=crop",
                67,
                "6h ago",
            ),
            Post::seed(
                4,
                "David Kim",
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face",
                "Just launched my new portfolio website! Check it out and let me know what you think. 🚀",
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=500&h=300&fit=crop",
                89,
                "8h ago",
            ),
            Post::seed(
                5,
                "Lisa Wang",
                "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=150&h=150&fit=crop&crop=face",
                "Book recommendation: \"The Midnight Library\" by Matt Haig. Such a thought-provoking read about life choices and alternate realities. 📚",
                "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=500&h=300&fit=crop",
                34,
                "12h ago",
            ),
        ];
        Self {
            posts,
            refresh_count: 0,
        }
    }

    /// An untouched seeded feed is never written, so a first mount cannot
    /// overwrite a stored feed before it has been restored.
    pub fn should_persist(&self) -> bool {
        self.refresh_count > 0
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[derive(Clone, Debug)]
pub enum FeedAction {
    /// Replace the whole feed with one loaded from storage.
    Restore(Feed),
    /// A refresh finished; prepend a fresh post.
    Refreshed { id: u64, likes: u32 },
}

impl Reducible for Feed {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FeedAction::Restore(feed) => Rc::new(feed),
            FeedAction::Refreshed { id, likes } => {
                let mut new = (*self).clone();
                new.refresh_count = new.refresh_count.saturating_add(1);
                new.posts.insert(0, Post::fresh(id, new.refresh_count, likes));
                Rc::new(new)
            }
        }
    }
}
