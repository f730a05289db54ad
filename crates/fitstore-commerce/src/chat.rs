//! Community chat and feedback board, persisted under the `chats` key.

use crate::demo;
use crate::error::CommerceError;
use crate::ids::{ChatId, ReplyId, UserId};
use chrono::{DateTime, Utc};
use fitstore_cache::{keys, Cache};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub id: ReplyId,
    pub user_id: UserId,
    pub user_name: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatPost {
    pub id: ChatId,
    pub user_id: UserId,
    pub user_name: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Oldest first.
    #[serde(default)]
    pub replies: Vec<ChatReply>,
}

impl ChatPost {
    fn matches(&self, needle_lower: &str) -> bool {
        self.message.to_lowercase().contains(needle_lower)
            || self.user_name.to_lowercase().contains(needle_lower)
            || self
                .replies
                .iter()
                .any(|r| r.message.to_lowercase().contains(needle_lower))
    }
}

/// Posts, newest first.
#[derive(Debug, Clone)]
pub struct ChatBoard {
    posts: Vec<ChatPost>,
    cache: Cache,
}

impl ChatBoard {
    /// Load the persisted board, falling back to the demo posts.
    pub fn load(cache: Cache) -> Result<Self, CommerceError> {
        let posts = match cache.get::<Vec<ChatPost>>(keys::CHATS)? {
            Some(posts) => posts,
            None => demo::chats(),
        };
        Ok(Self { posts, cache })
    }

    pub fn posts(&self) -> &[ChatPost] {
        &self.posts
    }

    pub fn get(&self, id: &ChatId) -> Option<&ChatPost> {
        self.posts.iter().find(|p| &p.id == id)
    }

    /// Publish a new post at the top of the board.
    pub fn post(
        &mut self,
        user_id: &UserId,
        user_name: &str,
        message: &str,
    ) -> Result<ChatId, CommerceError> {
        let message = non_empty(message)?;
        let id = ChatId::generate();
        let post = ChatPost {
            id: id.clone(),
            user_id: user_id.clone(),
            user_name: user_name.to_string(),
            message,
            timestamp: Utc::now(),
            replies: Vec::new(),
        };
        self.modify(|posts| {
            posts.insert(0, post);
            Ok(())
        })?;
        info!(chat_id = %id, user_id = %user_id, "chat post published");
        Ok(id)
    }

    /// Append a reply to a post.
    pub fn reply(
        &mut self,
        post_id: &ChatId,
        user_id: &UserId,
        user_name: &str,
        message: &str,
    ) -> Result<ReplyId, CommerceError> {
        let message = non_empty(message)?;
        let id = ReplyId::generate();
        let reply = ChatReply {
            id: id.clone(),
            user_id: user_id.clone(),
            user_name: user_name.to_string(),
            message,
            timestamp: Utc::now(),
        };
        self.modify(|posts| {
            let post = posts
                .iter_mut()
                .find(|p| &p.id == post_id)
                .ok_or_else(|| CommerceError::ChatNotFound(post_id.to_string()))?;
            post.replies.push(reply);
            Ok(())
        })?;
        info!(chat_id = %post_id, reply_id = %id, "chat reply added");
        Ok(id)
    }

    /// Posts whose message, author or any reply contains `text`.
    pub fn search(&self, text: &str) -> Vec<&ChatPost> {
        let needle = text.trim().to_lowercase();
        self.posts
            .iter()
            .filter(|p| needle.is_empty() || p.matches(&needle))
            .collect()
    }

    /// Apply `f` to a copy of the posts, persist it, then keep it.
    fn modify(
        &mut self,
        f: impl FnOnce(&mut Vec<ChatPost>) -> Result<(), CommerceError>,
    ) -> Result<(), CommerceError> {
        let mut posts = self.posts.clone();
        f(&mut posts)?;
        self.cache.set(keys::CHATS, &posts)?;
        self.posts = posts;
        Ok(())
    }
}

fn non_empty(message: &str) -> Result<String, CommerceError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(CommerceError::ValidationError("message is empty".to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_goes_first_and_persists() {
        let cache = Cache::in_memory();
        let mut board = ChatBoard::load(cache.clone()).unwrap();
        let before = board.posts().len();

        let id = board
            .post(&UserId::new("u1"), "Asha", "  Best time for creatine?  ")
            .unwrap();

        assert_eq!(board.posts().len(), before + 1);
        assert_eq!(board.posts()[0].id, id);
        assert_eq!(board.posts()[0].message, "Best time for creatine?");
        assert_eq!(ChatBoard::load(cache).unwrap().posts()[0].id, id);
    }

    #[test]
    fn test_blank_post_rejected() {
        let cache = Cache::in_memory();
        let mut board = ChatBoard::load(cache.clone()).unwrap();
        let err = board.post(&UserId::new("u1"), "Asha", "   ").unwrap_err();
        assert!(matches!(err, CommerceError::ValidationError(_)));
        assert!(!cache.exists(keys::CHATS).unwrap());
    }

    #[test]
    fn test_reply_appends() {
        let mut board = ChatBoard::load(Cache::in_memory()).unwrap();
        let post_id = board.post(&UserId::new("u1"), "Asha", "Question").unwrap();
        board.reply(&post_id, &UserId::new("u2"), "Ravi", "First").unwrap();
        board.reply(&post_id, &UserId::new("u3"), "Meena", "Second").unwrap();

        let replies = &board.get(&post_id).unwrap().replies;
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[1].message, "Second");
    }

    #[test]
    fn test_reply_to_missing_post() {
        let mut board = ChatBoard::load(Cache::in_memory()).unwrap();
        let err = board
            .reply(&ChatId::new("nope"), &UserId::new("u1"), "Asha", "hi")
            .unwrap_err();
        assert!(matches!(err, CommerceError::ChatNotFound(_)));
    }

    #[test]
    fn test_search_covers_replies_and_author() {
        let mut board = ChatBoard::load(Cache::in_memory()).unwrap();
        let post_id = board.post(&UserId::new("u1"), "Asha", "Question").unwrap();
        board
            .reply(&post_id, &UserId::new("u2"), "Ravi", "Try MAGNESIUM at night")
            .unwrap();

        assert!(board.search("magnesium").iter().any(|p| p.id == post_id));
        assert!(board.search("asha").iter().any(|p| p.id == post_id));
        assert!(board.search("zzz-no-match").is_empty());
        assert_eq!(board.search("").len(), board.posts().len());
    }

    #[test]
    fn test_failed_write_keeps_board() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("state");
        let mut board = ChatBoard::load(Cache::open_dir(&data).unwrap()).unwrap();
        let before = board.posts().to_vec();

        std::fs::remove_dir_all(&data).unwrap();
        assert!(board.post(&UserId::new("u1"), "Asha", "Question").is_err());
        assert!(board
            .reply(&before[0].id, &UserId::new("u2"), "Ravi", "Answer")
            .is_err());

        assert_eq!(board.posts(), before.as_slice());
    }
}
