#![allow(dead_code)]

//! Append-only comment threads.

use chrono::Utc;

use crate::errors::AppError;
use crate::models::job::Comment;

/// A job's comment sequence. Comments are only ever appended; ids come
/// from a monotonic counter (max existing id + 1), so they stay unique
/// even if deletion is ever introduced.
#[derive(Debug, Clone, Default)]
pub struct CommentThread {
    comments: Vec<Comment>,
}

impl CommentThread {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self { comments }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    fn next_id(&self) -> u32 {
        self.comments.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }

    /// Appends a comment stamped with the current time. Whitespace-only
    /// text is rejected before anything is stored or sent.
    pub fn add(&mut self, text: &str, author: &str) -> Result<Comment, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::Validation(
                "Comment text cannot be empty".to_string(),
            ));
        }
        let comment = Comment {
            id: self.next_id(),
            text: text.to_string(),
            author: author.to_string(),
            date: Utc::now(),
        };
        self.comments.push(comment.clone());
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn existing(id: u32) -> Comment {
        Comment {
            id,
            text: format!("comment {id}"),
            author: "sam".to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_first_comment_gets_id_one() {
        let mut thread = CommentThread::default();
        let comment = thread.add("Looks great", "sam").unwrap();
        assert_eq!(comment.id, 1);
        assert_eq!(thread.len(), 1);
    }

    #[test]
    fn test_ids_are_max_plus_one_not_length_plus_one() {
        // A thread with a gap (as if an entry had been removed): length
        // is 2 but the highest id is 5, so the next id must be 6.
        let mut thread = CommentThread::new(vec![existing(2), existing(5)]);
        let comment = thread.add("New", "sam").unwrap();
        assert_eq!(comment.id, 6);
    }

    #[test]
    fn test_appended_ids_stay_unique() {
        let mut thread = CommentThread::default();
        let a = thread.add("a", "sam").unwrap();
        let b = thread.add("b", "sam").unwrap();
        let c = thread.add("c", "sam").unwrap();
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let mut thread = CommentThread::default();
        assert!(matches!(
            thread.add("   \n", "sam"),
            Err(AppError::Validation(_))
        ));
        assert!(thread.is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut thread = CommentThread::new(vec![existing(1)]);
        thread.add("second", "sam").unwrap();
        let texts: Vec<&str> = thread.comments().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["comment 1", "second"]);
    }
}
