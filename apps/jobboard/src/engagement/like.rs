//! Like toggle with an optimistic local counter.
//!
//! The counter moves immediately on toggle, before any server
//! confirmation. The `PUT /jobs/{id}/like` call runs fire-and-forget
//! and its response is never reconciled into this state; the server's
//! count is trusted again on the next full fetch.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    pub likes: u32,
}

impl LikeState {
    /// Starts un-liked at the counter value the backend sent.
    pub fn new(likes: u32) -> Self {
        Self {
            liked: false,
            likes,
        }
    }

    /// Flips the flag and adjusts the counter by one in the matching
    /// direction. Returns the new liked flag. The counter never goes
    /// below zero.
    pub fn toggle(&mut self) -> bool {
        if self.liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.liked = !self.liked;
        self.liked
    }
}
