// Per-job engagement: the like toggle, comment threads, and the
// apply/track state machine. Like and comment state is optimistic and
// client-local; applications are the one thing persisted, so the apply
// action stays blocked across reloads.

pub mod application;
pub mod comments;
pub mod like;
pub mod share;
