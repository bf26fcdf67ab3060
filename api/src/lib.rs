//! Remote-service clients shared by the Trove front end.
//!
//! Three external collaborators live behind this crate:
//! - the account API (login / signup),
//! - the admin API (user listing + dashboard statistics),
//! - a Groq-compatible chat-completion API used by the question board.
//!
//! Every client takes its base URL at construction so tests can point it at
//! a local mock server. None of the clients retry; callers surface failures
//! as user-visible messages and move on.

pub mod admin;
pub mod auth;
pub mod completion;

mod error;

pub use error::ApiError;
