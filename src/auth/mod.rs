//! Authentication module for managing the doctor's session.
//!
//! This module provides:
//! - `Session` / `SessionStore`: the persisted login record and its
//!   re-read-on-every-call store
//! - `SessionProvider`: the token accessor injected into `ApiClient`
//!
//! Sessions have no expiry; a token is used until explicit logout or until
//! the server rejects it.

pub mod session;

pub use session::{Session, SessionProvider, SessionStore};
