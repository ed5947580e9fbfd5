//! Controllers orchestrating fetch/submit/vote flows against the backend
//!
//! Each controller owns its state (alerts, loading flag, fetched data) and
//! mutates it only from response handlers, so a renderer can read it
//! between actions without coordination.

pub mod navbar;
pub mod new_topic;
pub mod profile;
pub mod topics;

pub use navbar::NavbarController;
pub use new_topic::NewTopicController;
pub use profile::ProfileController;
pub use topics::TopicsController;

#[cfg(test)]
pub(crate) mod testing;
