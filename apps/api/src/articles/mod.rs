// Articles: owner-scoped persistence and CRUD around the SEO engine.
// Ownership is checked on every read and write; callers pass `user_id` explicitly.

pub mod handlers;
pub mod repository;
pub mod slug;
pub mod validation;
