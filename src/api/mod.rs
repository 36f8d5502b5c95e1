//! Typed endpoint facades over the dispatcher.
//!
//! Each facade borrows the [`crate::ApiClient`], builds a
//! [`crate::RequestSpec`] per call, and delegates to `dispatch`. No facade
//! carries behavior of its own; parameter shapes are constrained here, at
//! the call site, exactly once.

pub mod comments;
pub mod feedback;
pub mod posts;
pub mod users;

pub use comments::CommentsApi;
pub use feedback::FeedbackApi;
pub use posts::PostsApi;
pub use users::{CreateUserRequest, DetailQuery, UserRecord, UsersApi};

use serde::Serialize;

/// Common pagination query for list endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub keyword: Option<String>,
}

impl PageQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }
}
