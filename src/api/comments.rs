//! Comment administration endpoints (`/api/admin/comment/...`).

use serde_json::Value;

use super::PageQuery;
use crate::client::ApiClient;
use crate::envelope::PageData;
use crate::request::RequestSpec;
use crate::Result;

/// Comment administration facade.
pub struct CommentsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn comments(&self) -> CommentsApi<'_> {
        CommentsApi { client: self }
    }
}

impl<'a> CommentsApi<'a> {
    /// Paged comment listing.
    pub async fn page(&self, query: &PageQuery) -> Result<PageData<Value>> {
        let spec = RequestSpec::get("/api/admin/comment/list")
            .query_opt("page", query.page)
            .query_opt("size", query.size)
            .query_opt("keyword", query.keyword.as_deref());
        self.client.dispatch(spec).await
    }

    pub async fn delete(&self, id: i64) -> Result<Value> {
        let spec = RequestSpec::delete(format!("/api/admin/comment/delete/{}", id));
        self.client.dispatch(spec).await
    }

    pub async fn delete_batch(&self, ids: &[i64]) -> Result<Value> {
        let spec = RequestSpec::delete("/api/admin/comment/delete-batch").json_body(&ids)?;
        self.client.dispatch(spec).await
    }
}
