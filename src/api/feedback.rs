//! Feedback management endpoints (`/api/admin/feedback/admin/...`).

use serde_json::Value;

use super::PageQuery;
use crate::client::ApiClient;
use crate::envelope::PageData;
use crate::request::RequestSpec;
use crate::Result;

/// Feedback management facade.
pub struct FeedbackApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn feedback(&self) -> FeedbackApi<'_> {
        FeedbackApi { client: self }
    }
}

impl<'a> FeedbackApi<'a> {
    /// Paged feedback listing.
    pub async fn list(&self, query: &PageQuery) -> Result<PageData<Value>> {
        let spec = RequestSpec::get("/api/admin/feedback/admin/all")
            .query_opt("page", query.page)
            .query_opt("size", query.size)
            .query_opt("keyword", query.keyword.as_deref());
        self.client.dispatch(spec).await
    }

    pub async fn delete(&self, id: i64) -> Result<Value> {
        let spec = RequestSpec::delete(format!("/api/admin/feedback/admin/delete/{}", id));
        self.client.dispatch(spec).await
    }

    pub async fn delete_batch(&self, ids: &[i64]) -> Result<Value> {
        let spec =
            RequestSpec::delete("/api/admin/feedback/admin/batch-delete").json_body(&ids)?;
        self.client.dispatch(spec).await
    }

    /// Update the handling status of one feedback record.
    ///
    /// The backend takes this one as a form-encoded body, not JSON.
    pub async fn update_status(&self, feedback_id: i64, status: &str) -> Result<Value> {
        let spec = RequestSpec::post(format!(
            "/api/admin/feedback/admin/status/{}",
            feedback_id
        ))
        .form_body([("status", status)]);
        self.client.dispatch(spec).await
    }

    /// Sentiment distribution across feedback. Payload shape is backend-defined.
    pub async fn analyze_sentiment(&self) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::get(
                "/api/admin/feedback/admin/analyze-sentiment",
            ))
            .await
    }

    /// Aggregate feedback statistics. Payload shape is backend-defined.
    pub async fn stats(&self) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::get("/api/admin/feedback/admin/stats"))
            .await
    }
}
