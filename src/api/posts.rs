//! Post moderation and analytics endpoints (`/api/admin/posts/...`).
//!
//! The search-index maintenance calls (`es_*`) are opaque to this client:
//! they trigger backend-side work and answer with a plain envelope.

use bytes::Bytes;
use serde_json::{json, Value};

use crate::client::ApiClient;
use crate::envelope::PageData;
use crate::request::RequestSpec;
use crate::Result;

/// Post moderation facade.
pub struct PostsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn posts(&self) -> PostsApi<'_> {
        PostsApi { client: self }
    }
}

impl<'a> PostsApi<'a> {
    /// Paged post listing with optional keyword search.
    pub async fn list(
        &self,
        page_num: u32,
        page_size: u32,
        keyword: Option<&str>,
    ) -> Result<PageData<Value>> {
        let spec = RequestSpec::get("/api/admin/posts/list")
            .query("pageNum", page_num)
            .query("pageSize", page_size)
            .query_opt("keyword", keyword);
        self.client.dispatch(spec).await
    }

    pub async fn details(&self, post_id: i64) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::get(format!("/api/admin/posts/{}", post_id)))
            .await
    }

    // --- moderation -----------------------------------------------------

    /// Approve or reject a post. Returns whether the action was applied.
    pub async fn audit(&self, post_id: i64, action: &str, reason: Option<&str>) -> Result<bool> {
        let spec = RequestSpec::post(format!("/api/admin/posts/{}/audit", post_id))
            .query("action", action)
            .query_opt("reason", reason);
        self.client.dispatch(spec).await
    }

    pub async fn audit_list(&self, page_num: u32, page_size: u32) -> Result<PageData<Value>> {
        let spec = RequestSpec::get("/api/admin/posts/audit/list")
            .query("pageNum", page_num)
            .query("pageSize", page_size);
        self.client.dispatch(spec).await
    }

    pub async fn reports(&self, page_num: u32, page_size: u32) -> Result<PageData<Value>> {
        let spec = RequestSpec::get("/api/admin/posts/reports")
            .query("pageNum", page_num)
            .query("pageSize", page_size);
        self.client.dispatch(spec).await
    }

    pub async fn report_details(&self, report_id: i64) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::get(format!(
                "/api/admin/posts/reports/{}",
                report_id
            )))
            .await
    }

    /// Resolve a report. Returns whether the action was applied.
    pub async fn handle_report(
        &self,
        report_id: i64,
        action: &str,
        feedback: Option<&str>,
    ) -> Result<bool> {
        let spec = RequestSpec::post(format!("/api/admin/posts/reports/{}/handle", report_id))
            .query("action", action)
            .query_opt("feedback", feedback);
        self.client.dispatch(spec).await
    }

    // --- batch operations -----------------------------------------------

    pub async fn batch_recommend(&self, post_ids: &[i64], days: u32) -> Result<Value> {
        let spec = RequestSpec::post("/api/admin/posts/batch/recommend")
            .json_body(&json!({ "postIds": post_ids, "days": days }))?;
        self.client.dispatch(spec).await
    }

    pub async fn batch_delete(&self, post_ids: &[i64]) -> Result<Value> {
        let spec = RequestSpec::delete("/api/admin/posts/batch").json_body(&post_ids)?;
        self.client.dispatch(spec).await
    }

    pub async fn batch_pin(&self, post_ids: &[i64]) -> Result<Value> {
        let spec = RequestSpec::post("/api/admin/posts/batch/pin").json_body(&post_ids)?;
        self.client.dispatch(spec).await
    }

    pub async fn batch_highlight(&self, post_ids: &[i64]) -> Result<Value> {
        let spec = RequestSpec::post("/api/admin/posts/batch/highlight").json_body(&post_ids)?;
        self.client.dispatch(spec).await
    }

    pub async fn batch_unhighlight(&self, post_ids: &[i64]) -> Result<Value> {
        let spec = RequestSpec::delete("/api/admin/posts/batch/highlight").json_body(&post_ids)?;
        self.client.dispatch(spec).await
    }

    // --- single-post state ----------------------------------------------

    pub async fn pin(&self, post_id: i64) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::post(format!("/api/admin/posts/{}/pin", post_id)))
            .await
    }

    pub async fn unpin(&self, post_id: i64) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::delete(format!(
                "/api/admin/posts/{}/unpin",
                post_id
            )))
            .await
    }

    pub async fn move_category(&self, post_id: i64, target_category: &str) -> Result<Value> {
        let spec = RequestSpec::post(format!("/api/admin/posts/{}/move-category", post_id))
            .query("targetCategory", target_category);
        self.client.dispatch(spec).await
    }

    // --- statistics and analytics ---------------------------------------

    pub async fn overview(&self) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::get("/api/admin/posts/statistics/overview"))
            .await
    }

    pub async fn daily_statistics(&self, days: u32) -> Result<Value> {
        let spec = RequestSpec::get("/api/admin/posts/statistics/daily").query("days", days);
        self.client.dispatch(spec).await
    }

    pub async fn user_ranking(&self, limit: u32) -> Result<Value> {
        let spec =
            RequestSpec::get("/api/admin/posts/statistics/user-ranking").query("limit", limit);
        self.client.dispatch(spec).await
    }

    pub async fn hot_analysis(&self, days: u32, limit: u32) -> Result<Value> {
        let spec = RequestSpec::get("/api/admin/posts/hot/analysis")
            .query("days", days)
            .query("limit", limit);
        self.client.dispatch(spec).await
    }

    pub async fn interaction_analysis(&self, days: u32) -> Result<Value> {
        let spec = RequestSpec::get("/api/admin/posts/interaction/analysis").query("days", days);
        self.client.dispatch(spec).await
    }

    pub async fn category_statistics(&self) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::get("/api/admin/posts/category/statistics"))
            .await
    }

    pub async fn comment_analysis(&self, post_id: i64) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::get(format!(
                "/api/admin/posts/{}/comments/analysis",
                post_id
            )))
            .await
    }

    pub async fn interaction_data(&self, post_id: i64) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::get(format!(
                "/api/admin/posts/{}/interaction",
                post_id
            )))
            .await
    }

    pub async fn posts_by_author(&self, user_id: i64) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::get(format!(
                "/api/admin/posts/user/{}/posts",
                user_id
            )))
            .await
    }

    // --- search-index backed analytics ----------------------------------

    pub async fn content_audit(&self, limit: u32) -> Result<Value> {
        let spec = RequestSpec::get("/api/admin/posts/es/content-audit").query("limit", limit);
        self.client.dispatch(spec).await
    }

    pub async fn sensitive_words(&self, limit: u32) -> Result<Value> {
        let spec = RequestSpec::get("/api/admin/posts/es/sensitive-words").query("limit", limit);
        self.client.dispatch(spec).await
    }

    pub async fn user_behavior(&self, user_id: i64, days: u32) -> Result<Value> {
        let spec = RequestSpec::get("/api/admin/posts/es/user-behavior")
            .query("userId", user_id)
            .query("days", days);
        self.client.dispatch(spec).await
    }

    pub async fn content_trends(&self, days: u32) -> Result<Value> {
        let spec = RequestSpec::get("/api/admin/posts/es/content-trends").query("days", days);
        self.client.dispatch(spec).await
    }

    pub async fn keyword_analysis(&self, days: u32, limit: u32) -> Result<Value> {
        let spec = RequestSpec::get("/api/admin/posts/es/keyword-analysis")
            .query("days", days)
            .query("limit", limit);
        self.client.dispatch(spec).await
    }

    pub async fn quality_distribution(&self) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::get("/api/admin/posts/es/quality-distribution"))
            .await
    }

    // --- search-index maintenance ---------------------------------------

    pub async fn es_sync(&self) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::post("/api/admin/posts/es/sync"))
            .await
    }

    pub async fn es_sync_all(&self) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::post("/api/admin/posts/es/sync-all"))
            .await
    }

    pub async fn es_sync_batch(&self, post_ids: &[i64]) -> Result<Value> {
        let spec = RequestSpec::post("/api/admin/posts/es/sync-batch").json_body(&post_ids)?;
        self.client.dispatch(spec).await
    }

    pub async fn es_rebuild_index(&self) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::post("/api/admin/posts/es/rebuild-index"))
            .await
    }

    // --- exports ---------------------------------------------------------

    pub async fn export_csv(&self) -> Result<Bytes> {
        self.export("csv").await
    }

    pub async fn export_excel(&self) -> Result<Bytes> {
        self.export("excel").await
    }

    pub async fn export_json(&self) -> Result<Bytes> {
        self.export("json").await
    }

    async fn export(&self, format: &str) -> Result<Bytes> {
        let spec = RequestSpec::get(format!("/api/admin/posts/export/{}", format)).binary();
        self.client.dispatch_binary(spec).await
    }
}
