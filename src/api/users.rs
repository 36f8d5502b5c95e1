//! User administration endpoints (`/api/admin/user/...`).

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::PageQuery;
use crate::client::ApiClient;
use crate::envelope::PageData;
use crate::request::RequestSpec;
use crate::Result;

/// A user row as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub nickname: String,
    pub avatar_url: String,
    pub gender: i32,
    pub birthday: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub status: i32,
    pub created_at: String,
    pub updated_at: String,
    pub last_login_time: String,
    pub deleted: i32,
}

/// Payload for creating or updating a user. Only `username` is required.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

/// Detail lookup query: the target user plus the page of context rows.
#[derive(Debug, Clone)]
pub struct DetailQuery {
    pub id: i64,
    pub current_page: u32,
    pub size: u32,
}

/// User administration facade.
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { client: self }
    }
}

impl<'a> UsersApi<'a> {
    pub async fn create(&self, data: &CreateUserRequest) -> Result<Value> {
        let spec = RequestSpec::post("/api/admin/user/create").json_body(data)?;
        self.client.dispatch(spec).await
    }

    pub async fn update(&self, id: i64, data: &CreateUserRequest) -> Result<Value> {
        let spec =
            RequestSpec::post(format!("/api/admin/user/update/{}", id)).json_body(data)?;
        self.client.dispatch(spec).await
    }

    pub async fn delete(&self, id: i64) -> Result<Value> {
        let spec = RequestSpec::delete(format!("/api/admin/user/delete/{}", id));
        self.client.dispatch(spec).await
    }

    pub async fn delete_batch(&self, ids: &[i64]) -> Result<Value> {
        let spec = RequestSpec::delete("/api/admin/user/delete-batch").json_body(&ids)?;
        self.client.dispatch(spec).await
    }

    /// Paged user listing.
    pub async fn page(&self, query: &PageQuery) -> Result<PageData<UserRecord>> {
        let spec = RequestSpec::get("/api/admin/user/get/page")
            .query_opt("page", query.page)
            .query_opt("size", query.size)
            .query_opt("keyword", query.keyword.as_deref());
        self.client.dispatch(spec).await
    }

    /// Detail view for one user, returned in the backend's paged shape.
    pub async fn detail(&self, query: &DetailQuery) -> Result<PageData<UserRecord>> {
        let spec = RequestSpec::get(format!("/api/admin/user/detail/{}", query.id))
            .query("currentPage", query.current_page)
            .query("size", query.size)
            .query("id", query.id);
        self.client.dispatch(spec).await
    }

    /// Aggregate user statistics. Payload shape is backend-defined.
    pub async fn statistics(&self) -> Result<Value> {
        self.client
            .dispatch(RequestSpec::get("/api/admin/user/statistics"))
            .await
    }

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
        let spec = RequestSpec::get(format!("/api/admin/user/export/{}", format)).binary();
        self.client.dispatch_binary(spec).await
    }
}
