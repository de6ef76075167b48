use crate::error::Result;
use crate::rest::{DummyApiHttpClient, RawResponse};
use crate::types::{Page, PageRequest, ResourceItem};

impl DummyApiHttpClient {
    /// GET /user - Connectivity probe, default paging, body left undecoded.
    pub async fn probe(&self) -> Result<RawResponse> {
        self.get_raw("/user", &[]).await
    }

    /// GET /user?page=&limit= - One page of users.
    pub async fn get_users(&self, req: PageRequest) -> Result<Page<ResourceItem>> {
        self.get("/user", &req.query()).await
    }

    /// GET /post?page=&limit= - One page of posts.
    pub async fn get_posts(&self, req: PageRequest) -> Result<Page<ResourceItem>> {
        self.get("/post", &req.query()).await
    }

    /// GET /post/{post_id}/comment - Comments attached to a post.
    pub async fn get_post_comments(&self, post_id: &str) -> Result<Page<ResourceItem>> {
        self.get(&format!("/post/{post_id}/comment"), &[]).await
    }
}
