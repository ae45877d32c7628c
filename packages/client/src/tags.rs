// ABOUTME: Tag endpoints on top of the request gateway

use async_trait::async_trait;
use reqwest::Method;
use svara_tags::{Tag, TagCreate};

use crate::api::TagApi;
use crate::error::ClientResult;
use crate::gateway::{ApiClient, RequestOptions};

#[async_trait]
impl TagApi for ApiClient {
    async fn fetch_tags(&self) -> ClientResult<Vec<Tag>> {
        self.fetch_record("/tags", RequestOptions::default()).await
    }

    async fn fetch_tag(&self, id: i64) -> ClientResult<Tag> {
        self.fetch_record(&format!("/tags/{}", id), RequestOptions::default())
            .await
    }

    async fn create_tag(&self, tag: &TagCreate) -> ClientResult<Tag> {
        let options = RequestOptions::new(Method::POST).json(tag)?;
        self.fetch_record("/tags", options).await
    }

    async fn delete_tag(&self, id: i64) -> ClientResult<()> {
        self.fetch_empty(&format!("/tags/{}", id), RequestOptions::new(Method::DELETE))
            .await
    }
}
