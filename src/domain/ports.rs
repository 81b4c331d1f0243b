use crate::domain::model::{Entity, SortSpec};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn api_key_header(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn bootstrap_on_empty(&self) -> bool;
}

/// External CRUD data service holding the portfolio records.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn list<E: Entity>(&self, sort: Option<&SortSpec>) -> Result<Vec<E>>;
    async fn create<E: Entity>(&self, fields: &E) -> Result<E>;
}
