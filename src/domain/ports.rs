use crate::domain::model::PageData;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_url(&self) -> &str;
    fn page_path(&self) -> &str;
    fn locale_override(&self) -> Option<&str>;
    fn template_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<PageData>;
    async fn render(&self, data: PageData) -> Result<String>;
    async fn render_fallback(&self) -> Result<String>;
    async fn publish(&self, html: String) -> Result<String>;
}
