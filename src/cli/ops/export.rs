use clap::Args;

use filedock::http_server::api::client::ApiError;
use filedock::http_server::api::projects::ExportRequest;

#[derive(Args, Debug, Clone)]
pub struct Export;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Export {
    type Error = ExportError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let response = ctx.client.call(ExportRequest).await?;
        Ok(response.download_url)
    }
}
