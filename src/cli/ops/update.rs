use clap::Args;

use filedock::http_server::api::client::ApiError;

#[derive(Args, Debug, Clone)]
pub struct Update {
    /// Name of the stored file to overwrite
    #[arg(long)]
    pub filename: String,

    /// Replacement content
    #[arg(long)]
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Update {
    type Error = UpdateError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let response = ctx
            .client
            .update_file(&self.filename, self.content.clone())
            .await?;
        Ok(response.message)
    }
}
