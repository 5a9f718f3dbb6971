use clap::Args;

use filedock::http_server::api::client::ApiError;

#[derive(Args, Debug, Clone)]
pub struct Rm {
    /// Name of the stored file to delete
    #[arg(long)]
    pub filename: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RmError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Rm {
    type Error = RmError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        ctx.client.delete_file(&self.filename).await?;
        Ok(format!("Deleted {}", self.filename))
    }
}
