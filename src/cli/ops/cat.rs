use clap::Args;

use filedock::http_server::api::client::ApiError;

#[derive(Args, Debug, Clone)]
pub struct Cat {
    /// Name of the stored file to read
    #[arg(long)]
    pub filename: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CatError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Cat {
    type Error = CatError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let response = ctx.client.read_file(&self.filename).await?;
        Ok(response.content)
    }
}
