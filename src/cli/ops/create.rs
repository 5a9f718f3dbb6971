use clap::Args;

use filedock::http_server::api::client::ApiError;
use filedock::http_server::api::files::CreateRequest;

#[derive(Args, Debug, Clone)]
pub struct Create {
    #[command(flatten)]
    pub request: CreateRequest,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Create {
    type Error = CreateError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let response = ctx.client.call(self.request.clone()).await?;
        Ok(response.message)
    }
}
