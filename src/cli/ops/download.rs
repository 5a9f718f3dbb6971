use std::path::PathBuf;

use clap::Args;

use filedock::http_server::api::client::ApiError;

#[derive(Args, Debug, Clone)]
pub struct Download {
    /// Name of the stored file to download
    #[arg(long)]
    pub filename: String,

    /// Local path to write to (defaults to the file's own name)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Download {
    type Error = DownloadError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let bytes = ctx.client.download_file(&self.filename).await?;

        let target = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.filename));
        tokio::fs::write(&target, &bytes).await?;

        Ok(format!(
            "Wrote {} bytes to {}",
            bytes.len(),
            target.display()
        ))
    }
}
