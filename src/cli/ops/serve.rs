use std::path::PathBuf;

use clap::Args;

use filedock::service_config::ConfigError;
use filedock::{spawn_service, ServiceConfig};

#[derive(Args, Debug, Clone)]
pub struct Serve {
    /// Override listen port (default: PORT env var, then 3000)
    #[arg(long)]
    pub port: Option<u16>,

    /// Managed directory root (default: FILES_DIR env var, then ./files)
    #[arg(long)]
    pub files_dir: Option<PathBuf>,

    /// Directory for log files (logs to stdout only if not set)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Serve {
    type Error = ServeError;
    type Output = String;

    async fn execute(&self, _ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config =
            ServiceConfig::resolve(self.port, self.files_dir.clone(), self.log_dir.clone())?;
        spawn_service(&config).await;
        Ok("service ended".to_string())
    }
}
