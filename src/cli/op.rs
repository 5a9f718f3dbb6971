use std::error::Error;

use url::Url;

use filedock::http_server::api::client::{ApiClient, ApiError};
use filedock::service_config::{DEFAULT_PORT, PORT_ENV};

/// Resolve the remote URL for the API client.
///
/// Priority: explicit `--remote` flag > `PORT` environment variable >
/// the default port.
pub fn resolve_remote(explicit: Option<Url>) -> Url {
    resolve_remote_inner(explicit, std::env::var(PORT_ENV).ok())
}

fn resolve_remote_inner(explicit: Option<Url>, env_port: Option<String>) -> Url {
    if let Some(url) = explicit {
        return url;
    }
    let port = env_port
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    Url::parse(&format!("http://localhost:{}", port)).expect("hardcoded URL must parse")
}

#[derive(Clone)]
pub struct OpContext {
    /// API client (always initialized with default or custom URL)
    pub client: ApiClient,
}

impl OpContext {
    pub fn new(remote: Url) -> Result<Self, ApiError> {
        Ok(Self {
            client: ApiClient::new(&remote)?,
        })
    }
}

#[async_trait::async_trait]
pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::cli::op::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::cli::op::Op>::Error),
            )*
        }

        #[async_trait::async_trait]
        impl $crate::cli::op::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            async fn execute(&self, ctx: &$crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx).await
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_remote_explicit_wins() {
        let explicit = Url::parse("http://example.com:9999").unwrap();
        let result = resolve_remote_inner(Some(explicit.clone()), Some("4000".to_string()));
        assert_eq!(result, explicit);
    }

    #[test]
    fn test_resolve_remote_env_port() {
        let result = resolve_remote_inner(None, Some("4000".to_string()));
        assert_eq!(result.as_str(), "http://localhost:4000/");
    }

    #[test]
    fn test_resolve_remote_falls_back_to_default() {
        let result = resolve_remote_inner(None, None);
        assert_eq!(result.port().unwrap(), DEFAULT_PORT);
    }
}
