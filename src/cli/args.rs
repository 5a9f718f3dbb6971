pub use clap::Parser;

use url::Url;

#[derive(Parser, Debug)]
#[command(name = "filedock")]
#[command(about = "File store service and client")]
pub struct Args {
    /// Remote filedock instance to talk to (defaults to localhost
    /// on the configured port)
    #[arg(long, global = true)]
    pub remote: Option<Url>,

    #[command(subcommand)]
    pub command: crate::Command,
}
