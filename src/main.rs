// CLI modules
mod cli;

use clap::{Parser, Subcommand};
use cli::{args::Args, op::Op, Cat, Create, Download, Export, Health, Rm, Serve, Update, Version};

command_enum! {
    (Cat, Cat),
    (Create, Create),
    (Download, Download),
    (Export, Export),
    (Health, Health),
    (Rm, Rm),
    (Serve, Serve),
    (Update, Update),
    (Version, Version),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Resolve remote URL: explicit flag > PORT env var > default port
    let remote = cli::op::resolve_remote(args.remote);

    let ctx = match cli::op::OpContext::new(remote) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: Failed to create API client: {}", e);
            std::process::exit(1);
        }
    };

    match args.command.execute(&ctx).await {
        Ok(output) => {
            println!("{}", output);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
