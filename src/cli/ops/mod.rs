mod cat;
mod create;
mod download;
mod export;
mod health;
mod rm;
mod serve;
mod update;
mod version;

pub use cat::Cat;
pub use create::Create;
pub use download::Download;
pub use export::Export;
pub use health::Health;
pub use rm::Rm;
pub use serve::Serve;
pub use update::Update;
pub use version::Version;
