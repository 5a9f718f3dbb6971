//! Helper for reading build version information set at compile time.
//! Values are stamped by build.rs.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_profile: &'static str,
    pub build_timestamp: &'static str,
    pub repo_version: &'static str,
    pub rust_version: &'static str,
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        build_profile: env!("BUILD_PROFILE"),
        build_timestamp: env!("BUILD_TIMESTAMP"),
        repo_version: env!("REPO_VERSION"),
        rust_version: env!("RUST_VERSION"),
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "filedock {} ({}, {} build, {})",
            self.version, self.repo_version, self.build_profile, self.build_timestamp
        )
    }
}
