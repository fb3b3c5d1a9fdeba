//! Command-line arguments and the resolved run configuration.

use clap::Parser;
use jarbom_central::MAVEN_CENTRAL_BASE;
use jarbom_core::{DEFAULT_TIMEOUT, DEFAULT_VENDOR_GROUP};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "jarbom",
    version,
    about = "Resolve Maven coordinates for jar files by SHA-1"
)]
pub struct Cli {
    /// A jar file (prints one coordinate line) or a directory of jars (prints a BOM POM)
    pub path: PathBuf,

    /// Version used for the BOM and for jars no registry recognises
    #[arg(value_name = "VERSION")]
    pub fallback_version: String,

    /// Nexus search-assets URL including the repository selector,
    /// e.g. https://nexus/service/rest/v1/search/assets?repository=releases
    #[arg(env = "JARBOM_REPO_URL")]
    pub repo_url: Option<String>,

    /// Base URL of the Maven Central search service
    #[arg(long, env = "JARBOM_CENTRAL_URL", default_value = MAVEN_CENTRAL_BASE)]
    pub central_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "JARBOM_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Placeholder groupId that externally attributed matches take precedence over
    #[arg(long, default_value = DEFAULT_VENDOR_GROUP)]
    pub vendor_group: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub fallback_version: String,
    pub repo_url: Option<String>,
    pub central_url: String,
    pub timeout: Duration,
    pub vendor_group: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            fallback_version: String::new(),
            repo_url: None,
            central_url: MAVEN_CENTRAL_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            vendor_group: DEFAULT_VENDOR_GROUP.to_string(),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            path: cli.path,
            fallback_version: cli.fallback_version,
            // An empty URL means "no private registry", so wrappers can always pass the argument.
            repo_url: cli.repo_url.filter(|url| !url.is_empty()),
            central_url: cli.central_url,
            timeout: Duration::from_secs(cli.timeout_secs),
            vendor_group: cli.vendor_group,
        }
    }
}
