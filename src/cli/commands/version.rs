//! Version information display
//!
//! Prints the package version and the output-format revision in human or
//! JSON form.

use serde_json::json;

use crate::cli::args::{OutputFormat, VersionArgs};

/// Revision of the node-data text layout. Bumped whenever the enumerated
/// output changes in a way the downstream reader would notice.
pub const NODE_FORMAT_REVISION: u32 = 1;

/// Print version information.
pub fn run(args: &VersionArgs) {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    match args.format {
        OutputFormat::Human => {
            println!("{name} {version} (node format r{NODE_FORMAT_REVISION})");
        }
        OutputFormat::Json => {
            println!(
                "{}",
                json!({
                    "name": name,
                    "version": version,
                    "node_format": NODE_FORMAT_REVISION,
                })
            );
        }
    }
}
