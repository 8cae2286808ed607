pub const PROGRAM_NAME: &str = "samedia";
pub const PROGRAM_LOG_LEVEL: &str = "SAMEDIA_LOG_LEVEL";

/// Package metadata, fixed at build time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "samedia - path metadata for synesthetic aesthetic media";
pub const AUTHORS: &str = "Christopher Davis <agilechris@cdcc.group>";

/// Key/value stored in every record's metadata map until real metadata
/// extraction lands.
pub const METADATA_PLACEHOLDER: (&str, &str) = ("metadata", "Goes Here");
