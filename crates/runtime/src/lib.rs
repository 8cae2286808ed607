mod config;
pub mod logging;

pub use config::{
    AUTHORS, DESCRIPTION, METADATA_PLACEHOLDER, PROGRAM_LOG_LEVEL, PROGRAM_NAME, VERSION,
};

pub use logging::init;
