pub mod inspect;

use clap::Subcommand;
pub use inspect::InspectArgs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve paths and print their metadata and canonical timestamp.
    ///
    /// Example:
    ///   samedia inspect ~/Pictures/IMG_20200115_143022.jpg
    ///   samedia inspect --json -j 8 ~/Pictures/*
    Inspect(InspectArgs),
}
