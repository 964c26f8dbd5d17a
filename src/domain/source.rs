//! Upstream source identities
//!
//! The pipeline pulls from exactly two upstream systems. Each source has a
//! stable display name (used in logs and report lines) and a fixed CSV file
//! name under the configured output directory.

use std::fmt;

/// One of the two upstream systems providing JSON data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The inventory service
    Inventory,
    /// The retail service
    Retail,
}

impl Source {
    /// All sources, in the order the pipeline processes them
    pub const ALL: [Source; 2] = [Source::Inventory, Source::Retail];

    /// Stable lowercase name used in logs, reports, and merged JSON keys
    pub fn name(&self) -> &'static str {
        match self {
            Source::Inventory => "inventory",
            Source::Retail => "retail",
        }
    }

    /// Fixed CSV file name for this source under the output directory
    pub fn output_file_name(&self) -> &'static str {
        match self {
            Source::Inventory => "inventory_data.csv",
            Source::Retail => "retail_data.csv",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
