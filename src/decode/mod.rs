//! GPU driver version decoding and the tables behind it.

pub mod amd;
pub mod nvidia;
pub mod refresh;
pub mod table;

pub use amd::decode_amd;
pub use nvidia::decode_nvidia;
pub use refresh::{refresh, HttpTableUpdater, RefreshOutcome, TableUpdater};
pub use table::DriverVersionTable;

use crate::config::Config;
use tracing::warn;

/// The AMD and NVIDIA decode tables used for one run.
#[derive(Debug, Clone, Default)]
pub struct DecodeTables {
    pub amd: DriverVersionTable,
    pub nvidia: DriverVersionTable,
}

impl DecodeTables {
    pub fn new(amd: DriverVersionTable, nvidia: DriverVersionTable) -> Self {
        Self { amd, nvidia }
    }

    /// Load both tables from the configured paths. An unreadable table is
    /// logged and left empty.
    pub fn load(config: &Config) -> Self {
        let load = |path: &std::path::Path| {
            DriverVersionTable::load(path).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "failed to read decode table");
                DriverVersionTable::new()
            })
        };
        Self {
            amd: load(config.amd_table.as_path()),
            nvidia: load(config.nvidia_table.as_path()),
        }
    }

    /// Swap in a newer AMD table when the updater has one. Returns the new
    /// version when an update was installed; failures keep the current table.
    pub fn refresh_amd(&mut self, updater: &dyn TableUpdater) -> Option<u32> {
        match refresh(updater) {
            Ok(RefreshOutcome::Updated { version, table }) => {
                self.amd = table;
                Some(version)
            }
            Ok(RefreshOutcome::UpToDate { .. }) => None,
            Err(e) => {
                warn!(error = %e, "AMD decode table refresh failed, using local table");
                None
            }
        }
    }

    /// Decode `raw` according to the card manufacturer. Cards from other
    /// vendors keep the raw version.
    pub fn decode(&self, manufacturer: &str, raw: &str) -> String {
        if manufacturer.starts_with("NVIDIA") {
            decode_nvidia(raw, &self.nvidia)
        } else if manufacturer.starts_with("Advanced Micro") {
            decode_amd(raw, &self.amd)
        } else {
            raw.to_string()
        }
    }
}
