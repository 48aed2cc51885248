//! Records extracted from a DxDiag report.

use serde::{Deserialize, Serialize};

/// Sentinel used when a card's monitor name or model line is missing.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInformation {
    pub report_time: String,
    pub machine_name: String,
    pub os_name: String,
    pub language: String,
    pub system_details: String,
    pub cpu_name: String,
    pub memory_string: String,
    pub memory_in_mb: u64,
    pub memory_in_gb: u64,
    pub page_file: String,
    pub directx_version: String,
    pub user_dpi: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDevice {
    pub card_name: String,
    pub manufacturer: String,
    pub vram_mb: u64,
    pub display_mode: String,
    /// `None` when the card block ended without a `PanelFitter Stretch:` line
    /// and no monitor name was reported.
    pub monitor_name: Option<String>,
    pub monitor_model: Option<String>,
    pub driver_version: String,
    pub driver_version_raw: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drive {
    pub letter: char,
    pub free_space: String,
    pub total_space: String,
    pub file_system: String,
    pub model: String,
}

impl Drive {
    /// Removable drives with no media report only a model line.
    pub fn is_mounted(&self) -> bool {
        !self.free_space.is_empty()
    }
}

/// Round `value / divisor` to the nearest integer, ties to even.
pub fn div_round_half_even(value: u64, divisor: u64) -> u64 {
    let quotient = value / divisor;
    let twice_rem = (value % divisor) * 2;
    if twice_rem > divisor || (twice_rem == divisor && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}
