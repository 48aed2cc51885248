//! Display Devices section.
//!
//! Each card block opens with `Card name:`; later lines fill in the card that
//! was opened last. `PanelFitter Stretch:` is one of the last lines of a card
//! block and is where missing monitor lines get their `Unknown` default.

use super::section::field;
use crate::decode::DecodeTables;
use crate::types::{DisplayDevice, UNKNOWN};
use tracing::{debug, warn};

/// A card as read from the report, before driver decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardRecord {
    pub card_name: String,
    pub manufacturer: String,
    pub vram_mb: u64,
    pub display_mode: String,
    pub monitor_name: Option<String>,
    pub monitor_model: Option<String>,
    pub driver_version: String,
}

impl CardRecord {
    pub fn into_device(self, tables: &DecodeTables) -> DisplayDevice {
        let decoded = tables.decode(&self.manufacturer, &self.driver_version);
        DisplayDevice {
            card_name: self.card_name,
            manufacturer: self.manufacturer,
            vram_mb: self.vram_mb,
            display_mode: self.display_mode,
            monitor_name: self.monitor_name,
            monitor_model: self.monitor_model,
            driver_version: decoded,
            driver_version_raw: self.driver_version,
        }
    }
}

pub fn collect_display_devices(body: &[&str]) -> Vec<CardRecord> {
    let mut cards: Vec<CardRecord> = Vec::new();

    for line in body {
        if let Some(name) = field(line, "Card name:") {
            cards.push(CardRecord {
                card_name: name.to_string(),
                ..CardRecord::default()
            });
            continue;
        }

        let Some(card) = cards.last_mut() else {
            continue;
        };

        if let Some(v) = field(line, "Manufacturer:") {
            card.manufacturer = v.to_string();
        } else if let Some(v) = field(line, "Dedicated Memory:") {
            card.vram_mb = parse_vram(v).unwrap_or_else(|| {
                warn!(card = %card.card_name, memory = v, "unrecognized dedicated memory value");
                0
            });
        } else if let Some(v) = field(line, "Current Mode:") {
            card.display_mode = v.to_string();
        } else if let Some(v) = field(line, "Monitor Name:") {
            card.monitor_name.get_or_insert_with(|| v.to_string());
        } else if let Some(v) = field(line, "Monitor Model:") {
            card.monitor_model.get_or_insert_with(|| v.to_string());
        } else if let Some(v) = field(line, "Driver File Version:") {
            card.driver_version = v.to_string();
        } else if line.starts_with("PanelFitter Stretch:") {
            card.monitor_name.get_or_insert_with(|| UNKNOWN.to_string());
            card.monitor_model.get_or_insert_with(|| UNKNOWN.to_string());
        }
    }

    debug!(cards = cards.len(), "collected display devices");
    cards
}

/// `10067 MB` -> 10067, `n/a` -> 0.
fn parse_vram(value: &str) -> Option<u64> {
    if value == "n/a" {
        return Some(0);
    }
    let end = value.find(" MB")?;
    value[..end].trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DriverVersionTable;

    const CARD: &[&str] = &[
        "Card name: NVIDIA GeForce RTX 3080",
        "Manufacturer: NVIDIA",
        "Chip type: NVIDIA GeForce RTX 3080",
        "Display Memory: 26508 MB",
        "Dedicated Memory: 10067 MB",
        "Shared Memory: 16441 MB",
        "Current Mode: 2560 x 1440 (32 bit) (144Hz)",
        "Monitor Name: Dell S2716DG(DisplayPort)",
        "Monitor Model: Dell S2716DG",
        "Driver File Version: 31.00.0015.2661 (English)",
        "PanelFitter Stretch: n/a",
    ];

    #[test]
    fn collects_complete_card() {
        let cards = collect_display_devices(CARD);
        assert_eq!(
            cards,
            vec![CardRecord {
                card_name: "NVIDIA GeForce RTX 3080".to_string(),
                manufacturer: "NVIDIA".to_string(),
                vram_mb: 10067,
                display_mode: "2560 x 1440 (32 bit) (144Hz)".to_string(),
                monitor_name: Some("Dell S2716DG(DisplayPort)".to_string()),
                monitor_model: Some("Dell S2716DG".to_string()),
                driver_version: "31.00.0015.2661 (English)".to_string(),
            }]
        );
    }

    #[test]
    fn marker_fills_missing_monitor_lines() {
        let cards = collect_display_devices(&[
            "Card name: Microsoft Basic Display Adapter",
            "Manufacturer: (Standard display types)",
            "Dedicated Memory: n/a",
            "Monitor Model: Generic PnP Monitor",
            "PanelFitter Stretch: n/a",
        ]);
        assert_eq!(cards[0].vram_mb, 0);
        assert_eq!(cards[0].monitor_name.as_deref(), Some(UNKNOWN));
        assert_eq!(cards[0].monitor_model.as_deref(), Some("Generic PnP Monitor"));
    }

    #[test]
    fn card_without_marker_keeps_monitor_unset() {
        let cards = collect_display_devices(&[
            "Card name: Intel(R) UHD Graphics 630",
            "Manufacturer: Intel Corporation",
            "Card name: NVIDIA GeForce GTX 1660",
            "PanelFitter Stretch: n/a",
        ]);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].monitor_name, None);
        assert_eq!(cards[0].monitor_model, None);
        assert_eq!(cards[1].monitor_name.as_deref(), Some(UNKNOWN));
        assert_eq!(cards[1].monitor_model.as_deref(), Some(UNKNOWN));
    }

    #[test]
    fn lines_before_first_card_are_ignored() {
        let cards = collect_display_devices(&["Manufacturer: NVIDIA", "PanelFitter Stretch: n/a"]);
        assert!(cards.is_empty());
    }

    #[test]
    fn first_monitor_line_wins() {
        let cards = collect_display_devices(&[
            "Card name: AMD Radeon RX 6800",
            "Monitor Name: LG ULTRAGEAR",
            "Monitor Name: Generic PnP Monitor",
        ]);
        assert_eq!(cards[0].monitor_name.as_deref(), Some("LG ULTRAGEAR"));
    }

    #[test]
    fn unrecognized_vram_is_zero() {
        assert_eq!(parse_vram("8 GB"), None);
        let cards = collect_display_devices(&["Card name: X", "Dedicated Memory: 8 GB"]);
        assert_eq!(cards[0].vram_mb, 0);
    }

    #[test]
    fn into_device_decodes_driver() {
        let tables = DecodeTables::new(
            DriverVersionTable::new(),
            DriverVersionTable::from_entries([("526.61", "Thu Oct 27, 2022")]),
        );
        let device = collect_display_devices(CARD).remove(0).into_device(&tables);
        assert_eq!(device.driver_version, "526.61 - Thu Oct 27, 2022");
        assert_eq!(device.driver_version_raw, "31.00.0015.2661 (English)");
    }
}
