//! AMD driver version decoding.
//!
//! DxDiag reports the Windows driver file version, e.g.
//! `30.00.15002.1004 (English)`. The decode table maps that dotted version
//! to the Adrenalin release it shipped with.

use super::table::DriverVersionTable;

const OLDEST_DECODED_MAJOR: u32 = 30;

pub fn decode_amd(driver: &str, table: &DriverVersionTable) -> String {
    if driver.starts_with("Unknown") {
        return "Unknown".to_string();
    }
    if table.is_empty() {
        return driver.to_string();
    }

    let numbers = driver.split_once(' ').map_or(driver, |(numbers, _)| numbers);
    if let Some(release) = table.get(numbers) {
        return format!("Adrenalin {}", release);
    }

    let major = numbers
        .split('.')
        .next()
        .and_then(|m| m.parse::<u32>().ok());
    match major {
        Some(major) if major < OLDEST_DECODED_MAJOR => {
            format!("{} - unknown version, OLDER than September 2021", driver)
        }
        _ => format!("{} - unknown version", driver),
    }
}
