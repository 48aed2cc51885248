//! NVIDIA driver version decoding.
//!
//! The Windows file version `30.00.0015.1179` carries the public release
//! `511.79`: drop the first digit of the third component (after removing its
//! leading zeros) and join it with the fourth component, putting the dot
//! before its last two digits.

use super::table::DriverVersionTable;
use tracing::warn;

const OLDEST_DATED_MAJOR: u32 = 500;

pub fn decode_nvidia(driver: &str, table: &DriverVersionTable) -> String {
    if driver.starts_with("Unknown") {
        return "Unknown".to_string();
    }

    let numbers = driver.split_once(' ').map_or(driver, |(numbers, _)| numbers);
    let Some((major, release)) = public_release(numbers) else {
        warn!(driver, "unrecognized NVIDIA driver version, leaving it undecoded");
        return driver.to_string();
    };

    if major < OLDEST_DATED_MAJOR {
        return format!("{} - OLDER than January 2023", release);
    }
    match table.get(&release) {
        Some(date) => format!("{} - {}", release, date),
        None => release,
    }
}

/// `"30.00.0015.1179"` -> `(511, "511.79")`.
fn public_release(numbers: &str) -> Option<(u32, String)> {
    let parts: Vec<&str> = numbers.split('.').collect();
    if parts.len() != 4 || !parts[2..].iter().all(|p| is_digits(p)) {
        return None;
    }

    let third = parts[2].parse::<u64>().ok()?.to_string();
    let fourth = parts[3];
    if fourth.len() < 2 {
        return None;
    }

    let major = format!("{}{}", &third[1..], &fourth[..2]);
    let minor = &fourth[2..];
    let major_number = major.parse::<u32>().ok()?;
    Some((major_number, format!("{}.{}", major, minor)))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
