//! System Information section.

use super::section::field;
use crate::types::{div_round_half_even, SystemInformation};
use tracing::warn;

const GENERIC_MANUFACTURER: &str = "System manufacturer";
const GENERIC_MODEL: &str = "System Product Name";

/// `Memory: 16384MB RAM` ends in this fixed-width unit.
const MEMORY_SUFFIX_LEN: usize = 6;

pub fn collect_system_info(body: &[&str]) -> SystemInformation {
    let mut info = SystemInformation::default();

    for line in body {
        if let Some(v) = field(line, "Time of this report:") {
            info.report_time = v.to_string();
        } else if let Some(v) = field(line, "Machine name:") {
            info.machine_name = v.to_string();
        } else if let Some(v) = field(line, "Operating System:") {
            info.os_name = v.to_string();
        } else if let Some(v) = field(line, "Language:") {
            info.language = v.to_string();
        } else if let Some(v) = field(line, "System Manufacturer:") {
            if v != GENERIC_MANUFACTURER {
                info.system_details = v.to_string();
            }
        } else if let Some(v) = field(line, "System Model:") {
            if v != GENERIC_MODEL {
                if !info.system_details.is_empty() {
                    info.system_details.push(' ');
                }
                info.system_details.push_str(v);
            }
        } else if let Some(v) = field(line, "Processor:") {
            info.cpu_name = clean_cpu_name(v);
        } else if let Some(v) = field(line, "Memory:") {
            info.memory_string = v.to_string();
            match memory_in_mb(v) {
                Some(mb) => {
                    info.memory_in_mb = mb;
                    info.memory_in_gb = div_round_half_even(mb, 1024);
                }
                None => warn!(memory = v, "could not read memory size"),
            }
        } else if let Some(v) = field(line, "Page File:") {
            info.page_file = v.to_string();
        } else if let Some(v) = field(line, "DirectX Version:") {
            info.directx_version = v.to_string();
        } else if let Some(v) = field(line, "User DPI Setting:") {
            info.user_dpi = v.to_string();
        }
    }

    info
}

/// Drop trademark marks and squeeze repeated spaces:
/// `Intel(R) Core(TM) i7-9700K CPU @ 3.60GHz (8 CPUs),  ~3.6GHz`.
fn clean_cpu_name(raw: &str) -> String {
    raw.replace("(R)", "")
        .replace("(TM)", "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn memory_in_mb(value: &str) -> Option<u64> {
    let end = value
        .char_indices()
        .rev()
        .nth(MEMORY_SUFFIX_LEN - 1)
        .map(|(i, _)| i)?;
    let digits: String = value[..end]
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
