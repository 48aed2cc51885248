//! Sound Devices and Sound Capture Devices sections.

use super::section::field;

pub fn collect_sound_devices(body: &[&str]) -> Vec<String> {
    body.iter()
        .filter_map(|line| field(line, "Description:"))
        .map(str::to_string)
        .collect()
}
