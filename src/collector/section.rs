//! Locating titled sections in a DxDiag report.
//!
//! A section looks like:
//!
//! ```text
//! ------------------
//! System Information
//! ------------------
//! Time of this report: 1/2/2024, 10:11:12
//! ...
//! ------------------
//! ```

pub const SYSTEM_INFORMATION: &str = "System Information";
pub const DXDIAG_NOTES: &str = "DxDiag Notes";
pub const DISPLAY_DEVICES: &str = "Display Devices";
pub const SOUND_DEVICES: &str = "Sound Devices";
pub const SOUND_CAPTURE_DEVICES: &str = "Sound Capture Devices";
pub const DRIVES: &str = "Disk & DVD/CD-ROM Drives";

/// Prefix of the dash rule that closes a section.
const RULE: &str = "--------";

/// Trimmed body lines of the section titled `title`.
///
/// The title must match a whole line. The line after it (the underline) is
/// skipped, and the body runs up to the next dash rule or the end of input.
pub fn section<'a, S: AsRef<str>>(lines: &'a [S], title: &str) -> Vec<&'a str> {
    let mut lines = lines.iter().map(|line| line.as_ref().trim());
    if !lines.by_ref().any(|line| line == title) {
        return Vec::new();
    }
    lines.next();
    lines.take_while(|line| !line.starts_with(RULE)).collect()
}

/// Value of a `Label: value` line, trimmed, when the line has that label.
pub fn field<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label).map(str::trim)
}
