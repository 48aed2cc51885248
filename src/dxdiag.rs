//! Reading a DxDiag report file and assembling the parsed report.

use crate::collector::{self, section};
use crate::decode::DecodeTables;
use crate::error::ReportError;
use crate::types::{DisplayDevice, Drive, SystemInformation};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DxDiagReport {
    pub system_information: SystemInformation,
    pub display_devices: Vec<DisplayDevice>,
    pub sound_devices: Vec<String>,
    pub drives: Vec<Drive>,
    pub notes: Vec<String>,
}

impl DxDiagReport {
    /// Read and parse the report at `path`.
    ///
    /// `FileNotFound` and `EncodingInvalid` tell apart a missing file from one
    /// that exists but is not readable text.
    pub fn from_path(path: &Path, tables: &DecodeTables) -> Result<Self, ReportError> {
        let lines = read_report_lines(path)?;
        info!(path = %path.display(), lines = lines.len(), "read report");
        Ok(Self::from_lines(&lines, tables))
    }

    pub fn from_text(text: &str, tables: &DecodeTables) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        Self::from_lines(&lines, tables)
    }

    pub fn from_lines<S: AsRef<str>>(lines: &[S], tables: &DecodeTables) -> Self {
        let system_information =
            collector::collect_system_info(&section(lines, section::SYSTEM_INFORMATION));
        let notes = collector::collect_notes(&section(lines, section::DXDIAG_NOTES));
        let display_devices = collector::collect_display_devices(&section(lines, section::DISPLAY_DEVICES))
            .into_iter()
            .map(|card| card.into_device(tables))
            .collect();

        let mut sound_devices =
            collector::collect_sound_devices(&section(lines, section::SOUND_DEVICES));
        sound_devices.extend(collector::collect_sound_devices(&section(
            lines,
            section::SOUND_CAPTURE_DEVICES,
        )));

        let drives = collector::collect_drives(&section(lines, section::DRIVES));

        let report = Self {
            system_information,
            display_devices,
            sound_devices,
            drives,
            notes,
        };
        debug!(
            displays = report.display_devices.len(),
            sound = report.sound_devices.len(),
            drives = report.drives.len(),
            notes = report.note_count(),
            "parsed report"
        );
        report
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }
}

/// Lines of the report file. DxDiag saves UTF-16 with a byte order mark;
/// UTF-8 (with or without a BOM) and the Windows ANSI code page are
/// accepted too.
pub fn read_report_lines(path: &Path) -> Result<Vec<String>, ReportError> {
    if !path.exists() {
        return Err(ReportError::FileNotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;
    let text = decode_text(&bytes).ok_or_else(|| ReportError::EncodingInvalid(path.to_path_buf()))?;
    Ok(text.lines().map(str::to_string).collect())
}

fn decode_text(bytes: &[u8]) -> Option<String> {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8(rest.to_vec()).ok(),
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        _ => String::from_utf8(bytes.to_vec()).ok().or_else(|| decode_windows_1252(bytes)),
    }
}

/// Bytes Windows-1252 leaves unassigned. encoding_rs maps them to C1
/// controls, so they are rejected up front.
const WINDOWS_1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Reports saved without a BOM on non-English systems use Windows-1252.
fn decode_windows_1252(bytes: &[u8]) -> Option<String> {
    if bytes.iter().any(|b| WINDOWS_1252_UNDEFINED.contains(b)) {
        return None;
    }
    encoding_rs::WINDOWS_1252
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_supported_encodings() {
        assert_eq!(decode_text(b"Drive: C:").as_deref(), Some("Drive: C:"));
        assert_eq!(decode_text(b"\xEF\xBB\xBFDrive: C:").as_deref(), Some("Drive: C:"));
        assert_eq!(decode_text(b"\xFF\xFEO\x00K\x00").as_deref(), Some("OK"));
        assert_eq!(decode_text(b"\xFE\xFF\x00O\x00K").as_deref(), Some("OK"));
    }

    #[test]
    fn falls_back_to_windows_1252() {
        assert_eq!(
            decode_text(b"Description: P\xE9riph\xE9rique audio\n").as_deref(),
            Some("Description: P\u{e9}riph\u{e9}rique audio\n")
        );
        assert_eq!(
            decode_text(b"Processor: Intel\xAE Core \x96 i7").as_deref(),
            Some("Processor: Intel\u{ae} Core \u{2013} i7")
        );
    }

    #[test]
    fn rejects_undecodable_bytes() {
        for byte in WINDOWS_1252_UNDEFINED {
            assert_eq!(decode_text(&[b'C', b':', byte]), None);
        }
        assert_eq!(decode_text(b"\xFF\xFEO\x00K"), None);
        assert_eq!(decode_text(b"\xFF\xFE\x00\xD8"), None);
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let report = DxDiagReport::from_text("", &DecodeTables::default());
        assert_eq!(report, DxDiagReport::default());
        assert_eq!(report.note_count(), 0);
    }

    #[test]
    fn capture_devices_follow_playback_devices() {
        let text = "\
-------------
Sound Devices
-------------
Description: Speakers (Realtek(R) Audio)
---------------------
Sound Capture Devices
---------------------
Description: Microphone (USB Audio Device)
";
        let report = DxDiagReport::from_text(text, &DecodeTables::default());
        assert_eq!(
            report.sound_devices,
            vec!["Speakers (Realtek(R) Audio)", "Microphone (USB Audio Device)"]
        );
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = DxDiagReport::from_path(Path::new("no/such/DxDiag.txt"), &DecodeTables::default())
            .unwrap_err();
        assert!(matches!(err, ReportError::FileNotFound(_)));
        assert!(!err.file_found());
    }
}
