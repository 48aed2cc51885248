//! Disk & DVD/CD-ROM Drives section.
//!
//! A mounted drive is five lines:
//!
//! ```text
//!       Drive: C:
//!  Free Space: 120.5 GB
//! Total Space: 475.8 GB
//! File System: NTFS
//!       Model: Samsung SSD 970 EVO Plus 500GB
//! ```
//!
//! An empty removable drive has only the `Drive:` and `Model:` lines.

use super::section::field;
use crate::types::Drive;
use tracing::debug;

/// Column of the letter in a trimmed `Drive: C:` line.
const DRIVE_LETTER_OFFSET: usize = 7;

enum DriveState {
    AwaitDrive,
    AwaitFreeSpaceOrModel(Drive),
    AwaitTotalSpace(Drive),
    AwaitFileSystem(Drive),
    AwaitModel(Drive),
}

pub fn collect_drives(body: &[&str]) -> Vec<Drive> {
    let mut drives = Vec::new();
    let mut state = DriveState::AwaitDrive;

    for line in body.iter().copied().filter(|line| !line.is_empty()) {
        if line.starts_with("Drive:") {
            match state {
                DriveState::AwaitDrive => {}
                // no model line at all, still a removable drive
                DriveState::AwaitFreeSpaceOrModel(drive) => drives.push(drive),
                _ => debug!(line, "new drive before previous record was complete"),
            }
            state = match line.chars().nth(DRIVE_LETTER_OFFSET) {
                Some(letter) => DriveState::AwaitFreeSpaceOrModel(Drive {
                    letter,
                    ..Drive::default()
                }),
                None => DriveState::AwaitDrive,
            };
            continue;
        }

        state = match state {
            DriveState::AwaitDrive => DriveState::AwaitDrive,
            DriveState::AwaitFreeSpaceOrModel(mut drive) => match field(line, "Free Space:") {
                Some(free) => {
                    drive.free_space = free.to_string();
                    DriveState::AwaitTotalSpace(drive)
                }
                None => {
                    drive.model = labelled(line, "Model:");
                    drives.push(drive);
                    DriveState::AwaitDrive
                }
            },
            DriveState::AwaitTotalSpace(mut drive) => {
                drive.total_space = labelled(line, "Total Space:");
                DriveState::AwaitFileSystem(drive)
            }
            DriveState::AwaitFileSystem(mut drive) => {
                drive.file_system = labelled(line, "File System:");
                DriveState::AwaitModel(drive)
            }
            DriveState::AwaitModel(mut drive) => {
                drive.model = labelled(line, "Model:");
                drives.push(drive);
                DriveState::AwaitDrive
            }
        };
    }

    if !matches!(state, DriveState::AwaitDrive) {
        debug!("drive section ended inside a drive record, record dropped");
    }
    drives
}

/// The labelled value, or the whole line when the label is missing.
fn labelled(line: &str, label: &str) -> String {
    field(line, label).unwrap_or(line).to_string()
}
