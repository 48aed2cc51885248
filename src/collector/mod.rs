//! Per-section extractors for a DxDiag report.

pub mod display;
pub mod drives;
pub mod notes;
pub mod section;
pub mod sound;
pub mod system;

pub use display::{collect_display_devices, CardRecord};
pub use drives::collect_drives;
pub use notes::collect_notes;
pub use section::section;
pub use sound::collect_sound_devices;
pub use system::collect_system_info;
