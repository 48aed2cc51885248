//! Text report generator.

use crate::dxdiag::DxDiagReport;
use crate::types::{div_round_half_even, DisplayDevice, Drive, UNKNOWN};

const INDENT: &str = "                  ";

pub fn generate(report: &DxDiagReport, version: &str) -> String {
    let mut out = String::new();
    let system = &report.system_information;

    out.push_str(&format!("DxDiag Report Parser {}\n", version));
    out.push_str(&"-".repeat(26));
    out.push('\n');
    out.push_str(&format!("Report time:      {}\n", system.report_time));
    out.push_str(&format!("Computer Name:    {}\n", system.machine_name));
    out.push_str(&format!("OS:               {}\n", system.os_name));
    out.push_str(&format!("Language:         {}\n", system.language));
    let details = if system.system_details.is_empty() { "n/a" } else { system.system_details.as_str() };
    out.push_str(&format!("System:           {}\n", details));
    out.push_str(&format!("CPU:              {}\n", system.cpu_name));
    let ram = if system.memory_in_mb > 1023 {
        format!("{} GB", system.memory_in_gb)
    } else {
        format!("{} MB", system.memory_in_mb)
    };
    out.push_str(&format!("RAM:              {}\n", ram));
    out.push_str(&format!("Page File:        {}\n", system.page_file));
    out.push_str(&format!("DirectX:          {}\n", system.directx_version));
    out.push_str(&format!("User DPI:         {}\n", system.user_dpi));
    out.push('\n');

    for (i, card) in report.display_devices.iter().enumerate() {
        out.push_str(&format!("Video display {}\n", i + 1));
        out.push_str(&format!("Video card:       {}\n", card.card_name));
        out.push_str(&format!("Driver version:   {}\n", card.driver_version));
        out.push_str(&format!("VRAM:             {}\n", vram(card.vram_mb)));
        out.push_str(&format!("Display mode:     {}\n", card.display_mode));
        out.push_str(&format!("Monitor name:     {}\n", monitor_line(card)));
        out.push('\n');
    }

    let mut prefix = "Sound devices:    ";
    for device in &report.sound_devices {
        out.push_str(&format!("{}{}\n", prefix, device));
        prefix = INDENT;
    }
    out.push('\n');

    let letters: String = report.drives.iter().map(|d| format!("{} ", d.letter)).collect();
    out.push_str(&format!("Drives:           {}\n", letters));
    let info: Vec<String> = report.drives.iter().map(drive_line).collect();
    out.push_str(&format!("Drive info:       {}\n", info.join(&format!("\n{}", INDENT))));

    if report.note_count() > 0 {
        out.push('\n');
        out.push_str("DXDIAG DETECTED AN ERROR:\n");
        out.push_str(&format!("Error count: {}\n", report.note_count()));
        for note in &report.notes {
            out.push_str(&format!("- {}\n", note));
        }
        out.push('\n');
        out.push_str("Check the DxDiag report section \"DxDiag Notes\"\n");
    }

    out
}

fn vram(mb: u64) -> String {
    if mb > 1023 {
        format!("{} GB", div_round_half_even(mb, 1024))
    } else {
        format!("{} MB", mb)
    }
}

/// Monitor name, followed by the model when it adds something.
fn monitor_line(card: &DisplayDevice) -> String {
    let name = card.monitor_name.as_deref().unwrap_or(UNKNOWN);
    match card.monitor_model.as_deref() {
        Some(model) if !model.eq_ignore_ascii_case(UNKNOWN) && !name.starts_with(model) => {
            format!("{} ({})", name, model)
        }
        _ => name.to_string(),
    }
}

fn drive_line(drive: &Drive) -> String {
    if drive.is_mounted() {
        format!(
            "{}: (free {}/{}) {} - {}",
            drive.letter, drive.free_space, drive.total_space, drive.file_system, drive.model
        )
    } else {
        format!("{}: {}", drive.letter, drive.model)
    }
}
