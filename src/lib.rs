//! DxDiag report parsing with AMD and NVIDIA driver version decoding.

pub mod collector;
pub mod config;
pub mod decode;
pub mod dxdiag;
pub mod error;
pub mod report;
pub mod types;

pub use config::Config;
pub use decode::DecodeTables;
pub use dxdiag::DxDiagReport;
pub use error::{RefreshError, ReportError};
