//! Batch Processing Pipeline

pub mod scan;
pub mod tool;
pub mod processor;

pub use scan::{WavFile, scan_directory, is_wav_file_name};
pub use tool::{CommandRunner, SystemRunner, DryRunRunner, ToolInvocation, ExitOutcome};
pub use processor::{BatchProcessor, BatchReport, FileOutcome};
