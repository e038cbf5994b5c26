// Position tracking module
pub mod position;

// Shared substitution machinery
pub mod transform;

// Font attribute removal
pub mod strip;

// Missing self-close repair
pub mod close;

// File operations module
pub mod file;

// Batch driver
pub mod process;

// JSON report module
pub mod json;

// Re-exports
pub use position::{Position, Span, byte_to_position, span_to_positions};
pub use transform::{Change, Transform};
pub use strip::strip_font_family;
pub use close::close_dangling_tags;
pub use file::{FileContent, FileError, checksum, read_file, write_file};
pub use process::{Pass, ProcessOptions, process_file, process_files};
pub use json::{FileOutcome, FileReport, RunReport, generate_execution_id};
