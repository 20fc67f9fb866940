// Telemetry normalization: format sniffing, positional record mapping, per-file parsing

pub mod mapper;
pub mod parser;
pub mod sniff;

pub use mapper::{RecordRejected, map_record};
pub use parser::{ParsedFile, parse_content, parse_file};
pub use sniff::{Delimiter, SniffedFormat, sniff_format};
