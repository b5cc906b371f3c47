pub mod config;
pub mod engine;
pub mod error;
pub mod labeler;
pub mod reader;
pub mod render;
pub mod scanner;

pub use crate::config::AppConfig;
pub use engine::{generate_report, Report, ReportEngine};
pub use error::Error;
pub use labeler::{assign, LabelAssignment, LABEL_ALPHABET};
pub use reader::{DirectoryListing, DirectoryReader, FsReader};
pub use render::render;
pub use scanner::{scan, scan_with, DirectoryRecord};
