use crate::config::AppConfig;
use crate::error::Error;
use crate::labeler;
use crate::reader::{DirectoryReader, FsReader};
use crate::render;
use crate::scanner;
use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct ReportEngine {
    reader: Box<dyn DirectoryReader>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub directory_count: usize,
    pub file_count: usize,
    pub truncated: bool,
    pub duration: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl ReportEngine {
    /// Engine reading the local filesystem, honouring `config.ignore_patterns`.
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        let reader = FsReader::new().with_ignore_patterns(&config.ignore_patterns)?;
        Ok(Self::with_reader(reader))
    }

    pub fn with_reader<R>(reader: R) -> Self
    where
        R: DirectoryReader + 'static,
    {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Run the report pipeline once for `root`:
    /// 1. Single-level scan into a `DirectoryRecord`
    /// 2. Round-robin label assignment of subdirectories
    /// 3. Text rendering
    pub fn run(&self, root: &Path) -> Result<Report, Error> {
        info!("Generating report for {}", root.display());
        let start = Instant::now();

        let record = scanner::scan_with(self.reader.as_ref(), root)?;
        let labels = labeler::assign(&record.directories);
        debug!(
            "Assigned {} directories, overflowing: {}",
            labels.total(),
            labels.is_overflowing()
        );

        let text = render::render(&record, &labels);
        let duration = start.elapsed();
        debug!("Report rendered in {:.3}s", duration.as_secs_f64());

        Ok(Report {
            text,
            directory_count: record.directories.len(),
            file_count: record.files.len(),
            truncated: labels.is_overflowing(),
            duration,
        })
    }
}

/// Render the report for `root` with default configuration.
pub fn generate_report(root: &Path) -> Result<String, Error> {
    let engine = ReportEngine::new(&AppConfig::default())?;
    Ok(engine.run(root)?.text)
}
