//! Two-section text report:
//!
//! ```text
//! Current Directory
//! eggs ham spam
//! Subdirectories
//! 0: bar 1: foo
//! ```
//!
//! Each populated label shows the first name assigned to it. When any label
//! wrapped around, the label line ends with [`TRUNCATION_MARKER`] in place of
//! its trailing space.

use crate::labeler::LabelAssignment;
use crate::scanner::DirectoryRecord;

pub const FILES_HEADER: &str = "Current Directory";
pub const DIRECTORIES_HEADER: &str = "Subdirectories";
pub const TRUNCATION_MARKER: &str = "...";

pub fn render(record: &DirectoryRecord, labels: &LabelAssignment) -> String {
    let mut output = String::new();

    output.push_str(FILES_HEADER);
    output.push('\n');
    output.push_str(&render_file_line(record));
    output.push('\n');

    output.push_str(DIRECTORIES_HEADER);
    output.push('\n');
    output.push_str(&render_label_line(labels));
    output.push('\n');

    output
}

fn render_file_line(record: &DirectoryRecord) -> String {
    // BTreeSet iterates in byte order.
    record
        .files
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_label_line(labels: &LabelAssignment) -> String {
    let mut line = String::new();

    for (label, names) in labels.iter() {
        if let Some(first) = names.first() {
            line.push(label);
            line.push_str(": ");
            line.push_str(first);
            line.push(' ');
        }
    }

    if labels.is_overflowing() {
        line.push_str(TRUNCATION_MARKER);
    } else if line.ends_with(' ') {
        line.pop();
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labeler::{assign, LABEL_ALPHABET};
    use std::collections::{BTreeMap, BTreeSet};
    use std::path::PathBuf;

    fn record(dirs: &[&str], files: &[&str]) -> DirectoryRecord {
        DirectoryRecord {
            directories: dirs
                .iter()
                .map(|d| (d.to_string(), PathBuf::from("/root").join(d)))
                .collect::<BTreeMap<_, _>>(),
            files: files.iter().map(|f| f.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    fn render_record(record: &DirectoryRecord) -> String {
        render(record, &assign(&record.directories))
    }

    fn numeric_dirs(count: usize) -> Vec<String> {
        (0..count).map(|n| n.to_string()).collect()
    }

    fn numeric_record(count: usize) -> DirectoryRecord {
        let names = numeric_dirs(count);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        record(&refs, &[])
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            render_record(&record(&[], &[])),
            "Current Directory\n\nSubdirectories\n\n"
        );
    }

    #[test]
    fn test_one_file() {
        assert_eq!(
            render_record(&record(&[], &["spam"])),
            "Current Directory\nspam\nSubdirectories\n\n"
        );
    }

    #[test]
    fn test_files_sorted() {
        assert_eq!(
            render_record(&record(&[], &["spam", "ham", "eggs"])),
            "Current Directory\neggs ham spam\nSubdirectories\n\n"
        );
    }

    #[test]
    fn test_directories_sorted() {
        assert_eq!(
            render_record(&record(&["foo", "bar"], &[])),
            "Current Directory\n\nSubdirectories\n0: bar 1: foo\n"
        );
    }

    #[test]
    fn test_files_and_directories() {
        assert_eq!(
            render_record(&record(&["foo"], &["spam", "ham", "eggs"])),
            "Current Directory\neggs ham spam\nSubdirectories\n0: foo\n"
        );
    }

    #[test]
    fn test_36_directories_no_marker() {
        let rendered = render_record(&numeric_record(36));

        let mut sorted = numeric_dirs(36);
        sorted.sort();
        let expected_line = LABEL_ALPHABET
            .iter()
            .zip(sorted.iter())
            .map(|(label, name)| format!("{}: {}", label, name))
            .collect::<Vec<_>>()
            .join(" ");

        assert_eq!(
            rendered,
            format!("Current Directory\n\nSubdirectories\n{}\n", expected_line)
        );
        assert!(!rendered.contains(TRUNCATION_MARKER));
    }

    #[test]
    fn test_37_directories_truncated() {
        let rendered = render_record(&numeric_record(37));

        let mut sorted = numeric_dirs(37);
        sorted.sort();
        let mut expected_line = String::new();
        for (label, name) in LABEL_ALPHABET.iter().zip(sorted.iter()) {
            expected_line.push_str(&format!("{}: {} ", label, name));
        }
        expected_line.push_str("...");

        assert_eq!(
            rendered,
            format!("Current Directory\n\nSubdirectories\n{}\n", expected_line)
        );
        assert!(rendered.ends_with("z: 8 ...\n"));
    }

    #[test]
    fn test_73_directories_show_first_name_per_label() {
        let line_73 = render_record(&numeric_record(73));

        let mut sorted_73 = numeric_dirs(73);
        sorted_73.sort();
        assert!(line_73.starts_with("Current Directory\n\nSubdirectories\n0: 0 1: 1 2: 10 "));
        assert!(line_73.ends_with(&format!("z: {} ...\n", sorted_73[35])));
        assert_eq!(line_73.matches(": ").count(), 36);
    }

    #[test]
    fn test_same_name_file_and_directory() {
        assert_eq!(
            render_record(&record(&["dup"], &["dup"])),
            "Current Directory\ndup\nSubdirectories\n0: dup\n"
        );
    }

    #[test]
    fn test_single_trailing_newline() {
        for count in [0, 1, 36, 37, 73] {
            let rendered = render_record(&numeric_record(count));
            assert!(rendered.ends_with('\n'));
            assert!(!rendered.ends_with("\n\n") || count == 0);
            assert!(!rendered.ends_with(" \n"));
        }
    }
}
