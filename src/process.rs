use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::close::close_dangling_tags;
use crate::file::{FileError, checksum, read_file, write_file};
use crate::json::{FileOutcome, FileReport, RunReport, generate_execution_id};
use crate::strip::strip_font_family;
use crate::transform::Transform;

/// A whole-buffer transformation that can be run over layout files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pass {
    /// Remove Inter `android:fontFamily` attributes
    StripFontFamily,
    /// Insert missing ` />` before sibling tags
    CloseTags,
}

impl Pass {
    pub fn apply(self, content: &str) -> Transform {
        match self {
            Pass::StripFontFamily => strip_font_family(content),
            Pass::CloseTags => close_dangling_tags(content),
        }
    }

    pub fn success_message(self, path: &str) -> String {
        match self {
            Pass::StripFontFamily => format!("Successfully processed: {}", path),
            Pass::CloseTags => format!("Fixed closing tags in: {}", path),
        }
    }

    pub fn failure_message(self, path: &str, error: &str) -> String {
        match self {
            Pass::StripFontFamily => format!("Error processing {}: {}", path, error),
            Pass::CloseTags => format!("Error: {}", error),
        }
    }
}

/// Options shared by every file in a run
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOptions {
    /// Transform and report without writing anything back
    pub dry_run: bool,
}

/// Read, transform and overwrite a single file
///
/// The file is rewritten even when the pass changed nothing, unless
/// `options.dry_run` is set.
pub fn process_file<P: AsRef<Path>>(
    path: P,
    pass: Pass,
    options: ProcessOptions,
) -> Result<FileReport, FileError> {
    let path_ref = path.as_ref();
    let file = read_file(path_ref)?;

    let transform = pass.apply(&file.content);
    let checksum_after = checksum(&transform.content);
    debug!(
        path = %file.path,
        ?pass,
        len_before = file.len,
        len_after = transform.content.len(),
        changes = transform.change_count(),
        "transformed buffer"
    );

    let written = !options.dry_run;
    if written {
        write_file(path_ref, &transform.content)?;
    }

    Ok(FileReport {
        path: path_ref.display().to_string(),
        outcome: FileOutcome::Processed {
            change_count: transform.change_count(),
            checksum_before: file.checksum,
            checksum_after,
            written,
            changes: transform.changes,
        },
    })
}

/// Run `pass` over every path in order
///
/// A failure on one file is recorded in its report entry and does not stop
/// the files after it.
pub fn process_files<P: AsRef<Path>>(paths: &[P], pass: Pass, options: ProcessOptions) -> RunReport {
    let execution_id = generate_execution_id();
    info!(%execution_id, ?pass, files = paths.len(), dry_run = options.dry_run, "starting run");

    let files = paths
        .iter()
        .map(|path| {
            let path: &Path = path.as_ref();
            match process_file(path, pass, options) {
                Ok(report) => {
                    info!(path = %report.path, changes = report.change_count(), "processed file");
                    report
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to process file");
                    FileReport::failed(path.display().to_string(), e)
                }
            }
        })
        .collect();

    RunReport::new(execution_id, pass, options.dry_run, files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const DAMAGED: &str = concat!(
        "<LinearLayout>\n",
        "    <ImageView\n",
        "        android:fontFamily=\"@font/inter_bold\"\n",
        "        android:src=\"@drawable/logo\"\n",
        "    <TextView android:text=\"x\" />\n",
        "</LinearLayout>\n",
    );

    #[test]
    fn test_pass_apply_dispatches() {
        let stripped = Pass::StripFontFamily.apply(DAMAGED);
        assert_eq!(stripped.change_count(), 1);
        assert!(!stripped.content.contains("fontFamily"));

        let closed = Pass::CloseTags.apply(&stripped.content);
        assert_eq!(closed.change_count(), 1);
        assert!(closed.content.contains("\"@drawable/logo\" />\n    <TextView"));
    }

    #[test]
    fn test_process_file_overwrites_with_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity_about.xml");
        fs::write(&path, DAMAGED).unwrap();

        let report = process_file(&path, Pass::StripFontFamily, ProcessOptions::default()).unwrap();

        let on_disk = fs::read_to_string(&path).unwrap();
        assert!(!on_disk.contains("fontFamily"));
        match report.outcome {
            FileOutcome::Processed { change_count, written, checksum_before, checksum_after, .. } => {
                assert_eq!(change_count, 1);
                assert!(written);
                assert_eq!(checksum_before, checksum(DAMAGED));
                assert_eq!(checksum_after, checksum(&on_disk));
            }
            other => panic!("Expected processed outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_process_file_dry_run_leaves_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity_about.xml");
        fs::write(&path, DAMAGED).unwrap();

        let report = process_file(&path, Pass::StripFontFamily, ProcessOptions { dry_run: true }).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), DAMAGED);
        assert_eq!(report.change_count(), 1);
        assert!(matches!(report.outcome, FileOutcome::Processed { written: false, .. }));
    }

    #[test]
    fn test_process_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.xml");

        let err = process_file(&path, Pass::CloseTags, ProcessOptions::default()).unwrap_err();

        assert!(matches!(err, FileError::NotFound(_)));
    }

    #[test]
    fn test_process_files_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("activity_missing.xml");
        let present = dir.path().join("activity_support.xml");
        fs::write(&present, DAMAGED).unwrap();

        let report = process_files(&[&missing, &present], Pass::StripFontFamily, ProcessOptions::default());

        assert_eq!(report.files.len(), 2);
        assert!(report.files[0].is_failed());
        assert!(!report.files[1].is_failed());
        assert_eq!(report.failed_count, 1);
        assert_eq!(report.processed_count, 1);
        assert_eq!(report.changed_count, 1);
        assert!(!fs::read_to_string(&present).unwrap().contains("fontFamily"));

        let lines = report.status_lines();
        assert!(lines[0].starts_with("Error processing "));
        assert!(lines[0].contains("File not found"));
        assert!(lines[1].starts_with("Successfully processed: "));
    }

    #[test]
    fn test_process_files_empty_list() {
        let paths: [&str; 0] = [];
        let report = process_files(&paths, Pass::CloseTags, ProcessOptions::default());

        assert!(report.files.is_empty());
        assert!(report.is_complete_success());
    }
}
