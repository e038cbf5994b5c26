use serde::Serialize;
use uuid::Uuid;

use crate::process::Pass;
use crate::transform::Change;

/// Outcome of one file in a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// File was read and transformed (and written unless dry run)
    Processed {
        change_count: usize,
        checksum_before: String,
        checksum_after: String,
        written: bool,
        changes: Vec<Change>,
    },
    /// Reading or writing the file failed
    Failed { error: String },
}

/// Per-file entry in a run report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn failed(path: impl Into<String>, error: impl ToString) -> Self {
        Self {
            path: path.into(),
            outcome: FileOutcome::Failed { error: error.to_string() },
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, FileOutcome::Failed { .. })
    }

    pub fn change_count(&self) -> usize {
        match &self.outcome {
            FileOutcome::Processed { change_count, .. } => *change_count,
            FileOutcome::Failed { .. } => 0,
        }
    }
}

/// Report for one invocation over a list of files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Unique identifier for this run
    pub execution_id: String,
    /// Pass that was applied
    pub pass: Pass,
    /// Whether files were left untouched on disk
    pub dry_run: bool,
    /// Number of files processed without error
    pub processed_count: usize,
    /// Number of files that failed
    pub failed_count: usize,
    /// Number of processed files with at least one change
    pub changed_count: usize,
    /// Per-file results in input order
    pub files: Vec<FileReport>,
}

impl RunReport {
    /// Build a report from individual file results
    pub fn new(execution_id: String, pass: Pass, dry_run: bool, files: Vec<FileReport>) -> Self {
        let failed_count = files.iter().filter(|f| f.is_failed()).count();
        let processed_count = files.len() - failed_count;
        let changed_count = files.iter().filter(|f| f.change_count() > 0).count();

        Self {
            execution_id,
            pass,
            dry_run,
            processed_count,
            failed_count,
            changed_count,
            files,
        }
    }

    /// Check if every file was processed
    pub fn is_complete_success(&self) -> bool {
        self.failed_count == 0
    }

    /// One human-readable status line per file
    pub fn status_lines(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|file| match &file.outcome {
                FileOutcome::Processed { .. } => self.pass.success_message(&file.path),
                FileOutcome::Failed { error } => self.pass.failure_message(&file.path, error),
            })
            .collect()
    }
}

/// Generate a unique execution ID
pub fn generate_execution_id() -> String {
    Uuid::new_v4().to_string()
}
