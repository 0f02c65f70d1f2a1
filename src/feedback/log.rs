// CSV-backed append-only feedback log
//
// One process-wide mutex serializes appends; an exclusive file lock guards
// against a concurrently running retrain CLI touching the same file. Records
// are written with a flush per append so readers always see whole rows.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{FeedbackRecord, FeedbackStore};

pub struct CsvFeedbackLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvFeedbackLog {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create feedback dir: {}", parent.display())
            })?;
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeedbackStore for CsvFeedbackLog {
    fn append(&self, record: &FeedbackRecord) -> Result<usize> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let is_new = match fs::metadata(&self.path) {
            Ok(metadata) => metadata.len() == 0,
            Err(_) => true,
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open feedback log: {}", self.path.display()))?;
        file.lock_exclusive()
            .context("Failed to lock feedback log for append")?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(&file);
        writer
            .serialize(record)
            .context("Failed to serialize feedback record")?;
        writer.flush().context("Failed to flush feedback log")?;
        drop(writer);

        fs2::FileExt::unlock(&file).context("Failed to unlock feedback log")?;
        self.count()
    }

    fn read_all(&self) -> Result<Vec<FeedbackRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("Failed to open feedback log: {}", self.path.display()))?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: FeedbackRecord = row.context("Failed to parse feedback record")?;
            records.push(record);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_in(dir: &tempfile::TempDir) -> CsvFeedbackLog {
        CsvFeedbackLog::new(dir.path().join("feedback.csv")).unwrap()
    }

    #[test]
    fn test_append_returns_incremented_count() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(&dir);

        let first = FeedbackRecord::new("pc slow", "RAM Upgrade", 0.45, None, "hierarchical_ml");
        assert_eq!(log.append(&first).unwrap(), 1);

        let second = FeedbackRecord::new(
            "pc slow",
            "RAM Upgrade",
            0.45,
            Some("SSD Upgrade"),
            "hierarchical_ml",
        );
        assert_eq!(log.append(&second).unwrap(), 2);
    }

    #[test]
    fn test_roundtrip_preserves_correction() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(&dir);

        log.append(&FeedbackRecord::new(
            "pc slow",
            "RAM Upgrade",
            0.45,
            Some("SSD Upgrade"),
            "hierarchical_ml",
        ))
        .unwrap();

        let records = log.read_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_text, "pc slow");
        assert_eq!(records[0].user_correct_label.as_deref(), Some("SSD Upgrade"));
        assert_eq!(records[0].training_label(), "SSD Upgrade");
        assert!(records[0].needs_review);
    }

    #[test]
    fn test_read_all_on_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(&dir);
        assert!(log.read_all().unwrap().is_empty());
        assert_eq!(log.count().unwrap(), 0);
    }

    #[test]
    fn test_pending_review_count() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(&dir);

        log.append(&FeedbackRecord::new("a", "RAM Upgrade", 0.4, None, "rule"))
            .unwrap();
        log.append(&FeedbackRecord::new(
            "b",
            "RAM Upgrade",
            0.4,
            Some("SSD Upgrade"),
            "flat_ml",
        ))
        .unwrap();
        log.append(&FeedbackRecord::new(
            "c",
            "RAM Upgrade",
            0.4,
            Some("RAM Upgrade"),
            "flat_ml",
        ))
        .unwrap();

        assert_eq!(log.count().unwrap(), 3);
        assert_eq!(log.pending_review_count().unwrap(), 1);
    }

    #[test]
    fn test_concurrent_appends_are_serialized() {
        use std::sync::Arc;

        let dir = tempfile::tempdir().unwrap();
        let log = Arc::new(log_in(&dir));

        let mut handles = Vec::new();
        for worker in 0..8 {
            let log = Arc::clone(&log);
            handles.push(std::thread::spawn(move || {
                for i in 0..5 {
                    let record = FeedbackRecord::new(
                        &format!("text {} {}", worker, i),
                        "RAM Upgrade",
                        0.3,
                        None,
                        "flat_ml",
                    );
                    log.append(&record).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let records = log.read_all().unwrap();
        assert_eq!(records.len(), 40);
    }
}
