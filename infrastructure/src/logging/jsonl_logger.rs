//! JSONL file writer for round events.
//!
//! Each event is serialized as a single JSON line with a `type` field and a
//! `timestamp`, appended to the file via a buffered writer.

use chain_application::RoundProgressNotifier;
use chain_domain::{Candidate, ProcessSummary, RoundOutcome};
use serde_json::{Value, json};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing::warn;

/// JSONL round logger that writes one JSON object per decided round.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Appends to an existing file so
/// consecutive runs share one log. Flushes on `Drop`.
pub struct JsonlRoundLogger {
    writer: Mutex<BufWriter<File>>,
}

impl JsonlRoundLogger {
    /// Create a new logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create round log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open round log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    fn write_event(&self, event_type: &str, payload: Value) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = if let Value::Object(mut map) = payload {
            map.insert("type".to_string(), Value::String(event_type.to_string()));
            map.insert("timestamp".to_string(), Value::String(timestamp));
            Value::Object(map)
        } else {
            json!({
                "type": event_type,
                "timestamp": timestamp,
                "data": payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl RoundProgressNotifier for JsonlRoundLogger {
    fn on_round_start(&self, _candidate: &Candidate, _index: usize, _total: usize) {}

    fn on_round_complete(&self, candidate: &Candidate, outcome: &RoundOutcome, chain_height: u64) {
        let mut payload = serde_json::to_value(outcome).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut payload {
            map.insert("block".to_string(), json!(candidate.id));
            map.insert("candidate_height".to_string(), json!(candidate.height));
            map.insert("chain_height".to_string(), json!(chain_height));
        }
        self.write_event("round_complete", payload);
    }

    fn on_run_complete(&self, summary: &ProcessSummary) {
        self.write_event(
            "run_complete",
            serde_json::to_value(summary).unwrap_or(Value::Null),
        );
    }
}

impl Drop for JsonlRoundLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_domain::BlockId;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_round_logger_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("rounds.jsonl");
        let logger = JsonlRoundLogger::new(&path).unwrap();

        let a = Candidate::new(BlockId::try_new("a").unwrap(), 1);
        let b = Candidate::new(BlockId::try_new("b").unwrap(), 2);
        logger.on_round_complete(&a, &RoundOutcome::Accepted { accepted: 3 }, 1);
        logger.on_round_complete(
            &b,
            &RoundOutcome::Rejected {
                accepted: 1,
                total: 5,
            },
            1,
        );
        logger.on_run_complete(&ProcessSummary::new(1, 0, 2, 1, 1));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert!(line.get("type").is_some());
            assert!(line.get("timestamp").is_some());
        }

        assert_eq!(lines[0]["type"], "round_complete");
        assert_eq!(lines[0]["outcome"], "accepted");
        assert_eq!(lines[0]["block"], "a");
        assert_eq!(lines[0]["chain_height"], 1);

        assert_eq!(lines[1]["outcome"], "rejected");
        assert_eq!(lines[1]["total"], 5);
        assert_eq!(lines[1]["candidate_height"], 2);

        assert_eq!(lines[2]["type"], "run_complete");
        assert_eq!(lines[2]["accepted"], 1);
        assert_eq!(lines[2]["rejected"], 1);
    }

    #[test]
    fn test_round_logger_appends_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.jsonl");

        for _ in 0..2 {
            let logger = JsonlRoundLogger::new(&path).unwrap();
            logger.on_run_complete(&ProcessSummary::new(1, 0, 0, 0, 0));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }
}
