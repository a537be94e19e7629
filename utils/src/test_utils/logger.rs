use log::kv::Key;
use log::{Level, Log, Metadata, Record};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub err: Option<String>,
}

/// Logger that keeps every record in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct CapturingLogger {
    records: Mutex<Vec<CapturedRecord>>,
}

impl CapturingLogger {
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn contains_message(&self, message: &str) -> bool {
        self.records().iter().any(|r| r.message == message)
    }
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let captured = CapturedRecord {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
            err: record
                .key_values()
                .get(Key::from_str("err"))
                .map(|v| v.to_string()),
        };
        if let Ok(mut records) = self.records.lock() {
            records.push(captured);
        }
    }

    fn flush(&self) {}
}
