use serde::Deserialize;

/// One record of the alternate time-log export: a worked duration in seconds
/// and its description. Extra fields in the export are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LogRecord {
    pub duration: i64,
    pub description: String,
}
