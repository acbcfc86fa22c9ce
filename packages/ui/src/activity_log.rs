use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: &str) {
        self.entries.push(LogEntry {
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e.level, LogLevel::Error | LogLevel::Warning))
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    log.write().push(level, message);
}

fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_records_entries_in_order() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Info, "Loading posts...");
        log.push(LogLevel::Success, "Loaded 3 posts");

        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.entries[1].message, "Loaded 3 posts");
        assert_eq!(log.entries[0].timestamp.len(), "00:00:00".len());
        assert!(!log.has_errors());
    }

    #[test]
    fn test_warnings_count_as_problems() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Warning, "Could not load posts");
        assert!(log.has_errors());
    }
}
