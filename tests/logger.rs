use refdesk::logger::Logger;
use std::fs;

#[test]
fn test_config_based_logging_disabled() {
    let logger = Logger::from_config(false).unwrap();
    assert!(logger.log_file().is_none());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_file_logging_writes_to_given_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("refdesk.log");

    let logger = Logger::with_log_file(path.clone()).unwrap();
    assert_eq!(logger.log_file(), Some(path.as_path()));

    logger.log("Test message with file".to_string());
    log::logger().flush();

    // In-memory logs back the logs dialog
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message with file"));

    let file_content = fs::read_to_string(&path).unwrap();
    assert_eq!(file_content.matches("Test message with file").count(), 1);
    assert!(file_content.contains("[INFO]"));
}

#[test]
fn test_default_log_file_location() {
    let log_path = Logger::get_log_file_path().unwrap();
    assert!(log_path.ends_with("refdesk/refdesk.log"));
}

#[test]
fn test_entries_are_timestamped() {
    let logger = Logger::new();
    logger.log("stamped".to_string());
    let logs = logger.get_logs();
    assert!(logs[0].starts_with('['));
    assert!(logs[0].ends_with("] stamped"));
}
