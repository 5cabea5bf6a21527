use ocean_logger::{Logger, Rotation};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_logging_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("integration-json")
        .console(false)
        .level_str("info")?
        .path(&log_dir)
        .rotation(Rotation::NEVER)
        .json(true)
        .init()?;

    tracing::info!(route = "/seas", "rendered page");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let line = contents.lines().find(|l| l.contains("rendered page")).expect("event should be logged");
    assert!(line.trim_start().starts_with('{'), "file records should be JSON: {line}");
    assert!(line.contains("\"route\":\"/seas\""));

    Ok(())
}
