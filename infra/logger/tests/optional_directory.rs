use seva_logger::Logger;
use tempfile::tempdir;

#[test]
fn configured_directory_enables_file_output() {
    let tmp = tempdir().expect("tempdir");
    let logs = tmp.path().join("logs");

    let logger = Logger::builder()
        .name("seva-optional-directory")
        .console(false)
        .init_with_directory(Some(&logs), false)
        .expect("logger should initialize");

    assert!(logger.writes_files());
    assert!(logs.is_dir());
}
