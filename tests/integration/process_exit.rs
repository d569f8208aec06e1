use std::process::{Command, Stdio};

use crate::common::{fixture, BINARY_PATH};

#[test]
fn malformed_metadata_exits_with_failure() {
    let output = Command::new(BINARY_PATH)
        .current_dir(fixture(""))
        .env(
            "MHERB_CONFIG_PATH",
            fixture("tests/fixtures/config_malformed_metadata.toml"),
        )
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("process should start");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        output.status.code(),
        Some(1),
        "fatal exit code (1) expected, stderr: {stderr}"
    );
    assert!(stderr.contains("Fatal error:"), "stderr: {stderr}");
    assert!(stderr.contains("metadata_malformed.json"), "stderr: {stderr}");
    assert!(
        !stderr.contains("Starting MCP Server"),
        "banner must not be logged when creation fails: {stderr}"
    );
}

#[test]
fn help_exits_successfully() {
    let status = Command::new(BINARY_PATH)
        .arg("--help")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("process should start");

    assert!(status.success(), "--help should exit 0: {status:?}");
}

#[test]
fn unexpected_arguments_are_rejected() {
    let status = Command::new(BINARY_PATH)
        .arg("--port=9000")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("process should start");

    assert_eq!(status.code(), Some(2), "clap usage error expected");
}

#[cfg(unix)]
#[test]
fn interrupt_during_server_creation_stops_cleanly() {
    use std::{
        ffi::CString,
        fs,
        io::{self, BufRead, BufReader},
        os::unix::ffi::OsStrExt,
        sync::mpsc,
        thread,
        time::{Duration, Instant},
    };

    let dir = tempfile::tempdir().expect("tempdir");
    // Opening a FIFO with no writer blocks, so creation stalls on the metadata read.
    let fifo = dir.path().join("metadata.fifo");
    let fifo_path = CString::new(fifo.as_os_str().as_bytes()).expect("fifo path");
    // SAFETY: `fifo_path` is a valid NUL-terminated string for the duration of the call.
    let rc = unsafe { libc::mkfifo(fifo_path.as_ptr(), 0o600) };
    assert_eq!(rc, 0, "mkfifo failed: {}", io::Error::last_os_error());

    let config_path = dir.path().join("mherb.toml");
    fs::write(
        &config_path,
        format!("[storage]\nmetadata_path = \"{}\"\n", fifo.display()),
    )
    .expect("write config");

    let mut child = Command::new(BINARY_PATH)
        .current_dir(dir.path())
        .env("MHERB_CONFIG_PATH", &config_path)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .expect("process should start");

    let stderr = child.stderr.take().expect("piped stderr");
    let (lines_tx, lines_rx) = mpsc::channel();
    thread::spawn(move || {
        for line in BufReader::new(stderr).lines().map_while(Result::ok) {
            if lines_tx.send(line).is_err() {
                break;
            }
        }
    });

    let deadline = Instant::now() + Duration::from_secs(30);
    let mut seen = Vec::new();
    while !seen
        .iter()
        .any(|line: &String| line.contains("Configuration file loaded successfully"))
    {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match lines_rx.recv_timeout(remaining) {
            Ok(line) => seen.push(line),
            Err(err) => {
                let _ = child.kill();
                panic!("server never reached creation ({err}); stderr: {seen:#?}");
            }
        }
    }

    let pid = libc::pid_t::try_from(child.id()).expect("pid fits pid_t");
    // SAFETY: `pid` is our own child, which has not been reaped yet.
    let rc = unsafe { libc::kill(pid, libc::SIGINT) };
    assert_eq!(rc, 0, "kill failed: {}", io::Error::last_os_error());

    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match lines_rx.recv_timeout(remaining) {
            Ok(line) => seen.push(line),
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                let _ = child.kill();
                panic!("server did not stop after SIGINT; stderr: {seen:#?}");
            }
        }
    }

    let status = child.wait().expect("wait for child");
    let stderr = seen.join("\n");
    assert_eq!(status.code(), Some(0), "clean stop expected, stderr: {stderr}");
    assert_eq!(
        stderr.matches("Server stopped by user").count(),
        1,
        "stderr: {stderr}"
    );
    assert!(stderr.contains("Server shutdown complete"), "stderr: {stderr}");
    assert!(!stderr.contains("Fatal error"), "stderr: {stderr}");
    assert!(!stderr.contains(" ERROR "), "stderr: {stderr}");
}
