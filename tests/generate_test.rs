use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Serve a fixed JSON body for every request on a local ephemeral port.
fn spawn_mock_endpoint(body: &'static str) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("Failed to bind mock endpoint");
    let addr = server
        .server_addr()
        .to_ip()
        .expect("Mock endpoint has no IP address");
    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let header =
                tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .expect("Failed to build header");
            let response = tiny_http::Response::from_string(body).with_header(header);
            let _ = request.respond(response);
        }
    });
    format!("http://{}/api/generate", addr)
}

#[test]
fn test_generate_command_populates_deck() {
    let endpoint = spawn_mock_endpoint(
        r#"{"ok":true,"title":"SmartPitch Startup","tagline":"Make childcare simple.","slides":[{"title":"Problem","content":"Busy parents lack trusted sitters."}]}"#,
    );
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let deck_path = temp_dir.path().join("deck.json");

    let output = run_command(&[
        "generate",
        "-p",
        "childcare app",
        "--endpoint",
        &endpoint,
        "-d",
        deck_path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SmartPitch Startup"));
    assert!(stdout.contains("Problem"));

    let content = fs::read_to_string(&deck_path).expect("Deck file was not written");
    assert!(content.contains("Busy parents lack trusted sitters."));
}

#[test]
fn test_generate_command_exports_both_formats() {
    let endpoint = spawn_mock_endpoint(
        r#"{"ok":true,"title":"SmartPitch Startup","slides":[{"title":"Problem","content":"Busy parents lack trusted sitters."}]}"#,
    );
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let deck_path = temp_dir.path().join("deck.json");

    let output = run_command(&[
        "generate",
        "-p",
        "childcare app",
        "--endpoint",
        &endpoint,
        "-d",
        deck_path.to_str().unwrap(),
        "--export",
        "pptx,pdf",
        "--output-dir",
        temp_dir.path().to_str().unwrap(),
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(
        temp_dir.path().join("SmartPitch_Startup.pptx").exists(),
        "PPTX file was not created"
    );
    assert!(
        temp_dir.path().join("SmartPitch_Startup.pdf").exists(),
        "PDF file was not created"
    );
}

#[test]
fn test_generate_command_preserves_title_when_response_omits_it() {
    let endpoint = spawn_mock_endpoint(
        r#"{"ok":true,"slides":[{"title":"Problem","content":"Busy parents lack trusted sitters."}]}"#,
    );
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let deck_path = temp_dir.path().join("deck.json");
    fs::write(
        &deck_path,
        r#"{ "title": "My Edited Title", "tagline": "Kept", "slides": [] }"#,
    )
    .expect("Failed to write deck file");

    let output = run_command(&[
        "generate",
        "-p",
        "childcare app",
        "--endpoint",
        &endpoint,
        "-d",
        deck_path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let content = fs::read_to_string(&deck_path).expect("Deck file was not written");
    assert!(
        content.contains("My Edited Title"),
        "Title edit should survive a regeneration that omits the title"
    );
    assert!(content.contains("Busy parents lack trusted sitters."));
}

#[test]
fn test_generate_command_reports_server_rejection() {
    let endpoint = spawn_mock_endpoint(r#"{"ok":false,"error":"rate limited"}"#);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let deck_path = temp_dir.path().join("deck.json");

    let output = run_command(&[
        "generate",
        "-p",
        "childcare app",
        "--endpoint",
        &endpoint,
        "-d",
        deck_path.to_str().unwrap(),
    ]);
    assert!(
        !output.status.success(),
        "A rejected generation must exit non-zero"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("rate limited"),
        "Expected server message in stderr, got: {}",
        stderr
    );
    // The deck is left unchanged, so the session file is never written
    assert!(!deck_path.exists(), "Deck file must not be written on failure");
}

#[test]
fn test_generate_command_transport_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let deck_path = temp_dir.path().join("deck.json");

    // Nothing listens on port 1
    let output = run_command(&[
        "generate",
        "-p",
        "childcare app",
        "--endpoint",
        "http://127.0.0.1:1/api/generate",
        "-d",
        deck_path.to_str().unwrap(),
    ]);
    assert!(
        !output.status.success(),
        "A transport failure must exit non-zero"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to reach generation endpoint"),
        "Expected transport failure message in stderr, got: {}",
        stderr
    );
}
