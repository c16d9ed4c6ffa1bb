#![cfg(feature = "api")]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use serde_json::Value;

const SESSION_KEYS: &[&str] = &["id", "inputs", "devices", "evaluation", "autarky_display"];

struct ChildGuard {
    child: Child,
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[test]
fn served_sessions_round_trip_over_http() {
    let port = allocate_port();
    let addr = format!("127.0.0.1:{port}");
    let _child = spawn_api_process(port);

    wait_for_server(&addr, Duration::from_secs(8));

    let (status, body) = http(&addr, "POST", "/sessions?preset=off_grid_south", None)
        .expect("create request should succeed");
    assert_eq!(status, 201);
    let created: Value = serde_json::from_str(&body).expect("create body should be JSON");
    let id = created
        .get("id")
        .and_then(Value::as_u64)
        .expect("id should be a number");

    let (status, body) =
        http(&addr, "GET", &format!("/sessions/{id}"), None).expect("get should succeed");
    assert_eq!(status, 200);
    let session: Value = serde_json::from_str(&body).expect("session body should be JSON");
    let obj = session.as_object().expect("session should be an object");
    for key in SESSION_KEYS {
        assert!(obj.contains_key(*key), "missing key: {key}");
    }
    assert_eq!(obj["devices"].as_array().map(Vec::len), Some(6));

    let (status, _) = http(
        &addr,
        "POST",
        &format!("/sessions/{id}/devices"),
        Some(r#"{"name":"Kettle","power_watts":-5.0,"hours_per_day":0.1}"#),
    )
    .expect("add request should succeed");
    assert_eq!(status, 400);

    let (status, body) = http(&addr, "DELETE", &format!("/sessions/{id}/devices"), None)
        .expect("clear request should succeed");
    assert_eq!(status, 200);
    let cleared: Value = serde_json::from_str(&body).expect("clear body should be JSON");
    assert_eq!(
        cleared.get("autarky_display").and_then(Value::as_str),
        Some("–")
    );

    let (status, _) =
        http(&addr, "DELETE", &format!("/sessions/{id}"), None).expect("end should succeed");
    assert_eq!(status, 204);
    let (status, _) =
        http(&addr, "GET", &format!("/sessions/{id}"), None).expect("get should succeed");
    assert_eq!(status, 404);
}

fn allocate_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("ephemeral port bind should succeed");
    let port = listener
        .local_addr()
        .expect("local_addr should be available")
        .port();
    drop(listener);
    port
}

fn spawn_api_process(port: u16) -> ChildGuard {
    let child = Command::new(env!("CARGO_BIN_EXE_van-werkstatt"))
        .args(["--serve", "--port", &port.to_string()])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("van-werkstatt process should spawn");

    ChildGuard { child }
}

fn wait_for_server(addr: &str, timeout: Duration) {
    let start = Instant::now();
    loop {
        if let Ok((status, _)) = http(addr, "GET", "/catalog/sun-hours", None) {
            if status == 200 {
                return;
            }
        }

        if start.elapsed() >= timeout {
            panic!("timed out waiting for API server on {addr}");
        }

        thread::sleep(Duration::from_millis(50));
    }
}

fn http(addr: &str, method: &str, path: &str, json: Option<&str>) -> Result<(u16, String), String> {
    let mut stream = TcpStream::connect(addr).map_err(|err| format!("connect: {err}"))?;
    let body = json.unwrap_or("");
    let content_type = if json.is_some() {
        "Content-Type: application/json\r\n"
    } else {
        ""
    };
    let request = format!(
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n{content_type}Content-Length: {}\r\n\r\n{body}",
        body.len()
    );
    stream
        .write_all(request.as_bytes())
        .map_err(|err| format!("write: {err}"))?;

    let mut raw = String::new();
    stream
        .read_to_string(&mut raw)
        .map_err(|err| format!("read: {err}"))?;

    let (head, body) = raw
        .split_once("\r\n\r\n")
        .ok_or_else(|| "invalid HTTP response".to_string())?;
    let status_line = head
        .lines()
        .next()
        .ok_or_else(|| "missing status line".to_string())?;
    let status_code = status_line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| "missing status code".to_string())?
        .parse::<u16>()
        .map_err(|err| format!("invalid status code: {err}"))?;

    Ok((status_code, body.to_string()))
}
