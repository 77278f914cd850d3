//! ChatClient against a one-shot local HTTP server.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use causal_core::errors::CollaboratorError;
use causal_llm::{ChatBackend, ChatClient, ChatRequest};

/// Serve one canned `(status, body)` per connection, returning the raw requests.
fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let mut requests = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            requests.push(read_request(&mut stream));
            let reply = format!(
                "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(reply.as_bytes()).unwrap();
        }
        requests
    });
    (format!("http://{addr}/v1/chat/completions"), handle)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).unwrap();
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        assert!(n > 0, "connection closed before headers ended");
    };
    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .map_or(0, |v| v.trim().parse::<usize>().unwrap());
    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).unwrap();
        assert!(n > 0, "connection closed before body ended");
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

const REPLY: &str = r#"{"choices":[{"message":{"role":"assistant","content":"{\"claims\":[]}"}}]}"#;

fn client(endpoint: &str, max_retries: u32) -> ChatClient {
    ChatClient::new(endpoint, "gpt-test", "test-key")
        .with_max_retries(max_retries)
        .with_timeout(Duration::from_secs(5))
}

#[test]
fn returns_first_choice_content() {
    let (endpoint, server) = serve(vec![(200, REPLY)]);

    let content = client(&endpoint, 0)
        .complete("claim_extractor", &ChatRequest::new("sys", "hello").json())
        .unwrap();

    assert_eq!(content, r#"{"claims":[]}"#);
    let requests = server.join().unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert!(request.starts_with("POST /v1/chat/completions"));
    assert!(request.contains("Bearer test-key"));
    assert!(request.contains(r#""model":"gpt-test""#));
    assert!(request.contains("json_object"));
}

#[test]
fn server_error_is_retried() {
    let (endpoint, server) = serve(vec![(500, "{}"), (200, REPLY)]);

    let content = client(&endpoint, 1)
        .complete("claim_extractor", &ChatRequest::new("sys", "hello"))
        .unwrap();

    assert_eq!(content, r#"{"claims":[]}"#);
    assert_eq!(server.join().unwrap().len(), 2);
}

#[test]
fn exhausted_retries_report_the_last_failure() {
    let (endpoint, server) = serve(vec![(503, "busy"), (503, "busy")]);

    let err = client(&endpoint, 1)
        .complete("risk_assessor", &ChatRequest::new("sys", "hello"))
        .unwrap_err();

    assert!(matches!(err, CollaboratorError::Failed { .. }));
    assert_eq!(err.collaborator(), "risk_assessor");
    assert!(err.to_string().contains("503"));
    assert_eq!(server.join().unwrap().len(), 2);
}

#[test]
fn unusable_body_is_malformed_and_not_retried() {
    let (endpoint, server) = serve(vec![(200, r#"{"choices":[]}"#)]);

    let err = client(&endpoint, 2)
        .complete("question_generator", &ChatRequest::new("sys", "hello"))
        .unwrap_err();

    assert!(matches!(err, CollaboratorError::Malformed { .. }));
    assert_eq!(server.join().unwrap().len(), 1);
}
