use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// A request captured by [`MockService`].
pub struct CapturedRequest {
    pub head: String,
    pub body: String,
}

/// Local prediction service that answers each connection with the next canned reply.
pub struct MockService {
    pub url: String,
    requests: mpsc::Receiver<CapturedRequest>,
}

impl MockService {
    pub fn start(replies: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock service");
        let addr = listener.local_addr().expect("mock service addr");
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for (status, body) in replies {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let _ = stream.set_read_timeout(Some(Duration::from_millis(500)));
                let raw = read_request(&mut stream);
                let (head, body_text) = raw
                    .split_once("\r\n\r\n")
                    .map(|(head, body)| (head.to_string(), body.to_string()))
                    .unwrap_or((raw.clone(), String::new()));
                let _ = tx.send(CapturedRequest {
                    head,
                    body: body_text,
                });
                let response = format!(
                    "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    reason(status),
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        Self {
            url: format!("http://{addr}/predict"),
            requests: rx,
        }
    }

    pub fn next_request(&self) -> CapturedRequest {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("mock service received a request")
    }

    pub fn no_more_requests(&self) -> bool {
        self.requests
            .recv_timeout(Duration::from_millis(100))
            .is_err()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

fn read_request(stream: &mut std::net::TcpStream) -> String {
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while let Ok(read) = stream.read(&mut buf) {
        if read == 0 {
            break;
        }
        request.extend_from_slice(&buf[..read]);
        if request_complete(&request) {
            break;
        }
    }
    String::from_utf8_lossy(&request).into_owned()
}

fn request_complete(request: &[u8]) -> bool {
    let text = String::from_utf8_lossy(request);
    let Some((head, body)) = text.split_once("\r\n\r\n") else {
        return false;
    };
    let length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    body.len() >= length
}
