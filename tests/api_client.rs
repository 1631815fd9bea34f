//! `ApiClient` against local sockets: request shape and response handling

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use employee_manager::{ApiClient, ApiError, Employee, EmployeeApi};

/// What the server saw for one request
#[derive(Debug)]
struct Captured {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Captured {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Accept one connection, record the request, answer with `status` and `reply`
fn serve_once(status: &'static str, reply: &'static str) -> (ApiClient, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((k, v)) = line.split_once(':') {
                headers.push((k.trim().to_string(), v.trim().to_string()));
            }
        }

        let length = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
            .map(|(_, v)| v.parse::<usize>().unwrap())
            .unwrap_or(0);
        let mut body = vec![0; length];
        reader.read_exact(&mut body).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reply.len(),
            reply
        )
        .unwrap();
        stream.flush().unwrap();

        Captured {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8(body).unwrap(),
        }
    });

    let client = ApiClient::new(Some(format!("http://127.0.0.1:{}/api/v1", port))).unwrap();
    (client, handle)
}

#[test]
fn list_decodes_json_array() {
    let (client, server) = serve_once(
        "200 OK",
        r#"[{"employeeId":1,"employeeName":"Ann","employeeSalary":50000,"employeeCity":"Reno"}]"#,
    );

    let employees = client.list().unwrap();
    let seen = server.join().unwrap();

    assert_eq!(seen.request_line, "GET /api/v1/employees HTTP/1.1");
    assert_eq!(employees, vec![Employee::new("Ann", 50000.0, "Reno").with_id(1)]);
}

#[test]
fn list_with_malformed_body_is_a_decode_error() {
    let (client, server) = serve_once("200 OK", "not json");

    let result = client.list();
    server.join().unwrap();

    assert!(matches!(result, Err(ApiError::Decode(_))), "{result:?}");
}

#[test]
fn create_posts_json_without_id() {
    let (client, server) = serve_once("201 Created", "{}");

    client.create(&Employee::new("Ann", 50000.0, "Reno")).unwrap();
    let seen = server.join().unwrap();

    assert_eq!(seen.request_line, "POST /api/v1/employees HTTP/1.1");
    assert_eq!(seen.header("content-type"), Some("application/json"));
    assert_eq!(
        seen.json(),
        serde_json::json!({
            "employeeName": "Ann",
            "employeeSalary": 50000.0,
            "employeeCity": "Reno"
        })
    );
}

#[test]
fn update_puts_full_record_by_id() {
    let (client, server) = serve_once("200 OK", "{}");

    client
        .update(7, &Employee::new("Bob", 42000.0, "Elko").with_id(7))
        .unwrap();
    let seen = server.join().unwrap();

    assert_eq!(seen.request_line, "PUT /api/v1/employees/7 HTTP/1.1");
    assert_eq!(seen.header("content-type"), Some("application/json"));
    assert_eq!(seen.json()["employeeId"], 7);
    assert_eq!(seen.json()["employeeName"], "Bob");
}

#[test]
fn delete_addresses_item_without_body() {
    let (client, server) = serve_once("200 OK", "");

    client.delete(3).unwrap();
    let seen = server.join().unwrap();

    assert_eq!(seen.request_line, "DELETE /api/v1/employees/3 HTTP/1.1");
    assert!(seen.body.is_empty());
}

#[test]
fn non_success_status_is_reported_with_body() {
    let (client, server) = serve_once("500 Internal Server Error", "oops");

    let result = client.update(7, &Employee::new("Bob", 1.0, "Elko").with_id(7));
    server.join().unwrap();

    match result {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "oops");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let client = ApiClient::new(Some(format!("http://127.0.0.1:{}/api/v1", port))).unwrap();

    assert!(matches!(client.list(), Err(ApiError::Transport(_))));
    assert!(matches!(
        client.create(&Employee::new("Ann", 1.0, "Reno")),
        Err(ApiError::Transport(_))
    ));
    assert!(matches!(client.delete(1), Err(ApiError::Transport(_))));
}
