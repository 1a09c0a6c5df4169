//! End-to-end server tests
//!
//! Real sockets against a server bound to an ephemeral port.

use std::io::{BufReader, Write};
use std::net::{SocketAddr, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use lexd::network::Server;
use lexd::protocol::{read_response, write_request, Request, Response, Status};
use lexd::{Config, Lexicon};

fn spawn_server(store: Arc<Lexicon>) -> (SocketAddr, Arc<AtomicBool>, JoinHandle<()>) {
    let config = Config::builder().listen_addr("127.0.0.1:0").build();
    let mut server = Server::bind(config, store).unwrap();
    let addr = server.local_addr();
    let shutdown = server.shutdown_handle();
    let handle = thread::spawn(move || server.run().unwrap());
    (addr, shutdown, handle)
}

struct TestClient {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
}

impl TestClient {
    fn connect(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).unwrap();
        let reader = BufReader::new(stream.try_clone().unwrap());
        Self { reader, writer: stream }
    }

    fn send(&mut self, request: &Request) -> Response {
        write_request(&mut self.writer, request).unwrap();
        read_response(&mut self.reader).unwrap().unwrap()
    }

    fn send_raw(&mut self, line: &str) -> Response {
        self.writer.write_all(line.as_bytes()).unwrap();
        self.writer.write_all(b"\n").unwrap();
        read_response(&mut self.reader).unwrap().unwrap()
    }
}

#[test]
fn test_add_query_fuzzy_transcript() {
    let store = Arc::new(Lexicon::new());
    let (addr, shutdown, handle) = spawn_server(store);
    let mut client = TestClient::connect(addr);

    let res = client.send_raw(r#"{"type":"add","word":"cat","meanings":["feline","pet"]}"#);
    assert_eq!(res.status, Status::Success);

    let res = client.send_raw(r#"{"type":"query","word":"cat"}"#);
    assert_eq!(res.status, Status::Success);
    assert_eq!(res.data, Some(vec!["feline".to_string(), "pet".to_string()]));

    let res = client.send_raw(r#"{"type":"query","word":"cta"}"#);
    assert_eq!(res.status, Status::Error);
    assert_eq!(res.message, "Word not found.\nSimilar word found: cat");

    shutdown.store(true, Ordering::Relaxed);
    handle.join().unwrap();
}

#[test]
fn test_malformed_line_keeps_connection_open() {
    let store = Arc::new(Lexicon::new());
    store.insert_new("cat", vec!["feline".to_string()]);
    let (addr, shutdown, handle) = spawn_server(store);
    let mut client = TestClient::connect(addr);

    let res = client.send_raw("this is not json");
    assert_eq!(res.status, Status::Error);
    assert_eq!(res.message, "Invalid JSON format.");

    // Same connection still serves well-formed requests
    let res = client.send(&Request::query("cat"));
    assert_eq!(res.status, Status::Success);

    shutdown.store(true, Ordering::Relaxed);
    handle.join().unwrap();
}

#[test]
fn test_requests_on_one_connection_are_ordered() {
    let store = Arc::new(Lexicon::new());
    let (addr, shutdown, handle) = spawn_server(Arc::clone(&store));
    let mut client = TestClient::connect(addr);

    client.send(&Request::add("cat", vec!["feline".to_string()]));
    client.send(&Request::add_meaning("cat", "pet"));
    let res = client.send(&Request::query("cat"));
    assert_eq!(res.data, Some(vec!["feline".to_string(), "pet".to_string()]));

    client.send(&Request::remove("cat"));
    let res = client.send(&Request::query("cat"));
    assert_eq!(res.status, Status::Error);

    shutdown.store(true, Ordering::Relaxed);
    handle.join().unwrap();
}

#[test]
fn test_concurrent_clients_are_independent() {
    let store = Arc::new(Lexicon::new());
    let (addr, shutdown, handle) = spawn_server(Arc::clone(&store));

    let clients: Vec<_> = (0..6)
        .map(|i| {
            thread::spawn(move || {
                let mut client = TestClient::connect(addr);
                let word = format!("word{i}");
                let res = client.send(&Request::add(&word, vec![format!("meaning{i}")]));
                assert_eq!(res.status, Status::Success);
                let res = client.send(&Request::query(&word));
                assert_eq!(res.data, Some(vec![format!("meaning{i}")]));
            })
        })
        .collect();
    for c in clients {
        c.join().unwrap();
    }

    assert_eq!(store.len(), 6);

    shutdown.store(true, Ordering::Relaxed);
    handle.join().unwrap();
}

#[test]
fn test_abrupt_disconnect_does_not_affect_server() {
    let store = Arc::new(Lexicon::new());
    let (addr, shutdown, handle) = spawn_server(Arc::clone(&store));

    {
        // Connect and drop without sending anything
        let _dropped = TcpStream::connect(addr).unwrap();
    }

    let mut client = TestClient::connect(addr);
    let res = client.send(&Request::add("cat", vec!["feline".to_string()]));
    assert_eq!(res.status, Status::Success);

    shutdown.store(true, Ordering::Relaxed);
    handle.join().unwrap();
}
