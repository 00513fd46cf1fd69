//! End-to-end pipeline runs against a one-shot local HTTP stub.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use ticker_common::pipeline;
use ticker_common::{BitflyerClient, Config, Currency, MenuDocument, Outcome};

/// Serves exactly one response, then returns the request head it saw.
fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&head).into_owned()
    });

    (base_url, handle)
}

fn client(base_url: &str) -> BitflyerClient {
    let mut config = Config::with_base_url(base_url);
    config.timeout = Duration::from_secs(5);
    BitflyerClient::new(&config)
}

fn single_title(outcome: &Outcome) -> String {
    let json = outcome.to_document("./icon.png").to_json_line().unwrap();
    let doc: MenuDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(doc.items.len(), 1);
    doc.items[0].title.clone()
}

#[test]
fn successful_ticker_renders_prices() {
    let (base_url, server) = serve_once("200 OK", r#"{"best_bid": 1000000, "best_ask": 1000500}"#);
    let outcome = pipeline::run(&client(&base_url), Some("jpy"));

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /v1/ticker?product_code=BTC_JPY HTTP/1.1\r\n"));

    assert_eq!(
        outcome,
        Outcome::Price {
            bid: 1_000_000.0,
            ask: 1_000_500.0,
            currency: Currency::JPY,
        }
    );
    let item = outcome.to_item("./icon.png");
    assert_eq!(item.title, "Bitcoin Ask on bitFlyer: 1,000,500 JPY");
    assert_eq!(item.subtitle, "Bitcoin Bid on bitFlyer: 1,000,000 JPY");
    assert_eq!(item.arg, item.title);
}

#[test]
fn server_error_reports_status() {
    let (base_url, server) = serve_once("500 Internal Server Error", "");
    let outcome = pipeline::run(&client(&base_url), Some("USD"));
    server.join().unwrap();

    let title = single_title(&outcome);
    assert!(title.starts_with("Error: "));
    assert!(title.contains("500"));
    assert_eq!(
        title,
        "Error: Response status error(500): 500 Internal Server Error"
    );
}

#[test]
fn not_found_reports_status() {
    let (base_url, server) = serve_once("404 Not Found", r#"{"status":-1}"#);
    let outcome = pipeline::run(&client(&base_url), Some("usd"));
    server.join().unwrap();

    assert!(single_title(&outcome).contains("404"));
}

#[test]
fn null_bid_renders_as_zero() {
    let (base_url, server) = serve_once("200 OK", r#"{"best_bid": null, "best_ask": 1000500}"#);
    let outcome = pipeline::run(&client(&base_url), Some("JPY"));
    server.join().unwrap();

    let item = outcome.to_item("./icon.png");
    assert_eq!(item.title, "Bitcoin Ask on bitFlyer: 1,000,500 JPY");
    assert_eq!(item.subtitle, "Bitcoin Bid on bitFlyer: 0 JPY");
}

#[test]
fn garbage_body_reports_decode_failure() {
    let (base_url, server) = serve_once("200 OK", "<html>maintenance</html>");
    let outcome = pipeline::run(&client(&base_url), Some("JPY"));
    server.join().unwrap();

    let expected = serde_json::from_str::<serde_json::Value>("<html>maintenance</html>")
        .unwrap_err()
        .to_string();
    assert_eq!(single_title(&outcome), format!("Error: {}", expected));
}

#[test]
fn connection_refused_reports_transport_failure() {
    // Bind then drop to get a port nobody listens on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let base_url = format!("http://127.0.0.1:{}", port);
    let outcome = pipeline::run(&client(&base_url), Some("JPY"));

    let transport = ureq::get(&format!("{}/v1/ticker?product_code=BTC_JPY", base_url))
        .call()
        .unwrap_err()
        .to_string();
    assert!(transport.to_lowercase().contains("refused"), "{}", transport);
    assert_eq!(
        outcome,
        Outcome::Error {
            message: transport.clone()
        }
    );
    assert_eq!(single_title(&outcome), format!("Error: {}", transport));
}

#[test]
fn invalid_currency_never_connects() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let outcome = pipeline::run(&client(&base_url), Some("eur"));

    assert_eq!(single_title(&outcome), "Please enter `USD` or `JPY`");
    assert!(listener.accept().is_err());
}
