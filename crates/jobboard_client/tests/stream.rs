use std::sync::{Arc, Mutex, Once};
use std::time::{Duration, Instant};

use futures_util::SinkExt;
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::{accept_async, accept_hdr_async};

use jobboard_client::{NotificationEvent, NotificationStream, StreamError, StreamSettings};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

fn collect_events(stream: &NotificationStream, want: usize) -> Vec<NotificationEvent> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut events = Vec::new();
    while events.len() < want && Instant::now() < deadline {
        match stream.try_recv() {
            Some(event) => events.push(event),
            None => std::thread::sleep(Duration::from_millis(10)),
        }
    }
    events
}

#[test]
fn known_events_are_forwarded_and_unknown_ones_dropped() {
    init_logging();
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let listener = runtime
        .block_on(TcpListener::bind("127.0.0.1:0"))
        .expect("bind");
    let addr = listener.local_addr().expect("addr");

    let server = runtime.spawn(async move {
        let (socket, _) = listener.accept().await.expect("accept");
        let mut ws = accept_async(socket).await.expect("handshake");
        let frames = [
            r#"{"event":"job_created","message":"New job posted","data":{"_id":"42"}}"#,
            r#"{"event":"job_rated","message":"ignored"}"#,
            r#"{"event":"job_updated","message":"Job changed","data":{"_id":"42"}}"#,
            "not json at all",
            r#"{"event":"job_deleted","message":"Job removed"}"#,
        ];
        for frame in frames {
            ws.send(Message::Text(frame.to_string())).await.expect("send");
        }
        ws.close(None).await.ok();
    });

    let stream = NotificationStream::connect(StreamSettings::new(format!("http://{addr}")))
        .expect("connect");

    let events = collect_events(&stream, 3);
    assert_eq!(
        events,
        vec![
            NotificationEvent::JobCreated {
                message: "New job posted".to_string(),
                job_id: "42".to_string(),
            },
            NotificationEvent::JobUpdated {
                message: "Job changed".to_string(),
                job_id: "42".to_string(),
            },
            NotificationEvent::JobDeleted {
                message: "Job removed".to_string(),
            },
        ]
    );

    runtime.block_on(server).expect("server task");
}

#[test]
fn credentials_cookie_is_sent_with_the_handshake() {
    init_logging();
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let listener = runtime
        .block_on(TcpListener::bind("127.0.0.1:0"))
        .expect("bind");
    let addr = listener.local_addr().expect("addr");

    let seen_cookie = Arc::new(Mutex::new(None::<String>));
    let server_cookie = seen_cookie.clone();
    let server = runtime.spawn(async move {
        let (socket, _) = listener.accept().await.expect("accept");
        let callback = move |request: &Request, response: Response| -> Result<Response, ErrorResponse> {
            let cookie = request
                .headers()
                .get("cookie")
                .and_then(|value| value.to_str().ok())
                .map(ToOwned::to_owned);
            *server_cookie.lock().unwrap() = cookie;
            Ok(response)
        };
        let mut ws = accept_hdr_async(socket, callback).await.expect("handshake");
        ws.close(None).await.ok();
    });

    let mut settings = StreamSettings::new(format!("http://{addr}"));
    settings.credentials_cookie = Some("session=sekrit".to_string());
    let _stream = NotificationStream::connect(settings).expect("connect");

    runtime.block_on(server).expect("server task");
    assert_eq!(seen_cookie.lock().unwrap().as_deref(), Some("session=sekrit"));
}

#[test]
fn connect_to_a_dead_host_fails() {
    init_logging();
    let err = NotificationStream::connect(StreamSettings::new("http://127.0.0.1:1")).unwrap_err();
    assert!(matches!(err, StreamError::Connect(_)));
}

#[test]
fn bad_base_url_is_rejected_up_front() {
    init_logging();
    let err = NotificationStream::connect(StreamSettings::new("::nope::")).unwrap_err();
    assert!(matches!(err, StreamError::InvalidUrl(_)));
}
