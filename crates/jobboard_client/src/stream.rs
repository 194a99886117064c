use std::sync::mpsc;
use std::thread;

use board_logging::{board_debug, board_info, board_warn};
use futures_util::StreamExt;
use serde::Deserialize;
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::COOKIE;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

/// Path of the backend's notification WebSocket endpoint.
const STREAM_PATH: &str = "/ws";

#[derive(Debug, Clone)]
pub struct StreamSettings {
    /// HTTP(S) origin of the backend; converted to ws(s) for the stream.
    pub base_url: String,
    /// Session cookie attached to the handshake, when the connection is
    /// credentialed.
    pub credentials_cookie: Option<String>,
}

impl StreamSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials_cookie: None,
        }
    }
}

/// One live event as forwarded to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    JobCreated { message: String, job_id: String },
    JobUpdated { message: String, job_id: String },
    JobDeleted { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    #[error("invalid stream url: {0}")]
    InvalidUrl(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("stream not connected")]
    NotConnected,
}

/// An explicitly constructed notification connection.
///
/// The caller owns the lifecycle: `connect` blocks until the WebSocket
/// handshake succeeds or fails, events are polled with `try_recv`, and
/// dropping the stream closes the connection. There is no reconnect,
/// dedup, or ordering guarantee beyond what the transport provides.
#[derive(Debug)]
pub struct NotificationStream {
    event_rx: mpsc::Receiver<NotificationEvent>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl NotificationStream {
    pub fn connect(settings: StreamSettings) -> Result<Self, StreamError> {
        let request = build_request(&settings)?;
        let (event_tx, event_rx) = mpsc::channel();
        let (ready_tx, ready_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    let _ = ready_tx.send(Err(StreamError::Connect(err.to_string())));
                    return;
                }
            };
            runtime.block_on(async move {
                match connect_async(request).await {
                    Ok((socket, _response)) => {
                        board_info!("notification stream connected");
                        let _ = ready_tx.send(Ok(()));
                        read_loop(socket, event_tx, shutdown_rx).await;
                    }
                    Err(err) => {
                        let _ = ready_tx.send(Err(StreamError::Connect(err.to_string())));
                    }
                }
            });
        });

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self {
                event_rx,
                shutdown_tx: Some(shutdown_tx),
            }),
            Ok(Err(err)) => Err(err),
            Err(_) => Err(StreamError::NotConnected),
        }
    }

    /// Next pending event, if any. Returns `None` once the connection has
    /// closed and the channel drained.
    pub fn try_recv(&self) -> Option<NotificationEvent> {
        self.event_rx.try_recv().ok()
    }
}

impl Drop for NotificationStream {
    fn drop(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
    }
}

fn build_request(
    settings: &StreamSettings,
) -> Result<tokio_tungstenite::tungstenite::handshake::client::Request, StreamError> {
    let mut url = url::Url::parse(&settings.base_url)
        .map_err(|err| StreamError::InvalidUrl(err.to_string()))?;
    let scheme = match url.scheme() {
        "https" | "wss" => "wss",
        _ => "ws",
    };
    url.set_scheme(scheme)
        .map_err(|()| StreamError::InvalidUrl(settings.base_url.clone()))?;
    url.set_path(STREAM_PATH);

    let mut request = url
        .as_str()
        .into_client_request()
        .map_err(|err| StreamError::InvalidUrl(err.to_string()))?;
    if let Some(cookie) = &settings.credentials_cookie {
        let value = HeaderValue::from_str(cookie)
            .map_err(|err| StreamError::InvalidUrl(err.to_string()))?;
        request.headers_mut().insert(COOKIE, value);
    }
    Ok(request)
}

async fn read_loop(
    mut socket: WebSocketStream<MaybeTlsStream<TcpStream>>,
    event_tx: mpsc::Sender<NotificationEvent>,
    mut shutdown_rx: oneshot::Receiver<()>,
) {
    loop {
        tokio::select! {
            _ = &mut shutdown_rx => {
                let _ = socket.close(None).await;
                board_info!("notification stream closed by owner");
                return;
            }
            frame = socket.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    if let Some(event) = parse_frame(text.as_str()) {
                        if event_tx.send(event).is_err() {
                            return;
                        }
                    }
                }
                Some(Ok(Message::Close(_))) | None => {
                    board_info!("notification stream closed by server");
                    return;
                }
                Some(Ok(other)) => {
                    board_debug!("ignoring non-text frame: {:?}", other);
                }
                Some(Err(err)) => {
                    board_warn!("notification stream error: {}", err);
                    return;
                }
            }
        }
    }
}

#[derive(Deserialize)]
struct WireFrame {
    event: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<WireData>,
}

#[derive(Deserialize)]
struct WireData {
    #[serde(rename = "_id")]
    id: Option<String>,
}

/// Decodes one text frame into a known event; unknown event names and
/// malformed frames are dropped.
fn parse_frame(text: &str) -> Option<NotificationEvent> {
    let frame: WireFrame = serde_json::from_str(text).ok()?;
    match frame.event.as_str() {
        "job_created" => Some(NotificationEvent::JobCreated {
            message: frame.message,
            job_id: frame.data?.id?,
        }),
        "job_updated" => Some(NotificationEvent::JobUpdated {
            message: frame.message,
            job_id: frame.data?.id?,
        }),
        "job_deleted" => Some(NotificationEvent::JobDeleted {
            message: frame.message,
        }),
        _ => {
            board_debug!("ignoring unknown event: {}", frame.event);
            None
        }
    }
}
