#![allow(dead_code)]

use std::net::SocketAddr;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use warp::{http::StatusCode, path::FullPath, Filter};

/// What the fake service saw of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub path: String,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

/// Accepts any JSON POST, answers `200 OK` and records it.
pub fn start_recording_service() -> (SocketAddr, UnboundedReceiver<RecordedRequest>) {
    start_service_answering(StatusCode::OK)
}

pub fn start_service_answering(
    status: StatusCode,
) -> (SocketAddr, UnboundedReceiver<RecordedRequest>) {
    let (sender, receiver) = mpsc::unbounded_channel();

    let route = warp::post()
        .and(warp::path::full())
        .and(warp::header::optional::<String>("content-type"))
        .and(warp::body::json())
        .map(
            move |path: FullPath, content_type: Option<String>, body: serde_json::Value| {
                let _ = sender.send(RecordedRequest {
                    path: path.as_str().to_owned(),
                    content_type,
                    body,
                });

                status
            },
        );

    let (address, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    (address, receiver)
}

pub fn base_url(address: SocketAddr) -> String {
    format!("http://{}", address)
}
