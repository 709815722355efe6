//! Native backend client
//!
//! Runs reqwest on a background thread that owns its own tokio runtime;
//! the page submits requests and drains answers over std channels, so
//! the UI thread never blocks on the network.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{error, info, warn};

use crate::api::{perform, ApiEvent, ApiRequest};

/// Native API client backed by a request/answer channel pair.
pub struct NativeApiClient {
    tx: Sender<ApiRequest>,
    /// Receiver for finished requests, drained once per frame.
    pub rx: Receiver<ApiEvent>,
}

impl NativeApiClient {
    /// Spawn the background worker against `base`.
    pub fn connect(base: &str) -> Self {
        let (tx, request_rx) = mpsc::channel::<ApiRequest>();
        let (event_tx, rx) = mpsc::channel::<ApiEvent>();

        let base = base.trim_end_matches('/').to_string();
        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    error!(error = %e, "Failed to create tokio runtime");
                    return;
                }
            };
            rt.block_on(async move {
                info!(base = %base, "Backend client ready");
                let client = reqwest::Client::new();
                // Requests run one at a time; the page only ever has a
                // single request in flight.
                while let Ok(request) = request_rx.recv() {
                    let event = match perform(&client, &base, request).await {
                        Ok(event) => event,
                        Err(e) => {
                            warn!(error = %e, "Backend request failed");
                            ApiEvent::Failed(e)
                        }
                    };
                    if event_tx.send(event).is_err() {
                        // Receiver dropped, exit
                        break;
                    }
                }
            });
        });

        Self { tx, rx }
    }

    /// Queue a request for the background worker.
    pub fn submit(&self, request: ApiRequest) {
        if self.tx.send(request).is_err() {
            warn!("Backend worker is gone, dropping request");
        }
    }
}
