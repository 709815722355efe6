//! Web backend client
//!
//! Each request runs as a `spawn_local` future over the browser's fetch;
//! answers land in a shared buffer the page drains once per frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::api::{perform, ApiEvent, ApiRequest};

/// Shared answer buffer — request futures push, the page drains in
/// `update()`.
pub type EventBuffer = Rc<RefCell<VecDeque<ApiEvent>>>;

/// WASM API client.
pub struct WasmApiClient {
    client: reqwest::Client,
    base: String,
    events: EventBuffer,
}

impl WasmApiClient {
    pub fn connect(base: &str, events: EventBuffer) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
            events,
        }
    }

    /// Fire a request; its answer shows up in the event buffer.
    pub fn submit(&self, request: ApiRequest) {
        let client = self.client.clone();
        let base = self.base.clone();
        let events = self.events.clone();
        spawn_local(async move {
            let event = match perform(&client, &base, request).await {
                Ok(event) => event,
                Err(e) => {
                    warn!(error = %e, "Backend request failed");
                    ApiEvent::Failed(e)
                }
            };
            events.borrow_mut().push_back(event);
        });
    }
}
