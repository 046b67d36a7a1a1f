//! Test support: a scripted [`HttpTransport`] that replays queued
//! responses and records every request it receives.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::transport::{HttpTransport, RawResponse};
use crate::errors::TransportError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

#[derive(Default)]
struct ScriptState {
    responses: VecDeque<Result<RawResponse, TransportError>>,
    requests: Vec<RecordedRequest>,
}

/// Transport double: responses are served in the order they were pushed;
/// running out of script is a test bug and panics.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    state: Arc<Mutex<ScriptState>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with a JSON body.
    pub fn push_json(&self, body: &str, headers: &[(&str, &str)]) {
        self.push_response(200, body.as_bytes().to_vec(), headers);
    }

    pub fn push_response(&self, status: u16, body: Vec<u8>, headers: &[(&str, &str)]) {
        let headers: HashMap<String, String> = headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(Ok(RawResponse {
                status,
                headers,
                body,
            }));
    }

    pub fn push_error(&self, error: TransportError) {
        self.state.lock().unwrap().responses.push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn perform_get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> Result<RawResponse, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(RecordedRequest {
            url: url.to_string(),
            headers: headers.to_vec(),
        });
        match state.responses.pop_front() {
            Some(response) => response,
            None => panic!("no scripted response left for {}", url),
        }
    }
}
