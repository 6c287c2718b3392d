//! Test gateways — mock `ModerationGateway` implementations for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use griot_core::dto::PublicationRequestDto;
use griot_core::error::GatewayError;
use griot_core::gateway::ModerationGateway;
use tokio::sync::oneshot;

/// A call received by a mock moderation gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationCall {
    /// `list_requests`.
    List,
    /// `validate_request(id)`.
    Validate(i64),
    /// `reject_request(id, comment)`.
    Reject(i64, String),
}

impl ModerationCall {
    /// Whether the call is a remote command (validate or reject).
    #[must_use]
    pub fn is_command(&self) -> bool {
        !matches!(self, Self::List)
    }
}

/// A moderation gateway that records every call. Listing returns the
/// configured requests; commands succeed unless told to fail.
#[derive(Debug)]
pub struct RecordingModerationGateway {
    requests: Mutex<Vec<PublicationRequestDto>>,
    list_failure: Mutex<Option<GatewayError>>,
    command_failure: Mutex<Option<GatewayError>>,
    calls: Mutex<Vec<ModerationCall>>,
}

impl RecordingModerationGateway {
    /// Create a gateway that lists `requests`.
    #[must_use]
    pub fn new(requests: Vec<PublicationRequestDto>) -> Self {
        Self {
            requests: Mutex::new(requests),
            list_failure: Mutex::new(None),
            command_failure: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make every subsequent `list_requests` fail with `error`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn fail_listing(&self, error: GatewayError) {
        *self.list_failure.lock().unwrap() = Some(error);
    }

    /// Make every subsequent command fail with `error`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn fail_commands(&self, error: GatewayError) {
        *self.command_failure.lock().unwrap() = Some(error);
    }

    /// Clear configured failures.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn recover(&self) {
        *self.list_failure.lock().unwrap() = None;
        *self.command_failure.lock().unwrap() = None;
    }

    /// Returns a snapshot of all calls received, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<ModerationCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of remote commands (validate or reject) received.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn command_count(&self) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| c.is_command()).count()
    }

    fn command_outcome(&self, call: ModerationCall) -> Result<String, GatewayError> {
        self.calls.lock().unwrap().push(call);
        match self.command_failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok("ok".to_owned()),
        }
    }
}

#[async_trait]
impl ModerationGateway for RecordingModerationGateway {
    async fn list_requests(&self) -> Result<Vec<PublicationRequestDto>, GatewayError> {
        self.calls.lock().unwrap().push(ModerationCall::List);
        match self.list_failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(self.requests.lock().unwrap().clone()),
        }
    }

    async fn validate_request(&self, request_id: i64) -> Result<String, GatewayError> {
        self.command_outcome(ModerationCall::Validate(request_id))
    }

    async fn reject_request(
        &self,
        request_id: i64,
        comment: &str,
    ) -> Result<String, GatewayError> {
        self.command_outcome(ModerationCall::Reject(request_id, comment.to_owned()))
    }
}

/// A moderation gateway that always returns a transport error.
#[derive(Debug)]
pub struct FailingModerationGateway;

#[async_trait]
impl ModerationGateway for FailingModerationGateway {
    async fn list_requests(&self) -> Result<Vec<PublicationRequestDto>, GatewayError> {
        Err(GatewayError::Transport("connection refused".into()))
    }

    async fn validate_request(&self, _request_id: i64) -> Result<String, GatewayError> {
        Err(GatewayError::Transport("connection refused".into()))
    }

    async fn reject_request(
        &self,
        _request_id: i64,
        _comment: &str,
    ) -> Result<String, GatewayError> {
        Err(GatewayError::Transport("connection refused".into()))
    }
}

/// A moderation gateway whose commands wait for a release signal.
///
/// Each call to [`GatedModerationGateway::gate`] arms one pending command
/// slot; commands take slots in the order they are issued and complete
/// once the matching sender fires (or is dropped). Lets a test decide in
/// which order concurrent commands resolve.
#[derive(Debug)]
pub struct GatedModerationGateway {
    requests: Vec<PublicationRequestDto>,
    gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    calls: Mutex<Vec<ModerationCall>>,
}

impl GatedModerationGateway {
    /// Create a gateway that lists `requests`.
    #[must_use]
    pub fn new(requests: Vec<PublicationRequestDto>) -> Self {
        Self {
            requests,
            gates: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Arms the next command slot and returns its release handle.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn gate(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    /// Returns a snapshot of all calls received, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<ModerationCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn wait_for_release(&self, call: ModerationCall) -> Result<String, GatewayError> {
        self.calls.lock().unwrap().push(call);
        let gate = self.gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok("ok".to_owned())
    }
}

#[async_trait]
impl ModerationGateway for GatedModerationGateway {
    async fn list_requests(&self) -> Result<Vec<PublicationRequestDto>, GatewayError> {
        self.calls.lock().unwrap().push(ModerationCall::List);
        Ok(self.requests.clone())
    }

    async fn validate_request(&self, request_id: i64) -> Result<String, GatewayError> {
        self.wait_for_release(ModerationCall::Validate(request_id)).await
    }

    async fn reject_request(
        &self,
        request_id: i64,
        comment: &str,
    ) -> Result<String, GatewayError> {
        self.wait_for_release(ModerationCall::Reject(request_id, comment.to_owned()))
            .await
    }
}
