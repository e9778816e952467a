//! Deployment state machine for one token card.
//!
//! The controller owns the preview, the deployment state, and a generation
//! counter. Every trigger and every text edit advances the generation; an
//! outcome is applied only if it carries the current generation, so a late
//! response from a superseded attempt can never overwrite newer state.

use crate::api::DeployClient;
use crate::config::TokenConfig;
use crate::contract::{build_request, DeployRequest};
use crate::error::DeployError;
use crate::preview::Preview;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Lifecycle of the current deployment attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeploymentState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl DeploymentState {
    /// Label for the deploy action in this state.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Tokenize",
            Self::InFlight => "Tokenizing...",
            Self::Succeeded => "Tokenized",
            Self::Failed => "Tokenization failed",
        }
    }
}

/// A started attempt: the request to send and the generation it belongs to.
#[derive(Debug, Clone)]
pub struct DeployAttempt {
    pub generation: u64,
    pub request: DeployRequest,
}

/// What a trigger did.
#[derive(Debug)]
pub enum Trigger {
    /// Deploy is not allowed or an attempt is already in flight.
    Disabled,
    /// The controller moved to `InFlight`; the caller must send the request.
    Started(DeployAttempt),
    /// The request could not be built; the controller moved to `Failed`.
    Failed,
}

/// What happened to an outcome handed to [`DeploymentController::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied(DeploymentState),
    /// The outcome belonged to a superseded attempt and was dropped.
    Stale,
}

/// Completion message sent by [`spawn_attempt`].
#[derive(Debug)]
pub struct AttemptDone {
    pub generation: u64,
    pub outcome: Result<Value, DeployError>,
}

/// Owns the preview and deployment lifecycle for one token configuration.
pub struct DeploymentController {
    config: TokenConfig,
    deploy_allowed: bool,
    preview: Preview,
    state: DeploymentState,
    generation: u64,
    last_response: Option<Value>,
    last_error: Option<DeployError>,
}

impl DeploymentController {
    /// Mount a controller for `config` with initial `text`.
    ///
    /// Text that would exceed the line cap leaves the preview empty.
    pub fn new(config: TokenConfig, text: &str, deploy_allowed: bool) -> Self {
        let preview = Preview::from_text(text).unwrap_or_default();
        Self {
            config,
            deploy_allowed,
            preview,
            state: DeploymentState::Idle,
            generation: 0,
            last_response: None,
            last_error: None,
        }
    }

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn state(&self) -> DeploymentState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Body returned by the last successful attempt.
    pub fn last_response(&self) -> Option<&Value> {
        self.last_response.as_ref()
    }

    /// Why the last attempt failed, if it did.
    pub fn last_error(&self) -> Option<&DeployError> {
        self.last_error.as_ref()
    }

    pub fn deploy_allowed(&self) -> bool {
        self.deploy_allowed
    }

    pub fn set_deploy_allowed(&mut self, allowed: bool) {
        self.deploy_allowed = allowed;
    }

    /// Apply a text edit.
    ///
    /// Always resets the deployment to `Idle` and supersedes any attempt in
    /// flight. Returns whether the preview was replaced; text over the line
    /// cap keeps the previous preview.
    pub fn set_text(&mut self, text: &str) -> bool {
        self.generation += 1;
        self.state = DeploymentState::Idle;
        self.last_response = None;
        self.last_error = None;
        self.preview.update(text)
    }

    /// True when a trigger would start an attempt.
    pub fn can_trigger(&self) -> bool {
        self.deploy_allowed && self.state != DeploymentState::InFlight
    }

    /// Handle the user's deploy action.
    pub fn trigger(&mut self) -> Trigger {
        if !self.can_trigger() {
            debug!(state = ?self.state, allowed = self.deploy_allowed, "trigger ignored");
            return Trigger::Disabled;
        }

        self.generation += 1;
        self.last_response = None;
        self.last_error = None;

        match build_request(&self.config, self.preview.joined()) {
            Ok(request) => {
                self.state = DeploymentState::InFlight;
                info!(
                    generation = self.generation,
                    contract = request.kind.name(),
                    network = %request.network,
                    "deployment attempt started"
                );
                Trigger::Started(DeployAttempt {
                    generation: self.generation,
                    request,
                })
            }
            Err(err) => {
                warn!(error = %err, "deployment attempt could not start");
                self.state = DeploymentState::Failed;
                self.last_error = Some(err);
                Trigger::Failed
            }
        }
    }

    /// Apply the outcome of the attempt tagged `generation`.
    pub fn resolve(
        &mut self,
        generation: u64,
        outcome: Result<Value, DeployError>,
    ) -> Resolution {
        if generation != self.generation || self.state != DeploymentState::InFlight {
            warn!(
                generation,
                current = self.generation,
                "dropping stale deployment outcome"
            );
            return Resolution::Stale;
        }

        match outcome {
            Ok(body) => {
                info!(generation, response = %body, "tokenization successful");
                self.state = DeploymentState::Succeeded;
                self.last_response = Some(body);
            }
            Err(err) => {
                warn!(generation, error = %err, "tokenization failed");
                self.state = DeploymentState::Failed;
                self.last_error = Some(err);
            }
        }
        Resolution::Applied(self.state)
    }

    /// Trigger, send, and resolve one attempt inline.
    pub async fn deploy(&mut self, client: &dyn DeployClient) -> DeploymentState {
        let attempt = match self.trigger() {
            Trigger::Started(attempt) => attempt,
            Trigger::Disabled | Trigger::Failed => return self.state,
        };
        let outcome = client
            .submit(&attempt.request)
            .await
            .map_err(DeployError::from);
        self.resolve(attempt.generation, outcome);
        self.state
    }
}

/// Run `attempt` on a background task and report through `done_tx`.
///
/// There is no cancellation: a superseded attempt still completes, and the
/// owner drops its outcome in [`DeploymentController::resolve`].
pub fn spawn_attempt(
    client: Arc<dyn DeployClient>,
    attempt: DeployAttempt,
    done_tx: mpsc::UnboundedSender<AttemptDone>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = client
            .submit(&attempt.request)
            .await
            .map_err(DeployError::from);
        // The owner may be gone; nothing left to update then.
        let _ = done_tx.send(AttemptDone {
            generation: attempt.generation,
            outcome,
        });
    })
}
