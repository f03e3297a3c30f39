//! Secondary credential collection for high-risk mutations.
//!
//! A caller about to delete a user or change admin rights asks the
//! [`ElevationGate`] for a credential and suspends. Whatever owns the UI
//! drains [`ElevationPrompts`], shows the dialog, and answers the prompt.
//! The exchange is one-shot in both directions, so a credential can never
//! outlive the single mutation it authorizes and a stale dialog can never
//! answer a later request.

use pharmadesk_session::AdminPassword;
use tokio::sync::{mpsc, oneshot};

const PROMPT_QUEUE_DEPTH: usize = 8;

/// What the user decided at the prompt.
#[derive(Debug)]
pub enum ElevationOutcome {
    /// The user confirmed; the credential moves to the caller.
    Submitted(AdminPassword),
    /// The user dismissed the dialog. The mutation must not proceed.
    Cancelled,
}

/// One pending credential request, held by the dialog while it is open.
///
/// Dropping an unanswered prompt counts as cancellation, so a dialog torn
/// down mid-interaction never leaves its caller suspended.
pub struct ElevationPrompt {
    action: String,
    reply: oneshot::Sender<AdminPassword>,
}

impl ElevationPrompt {
    /// Human-readable description of the mutation awaiting authorization,
    /// for display in the dialog.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Hand the entered credential back to the caller.
    pub fn submit(self, password: AdminPassword) {
        // A failed send means the caller already gave up; the credential
        // is dropped here either way.
        let _ = self.reply.send(password);
    }

    /// Dismiss without a credential.
    pub fn cancel(self) {
        drop(self.reply);
    }
}

/// Caller-side handle for requesting elevation.
#[derive(Clone)]
pub struct ElevationGate {
    prompts: mpsc::Sender<ElevationPrompt>,
}

impl ElevationGate {
    /// Create a gate and the prompt stream its dialogs are served from.
    #[must_use]
    pub fn new() -> (Self, ElevationPrompts) {
        let (tx, rx) = mpsc::channel(PROMPT_QUEUE_DEPTH);
        (Self { prompts: tx }, ElevationPrompts { inner: rx })
    }

    /// Ask the user to authorize `action` and wait for the decision.
    ///
    /// Resolves to [`ElevationOutcome::Cancelled`] when the prompt is
    /// dismissed, dropped, or no dialog host is listening at all; silence
    /// is never treated as consent.
    pub async fn request(&self, action: impl Into<String>) -> ElevationOutcome {
        let (reply_tx, reply_rx) = oneshot::channel();
        let prompt = ElevationPrompt {
            action: action.into(),
            reply: reply_tx,
        };

        if self.prompts.send(prompt).await.is_err() {
            tracing::warn!("no elevation prompt host, refusing");
            return ElevationOutcome::Cancelled;
        }

        match reply_rx.await {
            Ok(password) => ElevationOutcome::Submitted(password),
            Err(_) => ElevationOutcome::Cancelled,
        }
    }
}

/// Dialog-host side of the gate: a stream of pending prompts.
pub struct ElevationPrompts {
    inner: mpsc::Receiver<ElevationPrompt>,
}

impl ElevationPrompts {
    /// Wait for the next credential request. `None` once every gate handle
    /// is gone.
    pub async fn next(&mut self) -> Option<ElevationPrompt> {
        self.inner.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn submitted_credential_reaches_the_caller() {
        let (gate, mut prompts) = ElevationGate::new();

        let host = tokio::spawn(async move {
            let prompt = prompts.next().await.expect("prompt");
            assert_eq!(prompt.action(), "delete user jane");
            prompt.submit(AdminPassword::new("adminpw"));
        });

        let outcome = gate.request("delete user jane").await;
        host.await.unwrap();

        match outcome {
            ElevationOutcome::Submitted(password) => {
                assert_eq!(password.into_inner(), "adminpw");
            }
            ElevationOutcome::Cancelled => panic!("expected a credential"),
        }
    }

    #[tokio::test]
    async fn cancelled_prompt_yields_no_credential() {
        let (gate, mut prompts) = ElevationGate::new();

        let host = tokio::spawn(async move {
            prompts.next().await.expect("prompt").cancel();
        });

        let outcome = gate.request("delete user jane").await;
        host.await.unwrap();
        assert!(matches!(outcome, ElevationOutcome::Cancelled));
    }

    #[tokio::test]
    async fn dropped_prompt_counts_as_cancellation() {
        let (gate, mut prompts) = ElevationGate::new();

        let host = tokio::spawn(async move {
            drop(prompts.next().await.expect("prompt"));
        });

        let outcome = gate.request("change admin rights").await;
        host.await.unwrap();
        assert!(matches!(outcome, ElevationOutcome::Cancelled));
    }

    #[tokio::test]
    async fn missing_prompt_host_refuses() {
        let (gate, prompts) = ElevationGate::new();
        drop(prompts);

        let outcome = gate.request("delete user jane").await;
        assert!(matches!(outcome, ElevationOutcome::Cancelled));
    }
}
