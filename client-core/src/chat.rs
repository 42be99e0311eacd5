use crate::error::ApiError;
use crate::query::QueryState;

/// Validation message for a blank submission. Never involves the network.
pub const EMPTY_MESSAGE_ERROR: &str = "Please enter some text";

/// Capture of one accepted chat submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket {
    pub(crate) seq: u64,
    /// The submitted text, verbatim (untrimmed) as the user typed it.
    pub message: String,
}

/// Owns the message-submission lifecycle of the chat pane.
///
/// Overlapping submissions are allowed; the same sequence guard used for
/// expense fetches makes the latest one win, so a slow early reply can never
/// overwrite a newer one.
#[derive(Debug, Default)]
pub struct ChatSubmissionController {
    issued_seq: u64,
    state: QueryState<String>,
}

impl ChatSubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &QueryState<String> {
        &self.state
    }

    /// Accept a message for submission. A whitespace-only message fails
    /// locally with a validation error and returns no ticket. Acceptance
    /// clears any previous reply or error.
    pub fn submit(&mut self, message: &str) -> Option<SubmitTicket> {
        if message.trim().is_empty() {
            self.state = QueryState::Failure(EMPTY_MESSAGE_ERROR.to_string());
            return None;
        }
        self.issued_seq += 1;
        self.state = QueryState::Loading;
        log::debug!("issuing chat submission #{}", self.issued_seq);
        Some(SubmitTicket {
            seq: self.issued_seq,
            message: message.to_string(),
        })
    }

    /// Apply a submission result. Returns `false` for a superseded ticket,
    /// which changes nothing.
    pub fn complete_submit(
        &mut self,
        ticket: &SubmitTicket,
        result: Result<String, ApiError>,
    ) -> bool {
        if ticket.seq != self.issued_seq {
            log::debug!(
                "discarding stale chat reply #{} (current is #{})",
                ticket.seq,
                self.issued_seq
            );
            return false;
        }
        self.state = match result {
            Ok(reply) => QueryState::Success(reply),
            Err(err) => QueryState::Failure(err.to_string()),
        };
        true
    }
}
