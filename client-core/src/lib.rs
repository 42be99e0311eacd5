//! View-state synchronization for the expense tracker client.
//!
//! Everything here is synchronous and UI-agnostic: the controllers hand out
//! tickets when a request is issued and are given the ticket back alongside
//! the transport's result, so ordering between overlapping requests is
//! enforced by a sequence-number comparison rather than by the runtime that
//! happens to drive the futures.

pub mod aggregate;
pub mod chat;
pub mod coordinator;
pub mod error;
pub mod format;
pub mod period;
pub mod query;

pub use chat::{ChatSubmissionController, SubmitTicket, EMPTY_MESSAGE_ERROR};
pub use coordinator::{ViewCoordinator, ViewSnapshot};
pub use error::ApiError;
pub use format::{classify_amount, format_currency, format_date, AmountFlow};
pub use period::{period_options, PeriodOption};
pub use query::{FetchTicket, PeriodQueryController, QueryState};
