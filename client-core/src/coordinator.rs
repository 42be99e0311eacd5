use shared::ExpenseRecord;

use crate::aggregate;
use crate::chat::{ChatSubmissionController, SubmitTicket};
use crate::error::ApiError;
use crate::period::{period_options, PeriodOption};
use crate::query::{FetchTicket, PeriodQueryController, QueryState};

/// Everything the presentation layer needs for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub input_draft: String,
    pub chat_state: QueryState<String>,
    pub period: String,
    pub period_options: Vec<PeriodOption>,
    pub expense_state: QueryState<Vec<ExpenseRecord>>,
    pub total: f64,
    pub record_count: usize,
}

/// Composes the two controllers and the aggregator into a single renderable
/// state. Performs no I/O; callers issue the tickets it returns against the
/// transport and feed the results back in.
///
/// The two panes are deliberately independent: a chat submission never
/// refreshes the expense list, because the assistant's ledger writes are not
/// guaranteed to have landed by the time it answers.
#[derive(Debug)]
pub struct ViewCoordinator {
    current_year: i32,
    input_draft: String,
    chat: ChatSubmissionController,
    expenses: PeriodQueryController,
    total: f64,
}

impl ViewCoordinator {
    pub fn new(current_year: i32) -> Self {
        Self {
            current_year,
            input_draft: String::new(),
            chat: ChatSubmissionController::new(),
            expenses: PeriodQueryController::new(current_year),
            total: 0.0,
        }
    }

    pub fn input_draft(&self) -> &str {
        &self.input_draft
    }

    pub fn set_input_draft(&mut self, text: String) {
        self.input_draft = text;
    }

    /// Submit the current draft. The draft is kept either way, so a failed
    /// or rejected submission can be retried without retyping.
    pub fn submit_chat(&mut self) -> Option<SubmitTicket> {
        self.chat.submit(&self.input_draft)
    }

    pub fn complete_chat(
        &mut self,
        ticket: &SubmitTicket,
        result: Result<String, ApiError>,
    ) -> bool {
        self.chat.complete_submit(ticket, result)
    }

    pub fn select_period(&mut self, period: &str) -> Option<FetchTicket> {
        self.expenses.select_period(period)
    }

    pub fn refresh_expenses(&mut self) -> FetchTicket {
        self.expenses.refresh()
    }

    /// Apply a fetch result and, if it was accepted, rederive the total from
    /// whatever is now loaded (zero after a failure, since nothing is).
    pub fn complete_expense_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<ExpenseRecord>, ApiError>,
    ) -> bool {
        let applied = self.expenses.complete_fetch(ticket, result);
        if applied {
            self.total = aggregate::total(self.expenses.records());
        }
        applied
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            input_draft: self.input_draft.clone(),
            chat_state: self.chat.state().clone(),
            period: self.expenses.period().to_string(),
            period_options: period_options(self.current_year),
            expense_state: self.expenses.state().clone(),
            total: self.total,
            record_count: self.expenses.records().len(),
        }
    }
}
