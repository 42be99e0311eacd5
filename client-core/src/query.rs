use std::cmp::Ordering;

use shared::ExpenseRecord;

use crate::error::ApiError;
use crate::format::parse_expense_date;
use crate::period::is_selectable_period;

/// Lifecycle of one remote query.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Failure(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Capture of one issued expense fetch. The completion must hand the ticket
/// back so the controller can tell a current response from a straggler.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub(crate) seq: u64,
    /// Year the fetch was issued for.
    pub period: String,
}

/// Owns the selected period and the expense list's query lifecycle.
///
/// Every issued fetch bumps a monotonic sequence number; only the response
/// carrying the most recently issued number may mutate state. That is the
/// whole cancellation story: superseded responses still arrive, get compared,
/// and are dropped.
#[derive(Debug)]
pub struct PeriodQueryController {
    current_year: i32,
    period: String,
    issued_seq: u64,
    state: QueryState<Vec<ExpenseRecord>>,
}

impl PeriodQueryController {
    /// Starts idle, pointed at the current year. `current_year` also anchors
    /// the selectable window.
    pub fn new(current_year: i32) -> Self {
        Self {
            current_year,
            period: current_year.to_string(),
            issued_seq: 0,
            state: QueryState::Idle,
        }
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn state(&self) -> &QueryState<Vec<ExpenseRecord>> {
        &self.state
    }

    /// The loaded list, empty unless the last accepted fetch succeeded.
    pub fn records(&self) -> &[ExpenseRecord] {
        self.state.data().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the selected period and issue a fetch for it. Values outside
    /// the selectable window are ignored; the dropdown only offers valid
    /// years, so anything else is a caller bug rather than a user error.
    pub fn select_period(&mut self, period: &str) -> Option<FetchTicket> {
        if !is_selectable_period(period, self.current_year) {
            log::warn!("ignoring period selection outside the window: {period:?}");
            return None;
        }
        self.period = period.to_string();
        Some(self.begin_fetch())
    }

    /// Re-issue a fetch for the currently selected period.
    pub fn refresh(&mut self) -> FetchTicket {
        self.begin_fetch()
    }

    fn begin_fetch(&mut self) -> FetchTicket {
        self.issued_seq += 1;
        self.state = QueryState::Loading;
        log::debug!("issuing expense fetch #{} for {}", self.issued_seq, self.period);
        FetchTicket {
            seq: self.issued_seq,
            period: self.period.clone(),
        }
    }

    /// Apply a fetch result. Returns `false` when the ticket was superseded
    /// by a later fetch, in which case nothing changes.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<ExpenseRecord>, ApiError>,
    ) -> bool {
        if ticket.seq != self.issued_seq {
            log::debug!(
                "discarding stale expense response #{} for {} (current is #{})",
                ticket.seq,
                ticket.period,
                self.issued_seq
            );
            return false;
        }
        self.state = match result {
            Ok(records) => QueryState::Success(sort_by_date_desc(records)),
            Err(err) => QueryState::Failure(err.to_string()),
        };
        true
    }
}

/// Newest first; records whose date does not parse sort after all dated ones.
/// The sort is stable, so ties keep their arrival order.
fn sort_by_date_desc(mut records: Vec<ExpenseRecord>) -> Vec<ExpenseRecord> {
    records.sort_by(|a, b| {
        match (parse_expense_date(&a.date), parse_expense_date(&b.date)) {
            (Some(left), Some(right)) => right.cmp(&left),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, amount: f64, category: &str) -> ExpenseRecord {
        ExpenseRecord {
            date: date.to_string(),
            amount,
            category: category.to_string(),
        }
    }

    fn records_2023() -> Vec<ExpenseRecord> {
        vec![
            record("2023-01-10", -10.0, "Food"),
            record("2023-03-01", -25.5, "Food"),
        ]
    }

    #[test]
    fn test_starts_idle_at_current_year() {
        let controller = PeriodQueryController::new(2025);
        assert_eq!(controller.period(), "2025");
        assert_eq!(*controller.state(), QueryState::Idle);
        assert!(controller.records().is_empty());
    }

    #[test]
    fn test_select_period_issues_fetch() {
        let mut controller = PeriodQueryController::new(2025);
        let ticket = controller.select_period("2023").unwrap();

        assert_eq!(ticket.period, "2023");
        assert_eq!(controller.period(), "2023");
        assert!(controller.state().is_loading());
    }

    #[test]
    fn test_select_invalid_period_is_a_no_op() {
        let mut controller = PeriodQueryController::new(2025);

        for bad in ["2019", "202", "abcd", ""] {
            assert!(controller.select_period(bad).is_none(), "period: {bad:?}");
        }
        assert_eq!(controller.period(), "2025");
        assert_eq!(*controller.state(), QueryState::Idle);
    }

    #[test]
    fn test_successful_fetch_sorts_newest_first() {
        let mut controller = PeriodQueryController::new(2025);
        let ticket = controller.select_period("2023").unwrap();

        assert!(controller.complete_fetch(&ticket, Ok(records_2023())));

        let dates: Vec<&str> = controller.records().iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2023-03-01", "2023-01-10"]);
    }

    #[test]
    fn test_unparseable_dates_sort_to_the_end() {
        let mut controller = PeriodQueryController::new(2025);
        let ticket = controller.refresh();

        let records = vec![
            record("not a date", -1.0, "A"),
            record("2025-02-01", -2.0, "B"),
            record("", -3.0, "C"),
            record("2025-06-15", -4.0, "D"),
        ];
        controller.complete_fetch(&ticket, Ok(records));

        let categories: Vec<&str> = controller
            .records()
            .iter()
            .map(|r| r.category.as_str())
            .collect();
        assert_eq!(categories, ["D", "B", "A", "C"]);
    }

    #[test]
    fn test_date_ties_keep_arrival_order() {
        let mut controller = PeriodQueryController::new(2025);
        let ticket = controller.refresh();

        let records = vec![
            record("2025-04-01", -1.0, "first"),
            record("2025-04-01", -2.0, "second"),
            record("2025-04-01", -3.0, "third"),
        ];
        controller.complete_fetch(&ticket, Ok(records));

        let categories: Vec<&str> = controller
            .records()
            .iter()
            .map(|r| r.category.as_str())
            .collect();
        assert_eq!(categories, ["first", "second", "third"]);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut controller = PeriodQueryController::new(2025);

        // Request A for 2024, then request B for 2023 before A resolves.
        let ticket_a = controller.select_period("2024").unwrap();
        let ticket_b = controller.select_period("2023").unwrap();

        // B resolves first and is applied.
        assert!(controller.complete_fetch(&ticket_b, Ok(records_2023())));

        // A straggles in afterwards and must not touch anything.
        let late = vec![record("2024-07-04", -99.0, "Stale")];
        assert!(!controller.complete_fetch(&ticket_a, Ok(late)));

        assert_eq!(controller.period(), "2023");
        assert_eq!(controller.records().len(), 2);
        assert_eq!(controller.records()[0].date, "2023-03-01");
    }

    #[test]
    fn test_stale_failure_does_not_surface() {
        let mut controller = PeriodQueryController::new(2025);

        let ticket_a = controller.refresh();
        let ticket_b = controller.refresh();

        assert!(controller.complete_fetch(&ticket_b, Ok(records_2023())));
        assert!(!controller.complete_fetch(
            &ticket_a,
            Err(ApiError::Network("connection reset".to_string()))
        ));

        assert!(controller.state().error().is_none());
        assert_eq!(controller.records().len(), 2);
    }

    #[test]
    fn test_failure_clears_previous_list() {
        let mut controller = PeriodQueryController::new(2025);

        let ticket = controller.refresh();
        controller.complete_fetch(&ticket, Ok(records_2023()));
        assert_eq!(controller.records().len(), 2);

        let ticket = controller.refresh();
        let err = ApiError::Status {
            status: 404,
            message: "Unable to fetch expenses".to_string(),
        };
        assert!(controller.complete_fetch(&ticket, Err(err)));

        assert!(controller.records().is_empty());
        assert_eq!(
            controller.state().error(),
            Some("Error: 404 - Unable to fetch expenses")
        );
    }
}
