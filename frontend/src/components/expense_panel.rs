use client_core::{classify_amount, format_currency, format_date, AmountFlow, PeriodOption, QueryState};
use shared::ExpenseRecord;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpensePanelProps {
    pub state: QueryState<Vec<ExpenseRecord>>,
    pub period: String,
    pub options: Vec<PeriodOption>,
    pub total: f64,
    pub record_count: usize,
    pub on_period_change: Callback<String>,
    pub on_refresh: Callback<()>,
}

/// Right pane: period selector, refresh control and the expense table for
/// the selected year.
#[function_component(ExpensePanel)]
pub fn expense_panel(props: &ExpensePanelProps) -> Html {
    let loading = props.state.is_loading();

    let onchange = {
        let on_period_change = props.on_period_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_period_change.emit(select.value());
        })
    };

    let onclick = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    html! {
        <div class="right-half">
            <header class="panel-header">
                <h1>{"Expense History"}</h1>
                <div class="period-controls">
                    <select class="period-select" onchange={onchange} disabled={loading}>
                        {for props.options.iter().map(|option| html! {
                            <option
                                value={option.value.clone()}
                                selected={option.value == props.period}
                            >
                                {&option.label}
                            </option>
                        })}
                    </select>
                    <button
                        class="refresh-button"
                        onclick={onclick}
                        disabled={loading}
                        title="Refresh expenses"
                    >
                        {"Refresh"}
                    </button>
                </div>
            </header>

            {if let Some(error) = props.state.error() {
                html! { <div class="error">{error}</div> }
            } else {
                html! {}
            }}

            {if loading {
                html! { <div class="loading">{"Loading your expenses..."}</div> }
            } else {
                expense_table(props)
            }}
        </div>
    }
}

fn expense_table(props: &ExpensePanelProps) -> Html {
    let records = match props.state.data() {
        Some(records) if !records.is_empty() => records,
        _ => {
            return html! {
                <div class="empty-state">
                    <h3>{"No expenses"}</h3>
                </div>
            }
        }
    };

    html! {
        <div class="table-container">
            <table class="expenses-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Category"}</th>
                        <th class="amount-header">{"Amount"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for records.iter().map(expense_row)}
                </tbody>
            </table>
            <div class="summary-row">
                <span class="record-count">
                    {format!(
                        "Showing {} {}",
                        props.record_count,
                        if props.record_count == 1 { "expense" } else { "expenses" }
                    )}
                </span>
                <span class="total">
                    {format!("Total: {}", format_currency(props.total))}
                </span>
            </div>
        </div>
    }
}

fn expense_row(record: &ExpenseRecord) -> Html {
    let (amount_class, rendered_amount) = match classify_amount(record.amount) {
        AmountFlow::Outflow => (
            "amount outflow",
            format!("-{}", format_currency(record.amount.abs())),
        ),
        AmountFlow::Inflow => ("amount inflow", format_currency(record.amount)),
    };

    html! {
        <tr>
            <td class="date">{format_date(&record.date)}</td>
            <td>
                <span class="category-chip">{&record.category}</span>
            </td>
            <td class="amount-cell">
                <span class={amount_class}>{rendered_amount}</span>
            </td>
        </tr>
    }
}
