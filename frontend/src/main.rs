use yew::prelude::*;

mod components;
mod services;

use client_core::{ApiError, FetchTicket, SubmitTicket, ViewCoordinator};
use components::chat_panel::ChatPanel;
use components::expense_panel::ExpensePanel;
use services::api::ApiClient;
use shared::ExpenseRecord;

pub enum Msg {
    DraftChanged(String),
    SubmitChat,
    ChatResolved(SubmitTicket, Result<String, ApiError>),
    PeriodSelected(String),
    RefreshExpenses,
    ExpensesResolved(FetchTicket, Result<Vec<ExpenseRecord>, ApiError>),
}

/// Root component. All state lives in the coordinator; `update` only routes
/// messages into it and spawns the transport calls its tickets ask for.
pub struct App {
    coordinator: ViewCoordinator,
    api: ApiClient,
}

impl App {
    fn spawn_expense_fetch(&self, ctx: &Context<Self>, ticket: FetchTicket) {
        let api = self.api.clone();
        ctx.link().send_future(async move {
            let result = api.fetch_expenses(&ticket.period).await;
            Msg::ExpensesResolved(ticket, result)
        });
    }

    fn spawn_chat_submit(&self, ctx: &Context<Self>, ticket: SubmitTicket) {
        let api = self.api.clone();
        ctx.link().send_future(async move {
            let result = api.send_chat(&ticket.message).await;
            Msg::ChatResolved(ticket, result)
        });
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut coordinator = ViewCoordinator::new(current_year());
        let ticket = coordinator.refresh_expenses();

        let app = Self {
            coordinator,
            api: ApiClient::new(),
        };
        app.spawn_expense_fetch(ctx, ticket);
        app
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Msg) -> bool {
        match msg {
            Msg::DraftChanged(text) => {
                self.coordinator.set_input_draft(text);
                true
            }
            Msg::SubmitChat => {
                if let Some(ticket) = self.coordinator.submit_chat() {
                    self.spawn_chat_submit(ctx, ticket);
                }
                true
            }
            Msg::ChatResolved(ticket, result) => self.coordinator.complete_chat(&ticket, result),
            Msg::PeriodSelected(period) => match self.coordinator.select_period(&period) {
                Some(ticket) => {
                    self.spawn_expense_fetch(ctx, ticket);
                    true
                }
                None => false,
            },
            Msg::RefreshExpenses => {
                let ticket = self.coordinator.refresh_expenses();
                self.spawn_expense_fetch(ctx, ticket);
                true
            }
            Msg::ExpensesResolved(ticket, result) => {
                self.coordinator.complete_expense_fetch(&ticket, result)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = self.coordinator.snapshot();
        let link = ctx.link();

        html! {
            <div class="app">
                <div class="split-container">
                    <ChatPanel
                        draft={snapshot.input_draft.clone()}
                        state={snapshot.chat_state.clone()}
                        on_draft_change={link.callback(Msg::DraftChanged)}
                        on_submit={link.callback(|_| Msg::SubmitChat)}
                    />
                    <ExpensePanel
                        state={snapshot.expense_state.clone()}
                        period={snapshot.period.clone()}
                        options={snapshot.period_options.clone()}
                        total={snapshot.total}
                        record_count={snapshot.record_count}
                        on_period_change={link.callback(Msg::PeriodSelected)}
                        on_refresh={link.callback(|_| Msg::RefreshExpenses)}
                    />
                </div>
            </div>
        }
    }
}

fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

fn main() {
    yew::Renderer::<App>::new().render();
}
