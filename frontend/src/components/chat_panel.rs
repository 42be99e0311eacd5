use client_core::QueryState;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub draft: String,
    pub state: QueryState<String>,
    pub on_draft_change: Callback<String>,
    pub on_submit: Callback<()>,
}

/// Left pane: free-text expense statements and questions, with the reply or
/// error rendered inline underneath.
#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let loading = props.state.is_loading();

    let oninput = {
        let on_draft_change = props.on_draft_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_draft_change.emit(input.value());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let submit_disabled = loading || props.draft.trim().is_empty();

    html! {
        <div class="left-half">
            <header class="panel-header">
                <h1>{"Track Your Expenses"}</h1>
            </header>

            <form class="chat-form" onsubmit={onsubmit}>
                <textarea
                    class="chat-input"
                    rows="4"
                    placeholder="e.g., Spent $25.50 on lunch today, or 'How much did I spend on food this month?'"
                    value={props.draft.clone()}
                    oninput={oninput}
                    disabled={loading}
                />
                <div class="chat-actions">
                    <button type="submit" class="submit-button" disabled={submit_disabled}>
                        {if loading { "Processing..." } else { "Submit" }}
                    </button>
                </div>
            </form>

            {if let Some(error) = props.state.error() {
                html! { <div class="error">{error}</div> }
            } else {
                html! {}
            }}

            {if let Some(reply) = props.state.data() {
                html! { <div class="response">{reply}</div> }
            } else {
                html! {}
            }}
        </div>
    }
}
