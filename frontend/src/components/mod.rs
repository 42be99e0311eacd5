pub mod chat_panel;
pub mod expense_panel;
