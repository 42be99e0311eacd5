use serde::{Deserialize, Serialize};

/// Fallback reply text when the chat endpoint answers without a message field.
pub const MISSING_REPLY_FALLBACK: &str = "No message found in response";

/// Category label applied when the backend sends none.
pub const DEFAULT_CATEGORY: &str = "General";

/// A single expense entry from the backend ledger.
///
/// The backend has shipped two generations of field names (`value` for
/// `amount`, `timestamp` for `date`, `topic` for `category`). Both are
/// accepted here, at deserialization, and nowhere else; everything past this
/// type sees only the canonical fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Calendar date as `YYYY-MM-DD`, empty when the payload had none.
    #[serde(alias = "timestamp", default, deserialize_with = "lenient_date")]
    pub date: String,
    /// Signed amount: negative for money spent, non-negative for money
    /// received or adjustments.
    #[serde(alias = "value", default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(
        alias = "topic",
        default = "default_category",
        deserialize_with = "lenient_category"
    )]
    pub category: String,
}

/// The expenses endpoint replies either with a bare array or with the array
/// wrapped in an `expenses` object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExpensesPayload {
    Wrapped { expenses: Vec<ExpenseRecord> },
    Bare(Vec<ExpenseRecord>),
}

impl ExpensesPayload {
    pub fn into_records(self) -> Vec<ExpenseRecord> {
        match self {
            ExpensesPayload::Wrapped { expenses } => expenses,
            ExpensesPayload::Bare(expenses) => expenses,
        }
    }
}

/// Body of a chat submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply from the chat endpoint. The message field is optional because the
/// assistant occasionally answers with an empty object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatResponse {
    /// The reply text, or the fixed fallback when the field was absent.
    pub fn reply_text(self) -> String {
        self.message
            .unwrap_or_else(|| MISSING_REPLY_FALLBACK.to_string())
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Amounts arrive as JSON numbers or as numeric strings depending on backend
/// version; anything unparseable counts as zero.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(value) if value.is_finite() => value,
        RawAmount::Number(_) => 0.0,
        RawAmount::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        RawAmount::Other(_) => 0.0,
    })
}

/// Dates are date strings; a null or non-string value degrades to empty,
/// which renders as "N/A" downstream.
fn lenient_date<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDate {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match RawDate::deserialize(deserializer)? {
        RawDate::Text(text) => text,
        RawDate::Other(_) => String::new(),
    })
}

fn lenient_category<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCategory {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match RawCategory::deserialize(deserializer)? {
        RawCategory::Text(text) => text,
        RawCategory::Other(_) => default_category(),
    })
}
