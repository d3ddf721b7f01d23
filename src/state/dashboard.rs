//! Dashboard view model: profile, balance, usage history, and API keys.
//!
//! DESIGN
//! ======
//! Server records are converted into display rows here so the components
//! only lay out strings. Each list tracks its own load state; a failed load
//! renders the same empty-state line as an empty list because the gateway
//! already reported anything the user can act on.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::client::DashboardFetch;
use crate::net::error::ApiError;
use crate::net::types::{ApiKeyRecord, ProjectRecord};
use crate::state::auth::Session;
use crate::util::format::{format_cost, format_optional_date, format_thousands, prefix_chars};

pub const NOT_AVAILABLE: &str = "N/A";
pub const USAGE_LOADING: &str = "Loading usage history...";
pub const USAGE_EMPTY: &str = "No token usage history found.";
pub const KEYS_LOADING: &str = "Loading API Keys...";
pub const KEYS_EMPTY: &str = "No API keys found.";
pub const HIDDEN_KEY: &str = "************ (Hidden)";

/// Load state of one dashboard section.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Ready(T),
    /// The request failed; render the fallback.
    Unavailable,
}

impl<T> Loadable<T> {
    #[must_use]
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        result.map_or(Self::Unavailable, Self::Ready)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Unavailable => None,
        }
    }
}

/// Username and email from the stored session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub email: String,
}

impl Profile {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let or_na = |value: &Option<String>| value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_owned());
        Self { username: or_na(&session.username), email: or_na(&session.email) }
    }
}

/// One rendered usage-history entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsageRow {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub date: String,
    /// `- 1,234 Tokens`
    pub total: String,
    /// `Input: 1,000 | Output: 234`
    pub split: String,
}

impl UsageRow {
    #[must_use]
    pub fn from_record(record: &ProjectRecord) -> Self {
        let usage = record.tokens_used.unwrap_or_default();
        let name = record
            .name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("Usage Record {}", prefix_chars(&record.id, 8)));
        Self {
            id: record.id.clone(),
            name,
            kind: record.kind.clone(),
            date: format_optional_date(record.created_at.as_ref()),
            total: format!("- {} Tokens", format_thousands(usage.input + usage.output)),
            split: format!(
                "Input: {} | Output: {}",
                format_thousands(usage.input),
                format_thousands(usage.output)
            ),
        }
    }
}

/// One rendered API key entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyRow {
    pub name: String,
    pub active: bool,
    pub created: String,
    pub tokens: String,
    pub cost: String,
    /// The full key only for the key this browser is logged in with.
    pub key_text: String,
}

impl KeyRow {
    #[must_use]
    pub fn from_record(record: &ApiKeyRecord, current_api_key: Option<&str>) -> Self {
        let key_text = if current_api_key == Some(record.key.as_str()) {
            record.key.clone()
        } else {
            HIDDEN_KEY.to_owned()
        };
        Self {
            name: record.name.clone(),
            active: record.is_active,
            created: format_optional_date(record.created_at.as_ref()),
            tokens: format_thousands(record.total_tokens.unwrap_or(0)),
            cost: format_cost(record.total_cost),
            key_text,
        }
    }

    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.active { "Active" } else { "Inactive" }
    }
}

/// Everything the dashboard page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub profile: Option<Profile>,
    pub balance: Loadable<i64>,
    pub usage: Loadable<Vec<UsageRow>>,
    pub keys: Loadable<Vec<KeyRow>>,
}

impl DashboardState {
    /// Fresh state for a dashboard load: profile filled, lists loading.
    #[must_use]
    pub fn loading(session: &Session) -> Self {
        Self { profile: Some(Profile::from_session(session)), ..Self::default() }
    }

    /// Balance for the header badge and the profile summary.
    #[must_use]
    pub fn balance_label(&self) -> String {
        self.balance
            .ready()
            .map_or_else(|| NOT_AVAILABLE.to_owned(), |tokens| format_thousands(*tokens))
    }

    /// Key creation needs a known, positive balance.
    #[must_use]
    pub fn can_create_key(&self) -> bool {
        self.balance.ready().is_some_and(|tokens| *tokens > 0)
    }

    pub fn apply_fetch(&mut self, fetch: DashboardFetch, current_api_key: Option<&str>) {
        self.set_balance(fetch.balance);
        self.set_usage(fetch.usage);
        self.set_keys(fetch.keys, current_api_key);
    }

    pub fn set_balance(&mut self, balance: Result<i64, ApiError>) {
        self.balance = Loadable::from_result(balance);
    }

    pub fn set_usage(&mut self, usage: Result<Vec<ProjectRecord>, ApiError>) {
        self.usage = Loadable::from_result(usage.map(|records| records.iter().map(UsageRow::from_record).collect()));
    }

    pub fn set_keys(&mut self, keys: Result<Vec<ApiKeyRecord>, ApiError>, current_api_key: Option<&str>) {
        self.keys = Loadable::from_result(keys.map(|records| {
            records
                .iter()
                .map(|record| KeyRow::from_record(record, current_api_key))
                .collect()
        }));
    }
}

/// What a list section shows when it has no rows to render.
#[must_use]
pub fn list_placeholder<T>(list: &Loadable<Vec<T>>, loading: &'static str, empty: &'static str) -> Option<&'static str> {
    match list {
        Loadable::Loading => Some(loading),
        Loadable::Ready(rows) if !rows.is_empty() => None,
        Loadable::Ready(_) | Loadable::Unavailable => Some(empty),
    }
}
