use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Snapshot of a basket produced by a lookup.
///
/// Replaced wholesale on every search; the page never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketSummary {
    pub reference: String,
    pub created: String,
    pub status: String,
    pub channel: String,
    pub items: u32,
    pub value: String,
    pub user: String,
    pub current_balance: String,
    pub remote_status: String,
    pub remote_payment_status: String,
    pub tickets_not_delivered: String,
}

/// Full detail record for a single ticket within a basket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketData {
    pub event: String,
    pub venue: String,
    pub date: String,
    pub seats: String,
    pub value: String,
    pub status: String,
    pub event_type: String,
    pub line_ref: String,
    pub ticket_ref: String,
    pub barcode: String,
    pub remote_ref: String,
    pub access_control_status: String,
    pub refund_amount: String,
    pub refund_date: String,
    pub refund_channel: String,
}

impl TicketData {
    /// Canned record shown when no ticket id is given on the command line.
    pub fn demo() -> Self {
        Self {
            event: "Concert XYZ".to_string(),
            venue: "Madison Square Garden".to_string(),
            date: "Fri, 22 Dec 2024, 19:00".to_string(),
            seats: "Section A, Row 5, Seat 12".to_string(),
            value: "$150".to_string(),
            status: "Confirmed".to_string(),
            event_type: "Music Concert".to_string(),
            line_ref: "LREF123456".to_string(),
            ticket_ref: "TREF123456".to_string(),
            barcode: "BARCODE123456".to_string(),
            remote_ref: "REMOTE123456".to_string(),
            access_control_status: "Granted".to_string(),
            refund_amount: "$50".to_string(),
            refund_date: "Wed, 20 Dec 2024".to_string(),
            refund_channel: "Credit Card".to_string(),
        }
    }
}

/// Where the ticket-detail section gets its data from.
///
/// Resolved once at startup so the detail view never has to juggle two
/// possible sources at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketSource {
    Direct(TicketData),
    Fetched(String),
}

/// Visual severity of a status card or info field. Affects color only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Neutral,
    Warning,
    Success,
    Error,
}

impl Severity {
    pub fn color(&self) -> Color {
        match self {
            Severity::Neutral => Color::White,
            Severity::Warning => Color::Yellow,
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
        }
    }
}

/// Lookup category selected in the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchTab {
    #[default]
    BtlRef,
    Mobile,
    Email,
}

impl SearchTab {
    pub const ALL: [SearchTab; 3] = [SearchTab::BtlRef, SearchTab::Mobile, SearchTab::Email];

    /// Wire key sent alongside the query.
    pub fn key(&self) -> &str {
        match self {
            SearchTab::BtlRef => "btl",
            SearchTab::Mobile => "mobile",
            SearchTab::Email => "email",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SearchTab::BtlRef => "B.T.L Ref",
            SearchTab::Mobile => "Mobile No",
            SearchTab::Email => "Email",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SearchTab::BtlRef => SearchTab::Mobile,
            SearchTab::Mobile => SearchTab::Email,
            SearchTab::Email => SearchTab::BtlRef,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            SearchTab::BtlRef => SearchTab::Email,
            SearchTab::Mobile => SearchTab::BtlRef,
            SearchTab::Email => SearchTab::Mobile,
        }
    }
}

/// Collapsible sections below the basket summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    TransactionCompletion,
    Payment,
}

impl Section {
    pub fn label(&self) -> &str {
        match self {
            Section::TransactionCompletion => "Transaction Completion",
            Section::Payment => "Payment",
        }
    }
}
