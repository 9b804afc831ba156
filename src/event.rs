use crate::basket::{BasketSummary, SearchTab, Section, TicketData};

/// Results arriving from background API tasks.
#[derive(Debug)]
pub enum ApiUpdateEvent {
    SearchCompleted(Result<BasketSummary, String>),
    TicketFetched {
        generation: u64,
        result: Result<TicketData, String>,
    },
}

/// Application actions triggered by user input or API events.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    SwitchFocus,

    // Search form
    SearchInput(char),
    SearchBackspace,
    SearchClear,
    SearchSwitchTab,
    PerformSearch(String, SearchTab),

    // Sections & ticket details
    ToggleSection(Section),
    ToggleBarcodeReveal,
    RequestRefund,
    AuthorizeAllRefunds,
    CopyBasketReference,

    // API results
    UpdateSearchResult(Result<BasketSummary, String>),
    UpdateTicketDetails {
        generation: u64,
        result: Result<TicketData, String>,
    },

    // Popups
    ShowMessage(String),
    ClearPopup,
}
