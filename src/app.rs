use arboard::Clipboard;
use color_eyre::Result;
use tracing::{debug, warn};

use crate::{
    basket::{BasketSummary, SearchTab, Section, TicketData, TicketSource},
    config::AppSettings,
    constants::FETCH_ERROR_MESSAGE,
    event::Action,
    service::ApiManager,
};

/// Which area receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Sections,
}

/// State for popups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupState {
    None,
    Message(String),
}

/// Lifecycle of the ticket-detail section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketDetailState {
    Idle,
    Loading,
    Error(String),
    Ready(TicketData),
}

/// The main application struct holding the state.
pub struct App {
    pub settings: AppSettings,

    pub focus: Focus,
    pub exit: bool,

    pub query: String,
    pub selected_tab: SearchTab,

    pub summary: Option<BasketSummary>,
    pub last_lookup: Option<String>,

    pub ticket_source: TicketSource,
    pub ticket_state: TicketDetailState,
    fetch_generation: u64,

    pub transaction_section_open: bool,
    pub payment_section_open: bool,
    pub barcode_revealed: bool,

    pub popup_state: PopupState,

    clipboard: Option<Clipboard>,
}

impl App {
    pub fn new(settings: AppSettings, ticket_source: TicketSource) -> Self {
        let selected_tab = settings.default_tab;
        // Clipboard may be unavailable (e.g. headless); that is fine.
        let clipboard = Clipboard::new().ok();

        Self {
            settings,
            focus: Focus::Search,
            exit: false,
            query: String::new(),
            selected_tab,
            summary: None,
            last_lookup: None,
            ticket_source,
            ticket_state: TicketDetailState::Idle,
            fetch_generation: 0,
            transaction_section_open: false,
            payment_section_open: false,
            barcode_revealed: false,
            popup_state: PopupState::None,
            clipboard,
        }
    }

    /// Updates the application state based on the received action.
    pub fn update(&mut self, action: Action, api: &ApiManager) -> Result<()> {
        match action {
            Action::Quit => self.handle_quit(),
            Action::SwitchFocus => self.handle_switch_focus(),

            Action::SearchInput(c) => self.query.push(c),
            Action::SearchBackspace => {
                self.query.pop();
            }
            Action::SearchClear => self.query.clear(),
            Action::SearchSwitchTab => self.selected_tab = self.selected_tab.next(),
            Action::PerformSearch(query, tab) => self.handle_perform_search(query, tab, api),

            Action::ToggleSection(section) => self.handle_toggle_section(section, api),
            Action::ToggleBarcodeReveal => self.handle_toggle_barcode_reveal(),
            Action::RequestRefund => self.handle_request_refund(api),
            Action::AuthorizeAllRefunds => self.handle_authorize_all_refunds(api),
            Action::CopyBasketReference => self.copy_basket_reference_to_clipboard(),

            Action::UpdateSearchResult(result) => self.handle_search_result(result),
            Action::UpdateTicketDetails { generation, result } => {
                self.handle_ticket_fetched(generation, result)
            }

            Action::ShowMessage(msg) => self.show_message(msg),
            Action::ClearPopup => self.popup_state = PopupState::None,
        }
        Ok(())
    }

    // --- Lifecycle & focus ---

    fn handle_quit(&mut self) {
        // Remember the tab the agent last used.
        self.settings.default_tab = self.selected_tab;
        self.exit = true;
    }

    fn handle_switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::Sections,
            Focus::Sections => Focus::Search,
        };
    }

    // --- Search ---

    /// Submits the query as-is. No validation: an empty query searches
    /// like any other.
    fn handle_perform_search(&mut self, query: String, tab: SearchTab, api: &ApiManager) {
        self.show_message("Looking up basket...".to_string());
        api.search(query, tab);
    }

    fn handle_search_result(&mut self, result: Result<BasketSummary, String>) {
        match result {
            Ok(summary) => {
                self.summary = Some(summary);
                self.last_lookup =
                    Some(chrono::Local::now().format("%a, %d %b %Y, %H:%M").to_string());
                self.popup_state = PopupState::None;
            }
            Err(e) => self.show_error_message(format!("Basket lookup failed: {}", e)),
        }
    }

    // --- Sections & ticket details ---

    fn handle_toggle_section(&mut self, section: Section, api: &ApiManager) {
        match section {
            Section::TransactionCompletion => {
                self.transaction_section_open = !self.transaction_section_open;
                // Children remount on each open: the reveal flag never
                // survives a close, and a fetched source is re-requested.
                self.barcode_revealed = false;
                if self.transaction_section_open {
                    self.mount_ticket_details(api);
                }
            }
            Section::Payment => self.payment_section_open = !self.payment_section_open,
        }
    }

    fn mount_ticket_details(&mut self, api: &ApiManager) {
        match &self.ticket_source {
            TicketSource::Direct(data) => {
                self.ticket_state = TicketDetailState::Ready(data.clone());
            }
            TicketSource::Fetched(ticket_id) => {
                self.fetch_generation += 1;
                self.ticket_state = TicketDetailState::Loading;
                api.fetch_ticket(ticket_id.clone(), self.fetch_generation);
            }
        }
    }

    fn handle_ticket_fetched(&mut self, generation: u64, result: Result<TicketData, String>) {
        if generation != self.fetch_generation {
            debug!(generation, current = self.fetch_generation, "stale ticket response discarded");
            return;
        }
        match result {
            Ok(data) => self.ticket_state = TicketDetailState::Ready(data),
            Err(e) => {
                warn!(%e, "ticket detail fetch failed");
                self.ticket_state = TicketDetailState::Error(FETCH_ERROR_MESSAGE.to_string());
            }
        }
    }

    fn handle_toggle_barcode_reveal(&mut self) {
        if self.transaction_section_open
            && matches!(self.ticket_state, TicketDetailState::Ready(_))
        {
            self.barcode_revealed = !self.barcode_revealed;
        }
    }

    // --- Refund actions ---

    fn handle_request_refund(&mut self, api: &ApiManager) {
        let Some((ticket_ref, line_ref)) = self.ready_ticket_refs() else {
            self.show_message("No ticket loaded.".to_string());
            return;
        };
        api.refund_ticket(ticket_ref);
        self.show_message(format!("Refund request sent for line {}.", line_ref));
    }

    fn handle_authorize_all_refunds(&mut self, api: &ApiManager) {
        if self.ready_ticket_refs().is_none() {
            self.show_message("No ticket loaded.".to_string());
            return;
        }
        api.authorize_all_refunds();
        self.show_message("Bulk refund authorization sent.".to_string());
    }

    fn ready_ticket_refs(&self) -> Option<(String, String)> {
        if !self.transaction_section_open {
            return None;
        }
        match &self.ticket_state {
            TicketDetailState::Ready(data) => {
                Some((data.ticket_ref.clone(), data.line_ref.clone()))
            }
            _ => None,
        }
    }

    // --- Clipboard ---

    fn copy_basket_reference_to_clipboard(&mut self) {
        let Some(reference) = self.summary.as_ref().map(|s| s.reference.clone()) else {
            self.show_message("No basket loaded.".to_string());
            return;
        };
        if let Some(clipboard) = self.clipboard.as_mut() {
            match clipboard.set_text(reference.clone()) {
                Ok(_) => self.show_message(format!("Copied: {}", reference)),
                Err(e) => self.show_error_message(format!("Clipboard error: {}", e)),
            }
        } else {
            self.show_error_message("Clipboard not available".to_string());
        }
    }

    // --- Utility helpers ---

    fn show_message(&mut self, msg: String) {
        self.popup_state = if msg.is_empty() {
            PopupState::None
        } else {
            PopupState::Message(msg)
        };
    }

    fn show_error_message(&mut self, error_msg: String) {
        self.popup_state = PopupState::Message(format!("Error: {}", error_msg));
    }
}
