//! Central constants for the basket lookup TUI.

use std::time::Duration;

/// Target interval between idle redraws of the UI loop.
pub const TICK_RATE: Duration = Duration::from_millis(200);

/// Placeholder shown for a masked field, regardless of the real value's
/// length.
pub const MASKED_PLACEHOLDER: &str = "********************************";

/// The single user-facing message for any failed ticket-detail fetch.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load ticket details. Please try again later.";

/// Shown in the detail section when there is neither a ticket id nor
/// directly supplied data.
pub const NO_TICKET_MESSAGE: &str = "No ticket data available.";

/// Default API base URL when no config file or CLI override exists.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

// Layout heights (rows).
pub const HEADER_HEIGHT: u16 = 3;
pub const INTRO_HEIGHT: u16 = 1;
pub const SEARCH_HEIGHT: u16 = 7;
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of one status card in the summary grid, borders included.
pub const CARD_HEIGHT: u16 = 3;
