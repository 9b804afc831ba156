pub mod details;
pub mod helpers;
pub mod popups;
pub mod search;
pub mod summary;
