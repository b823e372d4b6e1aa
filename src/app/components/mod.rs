//! Shared UI components for the Dioxus fullstack web UI.

pub mod header;
pub mod icon_button;
pub mod layout;
pub mod outside_click;
pub mod search_bar;
pub mod select_filter;

pub use header::Header;
pub use icon_button::IconButton;
pub use layout::Layout;
pub use search_bar::SearchBar;
pub use select_filter::SelectFilter;
