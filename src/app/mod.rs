//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub mod api;
pub mod catalog;
pub mod components;
pub mod hooks;
pub mod pages;

use catalog::use_device_catalog_provider;
use pages::Devices;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Load the device array once at app root (shared by every component)
    use_device_catalog_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
///
/// Filter state lives in the query string so filtered views can be shared
/// and survive reloads: `/?query=cam&lines=protect%2Cnetwork`.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/?:query&:lines")]
    Devices { query: UrlText, lines: UrlText },
}

impl Route {
    pub fn devices(query: impl Into<String>, lines: impl Into<String>) -> Self {
        Route::Devices {
            query: UrlText(query.into()),
            lines: UrlText(lines.into()),
        }
    }
}

/// Free text carried in a query parameter.
///
/// The router only escapes spaces and `#` when printing a route, so `&`, `=`,
/// `%` and `+` typed by the user would split or rewrite the query string.
/// The router also percent-decodes the query once before handing values to
/// `from_str`, so `Display` encodes twice and `from_str` decodes the
/// remaining layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlText(pub String);

impl UrlText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UrlText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let once = urlencoding::encode(&self.0);
        f.write_str(&urlencoding::encode(&once))
    }
}

impl FromStr for UrlText {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = urlencoding::decode(s)
            .map(|text| text.into_owned())
            .unwrap_or_else(|_| s.to_string());
        Ok(UrlText(decoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(route: &Route) -> Route {
        Route::from_str(&route.to_string()).unwrap()
    }

    #[test]
    fn test_route_round_trips_awkward_query_text() {
        for query in ["R&D", "%41", "a&lines=x", "1+1", "camera pro", "50% #1", "é"] {
            let route = Route::devices(query, "L1");
            assert_eq!(round_trip(&route), route, "query {query:?} via {route}");
        }
    }

    #[test]
    fn test_query_text_cannot_overwrite_lines() {
        let route = Route::devices("a&lines=x", "L1,L2");
        let Route::Devices { query, lines } = round_trip(&route);
        assert_eq!(query.as_str(), "a&lines=x");
        assert_eq!(lines.as_str(), "L1,L2");
    }

    #[test]
    fn test_absent_parameters_default_to_empty() {
        assert_eq!(Route::from_str("/").unwrap(), Route::devices("", ""));
        assert_eq!(
            Route::from_str("/?lines=L1").unwrap(),
            Route::devices("", "L1")
        );
        assert_eq!(
            Route::from_str("/?query=cam").unwrap(),
            Route::devices("cam", "")
        );
    }

    #[test]
    fn test_url_text_display_escapes_separators() {
        for text in ["R&D", "a=b", "1+1", "x#y", "L1,L2"] {
            let shown = UrlText(text.to_string()).to_string();
            assert!(
                !shown.contains(['&', '=', '+', '#', ',']),
                "{text:?} printed as {shown:?}"
            );
        }
    }

    #[test]
    fn test_url_text_from_str_decodes_one_layer() {
        let text = UrlText::from_str("R%26D").unwrap();
        assert_eq!(text.as_str(), "R&D");
        let shown = UrlText("%41".to_string()).to_string();
        let routed = urlencoding::decode(&shown).unwrap();
        assert_eq!(UrlText::from_str(&routed).unwrap().as_str(), "%41");
    }
}
