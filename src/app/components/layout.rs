//! Layout component wrapping all pages with the header and shared styles.

use dioxus::prelude::*;

use super::header::Header;

/// CSS styles for the application.
const CUSTOM_STYLES: &str = r#"
:root { --header-height: 56px; --toolbar-height: 48px; --accent: rgb(0, 111, 255); }
body { margin: 0; font-family: system-ui, sans-serif; }
.app-header { display: flex; align-items: center; justify-content: space-between; height: var(--header-height); background-color: rgb(246, 246, 248); border-bottom: 1px solid rgb(237, 237, 240); }
.app-name { display: flex; align-items: center; }
.app-name > h1 { font-weight: normal; margin-left: 14px; font-size: 20px; color: rgb(131, 134, 145); }
.logo-link { display: flex; margin-left: 14px; color: rgb(131, 134, 145); }
.logo { width: 24px; height: 24px; }
.author-name { font-size: 14px; color: rgba(0, 0, 0, 0.65); margin-right: 14px; }
.toolbar { display: flex; align-items: center; justify-content: space-between; height: var(--toolbar-height); padding: 0 14px; border-bottom: 1px solid rgb(237, 237, 240); }
.toolbar small { color: rgba(0, 0, 0, 0.45); }
.search-input { width: 320px; padding: 4px 8px; border: 1px solid rgb(237, 237, 240); border-radius: 4px; }
.select-filter { position: relative; }
.filter-button { color: rgba(0, 0, 0, 0.45); border: none; background-color: white; cursor: pointer; }
.dropdown-menu { display: none; position: absolute; right: 0; top: var(--toolbar-height); background-color: white; min-width: 256px; box-shadow: 0px 8px 16px 0px rgba(0, 0, 0, 0.15); z-index: 1; }
.dropdown-menu.open { display: block; }
.close-filter { display: flex; justify-content: space-between; align-items: center; height: var(--toolbar-height); padding: 0 14px; border-bottom: 1px solid rgb(237, 237, 240); color: rgba(0, 0, 0, 0.65); }
.icon-button { border: none; background: none; cursor: pointer; color: rgba(0, 0, 0, 0.45); }
.h-4 { height: 16px; } .w-4 { width: 16px; }
.scrollable-section { max-height: 400px; overflow-y: auto; }
.filter-name { padding: 20px 14px; }
.line-options { list-style-type: none; padding: 0; margin: 0; }
.dropdown-item { display: flex; align-items: center; padding: 4px 16px; color: rgba(0, 0, 0, 0.65); cursor: pointer; }
.dropdown-item:hover { background-color: rgb(251, 251, 251); }
.line-checkbox { margin-right: 8px; width: 16px; height: 16px; accent-color: var(--accent); pointer-events: none; }
.device-table { width: 100%; border-collapse: collapse; }
.device-table th, .device-table td { text-align: left; padding: 8px 14px; border-bottom: 1px solid rgb(237, 237, 240); }
.device-table th { font-weight: normal; color: rgba(0, 0, 0, 0.45); }
.notice { padding: 24px 14px; color: rgba(0, 0, 0, 0.45); }
.notice.error { color: rgb(200, 40, 40); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Author label for the header
    #[props(default)]
    pub author: Option<String>,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let full_title = format!("{} - Device Catalog", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Style { {CUSTOM_STYLES} }

        Header { author: props.author.clone() }
        main {
            {props.children}
        }
    }
}
