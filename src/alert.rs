//! Alerts for displaying error messages to users.
//!
//! Alerts are rendered as HTML fragments that htmx swaps into the
//! `#alert-container` element of the base page via `hx-target-error`.

use maud::{Markup, html};

const ALERT_ERROR_STYLE: &str =
    "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 dark:bg-gray-800 dark:text-red-400";

/// A message shown to the user when an action fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    Error { message: String, details: String },
    ErrorSimple { message: String },
}

impl Alert {
    /// Render the alert. Clicking it dismisses it.
    pub fn into_html(self) -> Markup {
        let (message, details) = match self {
            Alert::Error { message, details } => (message, Some(details)),
            Alert::ErrorSimple { message } => (message, None),
        };

        html! {
            div class=(ALERT_ERROR_STYLE) role="alert" onclick="this.remove()"
            {
                span class="font-medium" { (message) }

                @if let Some(details) = details.filter(|details| !details.is_empty()) {
                    p { (details) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::alert::Alert;

    #[test]
    fn error_alert_shows_message_and_details() {
        let markup = Alert::Error {
            message: "Oh no".to_owned(),
            details: "Something broke".to_owned(),
        }
        .into_html()
        .into_string();

        let html = Html::parse_fragment(&markup);
        let alert = html
            .select(&Selector::parse("div[role=alert]").unwrap())
            .next()
            .expect("alert missing");
        let text = alert.text().collect::<String>();
        assert!(text.contains("Oh no"));
        assert!(text.contains("Something broke"));
    }

    #[test]
    fn simple_alert_has_no_details_paragraph() {
        let markup = Alert::ErrorSimple {
            message: "Sign-in failed".to_owned(),
        }
        .into_html()
        .into_string();

        let html = Html::parse_fragment(&markup);
        assert!(html.select(&Selector::parse("p").unwrap()).next().is_none());
    }
}
