//! Dashboard page showing the total amount spent.
//!
//! The page is served with the card in its loading state. Once the page has
//! loaded, `static/dashboard.js` fetches the total from
//! [endpoints::TOTAL_SPENT] once and swaps the value in. A failed or
//! malformed response leaves the card showing the loading value.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        CARD_CONTENT_STYLE, CARD_DESCRIPTION_STYLE, CARD_HEADER_STYLE, CARD_STYLE,
        CARD_TITLE_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base,
    },
};

/// The ID of the element holding the total, used by the dashboard script.
pub const TOTAL_SPENT_ELEMENT_ID: &str = "total-spent";

/// The two states of the total spent card.
///
/// The card starts in [TotalSpentCard::Loading] and moves to
/// [TotalSpentCard::Loaded] at most once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TotalSpentCard {
    /// The total has not been fetched yet.
    Loading,
    /// The total has been fetched.
    Loaded(f64),
}

impl TotalSpentCard {
    /// The value displayed on the card: zero while loading.
    pub fn value(self) -> f64 {
        match self {
            TotalSpentCard::Loading => 0.0,
            TotalSpentCard::Loaded(total) => total,
        }
    }

    /// Move to the loaded state with `total`, mirroring what
    /// `static/dashboard.js` does in the browser.
    ///
    /// An already loaded card keeps its value.
    #[cfg(test)]
    #[must_use]
    fn load(self, total: f64) -> Self {
        match self {
            TotalSpentCard::Loading => TotalSpentCard::Loaded(total),
            loaded @ TotalSpentCard::Loaded(_) => loaded,
        }
    }

    fn into_html(self) -> Markup {
        let state = match self {
            TotalSpentCard::Loading => "loading",
            TotalSpentCard::Loaded(_) => "loaded",
        };

        html! {
            div class=(CARD_STYLE)
            {
                div class=(CARD_HEADER_STYLE)
                {
                    h2 class=(CARD_TITLE_STYLE) { "Total Spent" }
                    p class=(CARD_DESCRIPTION_STYLE)
                    {
                        "The total amount spent on your project."
                    }
                }

                div
                    id=(TOTAL_SPENT_ELEMENT_ID)
                    class=(CARD_CONTENT_STYLE)
                    data-state=(state)
                    data-source=(endpoints::TOTAL_SPENT)
                {
                    (self.value())
                }
            }
        }
    }
}

/// Display the dashboard with the total spent card in its loading state.
pub async fn get_dashboard_page() -> Response {
    dashboard_view(TotalSpentCard::Loading).into_response()
}

fn dashboard_view(card: TotalSpentCard) -> Markup {
    let script = HeadElement::ScriptLink(format!("{}/dashboard.js", endpoints::STATIC));

    let content = html! {
        main class=(PAGE_CONTAINER_STYLE) { (card.into_html()) }
    };

    base("Dashboard", &[script], &content)
}
