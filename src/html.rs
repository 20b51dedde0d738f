use maud::{DOCTYPE, Markup, html};

use crate::endpoints;

// Card styles
pub const CARD_STYLE: &str = "card";
pub const CARD_HEADER_STYLE: &str = "card-header";
pub const CARD_TITLE_STYLE: &str = "card-title";
pub const CARD_DESCRIPTION_STYLE: &str = "card-description";
pub const CARD_CONTENT_STYLE: &str = "card-content";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "page";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Expense Tracker" }
                link href=(format!("{}/main.css", endpoints::STATIC)) rel="stylesheet";

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptLink(path) => script src=(path) defer {}
                    }
                }
            }

            body
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class=(PAGE_CONTAINER_STYLE)
        {
            div class="error"
            {
                h1 class="error-code" { (header) }

                p class="error-description" { (description) }

                p class="error-fix" { (fix) }

                a href=(endpoints::ROOT) class="link" { "Back to Homepage" }
            }
        }
    );

    base(title, &[], &content)
}
