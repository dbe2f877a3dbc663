use maud::{html, Markup};

pub fn loading_spinner() -> Markup {
    html! {
        div.spinner role="status" {
            p { strong { "Generating your culinary masterpiece..." } }
            p { "The AI chef is preheating the oven!" }
        }
    }
}

pub fn error_banner(message: &str) -> Markup {
    html! {
        div.error-banner role="alert" {
            strong { "Oops!" }
            " "
            span { (message) }
        }
    }
}

pub fn idle_placeholder() -> Markup {
    html! {
        div.empty {
            h3 { "No recipes yet" }
            p { "Enter your ingredients and API key to get started!" }
        }
    }
}

/// Shown when a generation succeeded but returned no recipes.
pub fn empty_results() -> Markup {
    html! {
        section.empty {
            h3 { "No recipes were generated" }
            p { "Try adding a few more ingredients or loosening your restrictions." }
        }
    }
}
