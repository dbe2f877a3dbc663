use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Seconds between reloads while a generation is running.
const LOADING_REFRESH_SECS: u32 = 2;

const STYLES: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f8fafc; color: #1e293b; }
header, footer { background: #fff; border-bottom: 1px solid #e2e8f0; padding: 1rem; text-align: center; }
footer { border-top: 1px solid #e2e8f0; border-bottom: none; color: #64748b; font-size: 0.875rem; }
main { max-width: 48rem; margin: 0 auto; padding: 2rem 1rem; }
.panel, .recipe-card { background: #fff; border: 1px solid #e2e8f0; border-radius: 0.75rem; padding: 1.5rem; margin-bottom: 2rem; }
label { display: block; font-weight: 600; margin-bottom: 0.5rem; }
input, textarea { width: 100%; box-sizing: border-box; padding: 0.5rem; border: 1px solid #cbd5e1; border-radius: 0.375rem; }
button { background: #059669; color: #fff; border: none; border-radius: 0.375rem; padding: 0.75rem 1.5rem; font-weight: 600; }
button[disabled] { background: #94a3b8; }
.hint { font-size: 0.75rem; color: #64748b; }
.notice { color: #b91c1c; }
.error-banner { background: #fee2e2; border: 1px solid #f87171; color: #b91c1c; border-radius: 0.5rem; padding: 0.75rem 1rem; }
.spinner { text-align: center; color: #475569; }
.empty { text-align: center; color: #64748b; }
.pills span { display: inline-block; background: #ecfdf5; border-radius: 9999px; padding: 0.25rem 0.75rem; margin-right: 0.5rem; }
.provided { color: #059669; }
.pantry { color: #94a3b8; }
"#;

pub fn header() -> Markup {
    html! {
        header {
            h1 { "Larder" }
            p { "AI recipe ideas from what you already have" }
        }
    }
}

pub fn footer() -> Markup {
    html! {
        footer {
            p { "Larder Recipe Generator. Powered by AI, crafted for your kitchen." }
        }
    }
}

/// Full HTML document around `content`. While `loading`, the page reloads itself
/// until the generation finishes.
pub fn document(loading: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                @if loading {
                    meta http-equiv="refresh" content=(LOADING_REFRESH_SECS);
                }
                title { "Larder" }
                style { (PreEscaped(STYLES)) }
            }
            body {
                (header())
                main { (content) }
                (footer())
            }
        }
    }
}
