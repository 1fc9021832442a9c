//! Server-rendered HTML for the two top-level views.
//!
//! Pages are plain strings assembled with `format!`. Every user-supplied value
//! goes through [`escape_html`] except rendered descriptions; see
//! [`markdown::render_description`].

pub mod add;
pub mod dashboard;
pub mod markdown;

/// Page title shown in the browser tab and the header.
pub const APP_TITLE: &str = "My Project Manager";

/// The two top-level views. Switching between them only happens through
/// the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Add,
    Dashboard,
}

impl View {
    fn href(self) -> &'static str {
        match self {
            View::Add => "/add",
            View::Dashboard => "/dashboard",
        }
    }

    fn label(self) -> &'static str {
        match self {
            View::Add => "➕ Add New Project",
            View::Dashboard => "📋 Dashboard",
        }
    }
}

/// A one-line banner shown above a view's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Info(String),
}

impl Notice {
    pub fn render(&self) -> String {
        let (class, icon, text) = match self {
            Notice::Success(text) => ("success", "✅", text),
            Notice::Warning(text) => ("warning", "⚠️", text),
            Notice::Info(text) => ("info", "ℹ️", text),
        };
        format!(
            "<div class=\"notice {class}\" role=\"status\">{icon} {}</div>",
            escape_html(text)
        )
    }
}

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;display:flex;min-height:100vh}\
nav{width:14rem;padding:1rem;background:#f0f2f6}\
nav a{display:block;padding:.4rem 0;color:inherit;text-decoration:none}\
nav a.active{font-weight:bold}\
main{flex:1;padding:1rem 2rem}\
label{display:block;margin:.6rem 0}\
input[type=text],input[type=search],textarea{width:100%;box-sizing:border-box}\
.notice{padding:.6rem;margin:.6rem 0;border-radius:4px}\
.success{background:#dff5e3}.warning{background:#fff4d6}.info{background:#e3eefc}\
.actions{display:flex;gap:.5rem;align-items:center}\
.actions form{display:inline}\
details.project{border:1px solid #ddd;border-radius:4px;margin:.5rem 0;padding:.5rem}";

const COPY_SCRIPT: &str = "\
document.addEventListener('click',function(e){\
var b=e.target.closest('[data-copy]');if(!b)return;\
navigator.clipboard.writeText(b.dataset.copy).then(function(){alert('Copied to clipboard!');});\
});";

/// Wrap a view body in the shared page chrome.
pub fn layout(active: View, body: &str) -> String {
    let mut nav = String::from("<nav aria-label=\"Navigation\">");
    for view in [View::Add, View::Dashboard] {
        let current = if view == active {
            " class=\"active\" aria-current=\"page\""
        } else {
            ""
        };
        nav.push_str(&format!(
            "<a href=\"{}\"{current}>{}</a>",
            view.href(),
            view.label()
        ));
    }
    nav.push_str("</nav>");

    format!(
        "<!doctype html>\
<html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>Project Manager</title><style>{STYLE}</style></head>\
<body>{nav}<main><h1>📂 {APP_TITLE}</h1>{body}</main>\
<script>{COPY_SCRIPT}</script></body></html>"
    )
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
