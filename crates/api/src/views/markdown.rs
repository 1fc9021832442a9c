use pulldown_cmark::{html, Options, Parser};

/// Render a project description as HTML.
///
/// Descriptions are Markdown and may embed raw HTML such as links or badges.
/// Raw HTML is passed through unescaped: stored descriptions are trusted
/// content in a single-user catalog. This is intentional but risky; anything
/// that lets other people write descriptions must sanitize here first.
pub fn render_description(description: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(description, options);
    let mut out = String::with_capacity(description.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
