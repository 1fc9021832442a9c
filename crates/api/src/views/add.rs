//! The "Add New Project" view.

use super::{escape_html, layout, Notice, View};

/// Render the add form, pre-filled with `name`/`description`, with an
/// optional banner above it.
pub fn render_add(name: &str, description: &str, notice: Option<&Notice>) -> String {
    let notice = notice.map(Notice::render).unwrap_or_default();
    let body = format!(
        "<h2>Add a New Project</h2>{notice}\
<form method=\"post\" action=\"/add\" class=\"add-form\">\
<label>Project Name<input type=\"text\" name=\"project_name\" value=\"{name}\"></label>\
<label>Project Description (can include live links, tech stack, etc.)\
<textarea name=\"description\" rows=\"10\">\n{description}</textarea></label>\
<button type=\"submit\">Save Project</button>\
</form>",
        name = escape_html(name),
        description = escape_html(description),
    );
    layout(View::Add, &body)
}
