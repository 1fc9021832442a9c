//! The "Dashboard" view: search box, project list and per-row actions.

use catalog_core::types::{format_date_added, DbId};
use catalog_db::catalog::CatalogResult;
use catalog_db::models::project::Project;
use catalog_db::Catalog;

use super::markdown::render_description;
use super::{escape_html, layout, Notice, View};
use crate::query::DashboardParams;

/// Shown instead of the list when nothing matches.
pub const EMPTY_MESSAGE: &str = "No projects found. Try a different keyword or add a new one.";

const SEARCH_PLACEHOLDER: &str = "Enter keyword (e.g., Python, chatbot, API)";

/// Everything the dashboard renders, read fresh from the database.
#[derive(Debug)]
pub struct DashboardView {
    /// Search keyword as typed, empty when unfiltered.
    pub keyword: String,
    /// Row whose inline edit form is open in this render.
    pub editing: Option<DbId>,
    pub projects: Vec<Project>,
}

impl DashboardView {
    /// Rebuild the view model from the database. Called on every dashboard
    /// request, including the one that follows each edit or delete.
    pub async fn load(catalog: &Catalog, params: &DashboardParams) -> CatalogResult<Self> {
        let projects = catalog.list(params.keyword()).await?;
        Ok(Self {
            keyword: params.q.clone().unwrap_or_default(),
            editing: params.edit,
            projects,
        })
    }

    pub fn render(&self) -> String {
        let keyword = escape_html(&self.keyword);
        let mut body = format!(
            "<h2>Projects Dashboard</h2>\
<form method=\"get\" action=\"/dashboard\" class=\"search\">\
<label>🔍 Search by keyword\
<input type=\"search\" name=\"q\" value=\"{keyword}\" placeholder=\"{SEARCH_PLACEHOLDER}\"></label>\
</form>"
        );

        if self.projects.is_empty() {
            body.push_str(&Notice::Info(EMPTY_MESSAGE.to_string()).render());
        } else {
            for project in &self.projects {
                body.push_str(&self.render_row(project));
            }
        }

        layout(View::Dashboard, &body)
    }

    fn render_row(&self, project: &Project) -> String {
        let id = project.id;
        let editing = self.editing == Some(id);
        let keyword = escape_html(&self.keyword);

        let edit_href = DashboardParams {
            q: (!self.keyword.is_empty()).then(|| self.keyword.clone()),
            edit: Some(id),
        }
        .to_url()
        .map(|url| format!("{url}#project-{id}"))
        .unwrap_or_else(|_| format!("/dashboard?edit={id}"));

        let edit_form = if editing {
            render_edit_form(project, &keyword)
        } else {
            String::new()
        };

        format!(
            "<details class=\"project\" id=\"project-{id}\"{open}>\
<summary>📌 {name}</summary>\
<div class=\"description\">{description}</div>\
<p class=\"added\"><em>Added on: {added}</em></p>\
<div class=\"actions\">\
<button type=\"button\" class=\"copy\" data-copy=\"{copy}\">📋 Copy</button>\
<a class=\"edit\" href=\"{edit_href}\">✏️ Edit</a>\
<form method=\"post\" action=\"/projects/{id}/delete\">\
<input type=\"hidden\" name=\"q\" value=\"{keyword}\">\
<button type=\"submit\">🗑 Delete</button></form>\
</div>{edit_form}<hr></details>",
            open = if editing { " open" } else { "" },
            name = escape_html(&project.project_name),
            description = render_description(&project.description),
            added = format_date_added(&project.date_added),
            copy = escape_html(&project.description),
            edit_href = escape_html(&edit_href),
        )
    }
}

fn render_edit_form(project: &Project, keyword: &str) -> String {
    format!(
        "<form method=\"post\" action=\"/projects/{id}/update\" class=\"edit-form\">\
<label>Project Name<input type=\"text\" name=\"project_name\" value=\"{name}\"></label>\
<label>Description<textarea name=\"description\" rows=\"10\">\n{description}</textarea></label>\
<input type=\"hidden\" name=\"q\" value=\"{keyword}\">\
<button type=\"submit\">Update</button>\
</form>",
        id = project.id,
        name = escape_html(&project.project_name),
        description = escape_html(&project.description),
    )
}
