//! HTML renderer.
//!
//! Produces a standalone page with the user table, the error banner, and
//! the edit dialog. Row actions carry `data-action` / `data-user-id`
//! attributes for delegated event handling; there are no inline handlers.

use std::fmt::Write as _;

use crate::constants::{APP_NAME, EMPTY_TABLE, TABLE_COLUMNS};
use crate::view::{DialogView, PageView, Patch, RowView, TableBody, ViewRenderer};

/// HTML output renderer.
pub struct HtmlRenderer;

impl ViewRenderer for HtmlRenderer {
    fn render(&self, page: &PageView) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("  <meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "  <title>{APP_NAME}</title>");
        out.push_str("</head>\n<body>\n");
        out.push_str("<main class=\"container\">\n");
        out.push_str("  <header>\n    <h1>User Management</h1>\n");
        out.push_str("    <button id=\"addUserBtn\" type=\"button\" class=\"btn btn-primary\">Add User</button>\n");
        out.push_str("  </header>\n");

        out.push_str(&render_banner(page.banner.as_deref()));

        out.push_str("  <table class=\"user-table\">\n    <thead>\n      <tr>");
        for heading in ["ID", "First Name", "Last Name", "Email", "Department", "Actions"] {
            let _ = write!(out, "<th>{heading}</th>");
        }
        out.push_str("</tr>\n    </thead>\n");
        out.push_str("    <tbody id=\"userTableBody\">\n");
        out.push_str(&render_table_body(&page.table));
        out.push_str("    </tbody>\n  </table>\n");
        out.push_str("</main>\n");

        out.push_str(&render_dialog(page.dialog.as_ref()));
        out.push_str("</body>\n</html>\n");
        out
    }
}

impl HtmlRenderer {
    /// Render patches as fragment operations against `#userTableBody`.
    ///
    /// Each line is `<op> <target>` followed by the markup to apply, which
    /// a thin client-side shim can replay.
    pub fn render_patches(&self, patches: &[Patch]) -> String {
        let mut out = String::new();
        for patch in patches {
            match patch {
                Patch::ReplaceAll(body) => {
                    out.push_str("replace #userTableBody\n");
                    out.push_str(&render_table_body(body));
                }
                Patch::Insert { index, row } => {
                    let _ = writeln!(out, "insert #userTableBody {index}");
                    out.push_str(&render_row(row));
                }
                Patch::Update { index, row } => {
                    let _ = writeln!(out, "update #userTableBody {index}");
                    out.push_str(&render_row(row));
                }
                Patch::Remove { id } => {
                    let _ = writeln!(out, "remove tr[data-user-id=\"{id}\"]");
                }
            }
        }
        out
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_banner(banner: Option<&str>) -> String {
    match banner {
        Some(message) => format!(
            "  <div id=\"errorMessage\" class=\"error-message\" role=\"alert\">{}</div>\n",
            escape(message)
        ),
        None => "  <div id=\"errorMessage\" class=\"error-message hidden\" role=\"alert\"></div>\n"
            .to_string(),
    }
}

/// The `<tr>` elements for the table body.
pub fn render_table_body(body: &TableBody) -> String {
    match body {
        TableBody::Loading => single_cell_row("<div class=\"loading-spinner\"></div>"),
        TableBody::Empty => single_cell_row(EMPTY_TABLE),
        TableBody::Rows(rows) => rows.iter().map(render_row).collect(),
    }
}

fn single_cell_row(content: &str) -> String {
    format!(
        "      <tr><td colspan=\"{TABLE_COLUMNS}\" style=\"text-align: center; padding: 1rem;\">{content}</td></tr>\n"
    )
}

fn render_row(row: &RowView) -> String {
    let id = row.id;
    let mut out = format!("      <tr data-user-id=\"{id}\">");
    let _ = write!(out, "<td>{id}</td>");
    for cell in [&row.first_name, &row.last_name, &row.email, &row.department] {
        let _ = write!(out, "<td>{}</td>", escape(cell));
    }
    let _ = write!(
        out,
        "<td><div class=\"actions\">\
         <button type=\"button\" class=\"action-btn edit-btn\" data-action=\"edit\" data-user-id=\"{id}\" title=\"Edit user\">✏️</button>\
         <button type=\"button\" class=\"action-btn delete-btn\" data-action=\"delete\" data-user-id=\"{id}\" title=\"Delete user\">🗑️</button>\
         </div></td>"
    );
    out.push_str("</tr>\n");
    out
}

fn render_dialog(dialog: Option<&DialogView>) -> String {
    let Some(dialog) = dialog else {
        return "<div id=\"userModal\" class=\"modal hidden\"></div>\n".to_string();
    };

    let mut out = String::new();
    out.push_str("<div id=\"userModal\" class=\"modal\">\n  <div class=\"modal-content\">\n");
    out.push_str("    <button type=\"button\" class=\"close-btn\" aria-label=\"Close\">&times;</button>\n");
    let _ = writeln!(out, "    <h2 id=\"modalTitle\">{}</h2>", escape(&dialog.title));
    match dialog.editing {
        Some(id) => {
            let _ = writeln!(out, "    <form id=\"userForm\" data-user-id=\"{id}\">");
        }
        None => out.push_str("    <form id=\"userForm\">\n"),
    }
    for field in &dialog.fields {
        let input_type = if field.name == "email" { "email" } else { "text" };
        let required = if field.name == "department" { "" } else { " required" };
        let _ = writeln!(
            out,
            "      <label for=\"{name}\">{label}</label>\n      <input id=\"{name}\" name=\"{name}\" type=\"{input_type}\" value=\"{value}\"{required}>",
            name = escape(&field.name),
            label = escape(&field.label),
            value = escape(&field.value),
        );
    }
    out.push_str("      <div class=\"form-actions\">\n");
    out.push_str("        <button type=\"button\" id=\"cancelBtn\" class=\"btn\">Cancel</button>\n");
    let _ = writeln!(
        out,
        "        <button type=\"submit\" id=\"submitBtn\" class=\"btn btn-primary\">{}</button>",
        escape(&dialog.submit_label)
    );
    out.push_str("      </div>\n    </form>\n  </div>\n</div>\n");
    out
}
