//! Terminal renderer: a padded, colored table plus banner and dialog.

use colored::Colorize;

use crate::constants::EMPTY_TABLE;
use crate::view::{DialogView, PageView, RowView, TableBody, ViewRenderer};

const HEADINGS: [&str; 5] = ["ID", "First Name", "Last Name", "Email", "Department"];

/// Terminal output renderer.
pub struct TerminalRenderer;

impl ViewRenderer for TerminalRenderer {
    fn render(&self, page: &PageView) -> String {
        let mut output = String::new();

        if let Some(ref banner) = page.banner {
            output.push_str(&format!(" {} {}\n\n", "✖".red().bold(), banner.red()));
        }

        match &page.table {
            TableBody::Loading => {
                output.push_str(&format!("  {} {}\n", "◌".cyan().bold(), "Loading…".cyan()));
            }
            TableBody::Empty => {
                output.push_str(&format!("  {}\n", EMPTY_TABLE.dimmed()));
            }
            TableBody::Rows(rows) => output.push_str(&render_rows(rows)),
        }

        if let Some(ref dialog) = page.dialog {
            output.push('\n');
            output.push_str(&render_dialog(dialog));
        }

        output
    }
}

fn cells(row: &RowView) -> [String; 5] {
    [
        row.id.to_string(),
        row.first_name.clone(),
        row.last_name.clone(),
        row.email.clone(),
        row.department.clone(),
    ]
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

fn render_rows(rows: &[RowView]) -> String {
    let all: Vec<[String; 5]> = rows.iter().map(cells).collect();

    let mut widths = HEADINGS.map(|h| h.chars().count());
    for row in &all {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    let header: Vec<String> = HEADINGS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad(h, *w).bold().to_string())
        .collect();
    output.push_str(&format!("  {}\n", header.join("  ")));

    let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    output.push_str(&format!("  {}\n", "─".repeat(rule_len).dimmed()));

    for row in &all {
        let line: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(i, (cell, w))| {
                let padded = pad(cell, *w);
                if i == 0 {
                    padded.cyan().to_string()
                } else {
                    padded
                }
            })
            .collect();
        output.push_str(&format!("  {}\n", line.join("  ").trim_end()));
    }

    output.push_str(&format!(
        "  {}\n",
        format!("{} {}", rows.len(), if rows.len() == 1 { "user" } else { "users" }).dimmed()
    ));
    output
}

fn render_dialog(dialog: &DialogView) -> String {
    let mut output = format!(" {} {}\n", "▸".cyan().bold(), dialog.title.bold());
    let label_width = dialog
        .fields
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);
    for field in &dialog.fields {
        let value = if field.value.is_empty() {
            "—".dimmed().to_string()
        } else {
            field.value.clone()
        };
        output.push_str(&format!(
            "   {} {}  {}\n",
            pad(&field.label, label_width).cyan(),
            format!("({})", field.name).dimmed(),
            value,
        ));
    }
    output.push_str(&format!(
        "   {} {}   {}\n",
        "save".bold(),
        format!("→ {}", dialog.submit_label).dimmed(),
        "cancel".dimmed(),
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::view::fixtures::{ann, editing_leanne, leanne, state_with};

    #[test]
    fn render_empty() {
        let output = TerminalRenderer.render(&PageView::from_state(&AppState::default(), false));
        assert!(output.contains("No users found"));
    }

    #[test]
    fn render_rows_and_count() {
        let page = PageView::from_state(&state_with(vec![leanne(), ann(2)]), false);
        let output = TerminalRenderer.render(&page);
        // Check content is present (may be wrapped in ANSI color codes)
        assert!(output.contains("Sincere@april.biz"));
        assert!(output.contains("Romaguera-Crona"));
        assert!(output.contains("2 users"));
    }

    #[test]
    fn render_banner_and_dialog() {
        let mut state = editing_leanne();
        state.banner = Some("Failed to save user. Please try again.".into());
        let output = TerminalRenderer.render(&PageView::from_state(&state, false));
        assert!(output.contains("Failed to save user"));
        assert!(output.contains("Edit User"));
        assert!(output.contains("Save Changes"));
    }

    #[test]
    fn pad_counts_chars_not_bytes() {
        assert_eq!(pad("José", 6), "José  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }
}
