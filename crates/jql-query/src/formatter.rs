//! Saved-filter listing: plain, JSON, table, and Markdown output.

use jql_core::SavedFilter;

/// Output format for filter listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    Table,
    Markdown,
}

const COLUMNS: [&str; 3] = ["name", "description", "jql"];

/// Format saved filters in the specified output format.
#[must_use]
pub fn format_filters(filters: &[SavedFilter], format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => format_plain(filters),
        OutputFormat::Json => format_json(filters),
        OutputFormat::Table => format_table(filters),
        OutputFormat::Markdown => format_markdown(filters),
    }
}

fn cells(filter: &SavedFilter) -> [&str; 3] {
    [
        filter.name.as_str(),
        filter.description.as_deref().unwrap_or(""),
        filter.jql.as_str(),
    ]
}

fn format_plain(filters: &[SavedFilter]) -> String {
    filters
        .iter()
        .map(|f| format!("{}: {}\n", f.name, f.jql))
        .collect()
}

fn format_json(filters: &[SavedFilter]) -> String {
    serde_json::to_string_pretty(filters).unwrap_or_else(|_| "[]".to_string())
}

fn format_table(filters: &[SavedFilter]) -> String {
    if filters.is_empty() {
        return "(no filters)".to_string();
    }

    // Calculate column widths
    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.len()).collect();
    for filter in filters {
        for (i, cell) in cells(filter).iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut output = String::new();

    // Header
    let header: Vec<String> = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:width$}", c, width = widths[i]))
        .collect();
    output.push_str(header.join(" | ").trim_end());
    output.push('\n');

    // Separator
    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&sep.join("-+-"));
    output.push('\n');

    // Rows
    for filter in filters {
        let vals: Vec<String> = cells(filter)
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = widths[i]))
            .collect();
        output.push_str(vals.join(" | ").trim_end());
        output.push('\n');
    }

    output
}

fn format_markdown(filters: &[SavedFilter]) -> String {
    if filters.is_empty() {
        return "*No filters*\n".to_string();
    }

    let mut output = String::new();

    output.push_str("| ");
    output.push_str(&COLUMNS.join(" | "));
    output.push_str(" |\n");

    output.push_str("| ");
    let seps: Vec<&str> = COLUMNS.iter().map(|_| "---").collect();
    output.push_str(&seps.join(" | "));
    output.push_str(" |\n");

    for filter in filters {
        output.push_str("| ");
        let vals: Vec<String> = cells(filter)
            .iter()
            .map(|cell| cell.replace('|', "\\|"))
            .collect();
        output.push_str(&vals.join(" | "));
        output.push_str(" |\n");
    }

    output
}
