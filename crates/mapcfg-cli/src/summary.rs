use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mapcfg_model::{IssueSeverity, ParamSet, ParamSpec, UserParams, ValidationIssue, ValidationReport};

/// Print the provided parameters, the issue table, and a verdict line.
pub fn print_report(params: &UserParams, report: &ValidationReport) {
    print_provided(params);
    print_issues(report);
    if report.is_valid() {
        println!("Configuration is valid.");
    } else {
        println!(
            "Found {} error(s). Fix them before handing the configuration to the renderer.",
            report.error_count()
        );
    }
}

/// Print the declared parameters of a specification.
pub fn print_parameters(spec: &ParamSet) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Type"),
        header_cell("Required"),
        header_cell("Constraints"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for param in &spec.parameters {
        table.add_row(vec![
            Cell::new(&param.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(param.param_type.as_str()),
            if param.required {
                Cell::new("yes").fg(Color::Red)
            } else {
                dim_cell("no")
            },
            Cell::new(constraint_summary(param)),
        ]);
    }
    println!("{table}");
}

fn print_provided(params: &UserParams) {
    if params.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Parameter"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (name, value) in params {
        table.add_row(vec![Cell::new(name), Cell::new(value.to_string())]);
    }
    println!("Provided parameters:");
    println!("{table}");
}

fn print_issues(report: &ValidationReport) {
    if report.issues.is_empty() {
        return;
    }
    // Errors first, then warnings, then suggestions; stable within a severity.
    let mut issues: Vec<&ValidationIssue> = report.issues.iter().collect();
    issues.sort_by_key(|issue| severity_rank(issue.severity));
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Parameter"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for issue in issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(issue.code.as_str()),
            Cell::new(issue.parameter.clone().unwrap_or_else(|| "-".to_string())),
            Cell::new(issue.message.clone()),
        ]);
    }
    println!("Issues:");
    println!("{table}");
}

fn constraint_summary(param: &ParamSpec) -> String {
    let mut parts = Vec::new();
    if let Some(pattern) = &param.pattern {
        parts.push(format!("pattern {pattern}"));
    }
    match (param.min, param.max) {
        (Some(min), Some(max)) => parts.push(format!("{min}..={max}")),
        (Some(min), None) => parts.push(format!(">= {min}")),
        (None, Some(max)) => parts.push(format!("<= {max}")),
        (None, None) => {}
    }
    if let Some(options) = &param.options {
        let values: Vec<String> = options
            .flatten()
            .into_iter()
            .map(|value| match value {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect();
        parts.push(format!("one of {}", values.join(", ")));
    }
    if !param.depends_on.is_empty() {
        let keys: Vec<&str> = param.depends_on.keys().map(String::as_str).collect();
        parts.push(format!("depends on {}", keys.join(", ")));
    }
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join("; ")
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_rank(severity: IssueSeverity) -> u8 {
    match severity {
        IssueSeverity::Error => 0,
        IssueSeverity::Warning => 1,
        IssueSeverity::Suggestion => 2,
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR").fg(Color::Red),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
        IssueSeverity::Suggestion => Cell::new("HINT").fg(Color::Cyan),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
