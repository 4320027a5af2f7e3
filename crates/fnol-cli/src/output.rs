//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use fnol_domain::{ProcessedClaimResponse, Route};
use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// How command results are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a processed claim.
    pub fn format_response(&self, response: &ProcessedClaimResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
            OutputFormat::Table => self.format_response_table(response),
        }
    }

    /// Format a processed claim as a field table followed by the decision.
    fn format_response_table(&self, response: &ProcessedClaimResponse) -> Result<String> {
        let fields = serde_json::to_value(&response.extracted_fields)?;
        let mut rows = Vec::new();
        flatten_fields("", &fields, &mut rows);

        let mut output = String::new();
        if rows.is_empty() {
            output.push_str(&self.warning("No fields extracted."));
        } else {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (path, value) in &rows {
                builder.push_record([path.as_str(), value.as_str()]);
            }

            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            output.push_str(&table.to_string());
        }
        output.push('\n');

        if response.missing_fields.is_empty() {
            output.push_str(&self.success("All mandatory fields present"));
        } else {
            output.push_str(&self.warning(&format!(
                "Missing fields ({}): {}",
                response.missing_fields.len(),
                response.missing_fields
            )));
        }
        output.push('\n');

        output.push_str(&format!(
            "Route: {}\n",
            self.route_label(response.recommended_route)
        ));
        output.push_str(&format!("Reasoning: {}", response.reasoning));

        Ok(output)
    }

    /// Route label, colored by destination.
    pub fn route_label(&self, route: Route) -> String {
        let color = match route {
            Route::FastTrack => "green",
            Route::StandardProcessing => "blue",
            Route::ManualReview => "yellow",
            Route::InvestigationFlag => "red",
            Route::SpecialistQueue => "magenta",
        };
        self.colorize(route.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Collect `(dotted.path, display value)` rows from a sparse field map.
fn flatten_fields(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_fields(&path, child, rows);
            }
        }
        Value::Array(items) => {
            let joined: Vec<String> = items.iter().map(display_scalar).collect();
            rows.push((prefix.to_string(), joined.join(", ")));
        }
        other => rows.push((prefix.to_string(), display_scalar(other))),
    }
}

fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
