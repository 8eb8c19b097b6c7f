// ABOUTME: Output formatting for upload results and settings fields
// ABOUTME: Provides table formatting with color support and JSON formatting

use anyhow::Result;
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use web_uploader_sdk::{ConfigField, ImageItem};

pub trait OutputFormat {
    fn format_results(&self, items: &[ImageItem]) -> Result<String>;
    fn format_fields(&self, fields: &[ConfigField]) -> Result<String>;
}

pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn format_url(&self, url: Option<&str>) -> String {
        match url {
            Some(url) => url.to_string(),
            None if self.use_color => "not uploaded".red().to_string(),
            None => "not uploaded".to_string(),
        }
    }
}

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "URL")]
    url: String,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Required")]
    required: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Description")]
    message: String,
}

impl OutputFormat for TableFormatter {
    fn format_results(&self, items: &[ImageItem]) -> Result<String> {
        let rows: Vec<ResultRow> = items
            .iter()
            .map(|item| ResultRow {
                file: item.file_name.clone(),
                url: self.format_url(item.img_url.as_deref()),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::psql());
        Ok(table.to_string())
    }

    fn format_fields(&self, fields: &[ConfigField]) -> Result<String> {
        let rows: Vec<FieldRow> = fields
            .iter()
            .map(|field| FieldRow {
                name: field.name.to_string(),
                required: if field.required { "yes" } else { "no" }.to_string(),
                current: match (&field.default, self.use_color) {
                    (Some(value), _) => value.clone(),
                    (None, true) => "-".dimmed().to_string(),
                    (None, false) => "-".to_string(),
                },
                message: field.message.to_string(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::psql());
        Ok(table.to_string())
    }
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormat for JsonFormatter {
    fn format_results(&self, items: &[ImageItem]) -> Result<String> {
        self.to_json(items)
    }

    fn format_fields(&self, fields: &[ConfigField]) -> Result<String> {
        self.to_json(fields)
    }
}
