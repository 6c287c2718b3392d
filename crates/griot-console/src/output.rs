//! Rendering of listings as aligned tables or JSON.

use griot_curation::domain::content::ContentItem;
use griot_curation::domain::family::Family;
use griot_curation::domain::profile::Profile;
use griot_curation::domain::user::UserAccount;
use griot_moderation::application::query_handlers::RequestRow;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::AppError;

/// A record that renders as one table row.
pub trait Tabular {
    /// Column headers.
    const HEADERS: &'static [&'static str];

    /// Cell texts, one per header.
    fn cells(&self) -> Vec<String>;
}

/// Number of contents in one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCount {
    /// Region name.
    pub region: String,
    /// Number of contents.
    pub count: usize,
}

fn cell(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_owned()
}

impl Tabular for RequestRow {
    const HEADERS: &'static [&'static str] = &[
        "id", "type", "title", "requester", "status", "requested", "validator", "processed",
        "comment",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.content_type.to_string(),
            self.title.clone(),
            self.requester.clone(),
            self.status.to_string(),
            self.requested_at.clone(),
            cell(self.validator.as_deref()),
            cell(self.processed_at.as_deref()),
            cell(self.comment.as_deref()),
        ]
    }
}

impl Tabular for Family {
    const HEADERS: &'static [&'static str] =
        &["id", "name", "region", "members", "admin", "created", "status"];

    fn cells(&self) -> Vec<String> {
        let admin = format!(
            "{} {}",
            self.admin_first_name.as_deref().unwrap_or_default(),
            self.admin_last_name.as_deref().unwrap_or_default()
        );
        vec![
            self.id.to_string(),
            cell(Some(self.display_name())),
            cell(self.region.as_deref()),
            self.member_count.to_string(),
            cell(Some(admin.trim())),
            cell(self.created_at.as_deref()),
            self.status_label().to_owned(),
        ]
    }
}

impl Tabular for ContentItem {
    const HEADERS: &'static [&'static str] =
        &["id", "title", "creator", "family", "region", "created"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            cell(self.title.as_deref()),
            cell(Some(self.creator().as_str())),
            cell(self.family_name.as_deref()),
            cell(self.region.as_deref()),
            cell(self.created_at.as_deref()),
        ]
    }
}

impl Tabular for UserAccount {
    const HEADERS: &'static [&'static str] =
        &["id", "name", "email", "role", "telephone", "active"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.full_name.clone(),
            self.email.clone(),
            cell(self.role.as_deref()),
            cell(self.telephone.as_deref()),
            if self.active { "yes" } else { "no" }.to_owned(),
        ]
    }
}

impl Tabular for Profile {
    const HEADERS: &'static [&'static str] =
        &["id", "last name", "first name", "email", "telephone", "role"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.map_or_else(|| "-".to_owned(), |id| id.to_string()),
            cell(self.last_name.as_deref()),
            cell(self.first_name.as_deref()),
            cell(self.email.as_deref()),
            cell(self.telephone.as_deref()),
            cell(self.role.as_deref()),
        ]
    }
}

impl Tabular for RegionCount {
    const HEADERS: &'static [&'static str] = &["region", "count"];

    fn cells(&self) -> Vec<String> {
        vec![self.region.clone(), self.count.to_string()]
    }
}

/// Renders `items` in `format`.
///
/// # Errors
///
/// Returns `AppError::Render` if JSON serialization fails.
pub fn render<T: Tabular + Serialize>(
    items: &[T],
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Table if items.is_empty() => Ok("(no rows)".to_owned()),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = items.iter().map(Tabular::cells).collect();
            Ok(render_table(T::HEADERS, &rows))
        }
    }
}

/// Renders an aligned table. Numeric cells are right-aligned.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|value| value.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    let header_line = join_cells(headers.iter().copied(), &widths);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        lines.push(join_cells(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn join_cells<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(value, width)| {
            let pad = width.saturating_sub(value.chars().count());
            if looks_numeric(value) {
                format!("{}{value}", " ".repeat(pad))
            } else {
                format!("{value}{}", " ".repeat(pad))
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_owned()
}

fn looks_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use griot_core::dto::RequestStatus;
    use griot_moderation::domain::request::PublicationRequest;
    use griot_test_support::{request_dto, user_dto};

    use super::*;

    #[test]
    fn test_table_aligns_accented_text_and_numbers() {
        let rows = vec![
            vec!["Ségou".to_owned(), "3".to_owned()],
            vec!["Kayes".to_owned(), "12".to_owned()],
        ];

        let table = render_table(&["region", "count"], &rows);

        assert_eq!(
            table,
            "region  count\n-------------\nSégou       3\nKayes      12"
        );
    }

    #[test]
    fn test_request_rows_render_missing_decision_as_dash() {
        let request =
            PublicationRequest::from(request_dto(7, "Conte des ancêtres", RequestStatus::Pending));

        let table = render(&[RequestRow::from(&request)], OutputFormat::Table).unwrap();

        let row = table.lines().nth(2).unwrap();
        assert!(row.trim_start().starts_with("7  Conte"));
        assert!(row.contains("EN_ATTENTE"));
        assert!(row.ends_with('-'));
    }

    #[test]
    fn test_empty_listing_renders_placeholder() {
        let rows: Vec<UserAccount> = Vec::new();

        assert_eq!(render(&rows, OutputFormat::Table).unwrap(), "(no rows)");
        assert_eq!(render(&rows, OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_json_listing_serializes_records() {
        let users = vec![UserAccount::from(user_dto(5, "Awa Traoré", false))];

        let json: serde_json::Value =
            serde_json::from_str(&render(&users, OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(json[0]["full_name"], "Awa Traoré");
        assert_eq!(json[0]["active"], false);
    }
}
