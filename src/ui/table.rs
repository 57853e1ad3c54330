//! Data table configuration
//!
//! Default options for the review/app tables. Callers pass overrides as
//! JSON; top-level keys replace the defaults wholesale.

use serde::Serialize;
use serde_json::Value;

/// Button class shared by every export button
const BUTTON_CLASS: &str = "btn btn-sm btn-outline-primary";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableButton {
    pub extend: String,
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paginate {
    pub first: String,
    pub previous: String,
    pub next: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableLanguage {
    pub search: String,
    pub search_placeholder: String,
    pub length_menu: String,
    pub info: String,
    pub info_empty: String,
    pub info_filtered: String,
    pub paginate: Paginate,
}

/// Table widget options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    pub responsive: bool,
    /// Page sizes and their labels; -1 means all rows
    pub length_menu: (Vec<i64>, Vec<String>),
    pub page_length: i64,
    pub dom: String,
    pub buttons: Vec<TableButton>,
    pub language: TableLanguage,
}

impl Default for TableOptions {
    fn default() -> Self {
        let buttons = ["copy", "csv", "excel", "pdf", "print", "colvis"]
            .into_iter()
            .map(|extend| TableButton {
                extend: extend.to_string(),
                class_name: BUTTON_CLASS.to_string(),
            })
            .collect();

        Self {
            responsive: true,
            length_menu: (
                vec![10, 25, 50, 100, -1],
                ["10", "25", "50", "100", "All"].map(String::from).to_vec(),
            ),
            page_length: 25,
            dom: "Bfrtip".to_string(),
            buttons,
            language: TableLanguage {
                search: "_INPUT_".to_string(),
                search_placeholder: "Search...".to_string(),
                length_menu: "Show _MENU_ entries".to_string(),
                info: "Showing _START_ to _END_ of _TOTAL_ entries".to_string(),
                info_empty: "Showing 0 to 0 of 0 entries".to_string(),
                info_filtered: "(filtered from _MAX_ total entries)".to_string(),
                paginate: Paginate {
                    first: r#"<i class="fas fa-angle-double-left"></i>"#.to_string(),
                    previous: r#"<i class="fas fa-angle-left"></i>"#.to_string(),
                    next: r#"<i class="fas fa-angle-right"></i>"#.to_string(),
                    last: r#"<i class="fas fa-angle-double-right"></i>"#.to_string(),
                },
            },
        }
    }
}

impl TableOptions {
    /// Shallow-merge caller overrides over these options
    ///
    /// Non-object overrides are ignored.
    pub fn merged(&self, overrides: Value) -> serde_json::Result<Value> {
        let mut options = serde_json::to_value(self)?;

        if let (Value::Object(base), Value::Object(extra)) = (&mut options, overrides) {
            for (key, value) in extra {
                base.insert(key, value);
            }
        }

        Ok(options)
    }
}
