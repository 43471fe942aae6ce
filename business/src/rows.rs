//! Entity rows as delivered by the backend.
//!
//! Rows are read-only snapshots. Optional fields default instead of failing the
//! whole collection.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Stable unique row identifier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RowKey(pub i64);

impl Display for RowKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RowKey {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRow {
    pub id: RowKey,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub email: Option<String>,
    pub admin: Option<bool>,
    pub moderator: Option<bool>,
    pub alias: Option<String>,
    pub proposed_alias: Option<String>,
    pub status: Option<String>,
    pub date_approved: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItemRow {
    pub id: RowKey,
    pub name: String,
    pub station: String,
}

impl MenuItemRow {
    pub fn new(id: i64, name: impl Into<String>, station: impl Into<String>) -> Self {
        Self {
            id: RowKey(id),
            name: name.into(),
            station: station.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_row_missing_fields_default() {
        let row: UserRow =
            serde_json::from_str(r#"{"id": 4, "email": "cgaucho@ucsb.edu", "admin": true}"#)
                .expect("partial row");

        assert_eq!(row.id, RowKey(4));
        assert_eq!(row.email.as_deref(), Some("cgaucho@ucsb.edu"));
        assert_eq!(row.admin, Some(true));
        assert_eq!(row.moderator, None);
        assert_eq!(row.date_approved, None);
    }

    #[test]
    fn user_row_reads_camel_case() {
        let row: UserRow = serde_json::from_str(
            r#"{
                "id": 1,
                "givenName": "Phill",
                "familyName": "Conrad",
                "proposedAlias": "Chef",
                "status": "Approved",
                "dateApproved": "2024-11-05",
                "moderator": null
            }"#,
        )
        .expect("full row");

        assert_eq!(row.given_name.as_deref(), Some("Phill"));
        assert_eq!(row.family_name.as_deref(), Some("Conrad"));
        assert_eq!(row.proposed_alias.as_deref(), Some("Chef"));
        assert_eq!(row.date_approved.as_deref(), Some("2024-11-05"));
        assert_eq!(row.moderator, None);
    }

    #[test]
    fn menu_item_row_tolerates_unknown_fields() {
        let row: MenuItemRow = serde_json::from_str(
            r#"{"id": 1, "name": "Oatmeal (vgn)", "station": "Grill (Cafe)", "diningCommonsCode": "ortega"}"#,
        )
        .expect("menu item");

        assert_eq!(row, MenuItemRow::new(1, "Oatmeal (vgn)", "Grill (Cafe)"));
    }
}
