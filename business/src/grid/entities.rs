use crate::gateway::ActionKind;
use crate::grid::columns::{ActionEffect, ButtonStyle, Capability, ColumnDef, GridEntity};
use crate::grid::format::{bool_text, status_text, text};
use crate::route::Route;
use crate::rows::{MenuItemRow, RowKey, UserRow};
use crate::viewer::{ROLE_ADMIN, ROLE_USER};

pub const USERS_TABLE: &str = "UsersTable";
pub const MENU_ITEM_TABLE: &str = "MenuItemTable";

impl GridEntity for UserRow {
    const TABLE_ID: &'static str = USERS_TABLE;
    const COLLECTION_PATH: &'static str = "/api/admin/users";

    fn key(&self) -> RowKey {
        self.id
    }

    fn base_columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::value("id", "id", |row: &Self| row.id.to_string()),
            ColumnDef::value("First Name", "givenName", |row: &Self| text(row.given_name.as_ref())),
            ColumnDef::value("Last Name", "familyName", |row: &Self| {
                text(row.family_name.as_ref())
            }),
            ColumnDef::value("Email", "email", |row: &Self| text(row.email.as_ref())),
            ColumnDef::value("Admin", "admin", |row: &Self| bool_text(row.admin)),
            ColumnDef::value("Moderator", "moderator", |row: &Self| bool_text(row.moderator)),
            ColumnDef::value("Alias", "alias", |row: &Self| text(row.alias.as_ref())),
            ColumnDef::value("Proposed Alias", "proposedAlias", |row: &Self| {
                text(row.proposed_alias.as_ref())
            }),
            ColumnDef::value("Status", "Status", |row: &Self| {
                status_text(row.status.as_deref(), row.date_approved.as_deref())
            }),
        ]
    }

    fn capabilities() -> Vec<Capability<Self>> {
        vec![Capability {
            role: ROLE_ADMIN,
            columns: vec![
                ColumnDef::action(
                    "Toggle Admin",
                    ButtonStyle::Primary,
                    ActionEffect::Mutate(ActionKind::ToggleAdmin),
                ),
                ColumnDef::action(
                    "Toggle Moderator",
                    ButtonStyle::Info,
                    ActionEffect::Mutate(ActionKind::ToggleModerator),
                ),
            ],
        }]
    }
}

impl GridEntity for MenuItemRow {
    const TABLE_ID: &'static str = MENU_ITEM_TABLE;
    const COLLECTION_PATH: &'static str = "/api/menuitems";

    fn key(&self) -> RowKey {
        self.id
    }

    fn base_columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::value("Item Name", "name", |row: &Self| row.name.clone()),
            ColumnDef::value("Station", "station", |row: &Self| row.station.clone()),
        ]
    }

    fn capabilities() -> Vec<Capability<Self>> {
        vec![Capability {
            role: ROLE_USER,
            columns: vec![
                ColumnDef::action(
                    "Review Item",
                    ButtonStyle::Warning,
                    ActionEffect::Navigate(|row: &Self| Route::CreateReview {
                        item_id: row.id,
                        item_name: row.name.clone(),
                    }),
                ),
                ColumnDef::action(
                    "All Reviews",
                    ButtonStyle::Warning,
                    ActionEffect::Navigate(|row: &Self| Route::ItemReviews { item_id: row.id }),
                ),
            ],
        }]
    }
}
