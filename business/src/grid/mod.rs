//! Role-gated data grid: column composition and cell addressing.
//!
//! - `columns`: column definitions, the capability table and [`compose`].
//! - `format`: display formatting for booleans and approval status.
//! - `entities`: the user and menu item tables.
//! - `view`: projection of columns and rows into addressable cells.

mod columns;
mod entities;
pub mod format;
mod view;

pub use columns::{
    ActionEffect, ButtonStyle, Capability, ColumnDef, ColumnKind, GridColumns, GridEntity,
    RowAction, compose,
};
pub use entities::{MENU_ITEM_TABLE, USERS_TABLE};
pub use view::{CellContent, CellTrigger, GridCell, GridHeader, GridView, cell_id, header_id};
