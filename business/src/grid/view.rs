//! Projection of columns and rows into addressable cells.
//!
//! Addresses are stable and part of the public contract:
//! - header: `{table}-header-{columnId}`
//! - cell: `{table}-cell-row-{rowIndex}-col-{columnId}`
//! - action control: the cell address plus `-button`

use crate::gateway::ActionKind;
use crate::grid::columns::{ActionEffect, ButtonStyle, ColumnDef, ColumnKind, GridEntity};
use crate::route::Route;
use crate::rows::RowKey;

pub fn header_id(table: &str, column_id: &str) -> String {
    format!("{table}-header-{column_id}")
}

pub fn cell_id(table: &str, row_index: usize, column_id: &str) -> String {
    format!("{table}-cell-row-{row_index}-col-{column_id}")
}

/// What an action cell does for its row, already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellTrigger {
    Mutate { kind: ActionKind, key: RowKey },
    Navigate(Route),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Text(String),
    Button {
        label: &'static str,
        style: ButtonStyle,
        test_id: String,
        trigger: CellTrigger,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub test_id: String,
    pub content: CellContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridHeader {
    pub label: &'static str,
    pub test_id: String,
}

/// Rendered table, independent of any widget toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub table: &'static str,
    pub headers: Vec<GridHeader>,
    pub rows: Vec<Vec<GridCell>>,
}

impl GridView {
    pub fn project<R: GridEntity>(columns: &[ColumnDef<R>], rows: &[R]) -> Self {
        let table = R::TABLE_ID;

        let headers = columns
            .iter()
            .map(|column| GridHeader {
                label: column.header,
                test_id: header_id(table, column.id),
            })
            .collect();

        let rows = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                columns
                    .iter()
                    .map(|column| project_cell(table, index, column, row))
                    .collect()
            })
            .collect();

        Self {
            table,
            headers,
            rows,
        }
    }

    /// Looks up a cell or an action control by address.
    pub fn find(&self, test_id: &str) -> Option<&GridCell> {
        self.rows.iter().flatten().find(|cell| {
            cell.test_id == test_id
                || matches!(&cell.content, CellContent::Button { test_id: id, .. } if id == test_id)
        })
    }

    pub fn header(&self, test_id: &str) -> Option<&GridHeader> {
        self.headers.iter().find(|header| header.test_id == test_id)
    }

    pub fn button_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| matches!(cell.content, CellContent::Button { .. }))
            .count()
    }
}

fn project_cell<R: GridEntity>(
    table: &str,
    index: usize,
    column: &ColumnDef<R>,
    row: &R,
) -> GridCell {
    let test_id = cell_id(table, index, column.id);

    let content = match &column.kind {
        ColumnKind::Value(accessor) => CellContent::Text(accessor(row)),
        ColumnKind::Action(action) => CellContent::Button {
            label: column.header,
            style: action.style,
            test_id: format!("{test_id}-button"),
            trigger: match action.effect {
                ActionEffect::Mutate(kind) => CellTrigger::Mutate {
                    kind,
                    key: row.key(),
                },
                ActionEffect::Navigate(route) => CellTrigger::Navigate(route(row)),
            },
        },
    };

    GridCell { test_id, content }
}
