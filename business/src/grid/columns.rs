use std::any::{Any, TypeId};
use std::fmt::{Debug, Formatter};

use dining_states::{Compute, ComputeDeps, Dep, State, Updater};
use serde::de::DeserializeOwned;

use crate::gateway::ActionKind;
use crate::route::Route;
use crate::rows::RowKey;
use crate::viewer::{RoleSet, Viewer};

/// Visual weight of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Info,
    Warning,
}

/// What clicking an action cell does.
pub enum ActionEffect<R> {
    /// Run a backend mutation keyed by the row.
    Mutate(ActionKind),
    /// Open a route derived from the row.
    Navigate(fn(&R) -> Route),
}

pub struct RowAction<R> {
    pub style: ButtonStyle,
    pub effect: ActionEffect<R>,
}

pub enum ColumnKind<R> {
    /// Pure accessor producing the cell text.
    Value(fn(&R) -> String),
    Action(RowAction<R>),
}

/// One column: display label, unique id, and how cells are produced.
pub struct ColumnDef<R> {
    pub header: &'static str,
    pub id: &'static str,
    pub kind: ColumnKind<R>,
}

impl<R> ColumnDef<R> {
    pub fn value(header: &'static str, id: &'static str, accessor: fn(&R) -> String) -> Self {
        Self {
            header,
            id,
            kind: ColumnKind::Value(accessor),
        }
    }

    /// Action columns use their label as id.
    pub fn action(label: &'static str, style: ButtonStyle, effect: ActionEffect<R>) -> Self {
        Self {
            header: label,
            id: label,
            kind: ColumnKind::Action(RowAction { style, effect }),
        }
    }

    pub fn is_action(&self) -> bool {
        matches!(self.kind, ColumnKind::Action(_))
    }
}

// Manual impls: fn pointers are always `Clone`, whatever `R` is.
impl<R> Clone for ActionEffect<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Mutate(kind) => Self::Mutate(*kind),
            Self::Navigate(route) => Self::Navigate(*route),
        }
    }
}

impl<R> Clone for RowAction<R> {
    fn clone(&self) -> Self {
        Self {
            style: self.style,
            effect: self.effect.clone(),
        }
    }
}

impl<R> Clone for ColumnKind<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(accessor) => Self::Value(*accessor),
            Self::Action(action) => Self::Action(action.clone()),
        }
    }
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        Self {
            header: self.header,
            id: self.id,
            kind: self.kind.clone(),
        }
    }
}

impl<R> Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.kind {
            ColumnKind::Value(_) => "value".to_owned(),
            ColumnKind::Action(action) => match action.effect {
                ActionEffect::Mutate(kind) => format!("mutate {kind:?}"),
                ActionEffect::Navigate(_) => "navigate".to_owned(),
            },
        };
        f.debug_struct("ColumnDef")
            .field("header", &self.header)
            .field("id", &self.id)
            .field("kind", &kind)
            .finish()
    }
}

/// Extra columns unlocked by one role tag.
pub struct Capability<R> {
    pub role: &'static str,
    pub columns: Vec<ColumnDef<R>>,
}

/// A row type the grid knows how to show.
pub trait GridEntity: Clone + Send + Sync + DeserializeOwned + 'static {
    /// Prefix of every cell and header address.
    const TABLE_ID: &'static str;
    /// `GET` path returning the whole collection.
    const COLLECTION_PATH: &'static str;

    fn key(&self) -> RowKey;

    /// Intrinsic display columns, in order.
    fn base_columns() -> Vec<ColumnDef<Self>>;

    /// Role-gated columns, in declaration order.
    fn capabilities() -> Vec<Capability<Self>>;
}

/// Base columns followed by every capability whose role the viewer holds.
///
/// Never fails; an empty role set yields the base columns only.
pub fn compose<R: GridEntity>(roles: &RoleSet) -> Vec<ColumnDef<R>> {
    let mut columns = R::base_columns();
    for capability in R::capabilities() {
        if roles.contains(capability.role) {
            columns.extend(capability.columns);
        }
    }
    columns
}

/// Columns for `R`, recomposed whenever the [`Viewer`] changes.
pub struct GridColumns<R> {
    columns: Vec<ColumnDef<R>>,
}

impl<R: GridEntity> GridColumns<R> {
    pub fn columns(&self) -> &[ColumnDef<R>] {
        &self.columns
    }
}

impl<R: GridEntity> Default for GridColumns<R> {
    fn default() -> Self {
        Self {
            columns: compose::<R>(&RoleSet::default()),
        }
    }
}

impl<R: GridEntity> Debug for GridColumns<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridColumns")
            .field("table", &R::TABLE_ID)
            .field("columns", &self.columns)
            .finish()
    }
}

impl<R: GridEntity> State for GridColumns<R> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<R: GridEntity> Compute for GridColumns<R> {
    fn deps(&self) -> ComputeDeps {
        vec![TypeId::of::<Viewer>()]
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let roles = deps
            .try_get_state_ref::<Viewer>()
            .map(Viewer::current_roles)
            .cloned()
            .unwrap_or_default();

        updater.set(Self {
            columns: compose::<R>(&roles),
        });
    }
}
