//! Domain layer of the dining admin client.
//!
//! Holds everything the UI reads and dispatches: the current viewer, row
//! sources, the role-gated grid composer, the mutation gateway and the request
//! lifecycle around it. No rendering happens here.

pub mod config;
pub mod dispatch;
pub mod gateway;
pub mod grid;
pub mod http;
pub mod lifecycle;
pub mod review;
pub mod route;
pub mod rows;
pub mod source;
pub mod viewer;

pub use config::BusinessConfig;
pub use dispatch::{
    ActionDispatcher, ActionInput, ActionOutcome, BoundAction, OnFailure, OnSuccess,
    RunActionCommand,
};
pub use gateway::{
    ActionKind, ActionPayload, GatewayError, HttpMutationGateway, MutationGateway,
    MutationRequest,
};
pub use grid::{
    ButtonStyle, CellContent, CellTrigger, ColumnDef, GridColumns, GridEntity, GridView, compose,
};
pub use lifecycle::{ActionLifecycles, RequestLifecycle, RequestStatus};
pub use review::{Notice, NoticeLevel, Notices, ReviewDraft, ReviewForm};
pub use route::Route;
pub use rows::{MenuItemRow, RowKey, UserRow};
pub use source::{FetchError, RefreshRowsCommand, RowsCompute, RowsResult, load_if_idle};
pub use viewer::{
    ROLE_ADMIN, ROLE_MODERATOR, ROLE_USER, RefreshViewerCommand, RoleSet, Viewer, ViewerIdentity,
};
