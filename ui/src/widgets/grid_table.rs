//! Generic table for any [`GridEntity`].
//!
//! Built on `egui::Grid`, not `egui_extras::TableBuilder` (no `egui_extras`
//! dependency here): every cell stays a plain widget, so kittest can find and
//! click buttons by label. Each header and cell is rendered under `push_id`
//! with its grid address, so widget ids follow `{table}-cell-row-{i}-col-{columnId}`.

use dining_business::{
    ActionInput, ActionLifecycles, ButtonStyle, CellContent, CellTrigger, GridColumns, GridEntity,
    GridView, RefreshRowsCommand, Route, RowsCompute, RunActionCommand,
};
use dining_states::StateCtx;
use egui::{Color32, RichText, Ui};
use log::info;

fn button_fill(style: ButtonStyle) -> Color32 {
    match style {
        ButtonStyle::Primary => Color32::from_rgb(13, 110, 253),
        ButtonStyle::Info => Color32::from_rgb(13, 202, 240),
        ButtonStyle::Warning => Color32::from_rgb(255, 193, 7),
    }
}

fn project<R: GridEntity>(ctx: &StateCtx) -> GridView {
    let columns = ctx
        .cached::<GridColumns<R>>()
        .map(GridColumns::columns)
        .unwrap_or_default();
    let rows = ctx
        .cached::<RowsCompute<R>>()
        .map(RowsCompute::rows)
        .unwrap_or_default();

    GridView::project(columns, rows)
}

/// Renders the table for `R` and runs whatever action cell was clicked.
pub fn grid_table<R: GridEntity>(ctx: &mut StateCtx, ui: &mut Ui) {
    let view = project::<R>(ctx);
    let lifecycles = ctx.state::<ActionLifecycles>().clone();

    if let Some(message) = ctx
        .cached::<RowsCompute<R>>()
        .and_then(RowsCompute::error_message)
    {
        ui.colored_label(Color32::from_rgb(220, 53, 69), message);
    }

    let mut clicked = None;

    egui::Grid::new(view.table)
        .striped(true)
        .num_columns(view.headers.len())
        .show(ui, |ui| {
            for header in &view.headers {
                ui.push_id(&header.test_id, |ui| {
                    ui.strong(header.label);
                });
            }
            ui.end_row();

            for row in &view.rows {
                for cell in row {
                    ui.push_id(&cell.test_id, |ui| match &cell.content {
                        CellContent::Text(text) => {
                            ui.label(text.as_str());
                        }
                        CellContent::Button {
                            label,
                            style,
                            test_id,
                            trigger,
                        } => {
                            // Only this row's own request disables its button.
                            let enabled = match trigger {
                                CellTrigger::Mutate { kind, key } => {
                                    !lifecycles.is_in_flight(*kind, *key)
                                }
                                CellTrigger::Navigate(_) => true,
                            };
                            let text = RichText::new(*label).color(Color32::BLACK);
                            let button = egui::Button::new(text).fill(button_fill(*style));

                            let response =
                                ui.push_id(test_id, |ui| ui.add_enabled(enabled, button));
                            if response.inner.clicked() {
                                clicked = Some(trigger.clone());
                            }
                        }
                    });
                }
                ui.end_row();
            }
        });

    if let Some(trigger) = clicked {
        run_trigger::<R>(ctx, trigger);
    }
}

fn run_trigger<R: GridEntity>(ctx: &mut StateCtx, trigger: CellTrigger) {
    match trigger {
        CellTrigger::Mutate { kind, key } => {
            let refresh = RefreshRowsCommand::<R>::callback(&ctx.updater());
            ctx.update::<ActionInput>(|input| {
                *input = ActionInput::new(kind, key).on_success(refresh);
            });
            ctx.dispatch::<RunActionCommand>();
        }
        CellTrigger::Navigate(route) => {
            info!("Navigating to {}", route.path());
            ctx.update::<Route>(|current| *current = route);
        }
    }
}
