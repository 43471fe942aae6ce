use dining_business::{MenuItemRow, load_if_idle};
use dining_states::StateCtx;
use egui::Ui;

use crate::widgets::grid_table;

pub fn show(ctx: &mut StateCtx, ui: &mut Ui) {
    load_if_idle::<MenuItemRow>(ctx);

    ui.heading("Menu Items");
    egui::ScrollArea::both().show(ui, |ui| {
        grid_table::<MenuItemRow>(ctx, ui);
    });
}
