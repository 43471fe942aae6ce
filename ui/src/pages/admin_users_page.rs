use dining_business::{UserRow, load_if_idle};
use dining_states::StateCtx;
use egui::Ui;

use crate::widgets::grid_table;

pub fn show(ctx: &mut StateCtx, ui: &mut Ui) {
    load_if_idle::<UserRow>(ctx);

    ui.heading("Users");
    egui::ScrollArea::both().show(ui, |ui| {
        grid_table::<UserRow>(ctx, ui);
    });
}
