use dining_business::RowKey;
use egui::Ui;

pub fn show(ui: &mut Ui, item_id: RowKey) {
    ui.add_space(8.0);
    ui.heading(format!("Reviews for Menu Item {item_id}"));
    ui.label("Coming soon!");
}
