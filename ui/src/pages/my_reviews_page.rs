use egui::Ui;

pub fn show(ui: &mut Ui) {
    ui.heading("My Reviews");
    ui.label("Reviews you submit show up here once they are moderated.");
}
