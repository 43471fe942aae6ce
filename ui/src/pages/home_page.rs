use dining_business::{Route, Viewer};
use dining_states::StateCtx;
use egui::Ui;

pub fn show(ctx: &mut StateCtx, ui: &mut Ui) {
    ui.heading("Dining Commons Reviews");

    let greeting = match ctx.state::<Viewer>().email() {
        Some(email) => format!("Signed in as {email}."),
        None => "Log in to review menu items.".to_owned(),
    };
    ui.label(greeting);

    ui.add_space(8.0);
    if ui.button("Browse menu items").clicked() {
        ctx.update::<Route>(|route| *route = Route::MenuItems);
    }
}
