use dining_business::{ROLE_ADMIN, Route, Viewer};
use dining_states::StateCtx;
use egui::Ui;

/// Top navigation: Home, Menu Items, Users (admins only) and who is signed in.
pub fn nav_bar(ctx: &mut StateCtx, ui: &mut Ui) {
    let current = ctx.state::<Route>().clone();
    let viewer = ctx.state::<Viewer>();
    let is_admin = viewer.has_role(ROLE_ADMIN);
    let who = viewer.email().unwrap_or("Not logged in").to_owned();

    let mut target = None;

    egui::MenuBar::new().ui(ui, |ui| {
        let mut link = |ui: &mut Ui, route: Route, label: &str| {
            if ui.selectable_label(current == route, label).clicked() {
                target = Some(route);
            }
        };

        link(ui, Route::Home, "Home");
        link(ui, Route::MenuItems, "Menu Items");
        if is_admin {
            link(ui, Route::AdminUsers, "Users");
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(who);
        });
    });

    if let Some(route) = target {
        ctx.update::<Route>(|current| *current = route);
    }
}
