//! Review form for one menu item.
//!
//! The item name is shown read-only; comments, stars and the serving time are
//! editable. Submitting runs the `SubmitReview` mutation; the notices and the
//! redirect to `/myreviews` come from its callbacks.

use dining_business::review::submit_input;
use dining_business::{
    ActionInput, ActionKind, ActionLifecycles, ReviewForm, RowKey, RunActionCommand,
};
use dining_states::{StateCtx, Time};
use egui::Ui;

pub fn show(ctx: &mut StateCtx, ui: &mut Ui, item_id: RowKey, item_name: &str) {
    let time = *ctx.state::<Time>();
    ctx.state_mut::<ReviewForm>().open(item_id, item_name, &time);

    let pending = ctx
        .state::<ActionLifecycles>()
        .is_in_flight(ActionKind::SubmitReview, item_id);

    ui.heading(format!("Review: {item_name}"));
    ui.add_space(8.0);

    let form = ctx.state_mut::<ReviewForm>();
    egui::Grid::new("ReviewForm")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Item Name");
            let mut name = item_name.to_owned();
            ui.add_enabled(false, egui::TextEdit::singleline(&mut name));
            ui.end_row();

            ui.label("Comments");
            ui.text_edit_multiline(&mut form.draft.reviewer_comments);
            ui.end_row();

            ui.label("Stars");
            ui.add(egui::Slider::new(&mut form.draft.items_stars, 1..=5));
            ui.end_row();

            ui.label("Date and Time (iso format)");
            ui.text_edit_singleline(&mut form.draft.date_item_served);
            ui.end_row();
        });

    ui.add_space(8.0);
    if ui
        .add_enabled(!pending, egui::Button::new("Submit Review"))
        .clicked()
    {
        let draft = ctx.state::<ReviewForm>().draft.clone();
        let input = submit_input(item_id, item_name, draft, &ctx.updater());
        ctx.update::<ActionInput>(|slot| *slot = input);
        ctx.dispatch::<RunActionCommand>();
    }
}
