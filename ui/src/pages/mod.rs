//! One module per route.

mod admin_users_page;
mod home_page;
mod item_reviews_page;
mod menu_items_page;
mod my_reviews_page;
mod review_create_page;

use dining_business::Route;
use dining_states::StateCtx;
use egui::Ui;

/// Renders the page for the current [`Route`].
pub fn show(ctx: &mut StateCtx, ui: &mut Ui) {
    let route = ctx.state::<Route>().clone();

    match route {
        Route::Home => home_page::show(ctx, ui),
        Route::AdminUsers => admin_users_page::show(ctx, ui),
        Route::MenuItems => menu_items_page::show(ctx, ui),
        Route::CreateReview { item_id, item_name } => {
            review_create_page::show(ctx, ui, item_id, &item_name);
        }
        Route::MyReviews => my_reviews_page::show(ui),
        Route::ItemReviews { item_id } => item_reviews_page::show(ui, item_id),
    }
}
