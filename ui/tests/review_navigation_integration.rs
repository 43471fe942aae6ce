mod common;

use common::TestCtx;
use dining_business::{ROLE_USER, Route, RowKey};
use kittest::Queryable;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

async fn user_on_menu_items() -> TestCtx<'static> {
    let mut ctx = TestCtx::new(&[ROLE_USER]).await;

    Mock::given(method("GET"))
        .and(path("/api/menuitems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "name": "Oatmeal (vgn)", "station": "Breakfast" }
        ])))
        .mount(&ctx.mock_server)
        .await;

    ctx.navigate(Route::MenuItems).await;
    ctx
}

#[tokio::test]
async fn review_item_opens_the_form_for_that_row() {
    let mut ctx = user_on_menu_items().await;

    assert!(ctx.harness().query_by_label("Oatmeal (vgn)").is_some());
    assert_eq!(ctx.harness().query_all_by_label("Review Item").count(), 2);

    ctx.harness()
        .query_all_by_label("Review Item")
        .last()
        .expect("row button")
        .click();
    ctx.settle().await;

    assert_eq!(
        ctx.route().path(),
        "/myreviews/create?itemId=1&itemName=Oatmeal%20(vgn)"
    );
    assert!(ctx.harness().query_by_label("Review: Oatmeal (vgn)").is_some());
    assert!(ctx.harness().query_by_label("Submit Review").is_some());
}

#[tokio::test]
async fn all_reviews_opens_the_item_page() {
    let mut ctx = user_on_menu_items().await;

    ctx.harness()
        .query_all_by_label("All Reviews")
        .last()
        .expect("row button")
        .click();
    ctx.settle().await;

    assert_eq!(ctx.route().path(), "/reviews/1");
    assert!(ctx.harness().query_by_label("Coming soon!").is_some());
}

#[tokio::test]
async fn submitting_a_review_redirects_to_my_reviews() {
    let mut ctx = TestCtx::new(&[ROLE_USER]).await;

    Mock::given(method("POST"))
        .and(path("/api/reviews/post"))
        .and(query_param("itemId", "1"))
        .and(query_param("itemsStars", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 17 })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    ctx.navigate(Route::CreateReview {
        item_id: RowKey(1),
        item_name: "Oatmeal (vgn)".to_owned(),
    })
    .await;

    ctx.harness().get_by_label("Submit Review").click();
    ctx.settle().await;

    assert_eq!(ctx.route(), Route::MyReviews);
    assert!(ctx.harness().query_by_label("My Reviews").is_some());
    assert!(
        ctx.harness()
            .query_by_label("Review submitted for Oatmeal (vgn)")
            .is_some()
    );

    ctx.mock_server.verify().await;
}

#[tokio::test]
async fn rejected_review_stays_on_the_form() {
    let mut ctx = TestCtx::new(&[ROLE_USER]).await;

    Mock::given(method("POST"))
        .and(path("/api/reviews/post"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "message": "Stars out of range" })),
        )
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    ctx.navigate(Route::CreateReview {
        item_id: RowKey(1),
        item_name: "Oatmeal (vgn)".to_owned(),
    })
    .await;

    ctx.harness().get_by_label("Submit Review").click();
    ctx.settle().await;

    assert!(matches!(ctx.route(), Route::CreateReview { .. }));
    assert!(
        ctx.harness()
            .query_by_label("Error submitting review: Stars out of range")
            .is_some()
    );

    ctx.harness().get_by_label("Dismiss").click();
    ctx.settle().await;
    assert!(ctx.harness().query_by_label("Dismiss").is_none());
}
