//! Review submission: query parameters, notices and navigation.

mod common;

use common::TestCtx;
use dining_business::review::submit_input;
use dining_business::{
    ActionInput, ActionKind, ActionLifecycles, NoticeLevel, Notices, ReviewDraft, Route, RowKey,
    RunActionCommand,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn draft() -> ReviewDraft {
    ReviewDraft {
        reviewer_comments: "Yummy!".to_owned(),
        items_stars: 4,
        date_item_served: "2024-04-01T10:00".to_owned(),
    }
}

async fn submit(ctx: &mut TestCtx, item_id: i64, item_name: &str) {
    let input = submit_input(RowKey(item_id), item_name, draft(), &ctx.ctx.updater());
    ctx.ctx.update::<ActionInput>(|slot| *slot = input);
    ctx.ctx.dispatch::<RunActionCommand>().finished().await;
    ctx.ctx.sync_computes();
}

#[tokio::test]
async fn successful_submit_navigates_to_my_reviews() {
    let mut ctx = TestCtx::new().await;
    ctx.ctx.update::<Route>(|route| {
        *route = Route::CreateReview {
            item_id: RowKey(42),
            item_name: "Spaghetti".to_owned(),
        };
    });

    Mock::given(method("POST"))
        .and(path("/api/reviews/post"))
        .and(query_param("itemId", "42"))
        .and(query_param("reviewerComments", "Yummy!"))
        .and(query_param("itemsStars", "4"))
        .and(query_param("dateItemServed", "2024-04-01T10:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 17})))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    submit(&mut ctx, 42, "Spaghetti").await;

    assert_eq!(*ctx.ctx.state::<Route>(), Route::MyReviews);
    let notice = ctx.ctx.state::<Notices>().current.clone();
    assert_eq!(
        notice.map(|n| (n.level, n.message)),
        Some((NoticeLevel::Info, "Review submitted for Spaghetti".to_owned()))
    );
}

#[tokio::test]
async fn failed_submit_stays_and_reports() {
    let mut ctx = TestCtx::new().await;
    let create = Route::CreateReview {
        item_id: RowKey(42),
        item_name: "Spaghetti".to_owned(),
    };
    let expected_route = create.clone();
    ctx.ctx.update::<Route>(move |route| *route = create);

    Mock::given(method("POST"))
        .and(path("/api/reviews/post"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "message": "Item does not exist"
        })))
        .mount(&ctx.mock_server)
        .await;

    submit(&mut ctx, 42, "Spaghetti").await;

    assert_eq!(*ctx.ctx.state::<Route>(), expected_route);
    let notice = ctx.ctx.state::<Notices>().current.clone();
    assert_eq!(
        notice.map(|n| (n.level, n.message)),
        Some((
            NoticeLevel::Error,
            "Error submitting review: Item does not exist".to_owned()
        ))
    );
    assert_eq!(
        ctx.ctx
            .state::<ActionLifecycles>()
            .last_error(ActionKind::SubmitReview),
        Some("Item does not exist")
    );
}
