use std::time::Duration;

use dining_business::{
    ActionInput, ActionLifecycles, BusinessConfig, GridColumns, MenuItemRow, Notices, ReviewForm,
    Route, RowsCompute, UserRow, Viewer,
};
use dining_states::{StateCtx, Time};
use wiremock::MockServer;

pub struct TestCtx {
    pub mock_server: MockServer,
    pub ctx: StateCtx,
}

impl TestCtx {
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        let mut ctx = StateCtx::new();
        ctx.add_state(Time::default());
        ctx.add_state(BusinessConfig::new(mock_server.uri()));
        ctx.add_state(Viewer::anonymous());
        ctx.add_state(Route::default());
        ctx.add_state(ActionInput::default());
        ctx.add_state(ActionLifecycles::default());
        ctx.add_state(ReviewForm::default());
        ctx.add_state(Notices::default());
        ctx.record_compute(RowsCompute::<UserRow>::default());
        ctx.record_compute(RowsCompute::<MenuItemRow>::default());
        ctx.record_compute(GridColumns::<UserRow>::default());
        ctx.record_compute(GridColumns::<MenuItemRow>::default());
        ctx.run_computed();
        ctx.sync_computes();

        Self { mock_server, ctx }
    }

    /// Runs frames until `done` holds, panicking after two seconds.
    pub async fn run_until(&mut self, what: &str, done: impl Fn(&StateCtx) -> bool) {
        for _ in 0..200 {
            self.ctx.sync_computes();
            self.ctx.run_computed();
            self.ctx.sync_computes();
            if done(&self.ctx) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("timed out waiting for {what}");
    }

    /// Lets spawned work run for a moment and applies whatever it reported.
    pub async fn idle(&mut self) {
        for _ in 0..10 {
            tokio::time::sleep(Duration::from_millis(10)).await;
            self.ctx.sync_computes();
            self.ctx.run_computed();
        }
        self.ctx.sync_computes();
    }
}
