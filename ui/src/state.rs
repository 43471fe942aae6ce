use dining_business::{
    ActionInput, ActionLifecycles, BusinessConfig, GridColumns, MenuItemRow, Notices, ReviewForm,
    Route, RowsCompute, UserRow, Viewer,
};
use dining_states::{StateCtx, Time};

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(config);
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

        Self { ctx }
    }

    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }
}
