use std::time::Duration;

use chrono::Utc;
use dining_business::RefreshViewerCommand;
use dining_states::Time;

use crate::{pages, state::State, widgets};

pub struct DiningApp {
    state: State,
}

impl DiningApp {
    /// Called once before the first frame. Starts resolving the current viewer.
    pub fn new(mut state: State) -> Self {
        state.ctx.dispatch::<RefreshViewerCommand>();
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for DiningApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply results of finished commands before rendering.
        self.state.ctx.sync_computes();
        self.state.ctx.update::<Time>(|time| time.set(Utc::now()));

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            widgets::nav_bar(&mut self.state.ctx, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::notice_banner(&mut self.state.ctx, ui);
            pages::show(&mut self.state.ctx, ui);
        });

        self.state.ctx.run_computed();

        // Command results arrive off-frame; poll for them.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
