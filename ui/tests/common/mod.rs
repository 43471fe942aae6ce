use std::time::Duration;

use dining_business::Route;
use dining_ui::DiningApp;
use dining_ui::state::State;
use egui_kittest::Harness;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const VIEWER_EMAIL: &str = "viewer@ucsb.edu";

pub struct TestCtx<'a> {
    pub mock_server: MockServer,
    harness: Harness<'a, DiningApp>,
}

impl<'a> TestCtx<'a> {
    /// Starts the app signed in with `roles`. No roles means `/api/currentUser` answers 401.
    pub async fn new(roles: &[&str]) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        let current_user = if roles.is_empty() {
            ResponseTemplate::new(401)
        } else {
            let grants: Vec<_> = roles
                .iter()
                .map(|role| serde_json::json!({ "authority": role }))
                .collect();
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "user": { "id": 99, "email": VIEWER_EMAIL, "givenName": "Viewer" },
                "roles": grants,
            }))
        };

        Mock::given(method("GET"))
            .and(path("/api/currentUser"))
            .respond_with(current_user)
            .mount(&mock_server)
            .await;

        let app = DiningApp::new(State::test(mock_server.uri()));
        let harness = Harness::builder()
            .with_size(egui::Vec2::new(1600.0, 900.0))
            .build_eframe(|_| app);

        let mut ctx = Self {
            mock_server,
            harness,
        };
        ctx.settle().await;
        ctx
    }

    #[allow(unused)]
    pub fn harness_mut(&mut self) -> &mut Harness<'a, DiningApp> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, DiningApp> {
        &self.harness
    }

    #[allow(unused)]
    pub fn route(&self) -> Route {
        self.harness.state().state().ctx.state::<Route>().clone()
    }

    pub async fn navigate(&mut self, route: Route) {
        self.harness
            .state_mut()
            .state_mut()
            .ctx
            .update::<Route>(|current| *current = route);
        self.settle().await;
    }

    /// Steps frames while spawned requests finish and their results sync back.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        self.harness.step();
    }
}
