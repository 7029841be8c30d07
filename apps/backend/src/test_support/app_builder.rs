//! Test service builder: given an AppState, build an initialized Actix
//! test service with the production middleware chain.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::Error as ActixError;
use actix_web::{
    web::{self, ServiceConfig},
    App,
};

use crate::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use crate::state::app_state::AppState;

/// Function pointer for custom route configuration.
type RoutesFn = Box<dyn FnOnce(&mut ServiceConfig) + Send>;

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder {
        state,
        routes: None,
    }
}

pub struct TestAppBuilder {
    state: AppState,
    routes: Option<RoutesFn>,
}

impl TestAppBuilder {
    /// Use custom routes instead of `routes::configure`.
    pub fn with_routes<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut ServiceConfig) + Send + 'static,
    {
        self.routes = Some(Box::new(f));
        self
    }

    /// Build and initialize the Actix test service.
    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
        let app = App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(self.state));

        let app = match self.routes {
            Some(f) => app.configure(f),
            None => app.configure(crate::routes::configure),
        };

        actix_web::test::init_service(app).await
    }
}
