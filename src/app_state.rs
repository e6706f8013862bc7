use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{InMemorySessionRepository, SessionRepository},
    services::{
        model_service::{ModelService, OpenAiModelService},
        session_service::SessionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let session_repository = Arc::new(InMemorySessionRepository::new());
        let model_service = Arc::new(OpenAiModelService::new(&config));

        Self::with_services(config, session_repository, model_service)
    }

    /// Wires the state around any repository and model, e.g. stubs in tests.
    pub fn with_services(
        config: Config,
        session_repository: Arc<dyn SessionRepository>,
        model_service: Arc<dyn ModelService>,
    ) -> Self {
        let session_service = Arc::new(SessionService::new(session_repository, model_service));

        Self {
            session_service,
            config: Arc::new(config),
        }
    }
}
