use std::sync::Arc;

use crate::{
    config::Config,
    repositories::InMemorySessionRepository,
    services::{
        generation_service::GenerationService,
        model_client::{HttpModelClient, ModelClient, ModelError},
        session_service::SessionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub generation_service: Arc<GenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let repository = Arc::new(InMemorySessionRepository::new());
        let session_service = Arc::new(SessionService::new(repository));

        // Missing credential is reported once here; generation then runs
        // on the offline fallback generators instead of crashing.
        let client: Option<Arc<dyn ModelClient>> = match HttpModelClient::from_config(&config) {
            Ok(client) => Some(Arc::new(client)),
            Err(ModelError::Configuration) => {
                log::warn!(
                    "DEEPSEEK_API_KEY is not set; AI generation disabled, offline fallback content will be used"
                );
                None
            }
            Err(error) => {
                log::warn!("model client unavailable ({}); AI generation disabled", error);
                None
            }
        };
        let generation_service = Arc::new(GenerationService::new(client, config.temperature));

        Self {
            session_service,
            generation_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_without_credential() {
        let state = AppState::new(Config::test_config());
        assert!(state.config.api_key.is_none());
    }
}
