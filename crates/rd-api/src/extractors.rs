//! Application state and request extractors

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use rd_core::config::AppConfig;
use rd_core::traits::Clock;
use rd_services::{AllocationService, EscalationClassifier, EscalationService, ScenarioService};
use rd_store::MemoryStore;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Shared handler state; cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub allocation: AllocationService<MemoryStore>,
    pub escalation: EscalationService<MemoryStore>,
    pub scenarios: ScenarioService,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<MemoryStore>, config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            allocation: AllocationService::new(Arc::clone(&store), config.allocation),
            escalation: EscalationService::new(
                store,
                EscalationClassifier::new(config.escalation),
                Arc::clone(&clock),
            ),
            scenarios: ScenarioService::default(),
            clock,
        }
    }
}

/// JSON body whose parse failures are reported in the API error format
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    ApiError::bad_request(rejection.body_text())
}
