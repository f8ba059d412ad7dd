//! Health checks
//!
//! The only component is the in-memory store; an empty stakeholder
//! directory reports as degraded since no utilization can be computed.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rd_store::MemoryStore;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy | Self::Degraded)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: Vec<ComponentHealth>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthReport {
    pub fn http_status(&self) -> StatusCode {
        if self.status.is_healthy() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

pub struct HealthChecker {
    start_time: Instant,
    store: Arc<MemoryStore>,
}

impl HealthChecker {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            start_time: Instant::now(),
            store,
        }
    }

    pub fn check(&self) -> HealthReport {
        let store = self.check_store();
        debug!(status = ?store.status, "health check");

        HealthReport {
            status: store.status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            components: vec![store],
            timestamp: chrono::Utc::now(),
        }
    }

    fn check_store(&self) -> ComponentHealth {
        let stakeholders = self.store.stakeholder_count();
        let tasks = self.store.task_count();

        let (status, message) = if stakeholders == 0 {
            (HealthStatus::Degraded, "No stakeholders loaded")
        } else {
            (HealthStatus::Healthy, "Store loaded")
        };

        ComponentHealth {
            name: "store".to_string(),
            status,
            message: Some(message.to_string()),
            details: Some(serde_json::json!({
                "stakeholders": stakeholders,
                "tasks": tasks
            })),
        }
    }
}

/// Liveness probe
pub async fn liveness() -> &'static str {
    "OK"
}

/// Full health report
pub async fn health(State(checker): State<Arc<HealthChecker>>) -> (StatusCode, Json<HealthReport>) {
    let report = checker.check();
    (report.http_status(), Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rd_store::seed;

    #[test]
    fn test_demo_store_is_healthy() {
        let checker = HealthChecker::new(Arc::new(seed::demo_store().unwrap()));
        let report = checker.check();

        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.components[0].details.as_ref().unwrap()["tasks"], 20);
    }

    #[test]
    fn test_empty_store_is_degraded() {
        let checker = HealthChecker::new(Arc::new(MemoryStore::new()));
        let report = checker.check();

        assert_eq!(report.status, HealthStatus::Degraded);
        assert_eq!(report.http_status(), StatusCode::OK);
    }
}
