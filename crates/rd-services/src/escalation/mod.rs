//! Escalation classifier and store-wide scans

mod classifier;
mod level;

pub use classifier::{escalation_message, EscalationClassifier, EscalationResult};
pub use level::{EscalationAction, EscalationLevel, EscalationRole};

use std::sync::Arc;

use rd_core::result::RdResult;
use rd_core::traits::Clock;
use rd_models::{Task, TaskInput};
use rd_store::TaskRepository;
use tracing::info;

/// Runs the classifier against the store using an injected clock
pub struct EscalationService<S: TaskRepository> {
    store: Arc<S>,
    classifier: EscalationClassifier,
    clock: Arc<dyn Clock>,
}

impl<S: TaskRepository> Clone for EscalationService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            classifier: self.classifier,
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S: TaskRepository> EscalationService<S> {
    pub fn new(store: Arc<S>, classifier: EscalationClassifier, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            classifier,
            clock,
        }
    }

    pub fn classifier(&self) -> &EscalationClassifier {
        &self.classifier
    }

    pub fn process_task(&self, task: &Task) -> Option<EscalationResult> {
        self.classifier.process_task(task, self.clock.today())
    }

    pub fn process_tasks(&self, tasks: &[Task]) -> Vec<EscalationResult> {
        self.classifier.process_tasks(tasks, self.clock.today())
    }

    pub fn process_inputs(&self, inputs: Vec<TaskInput>) -> RdResult<Vec<EscalationResult>> {
        self.classifier.process_inputs(inputs, self.clock.today())
    }

    /// Classify every stored task, most severe first, then nearest deadline
    pub async fn scan(&self) -> RdResult<Vec<EscalationResult>> {
        let tasks = self.store.list_tasks().await?;
        let mut results = self.process_tasks(&tasks);
        results.sort_by(|a, b| {
            b.level
                .cmp(&a.level)
                .then(a.days_until_due.cmp(&b.days_until_due))
        });

        info!(
            scanned = tasks.len(),
            escalated = results.len(),
            "escalation scan complete"
        );
        Ok(results)
    }
}
