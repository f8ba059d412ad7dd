//! API handlers

pub mod allocation;
pub mod escalations;
pub mod scenarios;
pub mod stakeholders;
pub mod tasks;

use serde::Serialize;

/// List response wrapper
#[derive(Debug, Serialize)]
pub struct Collection<T: Serialize> {
    #[serde(rename = "_type")]
    pub type_name: &'static str,
    pub total: usize,
    pub count: usize,
    pub elements: Vec<T>,
}

impl<T: Serialize> Collection<T> {
    pub fn new(elements: Vec<T>) -> Self {
        Self {
            type_name: "Collection",
            total: elements.len(),
            count: elements.len(),
            elements,
        }
    }
}
