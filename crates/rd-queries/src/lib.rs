//! # rd-queries
//!
//! Filtering and sorting of task lists, as used by the allocation board.
//!
//! ## Structure
//!
//! - `filters` - `TaskFilter` and due-date windows
//! - `sorts` - sort keys and directions
//!
//! ## Example
//!
//! ```ignore
//! use rd_queries::{TaskFilter, TaskSort};
//!
//! let filter = TaskFilter::new().search("dashboard").priority(Priority::High);
//! let mut tasks = filter.apply(tasks, today);
//! "priority_desc".parse::<TaskSort>()?.apply(&mut tasks);
//! ```

pub mod filters;
pub mod sorts;

pub use filters::{DueWindow, TaskFilter};
pub use sorts::{SortDirection, TaskSort, TaskSortKey};
