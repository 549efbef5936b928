//! Service abstractions for external services.
//!
//! The slot calculator never talks to the network itself; handlers fetch
//! through a [`ScheduleStore`], which lets tests swap in an in-memory store.

use chrono::NaiveDate;
use std::future::Future;
use std::pin::Pin;

use crate::error::AgendifyError;
use crate::models::{ScheduleRecord, ServiceRecord};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Read access to services and their schedules.
pub trait ScheduleStore: Send + Sync {
    /// Fetch one service with its scheduling configuration.
    fn fetch_service<'a>(
        &'a self,
        service_id: &'a str,
        token: Option<&'a str>,
    ) -> BoxFuture<'a, ServiceRecord, AgendifyError>;

    /// Fetch the schedule records of a service for one date.
    fn fetch_schedules<'a>(
        &'a self,
        service_id: &'a str,
        date: NaiveDate,
        token: Option<&'a str>,
    ) -> BoxFuture<'a, Vec<ScheduleRecord>, AgendifyError>;
}
