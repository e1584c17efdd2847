//! Simulated content backend.
//!
//! Four operations, each resolving with catalog data after a fixed delay.
//! With the default [`ServiceConfig`] nothing ever fails; failures only come
//! from the [`FaultInjector`] or from opt-in contact validation.

use crate::catalog;
use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::timer::Timer;
use crate::token;
use crate::types::{
    Article, ContactSubmission, MetaData, Program, SubmissionReceipt, SubmissionStatus,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// The data service operations. Names match the `service.fail` config keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// [`DataService::fetch_meta`]
    FetchMeta,
    /// [`DataService::fetch_programs`]
    FetchPrograms,
    /// [`DataService::fetch_articles`]
    FetchArticles,
    /// [`DataService::submit_contact_form`]
    SubmitContactForm,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 4] = [
        Operation::FetchMeta,
        Operation::FetchPrograms,
        Operation::FetchArticles,
        Operation::SubmitContactForm,
    ];

    /// Config/log name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FetchMeta => "fetch_meta",
            Self::FetchPrograms => "fetch_programs",
            Self::FetchArticles => "fetch_articles",
            Self::SubmitContactForm => "submit_contact_form",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Test hook that turns calls into `ServiceUnavailable` failures.
///
/// Clones share state, so a handle taken from [`DataService::faults`] keeps
/// working after the service itself was cloned into a view.
#[derive(Clone, Debug, Default)]
pub struct FaultInjector {
    state: Arc<Mutex<FaultState>>,
}

#[derive(Debug, Default)]
struct FaultState {
    always: BTreeSet<Operation>,
    pending: BTreeMap<Operation, u32>,
}

impl FaultInjector {
    /// Injector with `ops` failing on every call.
    pub fn failing(ops: &[Operation]) -> Self {
        let injector = Self::default();
        for op in ops {
            injector.fail_always(*op);
        }
        injector
    }

    /// Fail the next call of `op` only. Calls stack.
    pub fn fail_next(&self, op: Operation) {
        *self.lock().pending.entry(op).or_insert(0) += 1;
    }

    /// Fail every call of `op` until [`FaultInjector::clear`].
    pub fn fail_always(&self, op: Operation) {
        self.lock().always.insert(op);
    }

    /// Drop every injected fault.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.always.clear();
        state.pending.clear();
    }

    /// Consume a fault for `op`, if one is armed.
    fn take(&self, op: Operation) -> Option<&'static str> {
        let mut state = self.lock();
        if state.always.contains(&op) {
            return Some("configured to fail");
        }
        match state.pending.get_mut(&op) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                if *remaining == 0 {
                    state.pending.remove(&op);
                }
                Some("injected failure")
            }
            _ => None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FaultState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Mock content backend.
///
/// Cheap to clone; clones share the fault injector.
#[derive(Clone, Debug)]
pub struct DataService<T> {
    timer: T,
    config: ServiceConfig,
    faults: FaultInjector,
}

impl<T: Timer> DataService<T> {
    /// Service waiting through `timer`, with faults pre-armed from `config.fail`.
    pub fn new(timer: T, config: ServiceConfig) -> Self {
        let faults = FaultInjector::failing(&config.fail);
        Self {
            timer,
            config,
            faults,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Fault injection handle.
    pub fn faults(&self) -> &FaultInjector {
        &self.faults
    }

    /// Brand, stats and offices.
    pub async fn fetch_meta(&self) -> Result<MetaData, ServiceError> {
        self.round_trip(Operation::FetchMeta).await?;
        Ok(catalog::meta())
    }

    /// Program pitches.
    pub async fn fetch_programs(&self) -> Result<Vec<Program>, ServiceError> {
        self.round_trip(Operation::FetchPrograms).await?;
        Ok(catalog::programs())
    }

    /// Insights articles, in display order.
    pub async fn fetch_articles(&self) -> Result<Vec<Article>, ServiceError> {
        self.round_trip(Operation::FetchArticles).await?;
        Ok(catalog::articles())
    }

    /// Accept a contact form. The payload is logged and dropped.
    ///
    /// Every call gets a fresh receipt id, even for identical payloads.
    pub async fn submit_contact_form(
        &self,
        submission: ContactSubmission,
    ) -> Result<SubmissionReceipt, ServiceError> {
        info!(
            fields = submission.len(),
            payload = %submission.to_json(),
            "Submitting contact form"
        );
        self.round_trip(Operation::SubmitContactForm).await?;

        if self.config.validate_contact {
            validate_contact(&submission)?;
        }

        let receipt = SubmissionReceipt {
            status: SubmissionStatus::Received,
            id: token::receipt_id(),
        };
        info!(id = %receipt.id, "Contact form received");
        Ok(receipt)
    }

    async fn round_trip(&self, op: Operation) -> Result<(), ServiceError> {
        let delay = self.config.delay_for(op);
        debug!(
            operation = %op,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "simulated request"
        );
        self.timer.sleep(delay).await;

        if let Some(reason) = self.faults.take(op) {
            warn!(operation = %op, reason, "request failed");
            return Err(ServiceError::ServiceUnavailable {
                operation: op,
                reason: reason.to_string(),
            });
        }
        Ok(())
    }
}

/// Minimal server-side check: a name and something shaped like an email.
fn validate_contact(submission: &ContactSubmission) -> Result<(), ServiceError> {
    let invalid = |field: &str, reason: &str| ServiceError::ValidationFailed {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    let name = submission.get("name").map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(invalid("name", "is required"));
    }

    let email = submission.get("email").map(str::trim).unwrap_or_default();
    let well_formed = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if !well_formed {
        return Err(invalid("email", "must look like name@example.com"));
    }

    Ok(())
}
