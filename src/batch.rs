//! Batched concurrent fetch-and-reconcile.
//!
//! Multi-id operations fan one request per id out over the transport, let
//! them complete in whatever order the network dictates, and reassemble a
//! single ordered result sequence that lines up positionally with the
//! caller's input. Position is the correlation key throughout: ids may
//! repeat, so slot i of the output always pertains to id i of the input,
//! never to "the id with this value".
//!
//! One failing request does not abort its siblings in [`FailureMode::Isolate`]
//! (the mode every facade uses); its failure is folded into the entry at its
//! slot instead. [`FailureMode::FailFast`] escalates the first failure to a
//! single call-level error and drops the outstanding requests.

use futures::future::join_all;
use futures::stream::{FuturesUnordered, StreamExt};
use serde_json::Value;

use crate::options::ClientOptions;
use crate::request::{self, RequestDescriptor, Verb};
use crate::transport::Transport;
use crate::validation;
use crate::{Error, Result};

/// A single resource id or an ordered collection of them.
///
/// Normalized at the boundary into one canonical ordered sequence; order and
/// duplicates are preserved, nothing is deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdParam {
    Single(String),
    Many(Vec<String>),
}

impl IdParam {
    /// Canonical ordered id sequence.
    pub fn into_ids(self) -> Vec<String> {
        match self {
            IdParam::Single(id) => vec![id],
            IdParam::Many(ids) => ids,
        }
    }
}

impl From<&str> for IdParam {
    fn from(id: &str) -> Self {
        IdParam::Single(id.to_string())
    }
}

impl From<String> for IdParam {
    fn from(id: String) -> Self {
        IdParam::Single(id)
    }
}

impl From<Vec<String>> for IdParam {
    fn from(ids: Vec<String>) -> Self {
        IdParam::Many(ids)
    }
}

impl From<Vec<&str>> for IdParam {
    fn from(ids: Vec<&str>) -> Self {
        IdParam::Many(ids.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for IdParam {
    fn from(ids: &[&str]) -> Self {
        IdParam::Many(ids.iter().map(|id| id.to_string()).collect())
    }
}

/// What a single failing request does to the rest of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Run everything to completion; report each failure at its own slot.
    Isolate,
    /// Abort on the first failure and surface it as the call's single error.
    /// Outstanding requests are dropped, which cancels them best-effort.
    FailFast,
}

/// Per-slot outcome of one executed descriptor.
pub type Outcome = std::result::Result<Value, Error>;

/// Execute all descriptors concurrently, returning one outcome per slot.
///
/// Slot i of the output corresponds to descriptor i regardless of the order
/// in which the underlying requests actually complete. No concurrency cap is
/// applied; all requests are launched at once.
pub async fn execute_batch<T>(
    transport: &T,
    descriptors: &[RequestDescriptor],
    mode: FailureMode,
) -> Result<Vec<Outcome>>
where
    T: Transport + ?Sized,
{
    match mode {
        FailureMode::Isolate => {
            // join_all polls all futures concurrently and yields results in
            // input order, which carries the positional invariant for free.
            let outcomes = join_all(descriptors.iter().map(|d| transport.execute(d))).await;
            Ok(outcomes)
        }
        FailureMode::FailFast => {
            let mut pending: FuturesUnordered<_> = descriptors
                .iter()
                .enumerate()
                .map(|(slot, descriptor)| async move {
                    (slot, transport.execute(descriptor).await)
                })
                .collect();

            let mut completed: Vec<(usize, Value)> = Vec::with_capacity(descriptors.len());
            while let Some((slot, outcome)) = pending.next().await {
                // `?` drops `pending`, abandoning the in-flight requests.
                completed.push((slot, outcome?));
            }

            // Completion order is arbitrary; re-slot by index.
            completed.sort_unstable_by_key(|(slot, _)| *slot);
            Ok(completed.into_iter().map(|(_, v)| Ok(v)).collect())
        }
    }
}

/// Resolution of one id within a batch result.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOutcome {
    Success(Value),
    Failure { code: String, message: String },
}

/// One entry of a batch result: the original id plus how it resolved.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BatchEntry {
    pub id: String,
    pub outcome: BatchOutcome,
}

impl BatchEntry {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, BatchOutcome::Success(_))
    }

    pub fn payload(&self) -> Option<&Value> {
        match self.outcome {
            BatchOutcome::Success(ref payload) => Some(payload),
            BatchOutcome::Failure { .. } => None,
        }
    }

    /// Error code and message, if this entry failed.
    pub fn error(&self) -> Option<(&str, &str)> {
        match self.outcome {
            BatchOutcome::Success(_) => None,
            BatchOutcome::Failure {
                ref code,
                ref message,
            } => Some((code, message)),
        }
    }
}

/// Zip the original id sequence with the executor's outcome sequence by
/// positional index.
///
/// Pure function. A length mismatch between the two sequences is a bug in the
/// executor, not a recoverable condition.
pub fn reconcile(ids: Vec<String>, outcomes: Vec<Outcome>) -> Vec<BatchEntry> {
    assert_eq!(
        ids.len(),
        outcomes.len(),
        "executor must yield exactly one outcome per id"
    );

    ids.into_iter()
        .zip(outcomes)
        .map(|(id, outcome)| BatchEntry {
            id,
            outcome: match outcome {
                Ok(payload) => BatchOutcome::Success(payload),
                Err(e) => BatchOutcome::Failure {
                    code: e.code(),
                    message: e.to_string(),
                },
            },
        })
        .collect()
}

/// The shared multi-id operation: normalize, validate, build one descriptor
/// per id, execute concurrently in isolate mode, reconcile.
///
/// Validation is the all-or-nothing gate: any empty id or an empty access
/// token rejects the whole batch before a single request is issued.
pub(crate) async fn batch_call<T>(
    options: &ClientOptions,
    transport: &T,
    verb: Verb,
    template: &str,
    param: impl Into<IdParam>,
) -> Result<Vec<BatchEntry>>
where
    T: Transport + ?Sized,
{
    let ids = param.into().into_ids();

    validation::each_non_empty("ids", &ids)?;
    validation::non_empty_string("access_token", options.access_token())?;

    let descriptors = request::build_many(options, verb, template, &ids);

    tracing::debug!(count = ids.len(), verb = verb.as_str(), template, "executing batch");

    let outcomes = execute_batch(transport, &descriptors, FailureMode::Isolate).await?;
    Ok(reconcile(ids, outcomes))
}
