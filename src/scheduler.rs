//! Scheduling-page operations.
//!
//! Single-resource calls (list, create, update) validate and issue one
//! request; multi-id calls (get, delete) fan out concurrently and report
//! per-id outcomes in input order.

use serde_json::Value;

use crate::batch::{self, BatchEntry, IdParam};
use crate::endpoints;
use crate::options::{ClientOptions, Server};
use crate::request::{self, Verb};
use crate::transport::{HttpTransport, Transport};
use crate::validation;
use crate::Result;

/// Facade over the scheduling-page management endpoints.
pub struct SchedulingPages {
    options: ClientOptions,
    transport: HttpTransport,
}

impl SchedulingPages {
    /// Build the facade. Requests go to the scheduler server unless the
    /// options carry an explicit base-URL override.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let options = options.with_server(Server::Scheduler);
        let transport = HttpTransport::new(options.timeout())?;
        Ok(Self { options, transport })
    }

    /// List scheduling pages. Query pairs are passed through as-is.
    pub async fn list(&self, query: Vec<(String, String)>) -> Result<Value> {
        validation::non_empty_string("access_token", self.options.access_token())?;

        let descriptor = request::build_one(&self.options, Verb::Get, endpoints::SCHEDULING_PAGES)
            .query(query);
        self.transport.execute(&descriptor).await
    }

    /// Create a scheduling page from a JSON body.
    pub async fn create(&self, params: Value) -> Result<Value> {
        validation::scheduling_page_rules(&params)?;
        validation::non_empty_string("access_token", self.options.access_token())?;

        let descriptor = request::build_one(&self.options, Verb::Post, endpoints::SCHEDULING_PAGES)
            .body(params);
        self.transport.execute(&descriptor).await
    }

    /// Fetch one or many scheduling pages by id, concurrently.
    pub async fn get(&self, id: impl Into<IdParam>) -> Result<Vec<BatchEntry>> {
        batch::batch_call(
            &self.options,
            &self.transport,
            Verb::Get,
            endpoints::ONE_SCHEDULING_PAGE,
            id,
        )
        .await
    }

    /// Update one scheduling page.
    pub async fn update(&self, id: &str, params: Value) -> Result<Value> {
        validation::scheduling_page_rules(&params)?;
        validation::non_empty_string("id", id)?;
        validation::non_empty_string("access_token", self.options.access_token())?;

        let descriptor =
            request::build_for_id(&self.options, Verb::Put, endpoints::ONE_SCHEDULING_PAGE, id)
                .body(params);
        self.transport.execute(&descriptor).await
    }

    /// Delete one or many scheduling pages by id, concurrently.
    ///
    /// Same contract as [`SchedulingPages::get`]: one entry per input id, in
    /// input order, failures isolated per id.
    pub async fn delete(&self, id: impl Into<IdParam>) -> Result<Vec<BatchEntry>> {
        batch::batch_call(
            &self.options,
            &self.transport,
            Verb::Delete,
            endpoints::ONE_SCHEDULING_PAGE,
            id,
        )
        .await
    }
}
