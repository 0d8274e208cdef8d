//! Calendar operations.

use serde_json::Value;

use crate::batch::{self, BatchEntry, IdParam};
use crate::endpoints;
use crate::options::ClientOptions;
use crate::request::{self, Verb};
use crate::transport::{HttpTransport, Transport};
use crate::validation;
use crate::{Error, Result};

/// Query parameters for [`Calendars::list`].
#[derive(Debug, Clone, Default)]
pub struct CalendarListParams {
    view: Option<CalendarView>,
    limit: Option<u32>,
    offset: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    Count,
    Ids,
}

impl CalendarView {
    fn as_str(self) -> &'static str {
        match self {
            CalendarView::Count => "count",
            CalendarView::Ids => "ids",
        }
    }
}

impl CalendarListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(mut self, view: CalendarView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.limit == Some(0) {
            return Err(Error::validation("limit", "must be at least 1"));
        }
        Ok(())
    }

    fn into_query(self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(view) = self.view {
            pairs.push(("view".to_string(), view.as_str().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }
        pairs
    }
}

/// Facade over the calendar endpoints.
pub struct Calendars {
    options: ClientOptions,
    transport: HttpTransport,
}

impl Calendars {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let transport = HttpTransport::new(options.timeout())?;
        Ok(Self { options, transport })
    }

    /// List calendars, optionally narrowed by view/limit/offset.
    pub async fn list(&self, params: CalendarListParams) -> Result<Value> {
        params.validate()?;
        validation::non_empty_string("access_token", self.options.access_token())?;

        let descriptor = request::build_one(&self.options, Verb::Get, endpoints::CALENDARS)
            .query(params.into_query());
        self.transport.execute(&descriptor).await
    }

    /// Fetch one or many calendars by id, concurrently.
    ///
    /// Returns one entry per input id, in input order, each either the
    /// fetched payload or that id's failure. A failing id does not abort
    /// the others.
    pub async fn get(&self, id: impl Into<IdParam>) -> Result<Vec<BatchEntry>> {
        batch::batch_call(
            &self.options,
            &self.transport,
            Verb::Get,
            endpoints::ONE_CALENDAR,
            id,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_serialize_in_declared_order() {
        let pairs = CalendarListParams::new()
            .view(CalendarView::Ids)
            .limit(5)
            .offset(10)
            .into_query();
        assert_eq!(
            pairs,
            vec![
                ("view".to_string(), "ids".to_string()),
                ("limit".to_string(), "5".to_string()),
                ("offset".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn zero_limit_is_rejected() {
        let err = CalendarListParams::new().limit(0).validate().unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }
}
