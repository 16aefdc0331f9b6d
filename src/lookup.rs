// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Sequential lookup of multiple record types for one domain.
//!
//! Record types are queried one after another with a pause in between. The outcome of each query is classified
//! and stored in [`LookupResults`]:
//!
//! * records found: the textual representation of each record,
//! * no records of this type: the single placeholder [`NO_RECORDS_FOUND`],
//! * any other error: a single string `"error: <description>"`.
//!
//! If the domain does not exist at all, the whole lookup is aborted with [`Error::DomainNotFound`] and results
//! gathered so far are discarded.

use std::collections::HashSet;
use std::time::Duration;

use indexmap::map::Iter;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::resolver::{self, parse_name, RecordLookup, ResolverResult, UniQuery};
use crate::{Error, Result};

pub static NO_RECORDS_FOUND: &str = "no records found";

pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct LookupOpts {
    /// Pause between two consecutive queries
    pub throttle: Duration,
}

impl LookupOpts {
    pub fn with_throttle(throttle: Duration) -> LookupOpts {
        LookupOpts { throttle }
    }
}

impl Default for LookupOpts {
    fn default() -> Self {
        LookupOpts {
            throttle: DEFAULT_THROTTLE,
        }
    }
}

/// Ordered mapping from record type to its results; iteration follows the order of the requested record types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupResults {
    inner: IndexMap<String, Vec<String>>,
}

impl LookupResults {
    pub fn new() -> LookupResults {
        LookupResults::default()
    }

    pub(crate) fn insert<T: Into<String>>(&mut self, record_type: T, values: Vec<String>) {
        self.inner.insert(record_type.into(), values);
    }

    pub fn get(&self, record_type: &str) -> Option<&Vec<String>> {
        self.inner.get(record_type)
    }

    pub fn record_types(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, Vec<String>> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of records found over all record types; placeholders and errors do not count.
    pub fn num_records(&self) -> usize {
        self.inner
            .values()
            .filter(|values| !is_placeholder_or_error(values))
            .map(Vec::len)
            .sum()
    }

    /// Number of record types whose lookup failed.
    pub fn num_errors(&self) -> usize {
        self.inner
            .values()
            .filter(|values| matches!(values.as_slice(), [x] if x.starts_with(ERROR_PREFIX)))
            .count()
    }
}

impl<'a> IntoIterator for &'a LookupResults {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl IntoIterator for LookupResults {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

static ERROR_PREFIX: &str = "error: ";

fn is_placeholder_or_error(values: &[String]) -> bool {
    matches!(values, [x] if x == NO_RECORDS_FOUND || x.starts_with(ERROR_PREFIX))
}

/// Classified result of a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Records(Vec<String>),
    NoRecords,
    DomainNotFound,
    Failed(String),
}

impl Outcome {
    /// Values to store for this outcome; `None` if the outcome aborts the lookup.
    pub fn into_values(self) -> Option<Vec<String>> {
        match self {
            Outcome::Records(records) => Some(records),
            Outcome::NoRecords => Some(vec![NO_RECORDS_FOUND.to_string()]),
            Outcome::Failed(reason) => Some(vec![format!("{}{}", ERROR_PREFIX, reason)]),
            Outcome::DomainNotFound => None,
        }
    }
}

impl From<ResolverResult<Vec<String>>> for Outcome {
    fn from(result: ResolverResult<Vec<String>>) -> Self {
        match result {
            Ok(records) if records.is_empty() => Outcome::NoRecords,
            Ok(records) => Outcome::Records(records),
            Err(resolver::Error::NoRecordsFound) => Outcome::NoRecords,
            Err(resolver::Error::NxDomain) => Outcome::DomainNotFound,
            Err(err) => Outcome::Failed(err.to_string()),
        }
    }
}

/// Looks up all `record_types` for `domain` one after another.
///
/// Record types are passed to the resolver as given; an identifier the resolver does not know is recorded as error
/// for that record type. Repeated identifiers (ignoring case) are looked up only once.
pub async fn lookup<R, S>(resolver: &R, domain: &str, record_types: &[S], opts: &LookupOpts) -> Result<LookupResults>
where
    R: RecordLookup,
    S: AsRef<str>,
{
    let name = parse_name(domain)?;
    let record_types = distinct(record_types);
    info!("Looking up {} record types for '{}'.", record_types.len(), name);

    let mut results = LookupResults::new();
    let mut pending = record_types.iter().peekable();
    while let Some(record_type) = pending.next() {
        let outcome = match UniQuery::from_identifier(name.clone(), record_type) {
            Ok(query) => Outcome::from(resolver.lookup(&query).await),
            Err(err) => Outcome::Failed(err.to_string()),
        };
        debug!("Lookup of {} for '{}' finished with {:?}.", record_type, name, outcome);

        let Some(values) = outcome.into_values() else {
            info!(
                "Domain '{}' does not exist; discarding results of {} record types.",
                name,
                results.len()
            );
            return Err(Error::DomainNotFound {
                domain: domain.trim().to_string(),
            });
        };
        results.insert(*record_type, values);

        if pending.peek().is_some() && !opts.throttle.is_zero() {
            tokio::time::sleep(opts.throttle).await;
        }
    }
    info!("Finished lookups for '{}'.", name);

    Ok(results)
}

fn distinct<S: AsRef<str>>(record_types: &[S]) -> Vec<&str> {
    let mut seen = HashSet::new();
    record_types
        .iter()
        .map(|x| x.as_ref().trim())
        .filter(|x| seen.insert(x.to_uppercase()))
        .collect()
}
