use std::collections::HashMap;
use std::time::Duration;

use dnsinfo::lookup::{self, LookupOpts, NO_RECORDS_FOUND};
use dnsinfo::output::json::{self, DEFAULT_OUTPUT_FILE};
use dnsinfo::output::summary::SummaryOptions;
use dnsinfo::output::{Output, OutputConfig, OutputFormat};
use dnsinfo::record_types::DEFAULT_RECORD_TYPES;
use dnsinfo::resolver::{self, RecordLookup, ResolverResult, UniQuery};
use dnsinfo::{Error, LookupResults};
use hickory_resolver::proto::rr::RecordType;
use spectral::prelude::*;

/// Resolver serving a fixed zone; record types without entry have no records
struct Zone {
    records: HashMap<RecordType, ResolverResult<Vec<String>>>,
}

impl Zone {
    fn example_com() -> Zone {
        let mut records = HashMap::new();
        records.insert(RecordType::A, Ok(vec!["93.184.215.14".to_string()]));
        records.insert(RecordType::AAAA, Ok(vec!["2606:2800:21f:cb07:6820:80da:af6b:8b2c".to_string()]));
        records.insert(RecordType::MX, Ok(vec!["0 .".to_string()]));
        records.insert(
            RecordType::NS,
            Ok(vec!["a.iana-servers.net.".to_string(), "b.iana-servers.net.".to_string()]),
        );
        records.insert(RecordType::TXT, Err(resolver::Error::NoRecordsFound));
        records.insert(
            RecordType::SOA,
            Ok(vec!["ns.icann.org. noc.dns.icann.org. 2024081457 7200 3600 1209600 3600".to_string()]),
        );
        Zone { records }
    }

    fn nonexistent() -> Zone {
        let records = [RecordType::A, RecordType::AAAA]
            .into_iter()
            .map(|x| (x, Err(resolver::Error::NxDomain)))
            .collect();
        Zone { records }
    }
}

impl RecordLookup for Zone {
    async fn lookup(&self, query: &UniQuery) -> ResolverResult<Vec<String>> {
        self.records
            .get(&query.record_type())
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

fn opts() -> LookupOpts {
    LookupOpts::with_throttle(Duration::ZERO)
}

#[tokio::test]
async fn lookup_default_record_types() {
    let results = lookup::lookup(&Zone::example_com(), "example.com", DEFAULT_RECORD_TYPES, &opts())
        .await
        .unwrap();

    assert_that(&results.len()).is_equal_to(6);
    let record_types: Vec<_> = results.record_types().collect();
    assert_that(&record_types).is_equal_to(DEFAULT_RECORD_TYPES.to_vec());
    assert_that(results.get("NS").unwrap()).has_length(2);
    assert_that(results.get("TXT").unwrap()).is_equal_to(&vec![NO_RECORDS_FOUND.to_string()]);
    for (record_type, values) in &results {
        asserting(record_type).that(&values.len()).is_greater_than(0);
    }
}

#[tokio::test]
async fn print_summary() {
    let results = lookup::lookup(&Zone::example_com(), "example.com", &["MX", "TXT"], &opts())
        .await
        .unwrap();
    let config = OutputConfig::summary(SummaryOptions::default());

    let mut buf = Vec::new();
    Output::new(&config).output(&mut buf, &results).unwrap();

    let summary = String::from_utf8(buf).unwrap();
    assert_that(&summary.as_str()).is_equal_to("MX records:\n  0 .\n\nTXT records:\n  no records found\n\n");
}

#[tokio::test]
async fn save_and_load_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_OUTPUT_FILE);
    let results = lookup::lookup(&Zone::example_com(), "example.com", DEFAULT_RECORD_TYPES, &opts())
        .await
        .unwrap();

    json::save(&path, &results).await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: LookupResults = serde_json::from_str(&content).unwrap();
    assert_that(&parsed).is_equal_to(&results);
}

#[tokio::test]
async fn nonexistent_domain_yields_no_results() {
    let res = lookup::lookup(&Zone::nonexistent(), "nonexistent.example", DEFAULT_RECORD_TYPES, &opts()).await;

    assert_that(&matches!(res, Err(Error::DomainNotFound { .. }))).is_true();
}
