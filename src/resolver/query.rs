// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::str::FromStr;

use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::Name;

use crate::resolver::{Error, ResolverResult};

/// UniQuery
///
/// Name's labels are all Rc, so clone is cheap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniQuery {
    pub(crate) name: Name,
    pub(crate) record_type: RecordType,
}

impl UniQuery {
    /// Creates a query from a record type identifier like `"mx"` or `"TXT"`.
    pub fn from_identifier(name: Name, record_type: &str) -> ResolverResult<UniQuery> {
        let record_type = parse_record_type(record_type)?;
        Ok(UniQuery { name, record_type })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }
}

impl fmt::Display for UniQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name, self.record_type)
    }
}

/// Parses a domain name as absolute name, i.e., search domains do not apply.
pub fn parse_name(name: &str) -> ResolverResult<Name> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: "empty name".to_string(),
        });
    }
    let mut name = Name::from_utf8(trimmed).map_err(|e| Error::InvalidName {
        name: trimmed.to_string(),
        reason: e.to_string(),
    })?;
    name.set_fqdn(true);

    Ok(name)
}

pub fn parse_record_type(record_type: &str) -> ResolverResult<RecordType> {
    let upper = record_type.trim().to_uppercase();
    RecordType::from_str(&upper).map_err(|_| Error::UnknownRecordType {
        record_type: record_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    #[test]
    fn parse_name_is_absolute() {
        let name = parse_name("example.com").unwrap();

        assert_that(&name.is_fqdn()).is_true();
        assert_that(&name.to_string().as_str()).is_equal_to("example.com.");
    }

    #[test]
    fn parse_empty_name() {
        let res = parse_name("  ");

        assert_that(&res).is_err();
    }

    #[test]
    fn parse_record_type_ignores_case() {
        let res = parse_record_type("mx");

        assert_that(&res).is_ok_containing(RecordType::MX);
    }

    #[test]
    fn parse_unknown_record_type() {
        let res = parse_record_type("FOO");

        assert_that(&res).is_err_containing(Error::UnknownRecordType {
            record_type: "FOO".to_string(),
        });
    }

    #[test]
    fn display() {
        let query = UniQuery::from_identifier(parse_name("example.com").unwrap(), "soa").unwrap();

        assert_that(&query.to_string().as_str()).is_equal_to("example.com. SOA");
    }
}
