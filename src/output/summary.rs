// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::collections::HashSet;

use super::*;
use crate::LookupResults;

#[derive(Debug, Default)]
pub struct SummaryOptions {
    /// One line per record type instead of one line per record
    condensed: bool,
}

impl SummaryOptions {
    pub fn condensed() -> SummaryOptions {
        SummaryOptions { condensed: true }
    }
}

impl<'a> TryFrom<Vec<&'a str>> for SummaryOptions {
    type Error = Error;

    fn try_from(values: Vec<&'a str>) -> std::result::Result<Self, Self::Error> {
        let options: HashSet<&str> = values.into_iter().collect();
        if let Some(unknown) = options.iter().find(|x| !["human", "condensed"].contains(*x)) {
            return Err(Error::ParserError {
                what: unknown.to_string(),
                to: "SummaryOptions",
                why: "unknown summary option".to_string(),
            });
        }
        Ok(SummaryOptions {
            condensed: options.contains("condensed"),
        })
    }
}

#[derive(Debug, Default)]
pub struct SummaryFormat {
    opts: SummaryOptions,
}

impl SummaryFormat {
    pub fn new(opts: SummaryOptions) -> SummaryFormat {
        SummaryFormat { opts }
    }
}

impl<T: SummaryFormatter> OutputFormat<T> for SummaryFormat {
    fn output<W: Write>(&self, writer: &mut W, data: &T) -> Result<()> {
        data.output(writer, &self.opts)
    }
}

pub trait SummaryFormatter {
    fn output<W: Write>(&self, writer: &mut W, opts: &SummaryOptions) -> Result<()>;
}

impl SummaryFormatter for LookupResults {
    fn output<W: Write>(&self, writer: &mut W, opts: &SummaryOptions) -> Result<()> {
        for (record_type, values) in self {
            if opts.condensed {
                writeln!(writer, "{}: {}", record_type, values.join(", "))?;
            } else {
                writeln!(writer, "{} records:", record_type)?;
                for value in values {
                    writeln!(writer, "  {}", value)?;
                }
                writeln!(writer)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;
    use crate::lookup::NO_RECORDS_FOUND;

    fn results() -> LookupResults {
        let mut results = LookupResults::new();
        results.insert("A", vec!["192.0.2.1".to_string(), "192.0.2.2".to_string()]);
        results.insert("TXT", vec![NO_RECORDS_FOUND.to_string()]);
        results
    }

    #[test]
    fn summary() {
        let config = OutputConfig::summary(SummaryOptions::default());
        let output = Output::new(&config);

        let mut buf = Vec::new();
        let res = output.output(&mut buf, &results());

        assert_that(&res).is_ok();
        let summary = String::from_utf8(buf).unwrap();
        assert_that(&summary.as_str())
            .is_equal_to("A records:\n  192.0.2.1\n  192.0.2.2\n\nTXT records:\n  no records found\n\n");
    }

    #[test]
    fn condensed_summary() {
        let config = OutputConfig::summary(SummaryOptions::condensed());
        let output = Output::new(&config);

        let mut buf = Vec::new();
        output.output(&mut buf, &results()).unwrap();

        let summary = String::from_utf8(buf).unwrap();
        assert_that(&summary.as_str()).is_equal_to("A: 192.0.2.1, 192.0.2.2\nTXT: no records found\n");
    }

    #[test]
    fn empty_summary() {
        let config = OutputConfig::summary(SummaryOptions::default());
        let output = Output::new(&config);

        let mut buf = Vec::new();
        output.output(&mut buf, &LookupResults::new()).unwrap();

        assert_that(&buf).is_empty();
    }

    #[test]
    fn parse_options() {
        let res = SummaryOptions::try_from(vec!["human", "condensed"]);
        assert_that(&res.map(|x| x.condensed)).is_ok_containing(true);

        let res = SummaryOptions::try_from(vec!["pretty"]);
        assert_that(&res).is_err();
    }
}
