// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::convert::TryFrom;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::app::cli_parser::DEFAULT_OUTPUT_FILE;
use crate::output::json::JsonOptions;
use crate::output::summary::SummaryOptions;
use crate::output::{OutputConfig, OutputType};
use crate::record_types;
use crate::resolver::{self, ResolverConfig, ResolverOpts};
use crate::LookupOpts;

#[derive(Debug)]
pub struct AppConfig {
    pub domain_name: Option<String>,
    pub record_types: Vec<String>,
    pub list_record_types: bool,
    pub nameservers: Vec<SocketAddr>,
    pub timeout: Option<Duration>,
    pub delay: Duration,
    pub quiet: bool,
    pub output: OutputType,
    pub output_config: OutputConfig,
    pub save_to: Option<PathBuf>,
}

impl AppConfig {
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig::with_nameservers(self.nameservers.clone())
    }

    pub fn resolver_opts(&self) -> ResolverOpts {
        ResolverOpts { timeout: self.timeout }
    }

    pub fn lookup_opts(&self) -> LookupOpts {
        LookupOpts::with_throttle(self.delay)
    }
}

impl TryFrom<&ArgMatches> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(args: &ArgMatches) -> std::result::Result<Self, Self::Error> {
        let output = args
            .get_one::<String>("output")
            .map(|x| OutputType::try_from(x.as_str()).context("failed to parse output type"))
            .unwrap()?; // Safe unwrap, because of clap's default value
        let config = AppConfig {
            domain_name: args.get_one::<String>("domain name").map(|x| x.trim().to_string()),
            record_types: record_types(args)?,
            list_record_types: args.get_flag("list-record-types"),
            nameservers: nameservers(args)?,
            timeout: args.get_one::<u64>("timeout").copied().map(Duration::from_secs),
            delay: args
                .get_one::<u64>("delay")
                .copied()
                .map(Duration::from_millis)
                .unwrap(), // Safe unwrap, because of clap's default value
            quiet: args.get_flag("quiet"),
            output_config: output_config(output, args)?,
            output,
            save_to: save_to(args),
        };

        Ok(config)
    }
}

fn record_types(args: &ArgMatches) -> Result<Vec<String>> {
    if args.get_flag("all-record-types") {
        return Ok(record_types::all_record_types()
            .into_iter()
            .map(ToString::to_string)
            .collect());
    }
    let record_types: Vec<String> = args
        .get_many::<String>("record types")
        .context("No record types for name lookup specified")?
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect();
    if record_types.is_empty() {
        anyhow::bail!("No record types for name lookup specified");
    }

    Ok(record_types)
}

fn nameservers(args: &ArgMatches) -> Result<Vec<SocketAddr>> {
    let nameservers: Vec<_> = args
        .get_many::<String>("nameservers")
        .map(|xs| xs.map(|x| resolver::parse_nameserver(x)).collect())
        .unwrap_or_default();
    let nameservers: crate::Result<Vec<_>> = nameservers.into_iter().collect();
    nameservers.context("Failed to parse IP address for nameserver")
}

fn save_to(args: &ArgMatches) -> Option<PathBuf> {
    if let Some(path) = args.get_one::<String>("output-file") {
        Some(PathBuf::from(path))
    } else if args.get_flag("save") {
        Some(PathBuf::from(DEFAULT_OUTPUT_FILE))
    } else {
        None
    }
}

fn output_config(output_type: OutputType, args: &ArgMatches) -> Result<OutputConfig> {
    let options: Vec<&str> = match args.get_many::<String>("output-options") {
        Some(options) => options.map(String::as_str).collect(),
        None => match output_type {
            OutputType::Json => vec!["pretty"],
            OutputType::Summary => vec!["human"],
        },
    };
    parse_output_options(output_type, options)
}

fn parse_output_options(output_type: OutputType, options: Vec<&str>) -> Result<OutputConfig> {
    match output_type {
        OutputType::Json => {
            let options = JsonOptions::try_from(options).context("failed to parse json options")?;
            Ok(OutputConfig::json(options))
        }
        OutputType::Summary => {
            let options = SummaryOptions::try_from(options).context("failed to parse summary options")?;
            Ok(OutputConfig::summary(options))
        }
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;
    use crate::app::cli_parser::create_parser;
    use crate::record_types::DEFAULT_RECORD_TYPES;

    fn parse(args: &[&str]) -> Result<AppConfig> {
        let args = create_parser().try_get_matches_from(args)?;
        AppConfig::try_from(&args)
    }

    #[test]
    fn defaults() {
        let config = parse(&["dnsinfo", "example.com"]).unwrap();

        assert_that(&config.domain_name).is_equal_to(Some("example.com".to_string()));
        assert_that(&config.record_types).is_equal_to(
            DEFAULT_RECORD_TYPES
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
        );
        assert_that(&config.nameservers).is_empty();
        assert_that(&config.timeout).is_none();
        assert_that(&config.delay).is_equal_to(Duration::from_millis(500));
        assert_that(&config.output).is_equal_to(OutputType::Summary);
        assert_that(&config.save_to).is_none();
        assert_that(&config.quiet).is_false();
    }

    #[test]
    fn record_types_keep_order() {
        let config = parse(&["dnsinfo", "example.com", "-t", "mx,a"]).unwrap();

        assert_that(&config.record_types).is_equal_to(vec!["mx".to_string(), "a".to_string()]);
    }

    #[test]
    fn all_record_types() {
        let config = parse(&["dnsinfo", "example.com", "--all"]).unwrap();

        assert_that(&config.record_types).has_length(9);
    }

    #[test]
    fn save_to_default_file() {
        let config = parse(&["dnsinfo", "example.com", "--save"]).unwrap();

        assert_that(&config.save_to).is_equal_to(Some(PathBuf::from("dns_info.json")));
    }

    #[test]
    fn save_to_output_file() {
        let config = parse(&["dnsinfo", "example.com", "--output-file", "out.json"]).unwrap();

        assert_that(&config.save_to).is_equal_to(Some(PathBuf::from("out.json")));
    }

    #[test]
    fn nameservers_and_timeout() {
        let config = parse(&[
            "dnsinfo",
            "example.com",
            "-s",
            "127.0.0.1,[::1]:5353",
            "--timeout",
            "2",
            "--delay",
            "0",
        ])
        .unwrap();

        assert_that(&config.nameservers).has_length(2);
        assert_that(&config.timeout).is_equal_to(Some(Duration::from_secs(2)));
        assert_that(&config.lookup_opts().throttle).is_equal_to(Duration::ZERO);
        assert_that(&config.resolver_config().is_system()).is_false();
    }

    #[test]
    fn invalid_nameserver() {
        let res = parse(&["dnsinfo", "example.com", "-s", "dns.google"]);

        assert_that(&res).is_err();
    }

    #[test]
    fn missing_domain_name() {
        let res = parse(&["dnsinfo"]);

        assert_that(&res).is_err();
    }

    #[test]
    fn list_record_types_without_domain_name() {
        let config = parse(&["dnsinfo", "--list-record-types"]).unwrap();

        assert_that(&config.list_record_types).is_true();
        assert_that(&config.domain_name).is_none();
    }

    #[test]
    fn json_output() {
        let config = parse(&["dnsinfo", "example.com", "-o", "json"]).unwrap();

        assert_that(&config.output).is_equal_to(OutputType::Json);
    }

    #[test]
    fn default_record_types_match_cli_default() {
        assert_that(&crate::app::cli_parser::DEFAULT_RECORD_TYPES.to_string()).is_equal_to(DEFAULT_RECORD_TYPES.join(","));
        assert_that(&crate::app::cli_parser::SUPPORTED_RECORD_TYPES.to_vec())
            .is_equal_to(crate::record_types::all_record_types());
        assert_that(&DEFAULT_OUTPUT_FILE).is_equal_to(crate::output::json::DEFAULT_OUTPUT_FILE);
    }
}
