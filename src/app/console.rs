// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tabwriter::TabWriter;
use yansi::{Painted, Style};

use crate::app::output::styles::{
    self, ATTENTION_PREFIX, CAPTION_PREFIX, ERROR_PREFIX, FINISHED_PREFIX, INFO_PREFIX, ITEMAZATION_PREFIX, OK_PREFIX,
};
use crate::app::AppConfig;
use crate::output::OutputType;
use crate::record_types::RecordTypeInfo;
use crate::resolver::{ResolverConfig, ResolverOpts};
use crate::LookupResults;

#[derive(Debug, Default)]
pub struct ConsoleOpts {
    quiet: bool,
}

impl From<&AppConfig> for ConsoleOpts {
    fn from(app_config: &AppConfig) -> Self {
        // JSON on stdout must not be interleaved with progress messages
        ConsoleOpts {
            quiet: app_config.quiet || app_config.output == OutputType::Json,
        }
    }
}

#[derive(Debug)]
pub struct Console {
    opts: ConsoleOpts,
}

impl Console {
    pub fn new(opts: ConsoleOpts) -> Console {
        Console { opts }
    }

    pub fn print_resolver_opts(&self, config: &ResolverConfig, opts: &ResolverOpts, delay: Duration) {
        if self.not_quiet() {
            self.caption(format!(
                "{}: nameservers={}, timeout={}, delay={}ms",
                Fmt::emph("Options"),
                config,
                opts.timeout
                    .map(|x| format!("{}s", x.as_secs()))
                    .unwrap_or_else(|| "default".to_string()),
                delay.as_millis(),
            ));
        }
    }

    pub fn print_lookup_estimates(&self, domain_name: &str, record_types: &[String], delay: Duration) {
        if self.not_quiet() {
            let num_record_types = record_types.len();
            let record_types_str = if num_record_types > 1 {
                format!("{} record types", num_record_types)
            } else {
                "1 record type".to_string()
            };
            let min_run_time = delay * num_record_types.saturating_sub(1) as u32;

            self.info(format!(
                "Looking up {} ({}) for {}; this takes at least {} ms.",
                record_types_str,
                record_types.join(", "),
                domain_name,
                min_run_time.as_millis()
            ));
        }
    }

    pub fn print_statistics(&self, results: &LookupResults, total_run_time: Duration) {
        if self.not_quiet() {
            self.info(format!(
                "Received {} records for {} record types, {} errors within {} ms of total run time.",
                results.num_records(),
                results.len(),
                results.num_errors(),
                total_run_time.as_millis()
            ));
        }
    }

    pub fn print_saved(&self, path: &Path) {
        if self.not_quiet() {
            self.ok(format!("Saved results to {}.", path.display()));
        }
    }

    pub fn print_domain_not_found(&self, domain_name: &str) {
        self.error(format!("Domain {} does not exist", domain_name));
    }

    pub fn print_record_types<'a, I: IntoIterator<Item = &'a RecordTypeInfo>>(&self, infos: I) -> Result<()> {
        self.caption("Record types");

        let mut tw = TabWriter::new(vec![]);
        for info in infos {
            writeln!(
                tw,
                " {} {}\t{}\t{}",
                &*ITEMAZATION_PREFIX,
                info.record_type,
                info.name,
                info.description
            )?;
        }
        let text_buffer = tw
            .into_inner()
            .map_err(|_| anyhow::anyhow!("failed to finish TabWriter buffer"))?;
        let out = String::from_utf8(text_buffer).context("failed to convert TabWriter buffer to output")?;
        print!("{}", out);

        Ok(())
    }

    pub fn print_finished(&self) {
        if self.not_quiet() {
            self.finished();
        }
    }

    pub fn emphasize<T: fmt::Display>(&self, item: T) {
        println!("{}", Fmt::emph(item))
    }

    pub fn info<T: AsRef<str>>(&self, str: T) {
        println!("{} {}", &*INFO_PREFIX, str.as_ref());
    }

    pub fn attention<T: AsRef<str>>(&self, str: T) {
        println!("{} {}", Fmt::attention(&*ATTENTION_PREFIX), str.as_ref());
    }

    pub fn finished(&self) {
        self.emphasize(format!("{} Finished.", &*FINISHED_PREFIX));
    }

    pub fn caption<T: AsRef<str>>(&self, str: T) {
        self.emphasize(format!("{} {}", &*CAPTION_PREFIX, str.as_ref()));
    }

    pub fn error<T: AsRef<str>>(&self, str: T) {
        eprintln!("{} {}", Fmt::error(&*ERROR_PREFIX), str.as_ref());
    }

    pub fn ok<T: AsRef<str>>(&self, str: T) {
        println!("{} {}", Fmt::ok(&*OK_PREFIX), str.as_ref());
    }

    pub fn not_quiet(&self) -> bool {
        !self.opts.quiet
    }
}

pub struct Fmt {}

impl Fmt {
    fn styled<T: fmt::Display>(value: T, style: Style) -> Painted<T> {
        Painted { value, style }
    }

    pub fn emph<T: fmt::Display>(item: T) -> Painted<T> {
        Fmt::styled(item, styles::EMPH)
    }

    pub fn attention<T: fmt::Display>(item: T) -> Painted<T> {
        Fmt::styled(item, styles::ATTENTION)
    }

    pub fn error<T: fmt::Display>(item: T) -> Painted<T> {
        Fmt::styled(item, styles::ERROR)
    }

    pub fn ok<T: fmt::Display>(item: T) -> Painted<T> {
        Fmt::styled(item, styles::OK)
    }
}
