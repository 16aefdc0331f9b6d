// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::collections::HashSet;
use std::path::Path;

use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use tracing::debug;

use super::*;

pub static DEFAULT_OUTPUT_FILE: &str = "dns_info.json";

static PRETTY_INDENT: &[u8] = b"    ";

#[derive(Debug, Default)]
pub struct JsonOptions {
    /// Pretty formatting
    pretty: bool,
}

impl JsonOptions {
    pub fn pretty() -> JsonOptions {
        JsonOptions { pretty: true }
    }
}

#[derive(Debug, Default)]
pub struct JsonFormat {
    opts: JsonOptions,
}

impl JsonFormat {
    pub fn new(opts: JsonOptions) -> JsonFormat {
        JsonFormat { opts }
    }
}

impl<'a> TryFrom<Vec<&'a str>> for JsonOptions {
    type Error = Error;

    fn try_from(values: Vec<&'a str>) -> std::result::Result<Self, Self::Error> {
        let options: HashSet<&str> = values.into_iter().collect();
        Ok(JsonOptions {
            pretty: options.contains("pretty"),
        })
    }
}

impl<T: Serialize> OutputFormat<T> for JsonFormat {
    fn output<W: Write>(&self, writer: &mut W, data: &T) -> Result<()> {
        if self.opts.pretty {
            write_pretty(&mut *writer, data)?;
        } else {
            serde_json::to_writer(&mut *writer, data)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}

/// Serializes with an indentation of four spaces; non-ASCII characters are kept as they are.
fn write_pretty<W: Write, T: Serialize>(writer: W, data: &T) -> Result<()> {
    let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(PRETTY_INDENT));
    data.serialize(&mut serializer)?;

    Ok(())
}

/// Saves `data` as pretty JSON to `path`; an existing file is overwritten.
pub async fn save<P: AsRef<Path>, T: Serialize>(path: P, data: &T) -> Result<()> {
    let mut buf = Vec::new();
    write_pretty(&mut buf, data)?;
    tokio::fs::write(path.as_ref(), buf).await?;
    debug!("Saved JSON to '{}'.", path.as_ref().display());

    Ok(())
}
