use std::io;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::output::summary::SummaryFormatter;
use crate::output::{Output, OutputConfig, OutputFormat};

pub mod styles;

pub fn output<T: Serialize + SummaryFormatter>(config: &OutputConfig, data: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let output = Output::new(config);
    output
        .output(&mut handle, data)
        .context("Failed to print results to stdout.")
}
