// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::convert::TryFrom;
use std::env;

use clap::ArgMatches;
use tracing::{debug, info};

use dnsinfo::app::console::{Console, ConsoleOpts};
use dnsinfo::app::logging::Logging;
use dnsinfo::app::output::styles::{self, ERROR_PREFIX};
use dnsinfo::app::{cli_parser, AppConfig, ExitStatus};

#[tokio::main]
async fn main() {
    let args = cli_parser::create_parser().get_matches();

    setup_terminal(&args);

    if let Err(err) = start_logging_for_terminal(&args) {
        eprintln!("{} Failed to initialize logging: {:#}", &*ERROR_PREFIX, err);
        std::process::exit(ExitStatus::UnrecoverableError.into());
    }
    debug!("Parsed args and set up logging.");

    let app_config = match AppConfig::try_from(&args) {
        Ok(config) => config,
        Err(err) => {
            Console::new(ConsoleOpts::default()).error(format!("Failed to parse arguments: {:#}", err));
            std::process::exit(ExitStatus::CliParsingFailed.into());
        }
    };
    info!("Parsed args into AppConfig.");

    let exit_status = match dnsinfo::app::run(&app_config).await {
        Ok(exit_status) => exit_status,
        Err(err) => {
            Console::new(ConsoleOpts::from(&app_config)).error(format!("Error: {:#}", err));
            ExitStatus::Failed
        }
    };
    debug!("Exiting with {:?}.", exit_status);

    std::process::exit(exit_status.into());
}

fn setup_terminal(args: &ArgMatches) {
    if args.get_flag("no-color") {
        styles::no_color_mode();
    }

    if args.get_flag("ascii") {
        styles::ascii_mode();
    }
}

fn start_logging_for_terminal(args: &ArgMatches) -> anyhow::Result<()> {
    let color = !args.get_flag("no-color");
    let debug = args.get_flag("debug");
    let verbosity = args.get_count("v");

    Logging::new(verbosity, env::var_os("RUST_LOG"), color, debug).start()
}
