//! This file is used by the build script. Therefore everything generating the command line parser must be included
//! here and may only depend on `clap`.

use clap::{value_parser, Arg, ArgAction, Command};

// The constants below duplicate `crate::record_types` and `crate::output::json`, because the build script can only
// include this file. `app::config` tests keep them in sync.

/// Record types described by `--list-record-types` and queried by `--all`; the first six are the defaults.
pub static SUPPORTED_RECORD_TYPES: &[&str] = &["A", "AAAA", "MX", "NS", "TXT", "SOA", "CNAME", "PTR", "SRV"];

pub static DEFAULT_RECORD_TYPES: &str = "A,AAAA,MX,NS,TXT,SOA";

pub static SUPPORTED_OUTPUT_FORMATS: &[&str] = &["json", "summary"];

pub static DEFAULT_OUTPUT_FILE: &str = "dns_info.json";

pub fn create_parser() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("domain name")
                .index(1)
                .value_name("NAME")
                .required_unless_present("list-record-types")
                .help("domain name to lookup")
                .long_help("* DOMAIN NAME may be any valid DNS name, e.g., example.com"),
        )
        .arg(
            Arg::new("record types")
                .short('t')
                .long("record-type")
                .value_name("RECORD TYPE")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .default_value(DEFAULT_RECORD_TYPES)
                .help("Sets record types to lookup in this order")
                .long_help(
                    "Sets record types to lookup in this order. Any record type known to the resolver may be used; \
unknown record types are reported per record type without aborting the lookup.",
                ),
        )
        .arg(
            Arg::new("all-record-types")
                .long("all")
                .action(ArgAction::SetTrue)
                .conflicts_with("record types")
                .help("Enables lookups for all supported record types"),
        )
        .arg(
            Arg::new("list-record-types")
                .long("list-record-types")
                .action(ArgAction::SetTrue)
                .help("Lists and explains the supported record types"),
        )
        .arg(
            Arg::new("nameservers")
                .short('s')
                .long("nameserver")
                .value_name("IP ADDR[:PORT]")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .help("Uses these nameservers instead of the system nameservers")
                .long_help(
                    r#"Uses these nameservers instead of the ones from /etc/resolv.conf. If the port is omitted, 53 is used.
Examples:
* 127.0.0.1 is 127.0.0.1:53
* [::1]:5353
"#,
                ),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .value_parser(value_parser!(u64))
                .help("Sets timeout in seconds for responses; defaults to the system configuration"),
        )
        .arg(
            Arg::new("delay")
                .long("delay")
                .value_name("MILLISECONDS")
                .default_value("500")
                .value_parser(value_parser!(u64))
                .help("Sets the pause between two consecutive lookups"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FORMAT")
                .default_value("summary")
                .value_parser(SUPPORTED_OUTPUT_FORMATS.to_vec())
                .help("Sets the output format for result presentation"),
        )
        .arg(
            Arg::new("output-options")
                .long("output-options")
                .value_name("OPTIONS")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .default_value_if("output", "json", "pretty")
                .default_value_if("output", "summary", "human")
                .help("Sets output options")
                .long_help(
                    "* Json: 'pretty': Prettifies output
* Summary: 'human': One line per record, 'condensed': One line per record type",
                ),
        )
        .arg(
            Arg::new("save")
                .long("save")
                .action(ArgAction::SetTrue)
                .help("Saves results as JSON to dns_info.json"),
        )
        .arg(
            Arg::new("output-file")
                .long("output-file")
                .value_name("FILE")
                .help("Saves results as JSON to this file"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Does not print anything but results"),
        )
        // This is a special option that is not reflected in AppConfig, but is checked during
        // setup in `dnsinfo.rs`.
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disables colorful output"),
        )
        // This is a special option that is not reflected in AppConfig, but is checked during
        // setup in `dnsinfo.rs` and sets the global AtomicBool `dnsinfo::app::output::styles::ASCII_MODE`.
        .arg(
            Arg::new("ascii")
                .long("ascii")
                .action(ArgAction::SetTrue)
                .help("Uses only ASCII compatible characters for output"),
        )
        .arg(
            Arg::new("v")
                .short('v')
                .action(ArgAction::Count)
                .help("Sets the level of verbosity"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Uses debug log format"),
        )
}
