// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::NameServerConfigGroup;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use tracing::{debug, trace};

pub use error::Error;
pub use query::{parse_name, parse_record_type, UniQuery};

pub mod error;
pub mod query;

pub type ResolverResult<T> = std::result::Result<T, Error>;

pub const DEFAULT_PORT: u16 = 53;

/// Answers a single query with the textual representation of every record of the queried type.
///
/// An empty `Vec` means the name exists, but has no records of that type.
pub trait RecordLookup {
    fn lookup(&self, query: &UniQuery) -> impl Future<Output = ResolverResult<Vec<String>>> + Send;
}

/// Selects the nameservers to query.
///
/// Without explicit nameservers the system configuration is used, i.e. `/etc/resolv.conf` on Unix.
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    nameservers: Vec<SocketAddr>,
}

impl ResolverConfig {
    pub fn system() -> Self {
        ResolverConfig::default()
    }

    pub fn with_nameservers<T: Into<Vec<SocketAddr>>>(nameservers: T) -> Self {
        ResolverConfig {
            nameservers: nameservers.into(),
        }
    }

    pub fn nameservers(&self) -> &[SocketAddr] {
        &self.nameservers
    }

    pub fn is_system(&self) -> bool {
        self.nameservers.is_empty()
    }
}

impl fmt::Display for ResolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_system() {
            return f.write_str("system nameservers");
        }
        let nameservers: Vec<_> = self.nameservers.iter().map(ToString::to_string).collect();
        f.write_str(&nameservers.join(", "))
    }
}

/// Parses a nameserver given as `IP ADDR` or `IP ADDR:PORT`; IPv6 addresses with port need brackets.
pub fn parse_nameserver(str: &str) -> crate::Result<SocketAddr> {
    let str = str.trim();
    if let Ok(socket_addr) = SocketAddr::from_str(str) {
        return Ok(socket_addr);
    }
    IpAddr::from_str(str)
        .map(|ip| SocketAddr::new(ip, DEFAULT_PORT))
        .map_err(|e| crate::Error::ParserError {
            what: str.to_string(),
            to: "SocketAddr",
            why: e.to_string(),
        })
}

#[derive(Debug, Clone, Default)]
pub struct ResolverOpts {
    /// Overrides the resolver's timeout per request; `None` keeps the system or library default
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct Resolver {
    pub(crate) inner: Arc<TokioResolver>,
    pub(crate) config: Arc<ResolverConfig>,
}

impl Resolver {
    pub fn new(config: ResolverConfig, opts: ResolverOpts) -> ResolverResult<Self> {
        let mut builder = if config.is_system() {
            TokioResolver::builder_tokio()?
        } else {
            TokioResolver::builder_with_config(config.clone().into(), TokioConnectionProvider::default())
        };
        if let Some(timeout) = opts.timeout {
            builder.options_mut().timeout = timeout;
        }
        debug!("Created resolver for {}.", config);

        Ok(Resolver {
            inner: Arc::new(builder.build()),
            config: Arc::new(config),
        })
    }

    pub fn name(&self) -> String {
        self.config.to_string()
    }
}

impl RecordLookup for Resolver {
    async fn lookup(&self, query: &UniQuery) -> ResolverResult<Vec<String>> {
        trace!("Sending query '{}'.", query);
        let lookup = self.inner.lookup(query.name.clone(), query.record_type).await?;

        // Answers may contain the CNAME chain leading to the requested records
        let records = lookup
            .record_iter()
            .filter(|record| record.record_type() == query.record_type)
            .map(|record| record.data().to_string())
            .collect();

        Ok(records)
    }
}

#[doc(hidden)]
impl From<ResolverConfig> for hickory_resolver::config::ResolverConfig {
    fn from(rc: ResolverConfig) -> Self {
        let mut group = NameServerConfigGroup::new();
        for nameserver in rc.nameservers {
            group.merge(NameServerConfigGroup::from_ips_clear(
                &[nameserver.ip()],
                nameserver.port(),
                true,
            ));
        }

        hickory_resolver::config::ResolverConfig::from_parts(None, vec![], group)
    }
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, Ipv6Addr};

    use spectral::prelude::*;

    use super::*;

    #[test]
    fn parse_nameserver_without_port() {
        let res = parse_nameserver("8.8.8.8").unwrap();

        assert_that(&res).is_equal_to(SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 53));
    }

    #[test]
    fn parse_nameserver_with_port() {
        let res = parse_nameserver("[::1]:5353").unwrap();

        assert_that(&res).is_equal_to(SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 5353));
    }

    #[test]
    fn parse_nameserver_rejects_hostnames() {
        let res = parse_nameserver("dns.google");

        assert_that(&res).is_err();
    }

    #[test]
    fn hickory_config_contains_all_nameservers() {
        let config = ResolverConfig::with_nameservers(vec![
            parse_nameserver("127.0.0.1").unwrap(),
            parse_nameserver("127.0.0.2:5353").unwrap(),
        ]);

        let hickory_config: hickory_resolver::config::ResolverConfig = config.into();

        // One UDP and one TCP config per nameserver
        assert_that(&hickory_config.name_servers().len()).is_equal_to(4);
    }

    #[test]
    fn display_system_config() {
        let config = ResolverConfig::system();

        assert_that(&config.to_string().as_str()).is_equal_to("system nameservers");
    }
}
