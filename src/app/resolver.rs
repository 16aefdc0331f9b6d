use anyhow::{Context, Result};
use tracing::info;

use crate::app::console::Console;
use crate::app::AppConfig;
use crate::lookup::{self, LookupOpts};
use crate::resolver::{RecordLookup, Resolver, ResolverConfig, ResolverOpts};
use crate::LookupResults;

pub struct AppResolver<R = Resolver> {
    resolver: R,
    resolver_config: ResolverConfig,
    resolver_opts: ResolverOpts,
    lookup_opts: LookupOpts,
}

impl AppResolver {
    pub fn create_resolver(app_config: &AppConfig) -> Result<AppResolver> {
        let resolver_config = app_config.resolver_config();
        let resolver_opts = app_config.resolver_opts();
        let resolver = Resolver::new(resolver_config.clone(), resolver_opts.clone())
            .with_context(|| format!("Failed to create resolver for {}", resolver_config))?;
        info!("Created resolver for {}.", resolver.name());

        Ok(AppResolver::with_resolver(app_config, resolver))
    }
}

impl<R: RecordLookup> AppResolver<R> {
    pub fn with_resolver(app_config: &AppConfig, resolver: R) -> AppResolver<R> {
        AppResolver {
            resolver,
            resolver_config: app_config.resolver_config(),
            resolver_opts: app_config.resolver_opts(),
            lookup_opts: app_config.lookup_opts(),
        }
    }

    pub fn print_opts(&self, console: &Console) {
        console.print_resolver_opts(&self.resolver_config, &self.resolver_opts, self.lookup_opts.throttle);
    }

    pub fn lookup_opts(&self) -> &LookupOpts {
        &self.lookup_opts
    }

    /// Errors are passed on unchanged, so callers can tell a nonexistent domain from other failures.
    pub async fn lookup(&self, domain_name: &str, record_types: &[String]) -> crate::Result<LookupResults> {
        lookup::lookup(&self.resolver, domain_name, record_types, &self.lookup_opts).await
    }
}
