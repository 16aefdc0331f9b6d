use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use crate::app::console::{Console, ConsoleOpts};
use crate::app::resolver::AppResolver;
use crate::app::{output, AppConfig, ExitStatus};
use crate::output::json;
use crate::record_types::WELL_KNOWN_RECORD_TYPES;
use crate::resolver::RecordLookup;
use crate::Error;

pub async fn run(app_config: &AppConfig) -> Result<ExitStatus> {
    let console = Console::new(ConsoleOpts::from(app_config));

    if app_config.list_record_types {
        console.print_record_types(WELL_KNOWN_RECORD_TYPES)?;
        return Ok(ExitStatus::Ok);
    }

    let app_resolver = AppResolver::create_resolver(app_config)?;
    lookup_and_output(app_config, &console, &app_resolver).await
}

async fn lookup_and_output<R: RecordLookup>(
    app_config: &AppConfig,
    console: &Console,
    app_resolver: &AppResolver<R>,
) -> Result<ExitStatus> {
    let domain_name = app_config
        .domain_name
        .as_deref()
        .context("No domain name to lookup specified")?;
    app_resolver.print_opts(console);
    console.print_lookup_estimates(domain_name, &app_config.record_types, app_resolver.lookup_opts().throttle);

    info!("Running lookups");
    let start_time = Instant::now();
    let results = match app_resolver.lookup(domain_name, &app_config.record_types).await {
        Ok(results) => results,
        Err(Error::DomainNotFound { domain }) => {
            console.print_domain_not_found(&domain);
            return Ok(ExitStatus::DomainNotFound);
        }
        Err(err) => return Err(err).context("Failed to look up records"),
    };
    let total_run_time = Instant::now() - start_time;
    info!("Finished Lookups.");

    console.print_statistics(&results, total_run_time);
    if console.not_quiet() && results.num_errors() > 0 {
        console.attention(format!(
            "Lookups of {} record types failed; see errors below.",
            results.num_errors()
        ));
    }

    output::output(&app_config.output_config, &results)?;

    if let Some(path) = &app_config.save_to {
        json::save(path, &results)
            .await
            .with_context(|| format!("Failed to save results to {}", path.display()))?;
        console.print_saved(path);
    }

    console.print_finished();

    Ok(ExitStatus::Ok)
}
