//! Prometheus text exposition of a scrape
//!
//! Every scrape gets its own registry, so nothing from a previous cycle can
//! leak into the output.

use crate::extract::{MetricKind, MetricSample};
use crate::scrape::ScrapeOutcome;
use crate::utils::error::{ExporterError, Result};
use prometheus::{CounterVec, Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};
use std::collections::HashMap;
use tracing::warn;

/// Up/down gauge published with every scrape
pub const UP_METRIC: &str = "ravendb_exporter_up";
/// Time taken by the scrape itself
pub const SCRAPE_DURATION_METRIC: &str = "ravendb_exporter_scrape_duration_seconds";

/// Build a registry holding the outcome of one scrape
pub fn build_registry(outcome: &ScrapeOutcome) -> Result<Registry> {
    let registry = Registry::new();

    let up = Gauge::with_opts(Opts::new(UP_METRIC, "Whether the RavenDB scrape was successful"))?;
    up.set(if outcome.up { 1.0 } else { 0.0 });
    registry.register(Box::new(up))?;

    let duration = Gauge::with_opts(Opts::new(
        SCRAPE_DURATION_METRIC,
        "Time spent scraping RavenDB",
    ))?;
    duration.set(outcome.duration.as_secs_f64());
    registry.register(Box::new(duration))?;

    if outcome.up {
        register_samples(&registry, &outcome.samples)?;
    }

    Ok(registry)
}

/// Group samples by name, preserving first appearance, and register one
/// vector per metric
fn register_samples(registry: &Registry, samples: &[MetricSample]) -> Result<()> {
    let mut order: Vec<&str> = Vec::new();
    let mut families: HashMap<&str, Vec<&MetricSample>> = HashMap::new();
    for sample in samples {
        families
            .entry(sample.name.as_str())
            .or_insert_with(|| {
                order.push(sample.name.as_str());
                Vec::new()
            })
            .push(sample);
    }

    for name in order {
        let Some(members) = families.remove(name) else {
            continue;
        };
        let Some(first) = members.first() else {
            continue;
        };

        let opts = Opts::new(name, first.help.as_str());
        let label_names = first.label_names();

        match first.kind {
            MetricKind::Counter => {
                let vec = CounterVec::new(opts, &label_names)?;
                for sample in &members {
                    if !sample.value.is_finite() || sample.value < 0.0 {
                        warn!(metric = name, value = sample.value, "Skipping invalid counter value");
                        continue;
                    }
                    vec.get_metric_with_label_values(&sample.label_values())?
                        .inc_by(sample.value);
                }
                registry.register(Box::new(vec))?;
            }
            MetricKind::Gauge => {
                let vec = GaugeVec::new(opts, &label_names)?;
                for sample in &members {
                    vec.get_metric_with_label_values(&sample.label_values())?
                        .set(sample.value);
                }
                registry.register(Box::new(vec))?;
            }
        }
    }

    Ok(())
}

/// Render a scrape in the text exposition format
pub fn render(outcome: &ScrapeOutcome) -> Result<String> {
    let registry = build_registry(outcome)?;

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ExporterError::internal(format!("exposition is not UTF-8: {}", e)))
}

/// Content type of [`render`]'s output
pub fn content_type() -> String {
    TextEncoder::new().format_type().to_string()
}
