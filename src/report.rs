//! Report generation for benchmark results.

use hdrhistogram::Histogram;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::runner::TimingSample;

/// Aggregate results for one benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Number of requests issued
    pub requests: u64,
    /// Sum of per-request elapsed times in seconds
    pub total_secs: f64,
    /// Arithmetic mean elapsed time; `None` when no requests ran
    pub mean_secs: Option<f64>,
    pub min_secs: f64,
    pub max_secs: f64,
    pub p50_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    /// Requests per returned HTTP status code
    pub status_counts: BTreeMap<u16, u64>,
}

impl RunReport {
    /// Build a report from the collected samples
    pub fn from_samples(samples: &[TimingSample]) -> Self {
        // Latencies up to 10 minutes with 3 significant figures
        let mut histogram: Histogram<u64> =
            Histogram::new_with_bounds(1, 600_000_000, 3).expect("static histogram bounds");

        let mut total_secs = 0.0;
        let mut min_secs = f64::MAX;
        let mut max_secs: f64 = 0.0;
        let mut status_counts = BTreeMap::new();

        for sample in samples {
            let secs = sample.elapsed.as_secs_f64();
            total_secs += secs;
            min_secs = min_secs.min(secs);
            max_secs = max_secs.max(secs);

            let micros = sample.elapsed.as_micros() as u64;
            let _ = histogram.record(micros.max(1));

            *status_counts.entry(sample.status.as_u16()).or_insert(0) += 1;
        }

        let requests = samples.len() as u64;
        let mean_secs = if requests > 0 {
            Some(total_secs / requests as f64)
        } else {
            None
        };

        Self {
            requests,
            total_secs,
            mean_secs,
            min_secs: if requests > 0 { min_secs } else { 0.0 },
            max_secs,
            p50_ms: histogram.value_at_percentile(50.0) as f64 / 1000.0,
            p95_ms: histogram.value_at_percentile(95.0) as f64 / 1000.0,
            p99_ms: histogram.value_at_percentile(99.0) as f64 / 1000.0,
            status_counts,
        }
    }

    /// Print the end-of-run summary
    pub fn print_summary(&self) {
        match self.mean_secs {
            Some(mean) => println!("Average time per request: {:.4} seconds", mean),
            None => println!("No requests were issued; average time is undefined"),
        }

        if self.requests == 0 {
            return;
        }

        println!(
            "Latency: min {:.4}s, max {:.4}s, p50 {:.1}ms, p95 {:.1}ms, p99 {:.1}ms",
            self.min_secs, self.max_secs, self.p50_ms, self.p95_ms, self.p99_ms
        );

        let statuses: Vec<String> = self
            .status_counts
            .iter()
            .map(|(status, count)| format!("{}x{}", status, count))
            .collect();
        println!("Status codes: {}", statuses.join(", "));
    }

    /// Export the report as JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
