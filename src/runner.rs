//! Sequential benchmark loop.

use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::StatusCode;
use std::time::{Duration, Instant};

use crate::client::ApiClient;
use crate::config::Config;
use crate::error::BenchError;
use crate::labels;
use crate::report::RunReport;

/// One measured request
#[derive(Debug, Clone, Copy)]
pub struct TimingSample {
    /// 1-based request index
    pub index: usize,
    pub elapsed: Duration,
    pub status: StatusCode,
}

/// Benchmark runner that executes requests against the API
pub struct BenchmarkRunner {
    num_requests: usize,
    seed: Option<u64>,
    client: ApiClient,
}

impl BenchmarkRunner {
    /// Create a new benchmark runner
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            num_requests: config.num_requests,
            seed: config.seed,
            client: ApiClient::new(config)?,
        })
    }

    /// Run the full benchmark: one request at a time, each timed over the
    /// complete exchange, with one stdout line per request.
    ///
    /// A transport error ends the run early; a non-2xx status is recorded
    /// like any other sample.
    pub async fn run(&self) -> Result<RunReport, BenchError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut samples = Vec::with_capacity(self.num_requests);

        for i in 0..self.num_requests {
            let subset = labels::random_labels(&mut rng);
            tracing::debug!("Request {} filtering on labels {:?}", i + 1, subset);

            let start = Instant::now();
            let response = self.client.query_images(subset).await?;
            let elapsed = start.elapsed();
            tracing::trace!("Request {} response body: {} bytes", i + 1, response.body_bytes);

            let sample = TimingSample {
                index: i + 1,
                elapsed,
                status: response.status,
            };

            println!(
                "Request {} took {:.4} seconds and returned status code {}",
                sample.index,
                sample.elapsed.as_secs_f64(),
                sample.status.as_u16()
            );

            samples.push(sample);
        }

        Ok(RunReport::from_samples(&samples))
    }
}
