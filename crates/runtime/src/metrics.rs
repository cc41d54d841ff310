#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyPercentiles {
    pub count: usize,
    pub p50_nanos: u64,
    pub p90_nanos: u64,
    pub p95_nanos: u64,
    pub p99_nanos: u64,
    pub max_nanos: u64,
}

#[derive(Debug, Default, Clone)]
pub struct StepLatencyMetrics {
    latencies_nanos: Vec<u64>,
}

impl StepLatencyMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_latency_nanos(&mut self, latency_nanos: u64) {
        self.latencies_nanos.push(latency_nanos);
    }

    pub fn percentiles(&self) -> Option<LatencyPercentiles> {
        if self.latencies_nanos.is_empty() {
            return None;
        }

        let mut sorted = self.latencies_nanos.clone();
        sorted.sort_unstable();
        let count = sorted.len();

        Some(LatencyPercentiles {
            count,
            p50_nanos: percentile_nearest_rank(&sorted, 50),
            p90_nanos: percentile_nearest_rank(&sorted, 90),
            p95_nanos: percentile_nearest_rank(&sorted, 95),
            p99_nanos: percentile_nearest_rank(&sorted, 99),
            max_nanos: sorted[count - 1],
        })
    }
}

fn percentile_nearest_rank(sorted: &[u64], percentile: usize) -> u64 {
    let count = sorted.len();
    let rank = (percentile * count).div_ceil(100);
    sorted[rank.saturating_sub(1)]
}
