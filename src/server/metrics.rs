//! Prometheus metrics for the triage service.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder,
};

/// How a `/get_response` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Rejected,
    UpstreamError,
}

impl Outcome {
    fn as_label(self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::Rejected => "rejected",
            Outcome::UpstreamError => "upstream_error",
        }
    }
}

/// Per-process metrics registry.
pub struct Metrics {
    registry: Registry,
    requests_total: IntCounterVec,
    upstream_latency: Histogram,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("triage_requests_total", "Triage requests by outcome"),
            &["outcome"],
        )?;

        let upstream_latency = Histogram::with_opts(
            HistogramOpts::new(
                "triage_upstream_latency_seconds",
                "Latency of generation service calls in seconds",
            )
            .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(upstream_latency.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            upstream_latency,
        })
    }

    pub fn record_request(&self, outcome: Outcome) {
        self.requests_total
            .with_label_values(&[outcome.as_label()])
            .inc();
    }

    pub fn observe_upstream(&self, secs: f64) {
        self.upstream_latency.observe(secs);
    }

    /// Encode all metrics in the Prometheus text format.
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_outcome() {
        let metrics = Metrics::new().unwrap();
        metrics.record_request(Outcome::Ok);
        metrics.record_request(Outcome::Ok);
        metrics.record_request(Outcome::UpstreamError);
        metrics.observe_upstream(0.3);

        let text = metrics.render().unwrap();
        assert!(text.contains(r#"triage_requests_total{outcome="ok"} 2"#));
        assert!(text.contains(r#"triage_requests_total{outcome="upstream_error"} 1"#));
        assert!(text.contains("triage_upstream_latency_seconds_count 1"));
    }
}
