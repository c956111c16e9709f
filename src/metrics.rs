//! Observability hooks.
//!
//! With the `metrics` feature, [`METRICS`] exports OpenTelemetry instruments
//! through a Prometheus registry. With the `tracing` feature,
//! [`tracing_helpers`] builds the spans wrapped around statements, transactions
//! and note index allocation.

#[cfg(feature = "metrics")]
pub use self::prometheus_metrics::{GpMetrics, METRICS};

#[cfg(feature = "metrics")]
mod prometheus_metrics {
    use once_cell::sync::Lazy;
    use opentelemetry::{
        global,
        metrics::{Counter, Histogram, Meter, MeterProvider},
    };
    use opentelemetry_sdk::metrics::SdkMeterProvider;
    use prometheus::{Encoder, Registry, TextEncoder};
    use std::time::Duration;

    pub static METRICS: Lazy<GpMetrics> = Lazy::new(GpMetrics::init);

    pub struct GpMetrics {
        pub registry: Registry,
        // Kept alive so the Prometheus reader keeps collecting.
        _provider: Option<SdkMeterProvider>,
        pub queries_total: Counter<u64>,
        pub query_errors_total: Counter<u64>,
        pub query_duration: Histogram<f64>,
        pub connection_wait: Histogram<f64>,
        pub notes_allocated_total: Counter<u64>,
        pub note_allocation_failures_total: Counter<u64>,
    }

    impl GpMetrics {
        pub fn init() -> Self {
            let registry = Registry::new();
            let (provider, meter): (Option<SdkMeterProvider>, Meter) =
                match opentelemetry_prometheus::exporter()
                    .with_registry(registry.clone())
                    .build()
                {
                    Ok(exporter) => {
                        let provider = SdkMeterProvider::builder().with_reader(exporter).build();
                        let meter = provider.meter("gp10");
                        (Some(provider), meter)
                    }
                    Err(e) => {
                        log::warn!("Prometheus exporter unavailable, metrics are not exported: {e}");
                        (None, global::meter("gp10"))
                    }
                };

            let queries_total = meter
                .u64_counter("gp10_queries_total")
                .with_description("Total statements executed")
                .build();

            let query_errors_total = meter
                .u64_counter("gp10_query_errors_total")
                .with_description("Statements that returned an error")
                .build();

            let query_duration = meter
                .f64_histogram("gp10_query_duration_seconds")
                .with_description("Duration of statements")
                .build();

            let connection_wait = meter
                .f64_histogram("gp10_connection_wait_seconds")
                .with_description("Time spent establishing connections")
                .build();

            let notes_allocated_total = meter
                .u64_counter("gp10_note_indices_allocated_total")
                .with_description("Note indices issued by the counter procedure")
                .build();

            let note_allocation_failures_total = meter
                .u64_counter("gp10_note_index_failures_total")
                .with_description("Counter procedure calls that returned a non-zero status")
                .build();

            Self {
                registry,
                _provider: provider,
                queries_total,
                query_errors_total,
                query_duration,
                connection_wait,
                notes_allocated_total,
                note_allocation_failures_total,
            }
        }

        pub fn record_query(&self) {
            self.queries_total.add(1, &[]);
        }

        pub fn record_query_duration(&self, elapsed: Duration) {
            self.query_duration.record(elapsed.as_secs_f64(), &[]);
        }

        pub fn record_query_error(&self) {
            self.query_errors_total.add(1, &[]);
        }

        pub fn record_connection_wait(&self, elapsed: Duration) {
            self.connection_wait.record(elapsed.as_secs_f64(), &[]);
        }

        pub fn record_note_allocated(&self) {
            self.notes_allocated_total.add(1, &[]);
        }

        pub fn record_note_allocation_failure(&self) {
            self.note_allocation_failures_total.add(1, &[]);
        }

        /// Render the registry in the Prometheus text exposition format.
        pub fn render(&self) -> String {
            let mut buffer = Vec::new();
            if let Err(e) = TextEncoder::new().encode(&self.registry.gather(), &mut buffer) {
                log::warn!("failed to encode metrics: {e}");
            }
            String::from_utf8_lossy(&buffer).into_owned()
        }
    }
}

#[cfg(feature = "tracing")]
pub mod tracing_helpers {
    use tracing::Span;

    /// Span around a single statement. Only the first 200 bytes of SQL are recorded.
    pub fn execute_query_span(sql: &str) -> Span {
        let mut end = sql.len().min(200);
        while !sql.is_char_boundary(end) {
            end -= 1;
        }
        tracing::debug_span!("gp10.execute_query", sql = &sql[..end])
    }

    pub fn acquire_connection_span() -> Span {
        tracing::debug_span!("gp10.acquire_connection")
    }

    pub fn begin_transaction_span() -> Span {
        tracing::debug_span!("gp10.begin_transaction")
    }

    pub fn commit_transaction_span() -> Span {
        tracing::debug_span!("gp10.commit_transaction")
    }

    pub fn rollback_transaction_span() -> Span {
        tracing::debug_span!("gp10.rollback_transaction")
    }

    pub fn allocate_note_index_span(procedure: &str) -> Span {
        tracing::info_span!("gp10.allocate_note_index", procedure = procedure)
    }

}
