//! Extracted metric values

/// Prometheus metric type of a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Counter,
    Gauge,
}

/// One labelled value produced by a scrape
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
    /// Label pairs in declaration order
    pub labels: Vec<(String, String)>,
    pub value: f64,
}

impl MetricSample {
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn label_names(&self) -> Vec<&str> {
        self.labels.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn label_values(&self) -> Vec<&str> {
        self.labels.iter().map(|(_, v)| v.as_str()).collect()
    }
}
