//! Declarative extraction rules

use super::query;
use super::sample::{MetricKind, MetricSample};
use super::timespan::parse_seconds;
use crate::scrape::{DatabaseBlob, GlobalBlob};
use serde_json::Value;
use std::collections::BTreeMap;

/// Label value used when a group-by field is missing
pub const UNKNOWN_LABEL: &str = "unknown";

/// Which document a rule reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Global(GlobalBlob),
    /// Evaluated once per database, with a `database` label
    Database(DatabaseBlob),
}

/// A label taken from a field of each array element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelField {
    pub label: &'static str,
    pub field: &'static str,
}

impl LabelField {
    pub const fn new(label: &'static str, field: &'static str) -> Self {
        Self { label, field }
    }
}

/// How a value is read from a document.
///
/// The single valued variants yield 0 when the field is missing or has the
/// wrong type. The grouping variants yield nothing when their container is
/// missing.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// Numeric field
    Scalar(&'static str),
    /// Boolean field as 1 or 0
    Flag(&'static str),
    /// 1 when a string field equals `expected`, else 0
    Equals {
        field: &'static str,
        expected: &'static str,
    },
    /// Time span field in seconds
    Duration(&'static str),
    /// Length of an array, or the number of elements whose `flag` is true
    Count {
        array: &'static str,
        flag: Option<&'static str>,
    },
    /// Number of array elements per distinct combination of label fields
    GroupCount {
        array: &'static str,
        labels: &'static [LabelField],
    },
    /// Sum of a numeric field per distinct combination of label fields
    GroupSum {
        array: &'static str,
        labels: &'static [LabelField],
        value: &'static str,
    },
    /// One value per numeric member of an object, labelled with the key
    Entries {
        object: &'static str,
        label: &'static str,
    },
}

/// Label set and value before the metric identity is attached
pub type Bucket = (Vec<(String, String)>, f64);

fn indicator(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}

fn single(value: Option<f64>) -> Vec<Bucket> {
    vec![(Vec::new(), value.unwrap_or(0.0))]
}

impl Extraction {
    pub fn evaluate(&self, document: &Value) -> Vec<Bucket> {
        match *self {
            Self::Scalar(path) => single(query::number(document, path)),
            Self::Flag(path) => single(query::boolean(document, path).map(indicator)),
            Self::Equals { field, expected } => {
                single(Some(indicator(query::string(document, field) == Some(expected))))
            }
            Self::Duration(path) => single(query::string(document, path).and_then(parse_seconds)),
            Self::Count { array, flag } => single(query::array(document, array).map(|items| {
                items
                    .iter()
                    .filter(|item| flag.is_none_or(|f| query::boolean(item, f) == Some(true)))
                    .count() as f64
            })),
            Self::GroupCount { array, labels } => group(document, array, labels, |_| 1.0),
            Self::GroupSum {
                array,
                labels,
                value,
            } => group(document, array, labels, |item| {
                query::number(item, value).unwrap_or(0.0)
            }),
            Self::Entries { object, label } => match query::lookup(document, object) {
                Some(Value::Object(map)) => map
                    .iter()
                    .filter_map(|(key, v)| {
                        v.as_f64()
                            .map(|n| (vec![(label.to_string(), key.clone())], n))
                    })
                    .collect(),
                _ => Vec::new(),
            },
        }
    }
}

fn group<F>(document: &Value, array: &str, labels: &[LabelField], value_of: F) -> Vec<Bucket>
where
    F: Fn(&Value) -> f64,
{
    let Some(items) = query::array(document, array) else {
        return Vec::new();
    };

    let mut buckets: BTreeMap<Vec<String>, f64> = BTreeMap::new();
    for item in items {
        let key = labels
            .iter()
            .map(|l| query::label_value(item, l.field).unwrap_or_else(|| UNKNOWN_LABEL.to_string()))
            .collect();
        *buckets.entry(key).or_insert(0.0) += value_of(item);
    }

    buckets
        .into_iter()
        .map(|(values, total)| {
            let pairs = labels
                .iter()
                .zip(values)
                .map(|(l, v)| (l.label.to_string(), v))
                .collect();
            (pairs, total)
        })
        .collect()
}

/// One metric and how to fill it
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub name: String,
    pub help: &'static str,
    pub kind: MetricKind,
    pub source: Source,
    pub extraction: Extraction,
}

impl Rule {
    pub fn gauge(name: impl Into<String>, help: &'static str, source: Source, extraction: Extraction) -> Self {
        Self {
            name: name.into(),
            help,
            kind: MetricKind::Gauge,
            source,
            extraction,
        }
    }

    pub fn counter(name: impl Into<String>, help: &'static str, source: Source, extraction: Extraction) -> Self {
        Self {
            name: name.into(),
            help,
            kind: MetricKind::Counter,
            source,
            extraction,
        }
    }

    pub fn is_per_database(&self) -> bool {
        matches!(self.source, Source::Database(_))
    }

    /// Evaluate against `document`, prefixing every sample with `base` labels
    pub fn samples(&self, document: &Value, base: &[(String, String)]) -> Vec<MetricSample> {
        self.extraction
            .evaluate(document)
            .into_iter()
            .map(|(labels, value)| MetricSample {
                name: self.name.clone(),
                help: self.help.to_string(),
                kind: self.kind,
                labels: base.iter().cloned().chain(labels).collect(),
                value,
            })
            .collect()
    }
}
