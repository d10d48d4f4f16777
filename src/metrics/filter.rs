use super::{Metric, MetricType};

/// Keeps the metrics whose type is listed in `filter`. An empty filter keeps everything.
pub fn filter_metrics<'a>(metrics: &'a [Metric], filter: &'a [MetricType]) -> impl Iterator<Item = &'a Metric> + 'a {
    metrics
        .iter()
        .filter(move |metric| filter.is_empty() || filter.contains(&metric.metric_type))
}
