//! Metric types and per-unit metric data
//!
//! A [`Metric`] holds the per-declared-unit impact factors of one [`MetricType`] (for
//! example climate change, fossil) as an [`IndicatorSet`](crate::indicators::IndicatorSet).
//! A [`Declaration`] groups the metrics published by one environmental product declaration.
//!
//! Metric types come from two generations of reporting standards. Types from the older
//! standard are still evaluated, but their values are only comparable with other values of
//! the same standard, so evaluation flags them.

mod declaration;
mod filter;
mod metric;
mod metric_type;
mod quantity_type;

pub use declaration::Declaration;
pub use filter::filter_metrics;
pub use metric::Metric;
pub use metric_type::MetricType;
pub use quantity_type::QuantityType;
