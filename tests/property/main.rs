//! Property-based tests of the derived-metrics and filter engines.

mod filter_properties;
mod metric_properties;
