/// Data layer: core types, loading, binning, and range filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → (year, count) rows
///   └──────────┘
///        │
///        ▼
///   ┌────────────────────┐
///   │ PublicationDataset  │  rows sorted by year, cumulative sums,
///   └────────────────────┘  BucketConfig from binner (Sturges' rule)
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year-range + metric → (year, value) pairs
///   └──────────┘
/// ```
pub mod binner;
pub mod filter;
pub mod loader;
pub mod model;
