/// Data layer: the point table, its coordinates, and loading.
///
/// Architecture:
/// ```text
///   points.txt  (whitespace-separated numbers, one row per line)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse text → PointTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ PointTable  │  rows × columns of f64
///   └────────────┘
///        │  columns 0, 1, 2
///        ▼
///   ┌────────────┐
///   │ PointCloud  │  X, Y, Z sequences + bounds
///   └────────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
