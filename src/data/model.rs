use std::path::{Path, PathBuf};

use glam::DVec3;

use super::error::LoadError;

/// Number of leading columns interpreted as X, Y, Z.
pub const COORDINATE_COLUMNS: usize = 3;

// ---------------------------------------------------------------------------
// PointTable – the rectangular numeric table read from the file
// ---------------------------------------------------------------------------

/// Rows × columns of `f64`, stored row-major.
///
/// Every row has `column_count` values; the loader rejects ragged input
/// before a table is built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointTable {
    values: Vec<f64>,
    columns: usize,
}

impl PointTable {
    /// Build a table from rows that all have `columns` values.
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>, columns: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns));
        PointTable {
            values: rows.into_iter().flatten().collect(),
            columns,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        if self.columns == 0 {
            0
        } else {
            self.values.len() / self.columns
        }
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.len() {
            return None;
        }
        let start = index * self.columns;
        Some(&self.values[start..start + self.columns])
    }

    /// Copy out a single column. Fails when the table is too narrow.
    pub fn column(&self, index: usize) -> Result<Vec<f64>, LoadError> {
        if index >= self.columns {
            return Err(LoadError::Shape {
                required: index + 1,
                found: self.columns,
            });
        }
        Ok(self
            .values
            .iter()
            .skip(index)
            .step_by(self.columns)
            .copied()
            .collect())
    }

    /// Extract columns 0, 1 and 2 as X, Y and Z. Extra columns are ignored.
    pub fn coordinates(&self) -> Result<PointCloud, LoadError> {
        if self.columns < COORDINATE_COLUMNS {
            return Err(LoadError::Shape {
                required: COORDINATE_COLUMNS,
                found: self.columns,
            });
        }
        Ok(PointCloud {
            x: self.column(0)?,
            y: self.column(1)?,
            z: self.column(2)?,
        })
    }
}

// ---------------------------------------------------------------------------
// PointCloud – the three coordinate sequences handed to the plot
// ---------------------------------------------------------------------------

/// X, Y and Z values, one entry per table row, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointCloud {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl PointCloud {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Iterate the points as vectors.
    pub fn points(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| DVec3::new(x, y, z))
    }

    /// Axis-aligned bounds, or `None` for an empty cloud.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.points();
        let first = points.next()?;
        Some(points.fold(Bounds { min: first, max: first }, |b, p| Bounds {
            min: b.min.min(p),
            max: b.max.max(p),
        }))
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec3,
    pub max: DVec3,
}

impl Bounds {
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Half the length of the diagonal.
    pub fn radius(&self) -> f64 {
        self.size().length() * 0.5
    }
}

// ---------------------------------------------------------------------------
// PointFile – a loaded file as the viewer sees it
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PointFile {
    pub path: PathBuf,
    /// Columns present in the file; only the first three are plotted.
    pub columns: usize,
    pub cloud: PointCloud,
}

impl PointFile {
    pub fn new(path: &Path, table: &PointTable) -> Result<Self, LoadError> {
        Ok(PointFile {
            path: path.to_path_buf(),
            columns: table.column_count(),
            cloud: table.coordinates()?,
        })
    }

    /// File name for titles and labels; falls back to the full path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::LoadErrorKind;

    fn table(rows: &[&[f64]]) -> PointTable {
        let columns = rows.first().map_or(0, |r| r.len());
        PointTable::from_rows(rows.iter().map(|r| r.to_vec()).collect(), columns)
    }

    #[test]
    fn test_rows_and_columns() {
        let t = table(&[&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0]]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.column_count(), 4);
        assert_eq!(t.row(1), Some(&[5.0, 6.0, 7.0, 8.0][..]));
        assert_eq!(t.row(2), None);
        assert_eq!(t.column(3).unwrap(), vec![4.0, 8.0]);
    }

    #[test]
    fn test_coordinates_ignore_extra_columns() {
        let t = table(&[&[1.0, 2.0, 3.0, 99.0], &[4.0, 5.0, 6.0, 99.0]]);
        let cloud = t.coordinates().unwrap();
        assert_eq!(cloud.x(), &[1.0, 4.0]);
        assert_eq!(cloud.y(), &[2.0, 5.0]);
        assert_eq!(cloud.z(), &[3.0, 6.0]);
    }

    #[test]
    fn test_too_few_columns_is_shape_error() {
        let err = table(&[&[1.0, 2.0]]).coordinates().unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::Shape);
        assert!(matches!(err, LoadError::Shape { required: 3, found: 2 }));

        let err = PointTable::default().coordinates().unwrap_err();
        assert!(matches!(err, LoadError::Shape { found: 0, .. }));
    }

    #[test]
    fn test_column_out_of_range() {
        let err = table(&[&[1.0]]).column(2).unwrap_err();
        assert!(matches!(err, LoadError::Shape { required: 3, found: 1 }));
    }

    #[test]
    fn test_bounds() {
        let cloud = table(&[&[-1.0, 0.0, 2.0], &[3.0, -4.0, 2.0], &[0.0, 1.0, 5.0]])
            .coordinates()
            .unwrap();
        let b = cloud.bounds().unwrap();
        assert_eq!(b.min, DVec3::new(-1.0, -4.0, 2.0));
        assert_eq!(b.max, DVec3::new(3.0, 1.0, 5.0));
        assert_eq!(b.center(), DVec3::new(1.0, -1.5, 3.5));
        assert_eq!(PointCloud::default().bounds(), None);
    }

    #[test]
    fn test_display_name() {
        let t = table(&[&[1.0, 2.0, 3.0]]);
        let file = PointFile::new(Path::new("/tmp/run1/position.txt"), &t).unwrap();
        assert_eq!(file.display_name(), "position.txt");
        assert_eq!(file.columns, 3);
    }
}
