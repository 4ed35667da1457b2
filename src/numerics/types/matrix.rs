// src/numerics/types/matrix.rs
// Dense row-major matrix with a shape fixed at construction.

use core::fmt;
use core::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::numerics::error::MatrixError;
use crate::numerics::types::traits::FloatingPoint;

/// Dense `rows x columns` matrix, defaulting to `f64` elements.
///
/// The shape never changes after construction; elements are mutable in place
/// through indexing. `Clone` allocates fresh storage, so a clone and its
/// source never share elements.
#[derive(Clone, Debug)]
pub struct Matrix<T: FloatingPoint = f64> {
    rows: usize,
    columns: usize,
    values: Vec<T>,
}

impl<T: FloatingPoint> Matrix<T> {
    /// Zero-filled matrix of the given shape. Either dimension may be 0.
    ///
    /// # Panics
    /// If `rows * columns` overflows `usize`.
    pub fn new(rows: usize, columns: usize) -> Self {
        let len = rows
            .checked_mul(columns)
            .expect("matrix shape overflows usize");
        Self {
            rows,
            columns,
            values: vec![T::zero(); len],
        }
    }

    /// Construct a matrix from nested rows.
    ///
    /// # Returns
    /// * `Ok(Matrix)` - All rows have the same length
    /// * `Err(MatrixError::RaggedRows)` - Some row differs in length from the first
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let columns = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * columns);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                tracing::debug!(row = index, expected = columns, found = row.len(), "ragged matrix rows");
                return Err(MatrixError::RaggedRows {
                    row: index,
                    expected: columns,
                    found: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            values,
        })
    }

    /// Identity matrix. Panics like [`Matrix::new`] if `size * size` overflows.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::new(size, size);
        for i in 0..size {
            m[(i, i)] = T::one();
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Checked element access.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.offset(row, column).map(|i| &self.values[i])
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.offset(row, column).map(move |i| &mut self.values[i])
    }

    /// Get a row by index. Panics if `idx >= rows`, even when `columns == 0`.
    pub fn row(&self, idx: usize) -> &[T] {
        assert!(
            idx < self.rows,
            "row {idx} out of bounds for {}x{} matrix",
            self.rows, self.columns
        );
        let start = idx * self.columns;
        &self.values[start..start + self.columns]
    }

    /// Iterate rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Row-major view over every element.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Copy the elements out into a freshly allocated two-dimensional array.
    pub fn to_array(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }

    /// New `columns x rows` matrix with `result[(j, i)] == self[(i, j)]`.
    pub fn transpose(&self) -> Self {
        let mut result = Self::new(self.columns, self.rows);
        for i in 0..self.rows {
            for j in 0..self.columns {
                result[(j, i)] = self[(i, j)];
            }
        }
        result
    }

    /// Encode with bincode's standard configuration.
    pub fn to_bytes(&self) -> Result<Vec<u8>, MatrixError>
    where
        T: Serialize,
    {
        bincode::serde::encode_to_vec(self, bincode::config::standard())
            .map_err(|e| MatrixError::Encoding(e.to_string()))
    }

    /// Decode bytes produced by [`Matrix::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MatrixError>
    where
        T: serde::de::DeserializeOwned,
    {
        let (matrix, _) = bincode::serde::decode_from_slice(bytes, bincode::config::standard())
            .map_err(|e| MatrixError::Encoding(e.to_string()))?;
        Ok(matrix)
    }

    pub(crate) fn from_parts(rows: usize, columns: usize, values: Vec<T>) -> Self {
        debug_assert_eq!(values.len(), rows * columns);
        Self { rows, columns, values }
    }

    fn offset(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }
}

impl<T: FloatingPoint> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        match self.offset(row, column) {
            Some(i) => &self.values[i],
            None => panic!(
                "index ({row}, {column}) out of bounds for {}x{} matrix",
                self.rows, self.columns
            ),
        }
    }
}

impl<T: FloatingPoint> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        match self.offset(row, column) {
            Some(i) => &mut self.values[i],
            None => panic!(
                "index ({row}, {column}) out of bounds for {}x{} matrix",
                self.rows, self.columns
            ),
        }
    }
}

/// Every element is followed by a tab, every row by a newline.
impl<T: FloatingPoint> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for value in row {
                write!(f, "{value}\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: FloatingPoint> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl<T: FloatingPoint> From<&Matrix<T>> for Vec<Vec<T>> {
    fn from(m: &Matrix<T>) -> Self {
        m.to_array()
    }
}

impl<T: FloatingPoint> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(m: Matrix<T>) -> Self {
        m.to_array()
    }
}

#[derive(Serialize)]
struct MatrixRef<'a, T> {
    rows: usize,
    columns: usize,
    values: &'a [T],
}

#[derive(Deserialize)]
struct MatrixOwned<T> {
    rows: usize,
    columns: usize,
    values: Vec<T>,
}

impl<T> Serialize for Matrix<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        MatrixRef {
            rows: self.rows,
            columns: self.columns,
            values: &self.values,
        }
        .serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = MatrixOwned::<T>::deserialize(deserializer)?;
        let expected = raw
            .rows
            .checked_mul(raw.columns)
            .ok_or_else(|| <D::Error as serde::de::Error>::custom("matrix shape overflows usize"))?;
        if raw.values.len() != expected {
            return Err(serde::de::Error::custom(format_args!(
                "element count {} does not match shape {}x{}",
                raw.values.len(),
                raw.rows,
                raw.columns
            )));
        }
        Ok(Matrix {
            rows: raw.rows,
            columns: raw.columns,
            values: raw.values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap()
    }

    #[test]
    fn test_new_is_zero_filled() {
        let m = Matrix::<f64>::new(2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert!(m.as_slice().iter().all(|&v| v == 0.0));
        assert_eq!(m.as_slice().len(), 6);
    }

    #[test]
    fn test_empty_shapes() {
        let m = Matrix::<f64>::new(0, 4);
        assert_eq!(m.shape(), (0, 4));
        assert_eq!(m.to_string(), "");

        let m = Matrix::<f64>::new(3, 0);
        assert_eq!(m.to_string(), "\n\n\n");
        assert_eq!(m.to_array(), vec![Vec::<f64>::new(); 3]);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, MatrixError::RaggedRows { row: 1, expected: 2, found: 1 });
    }

    #[test]
    fn test_index_and_checked_access() {
        let mut m = sample();
        assert_eq!(m[(1, 0)], 3.0);
        m[(1, 0)] = 7.5;
        assert_eq!(m.get(1, 0), Some(&7.5));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);

        *m.get_mut(0, 1).unwrap() = -1.0;
        assert_eq!(m.row(0), &[1.0, -1.0]);
        assert!(m.get_mut(5, 5).is_none());
    }

    #[test]
    #[should_panic(expected = "matrix shape overflows usize")]
    fn test_new_rejects_overflowing_shape() {
        let _ = Matrix::<f64>::new(1 << (usize::BITS / 2), 1 << (usize::BITS / 2));
    }

    #[test]
    #[should_panic(expected = "matrix shape overflows usize")]
    fn test_identity_rejects_overflowing_size() {
        let _ = Matrix::<f32>::identity(usize::MAX);
    }

    #[test]
    #[should_panic(expected = "row 99 out of bounds")]
    fn test_row_out_of_range_panics_without_columns() {
        let m = Matrix::<f64>::new(3, 0);
        let _ = m.row(99);
    }

    #[test]
    fn test_rows_of_columnless_matrix() {
        let m = Matrix::<f64>::new(3, 0);
        assert!(m.row(2).is_empty());
        assert_eq!(m.iter_rows().count(), 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_range_panics() {
        let m = sample();
        let _ = m[(0, 2)];
    }

    #[test]
    fn test_display_uses_trailing_tabs() {
        assert_eq!(sample().to_string(), "1\t2\t\n3\t4\t\n");

        let wide = Matrix::from_rows(vec![vec![0.5f32, -1.0, 2.0]]).unwrap();
        assert_eq!(wide.to_string(), "0.5\t-1\t2\t\n");
    }

    #[test]
    fn test_transpose_of_non_square() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.to_array(), vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
        assert_eq!(m.shape(), (2, 3));
    }

    #[test]
    fn test_identity() {
        let id = Matrix::<f32>::identity(3);
        assert_eq!(id.row(0), &[1.0, 0.0, 0.0]);
        assert_eq!(id.row(2), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_clone_has_independent_storage() {
        let m = sample();
        let mut copy = m.clone();
        copy[(0, 0)] = 100.0;
        assert_eq!(m[(0, 0)], 1.0);
        assert_ne!(m.as_slice().as_ptr(), copy.as_slice().as_ptr());
    }

    #[test]
    fn test_bincode_roundtrip() {
        let m = Matrix::from_rows(vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let encoded = m.to_bytes().expect("encode failed");
        let decoded = Matrix::<f32>::from_bytes(&encoded).expect("decode failed");
        assert_eq!(decoded.shape(), (2, 3));
        assert_eq!(decoded.as_slice(), m.as_slice());
    }

    #[test]
    fn test_decode_rejects_inconsistent_shape() {
        let bogus = MatrixOwned { rows: 2, columns: 2, values: vec![1.0f64; 3] };
        let bytes = bincode::serde::encode_to_vec(
            MatrixRef { rows: bogus.rows, columns: bogus.columns, values: &bogus.values },
            bincode::config::standard(),
        )
        .unwrap();
        let err = Matrix::<f64>::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, MatrixError::Encoding(msg) if msg.contains("does not match shape")));
    }
}
