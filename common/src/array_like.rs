use std::fmt;

use nalgebra::{DMatrix, DVector};

/// The dimensions of a value viewed as a dense numeric array.
/// No dimensions at all denotes a single scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Create a shape from its dimension lengths, outermost first
    pub fn new(dims: Vec<usize>) -> Self {
        Self(dims)
    }

    /// The shape of a zero-dimensional value
    pub fn scalar() -> Self {
        Self(Vec::new())
    }

    /// Number of dimensions
    #[inline(always)]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Total number of elements
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.0.iter().product()
    }

    /// The dimension lengths
    #[inline(always)]
    pub fn dims(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => write!(f, "()"),
            [n] => write!(f, "({},)", n),
            dims => {
                let dims: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
                write!(f, "({})", dims.join(", "))
            }
        }
    }
}

/// Anything that may be viewed as a dense numeric array.
///
/// This is a capability rather than a container type:
/// a value is array-like exactly when `shape` returns `Some`.
pub trait ArrayLike {
    /// The shape of the value viewed as a numeric array,
    /// or `None` if it cannot be viewed as one
    fn shape(&self) -> Option<Shape>;

    /// All elements in row-major order
    fn values(&self) -> Vec<f64>;
}

impl ArrayLike for f64 {
    fn shape(&self) -> Option<Shape> {
        Some(Shape::scalar())
    }

    fn values(&self) -> Vec<f64> {
        vec![*self]
    }
}

impl ArrayLike for [f64] {
    fn shape(&self) -> Option<Shape> {
        Some(Shape::new(vec![self.len()]))
    }

    fn values(&self) -> Vec<f64> {
        self.to_vec()
    }
}

impl<const N: usize> ArrayLike for [f64; N] {
    fn shape(&self) -> Option<Shape> {
        self.as_slice().shape()
    }

    fn values(&self) -> Vec<f64> {
        self.to_vec()
    }
}

impl ArrayLike for Vec<f64> {
    fn shape(&self) -> Option<Shape> {
        self.as_slice().shape()
    }

    fn values(&self) -> Vec<f64> {
        self.clone()
    }
}

impl<const M: usize> ArrayLike for [[f64; M]] {
    fn shape(&self) -> Option<Shape> {
        if self.is_empty() {
            return Some(Shape::new(vec![0]));
        }
        Some(Shape::new(vec![self.len(), M]))
    }

    fn values(&self) -> Vec<f64> {
        self.iter().flatten().copied().collect()
    }
}

impl<const M: usize, const N: usize> ArrayLike for [[f64; M]; N] {
    fn shape(&self) -> Option<Shape> {
        self.as_slice().shape()
    }

    fn values(&self) -> Vec<f64> {
        self.as_slice().values()
    }
}

impl ArrayLike for [Vec<f64>] {
    /// Ragged rows cannot be viewed as a dense array
    fn shape(&self) -> Option<Shape> {
        let Some(first) = self.first() else {
            return Some(Shape::new(vec![0]));
        };
        let ncols = first.len();
        if self.iter().any(|row| row.len() != ncols) {
            return None;
        }

        Some(Shape::new(vec![self.len(), ncols]))
    }

    fn values(&self) -> Vec<f64> {
        self.iter().flatten().copied().collect()
    }
}

impl ArrayLike for Vec<Vec<f64>> {
    fn shape(&self) -> Option<Shape> {
        self.as_slice().shape()
    }

    fn values(&self) -> Vec<f64> {
        self.as_slice().values()
    }
}

impl ArrayLike for DVector<f64> {
    fn shape(&self) -> Option<Shape> {
        Some(Shape::new(vec![self.nrows()]))
    }

    fn values(&self) -> Vec<f64> {
        self.iter().copied().collect()
    }
}

impl ArrayLike for DMatrix<f64> {
    fn shape(&self) -> Option<Shape> {
        Some(Shape::new(vec![self.nrows(), self.ncols()]))
    }

    fn values(&self) -> Vec<f64> {
        // nalgebra stores columns contiguously, so the transpose iterates rows
        self.transpose().iter().copied().collect()
    }
}

impl ArrayLike for str {
    fn shape(&self) -> Option<Shape> {
        None
    }

    fn values(&self) -> Vec<f64> {
        Vec::new()
    }
}

impl ArrayLike for String {
    fn shape(&self) -> Option<Shape> {
        None
    }

    fn values(&self) -> Vec<f64> {
        Vec::new()
    }
}

impl<T: ArrayLike + ?Sized> ArrayLike for &T {
    fn shape(&self) -> Option<Shape> {
        (**self).shape()
    }

    fn values(&self) -> Vec<f64> {
        (**self).values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_display() {
        assert_eq!(Shape::scalar().to_string(), "()");
        assert_eq!(Shape::new(vec![3]).to_string(), "(3,)");
        assert_eq!(Shape::new(vec![3, 2]).to_string(), "(3, 2)");
    }

    #[test]
    fn scalar_is_zero_dimensional() {
        let shape = 10.0_f64.shape().unwrap();
        assert_eq!(shape.ndim(), 0);
        assert_eq!(shape.size(), 1);
        assert_eq!(10.0_f64.values(), vec![10.0]);
    }

    #[test]
    fn sequences() {
        assert_eq!([1.0_f64, 2.0, 3.0].shape(), Some(Shape::new(vec![3])));
        assert_eq!(vec![1.0_f64, 2.0].shape(), Some(Shape::new(vec![2])));
        let empty: Vec<f64> = vec![];
        assert_eq!(empty.shape().unwrap().size(), 0);
    }

    #[test]
    fn nested_rows() {
        let rows: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        assert_eq!(rows.shape(), Some(Shape::new(vec![3, 2])));
        assert_eq!(rows.values(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let ragged: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(ragged.shape(), None);

        let fixed = [[1.0_f64], [2.0], [3.0]];
        assert_eq!(fixed.shape(), Some(Shape::new(vec![3, 1])));
    }

    #[test]
    fn matrices_are_row_major() {
        let m: DMatrix<f64> = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(ArrayLike::shape(&m), Some(Shape::new(vec![2, 3])));
        assert_eq!(m.values(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let v: DVector<f64> = DVector::from_vec(vec![1.0, 2.0]);
        assert_eq!(ArrayLike::shape(&v), Some(Shape::new(vec![2])));
    }

    #[test]
    fn text_is_not_array_like() {
        assert_eq!("abc".shape(), None);
        assert_eq!(String::from("1, 2, 3").shape(), None);
    }
}
