use std::{array, fmt};

use bytemuck::TransparentWrapper;

use crate::{One, Vector, Zero};

mod ops;
mod transform;

macro_rules! matrix_aliases {
    ($($cols:literal x $rows:literal => $generic:ident { $($alias:ident: $elem:ty),+ }),+ $(,)?) => {
        $(
            #[doc = concat!("A matrix with ", $cols, " columns and ", $rows, " rows.")]
            pub type $generic<T> = Matrix<T, $cols, $rows>;
            $(
                #[doc = concat!("A matrix with ", $cols, " columns, ", $rows, " rows and [`", stringify!($elem), "`] elements.")]
                pub type $alias = $generic<$elem>;
            )+
        )+
    };
}

matrix_aliases! {
    2 x 2 => Mat2 { Mat2f: f32, Mat2i: i32, Mat2d: f64, Mat2b: bool },
    3 x 3 => Mat3 { Mat3f: f32, Mat3i: i32, Mat3d: f64, Mat3b: bool },
    4 x 4 => Mat4 { Mat4f: f32, Mat4i: i32, Mat4d: f64, Mat4b: bool },
    4 x 2 => Mat4x2 { Mat4x2f: f32, Mat4x2i: i32, Mat4x2d: f64, Mat4x2b: bool },
    4 x 3 => Mat4x3 { Mat4x3f: f32, Mat4x3i: i32, Mat4x3d: f64, Mat4x3b: bool },
    2 x 4 => Mat2x4 { Mat2x4f: f32, Mat2x4i: i32, Mat2x4d: f64, Mat2x4b: bool },
    2 x 3 => Mat2x3 { Mat2x3f: f32, Mat2x3i: i32, Mat2x3d: f64, Mat2x3b: bool },
}

/// A column-major matrix with `C` columns, `R` rows, and element type `T`.
///
/// The matrix is stored as `C` column vectors of type [`Vector<T, R>`].
///
/// # Construction
///
/// - [`Default`] and [`Matrix::identity`] create a matrix with 1 where the column index equals the
///   row index and 0 everywhere else. This also applies to non-square matrices.
/// - [`Matrix::from_columns`] (and the [`From`] impl for nested arrays) fills the matrix from a
///   list of *column* vectors.
/// - [`Matrix::from_fn`] invokes a closure with the column and row of each element.
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Mat4::translate`], [`Mat4::scale`], [`Mat4::rotate`] and their 2D counterparts on [`Mat3`]
///   create homogeneous transformation matrices.
///
/// # Element Access
///
/// Indexing with a single `usize` yields a column vector, which can be indexed again to access a
/// single element, so `m[col][row]` works like it does in GLSL. Elements can also be indexed with
/// a `(col, row)` tuple or a [`Vector<usize, 2>`] holding `x = col` and `y = row`.
///
/// ```
/// # use linmath::*;
/// let mut mat = Mat2i::from_columns([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[1][0] = 4;
/// assert_eq!(mat[(1, 0)], 4);
/// assert_eq!(mat[vec2(0, 1)], 1);
/// assert_eq!(mat[1], vec2(4, 3));
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const C: usize, const R: usize>([Vector<T, R>; C]);

// Safety: `Matrix` is `#[repr(transparent)]` over `[Vector<T, R>; C]`, which has the layout of
// `[[T; R]; C]` without padding.
unsafe impl<T: bytemuck::Zeroable, const C: usize, const R: usize> bytemuck::Zeroable
    for Matrix<T, C, R>
{
}
unsafe impl<T: bytemuck::Pod, const C: usize, const R: usize> bytemuck::Pod for Matrix<T, C, R> {}

impl<T: Zero, const C: usize, const R: usize> Matrix<T, C, R> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Vector::<T, R>::ZERO; C]);
}

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Creates the identity pattern: 1 where the column equals the row, 0 elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let id = Mat2x3i::identity();
    /// assert_eq!(id, Mat2x3i::from_columns([
    ///     [1, 0, 0],
    ///     [0, 1, 0],
    /// ]));
    /// ```
    pub fn identity() -> Self
    where
        T: Zero + One,
    {
        Self::from_fn(|col, row| if col == row { T::ONE } else { T::ZERO })
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Mat2x3i::from_columns([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(mat[0], vec3(1, 2, 3));
    /// assert_eq!(mat[1][2], 6);
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(Into::into))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (column and row) of each
    /// element.
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| Vector::from_fn(|row| cb(col, row))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, C, R>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Mat2x3i::from_columns([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::<i32, 3, 2>::from_columns([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, R, C>
    where
        T: Copy,
    {
        Matrix::from_fn(|col, row| self[row][col])
    }

    /// Returns a reference to the column vector at index `col`.
    #[inline]
    pub fn column(&self, col: usize) -> &Vector<T, R> {
        &self.0[col]
    }

    /// Returns a reference to the element at (`col`, `row`), or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Mat2x3i::identity();
    /// assert_eq!(mat.get(1, 1), Some(&1));
    /// assert_eq!(mat.get(1, 2), Some(&0));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, col: usize, row: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at (`col`, `row`), or [`None`] if out of bounds.
    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns all elements in column-major order.
    ///
    /// Element (`col`, `row`) is located at index `col * R + row`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Mat2i::from_columns([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.as_flat_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn as_flat_slice(&self) -> &[T] {
        <Vector<T, R> as TransparentWrapper<[T; R]>>::peel_slice(&self.0).as_flattened()
    }

    /// Converts this matrix into an array of column arrays.
    pub fn into_columns(self) -> [[T; R]; C] {
        self.0.map(Vector::into_array)
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Mat3i::from_columns([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let mut this = Self::ZERO;
        for (i, elem) in diag.into().into_array().into_iter().enumerate() {
            this[i][i] = elem;
        }
        this
    }
}

/// Creates the identity pattern (see [`Matrix::identity`]).
impl<T: Zero + One, const C: usize, const R: usize> Default for Matrix<T, C, R> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T, U, const C: usize, const R: usize> From<[U; C]> for Matrix<T, C, R>
where
    U: Into<Vector<T, R>>,
{
    fn from(columns: [U; C]) -> Self {
        Self::from_columns(columns)
    }
}

/// Prints the matrix row by row, in the natural reading order.
impl<T: fmt::Debug, const C: usize, const R: usize> fmt::Debug for Matrix<T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T, const C: usize, const R: usize>(&'a Matrix<T, C, R>, usize);
        impl<'a, T: fmt::Debug, const C: usize, const R: usize> fmt::Debug for FormatRow<'a, T, C, R> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[col][self.1])?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn default_is_identity() {
        let m = Mat4f::default();
        for col in 0..4 {
            for row in 0..4 {
                let expected = if col == row { 1.0 } else { 0.0 };
                assert_eq!(m[col][row], expected, "element ({col}, {row})");
            }
        }

        assert_eq!(Mat3i::default(), Mat3i::identity());
        assert_eq!(Mat2b::default(), Mat2b::from_columns([[true, false], [false, true]]));
    }

    #[test]
    fn rectangular_identity() {
        #[rustfmt::skip]
        assert_eq!(Mat4x2i::default(), Mat4x2i::from_columns([
            [1, 0],
            [0, 1],
            [0, 0],
            [0, 0],
        ]));
        #[rustfmt::skip]
        assert_eq!(Mat2x4i::default(), Mat2x4i::from_columns([
            [1, 0, 0, 0],
            [0, 1, 0, 0],
        ]));
    }

    #[test]
    fn from_columns() {
        #[rustfmt::skip]
        let m = Mat4f::from_columns([
            [3.0, 2.0, -2.0, 0.5],
            [0.0, 1.0, 5.0, 1.0],
            [5.5, 13.0, 37.0, 23.0],
            [1.1, 1.2, 1.3, -1.4],
        ]);

        assert_eq!(m[0], [3.0, 2.0, -2.0, 0.5]);
        assert_eq!(m[1], [0.0, 1.0, 5.0, 1.0]);
        assert_eq!(m[2], [5.5, 13.0, 37.0, 23.0]);
        assert_eq!(m[3], [1.1, 1.2, 1.3, -1.4]);
        assert_eq!(m[2][1], 13.0);
        assert_eq!(m[(3, 3)], -1.4);
    }

    #[test]
    fn flat_layout_is_column_major() {
        let m = Mat2x3i::from_fn(|col, row| (col * 10 + row) as i32);
        let flat = m.as_flat_slice();
        for col in 0..2 {
            for row in 0..3 {
                assert_eq!(flat[col * 3 + row], m[col][row]);
            }
        }
    }

    #[test]
    fn cast_to_elements() {
        let mats = [Mat2f::identity(), Mat2f::from_columns([[1.0, 2.0], [3.0, 4.0]])];
        let floats: &[f32] = bytemuck::cast_slice(&mats);
        assert_eq!(floats, [1.0, 0.0, 0.0, 1.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn zeroed_and_bytes() {
        assert_eq!(bytemuck::zeroed::<Mat4x3i>(), Mat4x3i::ZERO);

        let m = Mat2i::from_columns([[1, 2], [3, 4]]);
        assert_eq!(bytemuck::bytes_of(&m).len(), 4 * 4);
        assert_eq!(*bytemuck::from_bytes::<Mat2i>(bytemuck::bytes_of(&m)), m);
    }

    #[test]
    fn fmt() {
        let mat = Mat2i::from_columns([[0, 2], [1, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::identity()), "[[1.0, 0.0], [0.0, 1.0]]");
    }

    #[test]
    fn get() {
        let mut m = Mat3i::identity();
        assert_eq!(m.get(2, 2), Some(&1));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 3), None);

        if let Some(elem) = m.get_mut(2, 0) {
            *elem = 7;
        }
        assert_eq!(m[2][0], 7);
        assert_eq!(m.column(2), &vec3(7, 0, 1));
    }
}
