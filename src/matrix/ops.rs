use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{traits::Number, Matrix, Vector};

/// Column access.
impl<T, const C: usize, const R: usize> Index<usize> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    #[inline]
    fn index(&self, col: usize) -> &Self::Output {
        &self.0[col]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<usize> for Matrix<T, C, R> {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        &mut self.0[col]
    }
}

impl<T, const C: usize, const R: usize> Index<(usize, usize)> for Matrix<T, C, R> {
    type Output = T;

    #[inline]
    fn index(&self, (col, row): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<(usize, usize)> for Matrix<T, C, R> {
    #[inline]
    fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

/// Element access with `x` as the column and `y` as the row.
impl<T, const C: usize, const R: usize> Index<Vector<usize, 2>> for Matrix<T, C, R> {
    type Output = T;

    #[inline]
    fn index(&self, pos: Vector<usize, 2>) -> &Self::Output {
        &self.0[pos.x][pos.y]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<Vector<usize, 2>> for Matrix<T, C, R> {
    #[inline]
    fn index_mut(&mut self, pos: Vector<usize, 2>) -> &mut Self::Output {
        &mut self.0[pos.x][pos.y]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const C: usize, const R: usize> PartialEq<Matrix<U, C, R>> for Matrix<T, C, R>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, C, R>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const C: usize, const R: usize> Eq for Matrix<T, C, R> where T: Eq {}

impl<T, const C: usize, const R: usize> AbsDiffEq for Matrix<T, C, R>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const C: usize, const R: usize> RelativeEq for Matrix<T, C, R>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const C: usize, const R: usize> UlpsEq for Matrix<T, C, R>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

impl<T, const C: usize, const R: usize> AddAssign for Matrix<T, C, R>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Self) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

impl<T, const C: usize, const R: usize> SubAssign for Matrix<T, C, R>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Self) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Element-wise addition.
impl<T, const C: usize, const R: usize> Add for Matrix<T, C, R>
where
    T: AddAssign,
{
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

/// Element-wise subtraction.
impl<T, const C: usize, const R: usize> Sub for Matrix<T, C, R>
where
    T: SubAssign,
{
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T, const C: usize, const R: usize> Neg for Matrix<T, C, R>
where
    T: Neg,
{
    type Output = Matrix<T::Output, C, R>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Matrix * Column Vector.
///
/// Each output row `i` is the sum over all columns `j` of `self[j][i] * rhs[j]`.
impl<T, const C: usize, const R: usize> Mul<Vector<T, C>> for Matrix<T, C, R>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[col][row] * rhs[col]))
    }
}

/// Matrix * Matrix.
///
/// Multiplying a matrix with `C` columns and `R` rows by one with `P` columns and `C` rows yields
/// a matrix with `P` columns and `R` rows. Applying the product to a vector is the same as
/// applying `rhs` first, then `self`.
impl<T, const C: usize, const R: usize, const P: usize> Mul<Matrix<T, P, C>> for Matrix<T, C, R>
where
    T: Number,
{
    type Output = Matrix<T, P, R>;

    fn mul(self, rhs: Matrix<T, P, C>) -> Self::Output {
        Matrix::from_fn(|col, row| {
            (0..C).fold(T::ZERO, |acc, k| acc + self[k][row] * rhs[col][k])
        })
    }
}

/// In-place Matrix * Matrix, for right-hand sides that preserve the shape of `self`.
impl<T, const C: usize, const R: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, C, R>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = *self * rhs;
    }
}

/// Matrix * Scalar.
impl<T, const C: usize, const R: usize> Mul<T> for Matrix<T, C, R>
where
    T: Number,
{
    type Output = Matrix<T, C, R>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T, const C: usize, const R: usize> MulAssign<T> for Matrix<T, C, R>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::*;

    #[test]
    fn index_forms_agree() {
        let mut m = Mat4x3i::from_fn(|col, row| (col * 10 + row) as i32);
        for col in 0..4 {
            for row in 0..3 {
                assert_eq!(m[col][row], m[(col, row)]);
                assert_eq!(m[col][row], m[vec2(col, row)]);
            }
        }

        m[vec2(3, 2)] = -1;
        assert_eq!(m[3][2], -1);
        m[(0, 1)] = -2;
        assert_eq!(m[0].y, -2);
        m[2].z = -3;
        assert_eq!(m[(2, 2)], -3);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn column_out_of_bounds() {
        let m = Mat2i::identity();
        let _ = m[std::hint::black_box(2)];
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn row_out_of_bounds() {
        let m = Mat2x3f::identity();
        let _ = m[(1, 3)];
    }

    #[test]
    fn add_sub() {
        let a = Mat2i::from_columns([[1, 2], [3, 4]]);
        let b = Mat2i::from_columns([[10, 20], [30, 40]]);

        assert_eq!(a + b, Mat2i::from_columns([[11, 22], [33, 44]]));
        assert_eq!(b - a, Mat2i::from_columns([[9, 18], [27, 36]]));
        assert_eq!(-a, Mat2i::from_columns([[-1, -2], [-3, -4]]));

        let mut c = a;
        c += b;
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn identity_is_neutral() {
        let mut rng = fastrand::Rng::with_seed(0x9b3a1f0c27d5e481);
        for _ in 0..50 {
            let m = Mat4i::from_fn(|_, _| rng.i32(-100..100));
            let v = Vec4i::from_fn(|_| rng.i32(-100..100));
            assert_eq!(Mat4i::identity() * m, m);
            assert_eq!(m * Mat4i::identity(), m);
            assert_eq!(Mat4i::identity() * v, v);
        }
    }

    #[test]
    fn rectangular_mul() {
        #[rustfmt::skip]
        let a = Mat2x3i::from_columns([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        // Row-wise, `a` is
        // 1 4
        // 2 5
        // 3 6
        assert_eq!(a * vec2(1, -1), vec3(-3, -3, -3));

        #[rustfmt::skip]
        let b = Matrix::<i32, 3, 2>::from_columns([
            [1, 0],
            [0, 1],
            [1, 1],
        ]);
        let ab: Mat3i = a * b;
        #[rustfmt::skip]
        assert_eq!(ab, Mat3i::from_columns([
            [1, 2, 3],
            [4, 5, 6],
            [5, 7, 9],
        ]));

        let ba: Mat2i = b * a;
        assert_eq!(ba, Mat2i::from_columns([[4, 5], [10, 11]]));
    }

    #[test]
    fn mul_matches_composition() {
        let mut rng = fastrand::Rng::with_seed(0x5e0d4c2f91a8b736);
        for _ in 0..50 {
            let a = Mat3i::from_fn(|_, _| rng.i32(-20..20));
            let b = Mat3i::from_fn(|_, _| rng.i32(-20..20));
            let v = Vec3i::from_fn(|_| rng.i32(-20..20));
            assert_eq!((a * b) * v, a * (b * v));

            let mut c = a;
            c *= b;
            assert_eq!(c, a * b);
        }
    }

    #[test]
    fn scalar_mul() {
        let m = Mat2f::from_columns([[1.0, -2.0], [0.5, 4.0]]);
        assert_eq!(m * 2.0, Mat2f::from_columns([[2.0, -4.0], [1.0, 8.0]]));

        let mut m = m;
        m *= 0.0;
        assert_eq!(m, Mat2f::ZERO);
    }

    #[test]
    fn approx_eq() {
        let a = Mat2f::from_columns([[0.1 + 0.2, 1.0], [0.0, 1.0]]);
        let b = Mat2f::from_columns([[0.3, 1.0], [0.0, 1.0]]);
        assert_relative_eq!(a, b);
        assert_ne!(a * 2.0, b);
    }
}
