//! Homogeneous transformation matrices.
//!
//! 3D transforms are 4x4 matrices operating on `(x, y, z, 1)` points, 2D transforms are 3x3
//! matrices operating on `(x, y, 1)` points. Transforms are combined with `*`, where the
//! right-hand matrix is applied first.

use approx::UlpsEq;

use crate::{traits::Number, vec3, Mat3, Mat4, Matrix, One, Trig, Vec2, Vec3, Zero};

impl<T: Zero + One> Mat4<T> {
    /// Creates a 3D translation matrix moving points by `(x, y, z)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let tr = Mat4f::translate(3.0, -4.5, 10.0);
    /// assert_eq!(tr[3], vec4(3.0, -4.5, 10.0, 1.0));
    /// assert_eq!(tr * vec4(-1.0, 2.0, 4.5, 1.0), vec4(2.0, -2.5, 14.5, 1.0));
    /// ```
    pub fn translate(x: T, y: T, z: T) -> Self {
        let mut this = Self::identity();
        this[3] = [x, y, z, T::ONE].into();
        this
    }

    /// Creates a 3D translation matrix moving points by `offset`.
    pub fn translation(offset: impl Into<Vec3<T>>) -> Self {
        let [x, y, z] = offset.into().into_array();
        Self::translate(x, y, z)
    }

    /// Creates a 3D scale matrix, scaling the X, Y and Z axes by the given factors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let s = Mat4f::scale(2.0, -2.0, 1.5);
    /// assert_eq!(s * vec4(-1.0, 2.0, 4.5, 1.0), vec4(-2.0, -4.0, 6.75, 1.0));
    /// ```
    pub fn scale(x: T, y: T, z: T) -> Self {
        Self::from_diagonal([x, y, z, T::ONE])
    }

    /// Creates a 3D scale matrix from a vector of per-axis factors.
    pub fn scaling(factors: impl Into<Vec3<T>>) -> Self {
        let [x, y, z] = factors.into().into_array();
        Self::scale(x, y, z)
    }
}

impl<T: Number + Trig + UlpsEq> Mat4<T> {
    /// Creates a 3D rotation matrix rotating counterclockwise around `axis` by `radians`.
    ///
    /// `axis` is expected to have unit length. It is *not* normalized: for longer or shorter axes
    /// the resulting matrix scales in addition to rotating.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// # use approx::assert_relative_eq;
    /// let rot = Mat4f::rotate(Vec3f::BACK, std::f32::consts::FRAC_PI_2);
    /// assert_relative_eq!(rot * vec4(1.0, 0.0, 0.0, 1.0), vec4(0.0, 1.0, 0.0, 1.0));
    /// ```
    pub fn rotate(axis: impl Into<Vec3<T>>, radians: T) -> Self {
        let axis = axis.into();
        if log::log_enabled!(log::Level::Trace) && !is_unit_length(axis) {
            log::trace!("rotation axis is not unit length, result will also scale");
        }

        let [x, y, z] = axis.into_array();
        let (s, c) = radians.sin_cos();
        let ic = T::ONE - c;

        let mut this = Self::identity();
        this[0] = [x * x * ic + c, y * x * ic + z * s, z * x * ic - y * s, T::ZERO].into();
        this[1] = [x * y * ic - z * s, y * y * ic + c, z * y * ic + x * s, T::ZERO].into();
        this[2] = [x * z * ic + y * s, y * z * ic - x * s, z * z * ic + c, T::ZERO].into();
        this
    }
}

/// Tolerates the rounding error left behind by [`Vector::normalize`](crate::Vector::normalize).
fn is_unit_length<T: Number + UlpsEq>(v: Vec3<T>) -> bool {
    v.length2().ulps_eq(&T::ONE, T::default_epsilon(), 16)
}

impl<T: Zero + One> Mat3<T> {
    /// Creates a 2D translation matrix moving points by `(x, y)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let tr = Mat3i::translate(5, -1);
    /// assert_eq!(tr * vec3(1, 1, 1), vec3(6, 0, 1));
    /// ```
    pub fn translate(x: T, y: T) -> Self {
        let mut this = Self::identity();
        this[2] = vec3(x, y, T::ONE);
        this
    }

    /// Creates a 2D translation matrix moving points by `offset`.
    pub fn translation(offset: impl Into<Vec2<T>>) -> Self {
        let [x, y] = offset.into().into_array();
        Self::translate(x, y)
    }

    /// Creates a 2D scale matrix, scaling the X and Y axes by the given factors.
    pub fn scale(x: T, y: T) -> Self {
        Matrix::from_diagonal([x, y, T::ONE])
    }

    /// Creates a 2D scale matrix from a vector of per-axis factors.
    pub fn scaling(factors: impl Into<Vec2<T>>) -> Self {
        let [x, y] = factors.into().into_array();
        Self::scale(x, y)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::is_unit_length;
    use crate::*;

    #[test]
    fn translate() {
        let tr = Mat4f::translate(3.0, -4.5, 10.0);
        assert_eq!(tr, Mat4f::translation([3.0, -4.5, 10.0]));
        assert_eq!(tr, Mat4f::translation(vec3(3.0, -4.5, 10.0)));
        assert_eq!(tr[3], [3.0, -4.5, 10.0, 1.0]);
        for col in 0..3 {
            assert_eq!(tr[col], Mat4f::identity()[col]);
        }

        // Directions (w = 0) are not affected by translation.
        assert_eq!(tr * vec4(1.0, 2.0, 3.0, 0.0), vec4(1.0, 2.0, 3.0, 0.0));
    }

    #[test]
    fn translate_2d() {
        let tr = Mat3f::translate(3.0, -4.5);
        assert_eq!(tr, Mat3f::translation(vec2(3.0, -4.5)));
        #[rustfmt::skip]
        assert_eq!(tr, Mat3f::from_columns([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [3.0, -4.5, 1.0],
        ]));
        assert_eq!(tr * vec3(-1.0, 2.0, 1.0), vec3(2.0, -2.5, 1.0));
    }

    #[test]
    fn scale() {
        let s = Mat4f::scale(2.0, -2.0, 1.5);
        assert_eq!(s, Mat4f::scaling([2.0, -2.0, 1.5]));
        assert_eq!(s, Mat4f::from_diagonal([2.0, -2.0, 1.5, 1.0]));

        let s = Mat3i::scale(2, 3);
        assert_eq!(s, Mat3i::scaling(vec2(2, 3)));
        assert_eq!(s * vec3(5, 5, 1), vec3(10, 15, 1));
    }

    #[test]
    fn transforms_compose() {
        let p = vec4(1.0, 1.0, 1.0, 1.0);
        let scale_then_move = Mat4f::translate(1.0, 0.0, 0.0) * Mat4f::scale(2.0, 2.0, 2.0);
        assert_eq!(scale_then_move * p, vec4(3.0, 2.0, 2.0, 1.0));

        let move_then_scale = Mat4f::scale(2.0, 2.0, 2.0) * Mat4f::translate(1.0, 0.0, 0.0);
        assert_eq!(move_then_scale * p, vec4(4.0, 2.0, 2.0, 1.0));
    }

    #[test]
    fn rotate_principal_axes() {
        let v = vec4(-1.0, 2.0, 4.5, 1.0);

        let r = Mat4f::rotate(Vec3f::BACK, FRAC_PI_4) * v;
        assert_relative_eq!(r, vec4(-2.12132, 0.70711, 4.5, 1.0), max_relative = 1e-5);
        assert_eq!(r.w, 1.0);

        let r = Mat4f::rotate(Vec3f::UP, FRAC_PI_4) * v;
        assert_relative_eq!(r, vec4(2.47487, 2.0, 3.88909, 1.0), max_relative = 1e-5);

        let r = Mat4f::rotate(Vec3f::RIGHT, FRAC_PI_4) * v;
        assert_relative_eq!(r, vec4(-1.0, -1.76777, 4.59619, 1.0), max_relative = 1e-5);
    }

    #[test]
    fn rotate_leaves_axis_fixed() {
        let mut rng = fastrand::Rng::with_seed(0x17c2e5a04bd3f968);
        for _ in 0..100 {
            let axis = vec3(rng.f32() - 0.5, rng.f32() - 0.5, rng.f32() - 0.5).normalize();
            let angle = (rng.f32() - 0.5) * 4.0 * PI;
            let rot = Mat4f::rotate(axis, angle);

            let on_axis = axis * 3.0;
            let rotated = rot * vec4(on_axis.x, on_axis.y, on_axis.z, 1.0);
            assert_abs_diff_eq!(*rotated.xyz(), on_axis, epsilon = 1e-4);

            // Rotations preserve lengths.
            let p = vec4(rng.f32(), rng.f32(), rng.f32(), 0.0);
            assert_relative_eq!((rot * p).length(), p.length(), max_relative = 1e-4);
        }
    }

    #[test]
    fn rotate_is_counterclockwise() {
        let rot = Mat4d::rotate(Vec3d::BACK, std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(rot * vec4(1.0, 0.0, 0.0, 0.0), vec4(0.0, 1.0, 0.0, 0.0), epsilon = 1e-12);

        let rot = Mat4f::rotate(Vec3f::UP, FRAC_PI_2);
        assert_abs_diff_eq!(rot * vec4(0.0, 0.0, 1.0, 0.0), vec4(1.0, 0.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn rotate_non_unit_axis_scales() {
        let rot = Mat4f::rotate(vec3(0.0, 0.0, 2.0), 0.0);
        assert_eq!(rot, Mat4f::identity());

        // z' = z * (2² * (1 - cos π) + cos π) = 7z
        let rot = Mat4f::rotate(vec3(0.0, 0.0, 2.0), PI);
        let p = rot * vec4(0.0, 0.0, 1.0, 1.0);
        assert_relative_eq!(p.z, 7.0, max_relative = 1e-5);
        assert_eq!(p.w, 1.0);
    }

    #[test]
    fn normalized_axes_count_as_unit_length() {
        let mut rng = fastrand::Rng::with_seed(0x4d8e2a61c0f7b395);
        for _ in 0..1000 {
            let axis = vec3(rng.f32() - 0.5, rng.f32() - 0.5, rng.f32() - 0.5).normalize();
            assert!(is_unit_length(axis), "{axis:?} has length² {}", axis.length2());

            let axis = vec3(rng.f64() - 0.5, rng.f64() - 0.5, rng.f64() - 0.5).normalize();
            assert!(is_unit_length(axis), "{axis:?} has length² {}", axis.length2());
        }

        assert!(is_unit_length(Vec3f::UP));
        assert!(!is_unit_length(vec3(0.0f32, 0.0, 2.0)));
        assert!(!is_unit_length(vec3(1.0f64, 1.0, 0.0)));
        assert!(!is_unit_length(vec3(0.0f32, 0.0, 1.001)));
    }
}
