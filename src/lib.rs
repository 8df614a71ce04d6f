//! Small fixed-size vectors and matrices for graphics and geometry code.
//!
//! # Overview
//!
//! - [`Vector<T, N>`] is an `N`-element column vector. 2-, 3- and 4-element vectors expose their
//!   elements as named fields (`v.x`, `v.g`, `v.u`, ...) that share storage with the indexed
//!   elements.
//! - [`Matrix<T, C, R>`] is a column-major matrix with `C` columns and `R` rows, stored as `C`
//!   column vectors.
//! - [`Mat4`] and [`Mat3`] provide constructors for homogeneous 3D and 2D transforms
//!   (translation, scaling, and axis-angle rotation).
//!
//! Aliases like [`Vec3f`] or [`Mat4i`] name the common combinations of dimension and element
//! type.
//!
//! # Conventions
//!
//! - Dimensions are const generics, so mismatched dimensions are compile-time errors.
//! - Arithmetic operators on vectors operate element-wise. Binary operators behave like copying
//!   the left operand and applying the matching compound-assignment operator to the copy.
//! - Indexing is always bounds-checked and panics when out of bounds. `get` and `get_mut` methods
//!   offer checked access instead.
//! - Arithmetic is never intercepted: overflow, division by zero, and NaN propagation follow the
//!   element type.
//!
//! # Non-Goals
//!
//! - Dynamically-sized vectors and matrices.
//! - Decompositions (determinant, inverse, eigenvalues) and quaternions.
//! - SIMD backends.

mod matrix;
mod traits;
mod vector;

pub use matrix::*;
pub use traits::*;
pub use vector::*;
