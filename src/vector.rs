use std::{array, fmt, ops::Neg};

use crate::traits::{NegOne, Number, One, Sqrt, Zero};

mod ops;
mod view;

pub use view::{RGB, RGBA, STU, UV, XY, XYZ, XYZW};

macro_rules! vector_aliases {
    ($($dim:literal => $generic:ident { $($alias:ident: $elem:ty),+ }),+ $(,)?) => {
        $(
            #[doc = concat!("A ", $dim, "-dimensional vector.")]
            pub type $generic<T> = Vector<T, $dim>;
            $(
                #[doc = concat!("A ", $dim, "-dimensional vector with [`", stringify!($elem), "`] elements.")]
                pub type $alias = $generic<$elem>;
            )+
        )+
    };
}

vector_aliases! {
    2 => Vec2 { Vec2f: f32, Vec2i: i32, Vec2d: f64, Vec2b: bool },
    3 => Vec3 { Vec3f: f32, Vec3i: i32, Vec3d: f64, Vec3b: bool },
    4 => Vec4 { Vec4f: f32, Vec4i: i32, Vec4d: f64, Vec4b: bool },
}

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] copies one value into every element.
/// - Arrays convert into vectors of the same length through the [`From`] impl.
/// - [`Vector::from_prefix`] fills the leading elements from a slice whose length is only known at
///   runtime.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - [`Default`] initializes each element with its default value, and [`Vector::ZERO`] is the
///   all-zero vector.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls work just like on arrays. Indexing out of bounds always
///   panics, in release builds too; [`Vector::get`] and [`Vector::get_mut`] return [`Option`]s
///   instead.
/// - 2-, 3- and 4-dimensional vectors expose their elements as named fields (`x`, `y`, `z`, `w`,
///   with the aliases `r`, `g`, `b`, `a`, `s`, `t`, `u` and `u`, `v`), and leading sub-vectors
///   through methods like [`Vector::xy`] and [`Vector::xyz`]. All of them refer to the same
///   storage as the indexed elements.
///
/// # Arithmetic
///
/// `+`, `-`, `*` and `/` operate element-wise, either between two vectors or between a vector
/// and a scalar. Multiplying two vectors yields their *Hadamard* product; use [`Vector::dot`] for
/// the dot product.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

// Safety: `Vector` is `#[repr(transparent)]` over `[T; N]`, so it is zeroable and `Pod` exactly
// when `T` is.
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}
unsafe impl<T, const N: usize> bytemuck::TransparentWrapper<[T; N]> for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

/// Unit direction constants.
///
/// The coordinate system is right-handed with Y pointing up and the viewer looking down the
/// negative Z axis.
impl<T: Zero + One + NegOne> Vector<T, 3> {
    /// `(0, 1, 0)`
    pub const UP: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// `(0, -1, 0)`
    pub const DOWN: Self = Self([T::ZERO, T::NEG_ONE, T::ZERO]);
    /// `(-1, 0, 0)`
    pub const LEFT: Self = Self([T::NEG_ONE, T::ZERO, T::ZERO]);
    /// `(1, 0, 0)`
    pub const RIGHT: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// `(0, 0, -1)`
    pub const FORWARD: Self = Self([T::ZERO, T::ZERO, T::NEG_ONE]);
    /// `(0, 0, 1)`
    pub const BACK: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = Vector::splat(42);
    /// assert_eq!(v, vec3(42, 42, 42));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from a list of elements whose length is only known at runtime.
    ///
    /// The elements of `elems` are assigned, in order, to the leading elements of the vector. Any
    /// remaining elements are initialized with [`T::default()`][Default::default].
    ///
    /// # Panics
    ///
    /// Panics if `elems` contains more than `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = Vector::<i32, 5>::from_prefix(&[1, 2, 3]);
    /// assert_eq!(v, [1, 2, 3, 0, 0]);
    /// ```
    #[track_caller]
    pub fn from_prefix(elems: &[T]) -> Self
    where
        T: Copy + Default,
    {
        assert!(
            elems.len() <= N,
            "attempt to create a {}-element vector from {} elements",
            N,
            elems.len(),
        );
        Self::from_fn(|i| elems.get(i).copied().unwrap_or_default())
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = vec2(7, 8);
    /// assert_eq!(v.get(1), Some(&8));
    /// assert_eq!(v.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if it is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(3, 4).dot(vec2(9, 12)), 75);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// This is cheaper than [`Vector::length`] and sufficient when only comparing the lengths of
    /// vectors against each other.
    #[doc(alias = "len2")]
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the (Euclidean) length of this [`Vector`].
    ///
    /// For integer element types, the result is truncated towards zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// assert_eq!(vec2(1, 1).length(), 1);
    /// ```
    #[doc(alias = "len")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns the squared distance between `self` and `other`.
    #[doc(alias = "dist2")]
    pub fn distance2(self, other: Self) -> T
    where
        T: Number,
    {
        (self - other).length2()
    }

    /// Returns the distance between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(3.0, 4.0).distance(vec2(9.0, 12.0)), 10.0);
    /// ```
    #[doc(alias = "dist")]
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (self - other).length()
    }

    /// Divides each element of this vector by its length, resulting in a unit vector.
    ///
    /// A zero-length vector has no direction: for floating-point elements, the result consists of
    /// NaNs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    #[doc(alias = "norm")]
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }
}

impl<T> Vector<T, 2> {
    /// Returns `self` rotated by 90° counterclockwise, `(-y, x)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(1, 0).perpendicular(), vec2(0, 1));
    /// assert_eq!(vec2(13, 37).perpendicular(), vec2(-37, 13));
    /// ```
    pub fn perpendicular(self) -> Self
    where
        T: Neg<Output = T>,
    {
        let [x, y] = self.0;
        vec2(-y, x)
    }
}

impl<T> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both `self` and `other`. Swapping the arguments inverts its
    /// direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Vec3f::RIGHT.cross(Vec3f::UP), Vec3f::BACK);
    /// assert_eq!(Vec3f::UP.cross(Vec3f::RIGHT), Vec3f::FORWARD);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

/// Returns the length of `v`. See [`Vector::length`].
pub fn len<T: Number + Sqrt, const N: usize>(v: Vector<T, N>) -> T {
    v.length()
}

/// Returns the squared length of `v`. See [`Vector::length2`].
pub fn len2<T: Number, const N: usize>(v: Vector<T, N>) -> T {
    v.length2()
}

/// Returns the distance between `v1` and `v2`. See [`Vector::distance`].
pub fn dist<T: Number + Sqrt, const N: usize>(v1: Vector<T, N>, v2: Vector<T, N>) -> T {
    v1.distance(v2)
}

/// Returns the squared distance between `v1` and `v2`. See [`Vector::distance2`].
pub fn dist2<T: Number, const N: usize>(v1: Vector<T, N>, v2: Vector<T, N>) -> T {
    v1.distance2(v2)
}

/// Returns the dot product of `v1` and `v2`. See [`Vector::dot`].
pub fn dot<T: Number, const N: usize>(v1: Vector<T, N>, v2: Vector<T, N>) -> T {
    v1.dot(v2)
}

/// Returns `v` scaled to unit length. See [`Vector::normalize`].
pub fn norm<T: Number + Sqrt, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.normalize()
}

/// Returns the cross product of `v1` and `v2`. See [`Vector::cross`].
pub fn cross<T: Number>(v1: Vec3<T>, v2: Vec3<T>) -> Vec3<T> {
    v1.cross(v2)
}

/// Returns `v` rotated by 90° counterclockwise. See [`Vector::perpendicular`].
pub fn perpendicular<T: Neg<Output = T>>(v: Vec2<T>) -> Vec2<T> {
    v.perpendicular()
}
