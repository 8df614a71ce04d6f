//! Named views over the elements of small vectors.
//!
//! Each view struct is `#[repr(C)]` and consists only of `T` fields (plus a trailing zero-sized
//! field preventing outside construction), so it has the same layout as a prefix of `[T; N]`.
//! Field access goes through a chain of [`Deref`] impls:
//!
//! - `Vector<T, 2>` → [`XY`] → [`UV`]
//! - `Vector<T, 3>` → [`XYZ`] → [`RGB`] → [`STU`]
//! - `Vector<T, 4>` → [`XYZW`] → [`RGBA`] → [`STU`]
//!
//! Leading sub-vectors (`xy`, `uv`, `xyz`, `rgb`, `stu`) are exposed as methods returning
//! references to a shorter [`Vector`] over the same elements.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use bytemuck::TransparentWrapper;

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct UV<T> {
    pub u: T,
    pub v: T,
    _priv: (),
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (),
}

#[repr(C)]
pub struct RGB<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    _priv: (),
}

/// Texture coordinate names.
///
/// For 4-dimensional vectors this only covers the first three elements.
#[repr(C)]
pub struct STU<T> {
    pub s: T,
    pub t: T,
    pub u: T,
    _priv: (),
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (),
}

#[repr(C)]
pub struct RGBA<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
    _priv: (),
}

/// Implements `Deref` and `DerefMut` from `$from` to `$to`.
///
/// Safety: `$to` must have the layout of a prefix of `$from`.
macro_rules! view {
    ($from:ty => $to:ident) => {
        impl<T> Deref for $from {
            type Target = $to<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                unsafe { mem::transmute(self) }
            }
        }

        impl<T> DerefMut for $from {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                unsafe { mem::transmute(self) }
            }
        }
    };
}

view!(Vector<T, 2> => XY);
view!(XY<T> => UV);

view!(Vector<T, 3> => XYZ);
view!(XYZ<T> => RGB);
view!(RGB<T> => STU);

view!(Vector<T, 4> => XYZW);
view!(XYZW<T> => RGBA);
view!(RGBA<T> => STU);

impl<T, const N: usize> Vector<T, N> {
    /// Returns a reference to the first `M` elements of `self` as a vector.
    fn head<const M: usize>(&self) -> &Vector<T, M> {
        let head = self
            .as_array()
            .first_chunk::<M>()
            .expect("sub-vector longer than vector");
        Vector::<T, M>::wrap_ref(head)
    }

    fn head_mut<const M: usize>(&mut self) -> &mut Vector<T, M> {
        let head = self
            .as_mut_array()
            .first_chunk_mut::<M>()
            .expect("sub-vector longer than vector");
        Vector::<T, M>::wrap_mut(head)
    }
}

macro_rules! sub_vectors {
    ($n:literal { $($name:ident, $name_mut:ident: $m:literal),+ }) => {
        impl<T> Vector<T, $n> {
            $(
                #[doc = concat!("Returns the first ", $m, " elements of `self` as a vector (`", stringify!($name), "`).")]
                #[inline]
                pub fn $name(&self) -> &Vector<T, $m> {
                    self.head()
                }

                #[doc = concat!("Mutable variant of [`Vector::", stringify!($name), "`].")]
                #[inline]
                pub fn $name_mut(&mut self) -> &mut Vector<T, $m> {
                    self.head_mut()
                }
            )+
        }
    };
}

sub_vectors!(3 { xy, xy_mut: 2, uv, uv_mut: 2 });
sub_vectors!(4 { xy, xy_mut: 2, uv, uv_mut: 2, xyz, xyz_mut: 3, rgb, rgb_mut: 3, stu, stu_mut: 3 });
