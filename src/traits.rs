use std::ops;

/// Types that have a "zero" value (an additive identity).
///
/// [`bool`] implements this trait with `false`, so that boolean matrices can be built with the
/// same identity pattern as numeric ones.
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
///
/// [`bool`] implements this trait with `true`.
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Signed types that have a "minus one" value.
pub trait NegOne {
    /// The *-1* value of this type.
    const NEG_ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// Both the binary and the compound-assignment forms of the operators are required, since vector
/// arithmetic is defined in terms of the compound operators.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + ops::DivAssign
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + ops::AddAssign
        + ops::SubAssign
        + ops::MulAssign
        + ops::DivAssign
        + PartialEq
        + Copy
{
}

/// Types that support computing their square root.
///
/// Integer types compute the square root in [`f64`] and truncate the result towards zero.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the trigonometric functions needed to build rotation matrices.
pub trait Trig: Copy {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;

    /// Computes the sine and cosine of `self` (in radians).
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
}

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }
            impl One for $types {
                const ONE: Self = 1;
            }
            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as Self
                }
            }
        )+
    };
}
int_consts!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! neg_one {
    ($($types:ty = $value:expr),+) => {
        $(
            impl NegOne for $types {
                const NEG_ONE: Self = $value;
            }
        )+
    };
}
neg_one!(
    i8 = -1,
    i16 = -1,
    i32 = -1,
    i64 = -1,
    i128 = -1,
    isize = -1,
    f32 = -1.0,
    f64 = -1.0
);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }
            impl One for $types {
                const ONE: Self = 1.0;
            }
            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    <$types>::sqrt(self)
                }
            }
            impl Trig for $types {
                fn sin(self) -> Self {
                    <$types>::sin(self)
                }

                fn cos(self) -> Self {
                    <$types>::cos(self)
                }

                fn sin_cos(self) -> (Self, Self) {
                    <$types>::sin_cos(self)
                }
            }
        )+
    };
}
float_impls!(f32, f64);

impl Zero for bool {
    const ZERO: Self = false;
}
impl One for bool {
    const ONE: Self = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_sqrt_truncates() {
        assert_eq!(Sqrt::sqrt(16i32), 4);
        assert_eq!(Sqrt::sqrt(15i32), 3);
        assert_eq!(Sqrt::sqrt(2u8), 1);
        assert_eq!(Sqrt::sqrt(0i64), 0);
    }

    #[test]
    fn float_sqrt() {
        assert_eq!(Sqrt::sqrt(2.25f32), 1.5);
        assert_eq!(Sqrt::sqrt(6.25f64), 2.5);
    }

    #[test]
    fn bool_identity_elements() {
        assert!(!bool::ZERO);
        assert!(bool::ONE);
    }
}
