use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

pub trait FiniteRing:
    Sized
    + Eq
    + Add<Output = Self>
    + Neg<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + Copy
    + Clone
{
    const ZERO: Self;
    const ONE: Self;
}

/// A residue class that can be lifted into a wide signed accumulator and
/// reduced back, so that long sums of products are reduced only once.
pub trait WideResidue: FiniteRing {
    fn lift(self) -> i128;
    fn reduce(wide: i128) -> Self;
}

/// Integers modulo P. The stored value is always the canonical
/// representative in [0, P).
///
/// P must lie in [2, 2^32) so that sums and products of residues fit in a
/// u64; any other modulus is rejected when the type is instantiated.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Fp<const P: u64> {
    val: u64,
}

impl<const P: u64> Add for Fp<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let () = Self::MODULUS_IN_RANGE;
        Self {
            val: (self.val + rhs.val) % P,
        }
    }
}

impl<const P: u64> Mul for Fp<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let () = Self::MODULUS_IN_RANGE;
        Self {
            val: ((self.val as u128 * rhs.val as u128) % P as u128) as u64,
        }
    }
}

impl<const P: u64> Neg for Fp<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.val == 0 {
            return Self::ZERO;
        }

        Self { val: P - self.val }
    }
}

impl<const P: u64> Sub for Fp<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const P: u64> AddAssign for Fp<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const P: u64> SubAssign for Fp<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const P: u64> FiniteRing for Fp<P> {
    const ZERO: Self = Self { val: 0 };
    const ONE: Self = Self { val: 1 % P };
}

impl<const P: u64> WideResidue for Fp<P> {
    fn lift(self) -> i128 {
        self.val as i128
    }

    fn reduce(wide: i128) -> Self {
        let () = Self::MODULUS_IN_RANGE;
        Self {
            val: wide.rem_euclid(P as i128) as u64,
        }
    }
}

impl<const P: u64> From<u64> for Fp<P> {
    fn from(val: u64) -> Self {
        let () = Self::MODULUS_IN_RANGE;
        Self { val: val % P }
    }
}

impl<const P: u64> From<Fp<P>> for u64 {
    fn from(x: Fp<P>) -> u64 {
        x.val
    }
}

impl<const P: u64> fmt::Display for Fp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.val)
    }
}

impl<const P: u64> Fp<P> {
    const MODULUS_IN_RANGE: () = assert!(P >= 2 && P < 1 << 32, "modulus must lie in [2, 2^32)");

    /// Canonical representative in [0, P)
    pub const fn value(&self) -> u64 {
        self.val
    }

    /// Maps a signed integer to its residue class, e.g. -1 to P - 1.
    pub fn from_signed(val: i64) -> Self {
        let () = Self::MODULUS_IN_RANGE;
        Self {
            val: (val as i128).rem_euclid(P as i128) as u64,
        }
    }

    /// Signed representative in (-P/2, P/2]
    pub fn centered(&self) -> i64 {
        if self.val > P / 2 {
            self.val as i64 - P as i64
        } else {
            self.val as i64
        }
    }
}
