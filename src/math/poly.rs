use super::finite_field::{FiniteRing, Fp, WideResidue};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Polynomial in the ring T[X]/(X^N + 1)
///
/// The coefficient array has exactly N entries; `coefficients[i]` is the
/// coefficient of X^i.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Polynomial<T, const N: usize>
where
    T: Clone + PartialEq + Eq,
{
    pub coefficients: [T; N],
}

impl<T: FiniteRing, const N: usize> Add for Polynomial<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut coefficients = self.coefficients;
        for (c, r) in coefficients.iter_mut().zip(rhs.coefficients) {
            *c += r;
        }
        Self { coefficients }
    }
}

impl<T: FiniteRing, const N: usize> Neg for Polynomial<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            coefficients: self.coefficients.map(|c| -c),
        }
    }
}

impl<T: FiniteRing, const N: usize> Sub for Polynomial<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<T: FiniteRing, const N: usize> AddAssign for Polynomial<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: FiniteRing, const N: usize> SubAssign for Polynomial<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: WideResidue, const N: usize> Mul for Polynomial<T, N> {
    type Output = Self;

    /// Negacyclic convolution. Every output coefficient is accumulated in
    /// an i128 and reduced once at the end.
    fn mul(self, rhs: Self) -> Self::Output {
        let mut acc = [0i128; N];

        for i in 0..N {
            let a = self.coefficients[i].lift();
            if a == 0 {
                continue;
            }
            for j in 0..N {
                let c = a * rhs.coefficients[j].lift();
                let k = i + j;
                if k < N {
                    acc[k] += c;
                } else {
                    // X^n + 1 = 0
                    acc[k - N] -= c;
                }
            }
        }

        Self {
            coefficients: acc.map(T::reduce),
        }
    }
}

impl<T: WideResidue, const N: usize> FiniteRing for Polynomial<T, N> {
    const ZERO: Self = Self {
        coefficients: [T::ZERO; N],
    };

    const ONE: Self = {
        let mut coefficients = [T::ZERO; N];
        coefficients[0] = T::ONE;
        Self { coefficients }
    };
}

impl<T: FiniteRing, const N: usize> Polynomial<T, N> {
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| *c == T::ZERO)
    }

    pub fn with_coefficients(coefficients: [T; N]) -> Self {
        Self { coefficients }
    }
}

impl<const Q: u64, const N: usize> Polynomial<Fp<Q>, N> {
    /// Builds a polynomial from signed coefficients, reducing each into [0, Q).
    pub fn from_signed(coefficients: [i64; N]) -> Self {
        Self {
            coefficients: coefficients.map(Fp::from_signed),
        }
    }

    /// Coefficients as signed representatives in (-Q/2, Q/2]
    pub fn centered(&self) -> [i64; N] {
        self.coefficients.map(|c| c.centered())
    }

    /// Largest centered coefficient magnitude
    pub fn infinity_norm(&self) -> u64 {
        self.coefficients
            .iter()
            .map(|c| c.centered().unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}

impl<T: FiniteRing, const N: usize> Default for Polynomial<T, N> {
    fn default() -> Self {
        Self {
            coefficients: [T::ZERO; N],
        }
    }
}
