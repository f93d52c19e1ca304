//! Coefficient samplers.
//!
//! Every function takes the randomness source explicitly, so a seeded
//! generator (or an [`XofRng`](super::xof::XofRng)) makes the whole
//! protocol reproducible.

use rand::Rng;

use crate::math::{
    finite_field::Fp, poly::Polynomial, RingElement, RingMatrix, RingVector,
};

fn uniform_coefficient<const Q: u64, R: Rng + ?Sized>(rng: &mut R) -> Fp<Q> {
    Fp::from(rng.gen_range(0..Q))
}

/// Centered binomial distribution B_eta: sum of eta fair-coin differences,
/// supported on [-eta, eta].
fn cbd_coefficient<R: Rng + ?Sized>(rng: &mut R, eta: usize) -> i64 {
    let mut a = 0;
    let mut b = 0;
    for _ in 0..eta {
        if rng.gen::<bool>() {
            a += 1;
        }
        if rng.gen::<bool>() {
            b += 1;
        }
    }
    a - b
}

/// `count` independent draws, uniform over [0, Q)
pub fn uniform<const Q: u64, R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Fp<Q>> {
    (0..count).map(|_| uniform_coefficient(rng)).collect()
}

/// `count` independent draws from B_eta, reduced into [0, Q)
pub fn small<const Q: u64, R: Rng + ?Sized>(rng: &mut R, count: usize, eta: usize) -> Vec<Fp<Q>> {
    (0..count)
        .map(|_| Fp::from_signed(cbd_coefficient(rng, eta)))
        .collect()
}

pub fn uniform_poly<const Q: u64, const N: usize, R: Rng + ?Sized>(
    rng: &mut R,
) -> RingElement<Q, N> {
    Polynomial::with_coefficients(std::array::from_fn(|_| uniform_coefficient(rng)))
}

pub fn small_poly<const Q: u64, const N: usize, R: Rng + ?Sized>(
    rng: &mut R,
    eta: usize,
) -> RingElement<Q, N> {
    Polynomial::with_coefficients(std::array::from_fn(|_| {
        Fp::from_signed(cbd_coefficient(rng, eta))
    }))
}

pub fn small_vec<const Q: u64, const N: usize, const K: usize, R: Rng + ?Sized>(
    rng: &mut R,
    eta: usize,
) -> RingVector<Q, N, K> {
    let mut res = RingVector::zero();
    for i in 0..K {
        res[i] = small_poly(rng, eta);
    }
    res
}

/// K x K matrix with uniform entries
pub fn uniform_matrix<const Q: u64, const N: usize, const K: usize, R: Rng + ?Sized>(
    rng: &mut R,
) -> RingMatrix<Q, N, K> {
    let mut res = RingMatrix::zero();
    for i in 0..K {
        for j in 0..K {
            res[(i, j)] = uniform_poly(rng);
        }
    }
    res
}
