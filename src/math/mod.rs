use self::{
    finite_field::Fp,
    matrix::{Matrix, Vector},
    poly::Polynomial,
};

pub mod finite_field;
pub mod matrix;
pub mod poly;
pub mod prime;

/// Polynomial Ring Rq = Zq[X]/(X^N+1) over an arbitrary modulus Q
pub type RingElement<const Q: u64, const N: usize> = Polynomial<Fp<Q>, N>;
pub type RingVector<const Q: u64, const N: usize, const K: usize> = Vector<RingElement<Q, N>, K>;
pub type RingMatrix<const Q: u64, const N: usize, const K: usize> =
    Matrix<RingElement<Q, N>, K, K>;

/// Polynomial Ring Rq = Zq[X]/(X^N+1), q = 97
pub type F97 = Fp<97>;
pub type Poly97<const N: usize> = Polynomial<F97, N>;
pub type PolyVec97<const N: usize, const D: usize> = Vector<Poly97<N>, D>;
pub type PolyMatrix97<const N: usize, const X: usize, const Y: usize> = Matrix<Poly97<N>, X, Y>;
