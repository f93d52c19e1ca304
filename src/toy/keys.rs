//! Key material and ciphertexts, together with the deterministic cores of
//! key generation, encryption and decryption. All randomness is supplied by
//! the caller; [`super::pke::PKE`] is the layer that samples it.

use crate::{
    error::ToyError,
    math::{RingElement, RingMatrix, RingVector},
};

use super::encode::{check_plaintext, encode_message};

/// Public key (A, t) with t = A * s + e
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey<const K: usize, const N: usize, const Q: u64> {
    a: RingMatrix<Q, N, K>,
    t: RingVector<Q, N, K>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretKey<const K: usize, const N: usize, const Q: u64> {
    s: RingVector<Q, N, K>,
}

/// Ciphertext (u, v) with u = A^T * r + e1 and v = t * r + e2 + encode(m)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ciphertext<const K: usize, const N: usize, const Q: u64> {
    u: RingVector<Q, N, K>,
    v: RingElement<Q, N>,
}

impl<const K: usize, const N: usize, const Q: u64> PublicKey<K, N, Q> {
    /// Builds the key pair for secret `s`, consuming the noise `e`.
    pub fn from_secret(
        a: RingMatrix<Q, N, K>,
        s: RingVector<Q, N, K>,
        e: RingVector<Q, N, K>,
    ) -> (Self, SecretKey<K, N, Q>) {
        let t = a.mul_vec(&s) + e;
        (Self { a, t }, SecretKey { s })
    }

    pub fn a(&self) -> &RingMatrix<Q, N, K> {
        &self.a
    }

    pub fn t(&self) -> &RingVector<Q, N, K> {
        &self.t
    }
}

impl<const K: usize, const N: usize, const Q: u64> SecretKey<K, N, Q> {
    pub fn s(&self) -> &RingVector<Q, N, K> {
        &self.s
    }

    /// v - s * u, i.e. the encoded plaintext plus the accumulated noise.
    pub fn noisy_plaintext(&self, ct: &Ciphertext<K, N, Q>) -> RingElement<Q, N> {
        ct.v - self.s.dot(&ct.u)
    }
}

impl<const K: usize, const N: usize, const Q: u64> Ciphertext<K, N, Q> {
    /// Encrypts `plaintext` with caller-chosen randomness `r` and noise
    /// `e1`, `e2`.
    pub fn from_randomness(
        pk: &PublicKey<K, N, Q>,
        plaintext: u64,
        r: &RingVector<Q, N, K>,
        e1: &RingVector<Q, N, K>,
        e2: &RingElement<Q, N>,
    ) -> Result<Self, ToyError> {
        let plaintext = check_plaintext::<N>(plaintext)?;
        Ok(Self::assemble(pk, plaintext, r, e1, e2))
    }

    pub(crate) fn assemble(
        pk: &PublicKey<K, N, Q>,
        plaintext: u64,
        r: &RingVector<Q, N, K>,
        e1: &RingVector<Q, N, K>,
        e2: &RingElement<Q, N>,
    ) -> Self {
        let u = pk.a.transpose_mul_vec(r) + *e1;
        let v = pk.t.dot(r) + *e2 + encode_message(plaintext);
        Self { u, v }
    }

    pub fn u(&self) -> &RingVector<Q, N, K> {
        &self.u
    }

    pub fn v(&self) -> &RingElement<Q, N> {
        &self.v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::finite_field::FiniteRing;

    type Poly = RingElement<97, 4>;

    fn poly(c: [i64; 4]) -> Poly {
        Poly::from_signed(c)
    }

    #[test]
    fn test_public_key_is_a_s_plus_e() {
        let mut a = RingMatrix::<97, 4, 2>::zero();
        a[(0, 0)] = poly([1, 2, 0, 0]);
        a[(0, 1)] = poly([0, 0, 3, 0]);
        a[(1, 0)] = poly([0, 0, 0, 1]);
        a[(1, 1)] = poly([5, 0, 0, 0]);
        let s = RingVector::from([poly([1, 0, 0, 0]), poly([0, 1, 0, 0])]);
        let e = RingVector::from([poly([0, 0, 0, -1]), poly([1, 0, 0, 0])]);

        let (pk, sk) = PublicKey::from_secret(a, s, e);
        // row 0: (1 + 2X) + 3X^2 * X - X^3 = 1 + 2X + 2X^3
        assert_eq!(pk.t()[0], poly([1, 2, 0, 2]));
        // row 1: X^3 + 5X + 1
        assert_eq!(pk.t()[1], poly([1, 5, 0, 1]));
        assert_eq!(sk.s(), &s);
        assert_eq!(pk.a(), &a);
    }

    #[test]
    fn test_zero_randomness_exposes_message() {
        let a = RingMatrix::<97, 4, 2>::zero();
        let s = RingVector::from([poly([3, 0, 0, 1]), poly([0, -1, 0, 0])]);
        let (pk, sk) = PublicKey::from_secret(a, s, RingVector::zero());
        let zero = RingVector::zero();

        let ct = Ciphertext::from_randomness(&pk, 0b1001, &zero, &zero, &Poly::ZERO).unwrap();
        assert_eq!(ct.u(), &RingVector::zero());
        assert_eq!(ct.v(), &poly([48, 0, 0, 48]));
        assert_eq!(sk.noisy_plaintext(&ct), poly([48, 0, 0, 48]));
    }

    #[test]
    fn test_rejects_wide_plaintext() {
        let (pk, _) = PublicKey::<2, 4, 97>::from_secret(
            RingMatrix::zero(),
            RingVector::zero(),
            RingVector::zero(),
        );
        let zero = RingVector::zero();
        let res = Ciphertext::from_randomness(&pk, 16, &zero, &zero, &Poly::ZERO);
        assert_eq!(
            res,
            Err(ToyError::PlaintextOutOfRange {
                plaintext: 16,
                bits: 4
            })
        );
    }
}
