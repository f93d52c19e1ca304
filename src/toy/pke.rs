use log::{debug, log_enabled, trace, warn, Level};
use rand::Rng;

use crate::{
    error::ToyError,
    math::{prime::is_prime, RingMatrix, RingVector},
};

use super::{
    encode::{check_plaintext, decode_message},
    keys::{Ciphertext, PublicKey, SecretKey},
    sampler::{small_poly, small_vec, uniform_matrix, uniform_poly},
    xof::{g, XofRng},
};

/// Largest module rank whose PRF nonces 0..=2K fit in a byte.
pub const MAX_MODULE_RANK: usize = 127;

/// Toy module-LWE encryption over Z_Q[X]/(X^N + 1) with module rank K.
///
/// `eta1` bounds the secret and the key/encryption randomness, `eta2` the
/// encryption noise; both are centered binomial parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PKE<const K: usize, const N: usize, const Q: u64> {
    eta1: usize,
    eta2: usize,
}

impl<const K: usize, const N: usize, const Q: u64> PKE<K, N, Q> {
    /// Checks K, N and Q.
    pub const fn check_params() -> Result<(), ToyError> {
        if K == 0 {
            return Err(ToyError::ModuleRankZero);
        }
        if K > MAX_MODULE_RANK {
            return Err(ToyError::ModuleRankTooLarge(K));
        }
        if !N.is_power_of_two() {
            return Err(ToyError::DegreeNotPowerOfTwo(N));
        }
        if N > 64 {
            return Err(ToyError::DegreeTooLarge(N));
        }
        if Q >= 1 << 32 {
            return Err(ToyError::ModulusTooLarge(Q));
        }
        if Q < 5 {
            return Err(ToyError::ModulusTooSmall(Q));
        }
        if !is_prime(Q) {
            return Err(ToyError::ModulusNotPrime(Q));
        }
        Ok(())
    }

    /// Const constructor for parameter presets. Invalid parameters abort
    /// compilation when used in a `const`.
    pub const fn new(eta1: usize, eta2: usize) -> Self {
        match Self::check_params() {
            Ok(()) => Self { eta1, eta2 },
            Err(ToyError::ModuleRankZero) => panic!("module rank must be positive"),
            Err(ToyError::ModuleRankTooLarge(_)) => panic!("module rank must be at most 127"),
            Err(ToyError::DegreeNotPowerOfTwo(_)) => panic!("ring degree must be a power of two"),
            Err(ToyError::DegreeTooLarge(_)) => panic!("ring degree must be at most 64"),
            Err(ToyError::ModulusTooLarge(_)) => panic!("modulus must be below 2^32"),
            Err(ToyError::ModulusTooSmall(_)) => panic!("modulus too small"),
            Err(ToyError::ModulusNotPrime(_)) => panic!("modulus must be prime"),
            Err(ToyError::PlaintextOutOfRange { .. }) => unreachable!(),
        }
    }

    pub fn try_new(eta1: usize, eta2: usize) -> Result<Self, ToyError> {
        Self::check_params()?;
        let pke = Self { eta1, eta2 };

        let sigma = pke.noise_std_dev();
        let threshold = Self::decoding_threshold();
        debug!(
            "toy pke k={} n={} q={} eta1={} eta2={}: noise std dev {:.2}, worst case {}, threshold {}",
            K,
            N,
            Q,
            eta1,
            eta2,
            sigma,
            pke.worst_case_noise(),
            threshold
        );
        if (threshold as f64) < 4.0 * sigma {
            warn!(
                "noise std dev {:.2} is large against the q/4 = {} threshold, decryption will fail noticeably often",
                sigma, threshold
            );
        }
        Ok(pke)
    }

    pub fn eta1(&self) -> usize {
        self.eta1
    }

    pub fn eta2(&self) -> usize {
        self.eta2
    }

    /// Centered coefficients of magnitude above this decode as 1.
    pub const fn decoding_threshold() -> u64 {
        Q / 4
    }

    /// Bound on |e * r - s * e1 + e2| per coefficient of the decrypted
    /// polynomial.
    pub fn worst_case_noise(&self) -> u64 {
        let (k, n) = (K as u64, N as u64);
        let (eta1, eta2) = (self.eta1 as u64, self.eta2 as u64);
        k * n * eta1 * (eta1 + eta2) + eta2
    }

    /// Standard deviation of the same noise, with Var(B_eta) = eta / 2.
    pub fn noise_std_dev(&self) -> f64 {
        let (k, n) = (K as f64, N as f64);
        let (v1, v2) = (self.eta1 as f64 / 2.0, self.eta2 as f64 / 2.0);
        (k * n * v1 * (v1 + v2) + v2).sqrt()
    }

    pub fn key_gen(&self) -> (PublicKey<K, N, Q>, SecretKey<K, N, Q>) {
        self.key_gen_with_rng(&mut rand::thread_rng())
    }

    pub fn key_gen_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> (PublicKey<K, N, Q>, SecretKey<K, N, Q>) {
        let a = uniform_matrix(rng);
        let s = small_vec(rng, self.eta1);
        let e = small_vec(rng, self.eta1);
        debug!("generated key pair k={} n={} q={}", K, N, Q);
        PublicKey::from_secret(a, s, e)
    }

    /// Deterministic key generation: (rho, sigma) = G(seed), A expanded from
    /// rho, s and e from PRF(sigma, nonce).
    pub fn key_gen_from_seed(&self, seed: &[u8; 32]) -> (PublicKey<K, N, Q>, SecretKey<K, N, Q>) {
        let (rho, sigma) = g(seed);

        let mut a = RingMatrix::<Q, N, K>::zero();
        for i in 0..K {
            for j in 0..K {
                a[(i, j)] = uniform_poly(&mut XofRng::matrix_entry(&rho, i, j));
            }
        }

        let (mut s, mut e) = (RingVector::<Q, N, K>::zero(), RingVector::<Q, N, K>::zero());
        for i in 0..K {
            s[i] = small_poly(&mut XofRng::prf(&sigma, i as u8), self.eta1);
            e[i] = small_poly(&mut XofRng::prf(&sigma, (K + i) as u8), self.eta1);
        }

        debug!("derived key pair from seed k={} n={} q={}", K, N, Q);
        PublicKey::from_secret(a, s, e)
    }

    pub fn encrypt(
        &self,
        pk: &PublicKey<K, N, Q>,
        plaintext: u64,
    ) -> Result<Ciphertext<K, N, Q>, ToyError> {
        self.encrypt_with_rng(pk, plaintext, &mut rand::thread_rng())
    }

    pub fn encrypt_with_rng<R: Rng + ?Sized>(
        &self,
        pk: &PublicKey<K, N, Q>,
        plaintext: u64,
        rng: &mut R,
    ) -> Result<Ciphertext<K, N, Q>, ToyError> {
        let plaintext = check_plaintext::<N>(plaintext)?;

        // sample r from B_{eta_1}, e_1 and e_2 from B_{eta_2}
        let r = small_vec(rng, self.eta1);
        let e1 = small_vec(rng, self.eta2);
        let e2 = small_poly(rng, self.eta2);

        debug!("encrypting {}-bit plaintext", N);
        Ok(Ciphertext::assemble(pk, plaintext, &r, &e1, &e2))
    }

    /// Derandomized encryption: r, e1 and e2 come from PRF(coins, nonce).
    pub fn encrypt_with_coins(
        &self,
        pk: &PublicKey<K, N, Q>,
        plaintext: u64,
        coins: &[u8; 32],
    ) -> Result<Ciphertext<K, N, Q>, ToyError> {
        let plaintext = check_plaintext::<N>(plaintext)?;

        let (mut r, mut e1) = (RingVector::<Q, N, K>::zero(), RingVector::<Q, N, K>::zero());
        for i in 0..K {
            r[i] = small_poly(&mut XofRng::prf(coins, i as u8), self.eta1);
            e1[i] = small_poly(&mut XofRng::prf(coins, (K + i) as u8), self.eta2);
        }
        let e2 = small_poly(&mut XofRng::prf(coins, (2 * K) as u8), self.eta2);

        debug!("encrypting {}-bit plaintext with fixed coins", N);
        Ok(Ciphertext::assemble(pk, plaintext, &r, &e1, &e2))
    }

    /// Never fails: when the noise crosses q/4 the affected bits are simply
    /// wrong.
    pub fn decrypt(&self, sk: &SecretKey<K, N, Q>, ct: &Ciphertext<K, N, Q>) -> u64 {
        let p = sk.noisy_plaintext(ct);
        if log_enabled!(Level::Trace) {
            let threshold = Self::decoding_threshold() as i64;
            for (i, c) in p.centered().iter().enumerate() {
                // distance to the nearer decision boundary
                let margin = (c.abs() - threshold).abs();
                trace!("coefficient {} = {}, margin {}", i, c, margin);
            }
        }

        let plaintext = decode_message(&p);
        debug!("decrypted {}-bit plaintext", N);
        plaintext
    }
}
