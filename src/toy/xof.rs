use digest::{ExtendableOutput, Update, XofReader};
use rand::RngCore;
use sha3::{Digest, Sha3_512, Shake128, Shake128Reader, Shake256, Shake256Reader};

/// Deterministic byte stream squeezed out of a SHAKE instance.
///
/// It implements [`RngCore`], so the samplers in [`super::sampler`] can
/// draw from it exactly as from any other generator.
pub struct XofRng {
    reader: XofStream,
}

enum XofStream {
    Shake128(Shake128Reader),
    Shake256(Shake256Reader),
}

impl XofRng {
    /// XOF(rho, j, i) = SHAKE-128(rho || j || i), the stream behind entry
    /// (i, j) of the public matrix.
    pub fn matrix_entry(rho: &[u8; 32], i: usize, j: usize) -> Self {
        let mut hasher = Shake128::default();
        hasher.update(rho);
        hasher.update(&[j as u8, i as u8]);
        Self {
            reader: XofStream::Shake128(hasher.finalize_xof()),
        }
    }

    /// PRF(s, b) = SHAKE-256(s || b), used for secrets and noise.
    pub fn prf(seed: &[u8; 32], nonce: u8) -> Self {
        let mut hasher = Shake256::default();
        hasher.update(seed);
        hasher.update(&[nonce]);
        Self {
            reader: XofStream::Shake256(hasher.finalize_xof()),
        }
    }
}

impl RngCore for XofRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match &mut self.reader {
            XofStream::Shake128(reader) => reader.read(dest),
            XofStream::Shake256(reader) => reader.read(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// G = SHA3-512, split into two 32-byte halves
pub fn g(data: &[u8]) -> ([u8; 32], [u8; 32]) {
    let digest = Sha3_512::digest(data);
    let mut first = [0u8; 32];
    let mut second = [0u8; 32];
    first.copy_from_slice(&digest[..32]);
    second.copy_from_slice(&digest[32..]);
    (first, second)
}
