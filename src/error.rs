#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToyError {
    /// The ring X^N + 1 only wraps around symmetrically for N a power of two.
    #[error("ring degree must be a power of two, got {0}")]
    DegreeNotPowerOfTwo(usize),
    /// A plaintext is a u64, so it carries at most 64 bits.
    #[error("ring degree must be at most 64, got {0}")]
    DegreeTooLarge(usize),
    #[error("modulus must be prime, got {0}")]
    ModulusNotPrime(u64),
    /// Coefficient products must fit in a u64.
    #[error("modulus must be below 2^32, got {0}")]
    ModulusTooLarge(u64),
    #[error("modulus {0} leaves no room for a q/4 decoding threshold")]
    ModulusTooSmall(u64),
    #[error("module rank must be positive")]
    ModuleRankZero,
    /// Every nonce 0..=2K handed to the PRF must fit in one byte.
    #[error("module rank must be at most 127, got {0}")]
    ModuleRankTooLarge(usize),

    #[error("plaintext {plaintext} does not fit in {bits} bits")]
    PlaintextOutOfRange { plaintext: u64, bits: usize },
}
