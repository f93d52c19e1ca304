use self::{
    keys::{Ciphertext, PublicKey, SecretKey},
    pke::PKE,
};

mod encode;
pub mod keys;
pub mod pke;
pub mod sampler;
pub mod xof;

/// Module rank
pub const TOY_K: usize = 3;
/// Ring degree
pub const TOY_N: usize = 4;
pub const TOY_Q: u64 = 97;

pub const TOY_PKE: PKE<TOY_K, TOY_N, TOY_Q> = PKE::new(2, 2);

pub type ToyPublicKey = PublicKey<TOY_K, TOY_N, TOY_Q>;
pub type ToySecretKey = SecretKey<TOY_K, TOY_N, TOY_Q>;
pub type ToyCiphertext = Ciphertext<TOY_K, TOY_N, TOY_Q>;
