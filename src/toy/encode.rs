use crate::{
    error::ToyError,
    math::{finite_field::Fp, poly::Polynomial, RingElement},
};

/// Rejects plaintexts with bits set at position N or above.
pub(crate) fn check_plaintext<const N: usize>(plaintext: u64) -> Result<u64, ToyError> {
    match plaintext.checked_shr(N as u32) {
        Some(high) if high != 0 => Err(ToyError::PlaintextOutOfRange {
            plaintext,
            bits: N,
        }),
        _ => Ok(plaintext),
    }
}

/// Callers only pass i < N <= 64.
fn bit(plaintext: u64, i: usize) -> bool {
    (plaintext >> i) & 1 == 1
}

/// Decompress_q(m, 1): bit i of the plaintext becomes floor(q/2) on
/// coefficient i. Only bits 0..N are looked at.
pub(crate) fn encode_message<const Q: u64, const N: usize>(plaintext: u64) -> RingElement<Q, N> {
    Polynomial::with_coefficients(std::array::from_fn(|i| {
        Fp::from(if bit(plaintext, i) { Q / 2 } else { 0 })
    }))
}

/// Compress_q(p, 1): coefficient i decodes to 1 when its centered value is
/// further than q/4 from zero.
pub(crate) fn decode_message<const Q: u64, const N: usize>(p: &RingElement<Q, N>) -> u64 {
    let threshold = Q / 4;
    let mut plaintext = 0u64;
    for (i, c) in p.coefficients.iter().enumerate().take(64) {
        if c.centered().unsigned_abs() > threshold {
            plaintext |= 1u64 << i;
        }
    }
    plaintext
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_sets_half_q() {
        let m: RingElement<97, 4> = encode_message(0b0101);
        assert_eq!(m.coefficients.map(u64::from), [48, 0, 48, 0]);

        // high bits are ignored by the encoder itself
        let m: RingElement<97, 4> = encode_message(0b1_0000);
        assert!(m.is_zero());
    }

    #[test]
    fn test_encode_reaches_top_bit() {
        let m: RingElement<97, 64> = encode_message((1 << 63) | 1);
        assert_eq!(m.coefficients[63].value(), 48);
        assert_eq!(m.coefficients[0].value(), 48);
        assert!(m.coefficients[1..63].iter().all(|c| c.value() == 0));
        assert_eq!(decode_message(&m), (1 << 63) | 1);
    }

    #[test]
    fn test_decode_threshold() {
        // q/4 = 24: 24 decodes to 0, 25 to 1, and likewise on the negative side
        let p = RingElement::<97, 4>::from_signed([24, 25, -24, -25]);
        assert_eq!(decode_message(&p), 0b1010);

        let p = RingElement::<97, 4>::from_signed([48, -48, 0, 1]);
        assert_eq!(decode_message(&p), 0b0011);
    }

    #[test]
    fn test_encode_then_decode_all_plaintexts() {
        for m in 0..16u64 {
            let p: RingElement<97, 4> = encode_message(m);
            assert_eq!(decode_message(&p), m);
        }
    }

    #[test]
    fn test_check_plaintext() {
        assert_eq!(check_plaintext::<4>(15), Ok(15));
        assert_eq!(check_plaintext::<4>(0), Ok(0));
        assert_eq!(
            check_plaintext::<4>(16),
            Err(ToyError::PlaintextOutOfRange {
                plaintext: 16,
                bits: 4
            })
        );
        assert_eq!(check_plaintext::<64>(u64::MAX), Ok(u64::MAX));
    }
}
