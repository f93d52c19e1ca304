/// These witnesses make Miller-Rabin deterministic for every u64.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

const fn mulmod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 * b as u128) % p as u128) as u64
}

pub(crate) const fn modpow(mut a: u64, mut n: u64, p: u64) -> u64 {
    let mut res = 1 % p;
    a %= p;
    while n > 0 {
        if n % 2 == 1 {
            res = mulmod(res, a, p);
        }
        a = mulmod(a, a, p);
        n /= 2;
    }
    res
}

/// miller rabin prime test
///
/// Usable in const context, so parameter sets declared as `const` are
/// checked at compile time.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }

    let mut i = 0;
    while i < WITNESSES.len() {
        let p = WITNESSES[i];
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
        i += 1;
    }

    // n-1 = 2^k * d, with d odd
    let mut k = 0;
    let mut d = n - 1;
    while d % 2 == 0 {
        k += 1;
        d /= 2;
    }

    let mut w = 0;
    while w < WITNESSES.len() {
        let mut a = modpow(WITNESSES[w], d, n);
        w += 1;
        if a == 1 || a == n - 1 {
            continue;
        }

        let mut composite = true;
        let mut r = 1;
        while r < k {
            a = mulmod(a, a, n);
            if a == n - 1 {
                composite = false;
                break;
            }
            r += 1;
        }
        if composite {
            return false;
        }
    }

    true
}
