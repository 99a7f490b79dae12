//! Common mathematical operations on arbitrary-precision integers

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Primes used both for trial division and as Miller-Rabin witnesses
const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Extended Euclidean algorithm to compute a^(-1) mod m
///
/// Returns `None` when `m < 2` or when `a` and `m` are not coprime
/// (in particular when `a ≡ 0 (mod m)`).
pub fn mod_inv(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m <= &BigUint::one() {
        return None;
    }

    let a = a % m;
    if a.is_zero() {
        return None;
    }

    let m_orig = BigInt::from_biguint(Sign::Plus, m.clone());
    let mut a = BigInt::from_biguint(Sign::Plus, a);
    let mut m = m_orig.clone();

    let mut x0 = BigInt::one();
    let mut x1 = BigInt::zero();

    while a > BigInt::one() {
        if m.is_zero() {
            return None;
        }

        let (q, r) = a.div_rem(&m);
        a = core::mem::replace(&mut m, r);

        let next = &x0 - &q * &x1;
        x0 = core::mem::replace(&mut x1, next);
    }

    if !a.is_one() {
        return None;
    }

    x0.mod_floor(&m_orig).to_biguint()
}

/// Perform modular subtraction: (a - b) mod m, for any a, b
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

/// Probabilistic primality test (trial division followed by Miller-Rabin)
///
/// The witnesses are the first `rounds` entries of a fixed table of small
/// primes, so the answer is deterministic for a given input. A composite
/// passes with probability at most 4^-rounds; `rounds` is clamped to
/// `[1, 25]`.
pub fn is_probable_prime(n: &BigUint, rounds: usize) -> bool {
    if n < &BigUint::from(2u32) {
        return false;
    }

    for &p in SMALL_PRIMES.iter() {
        let p = BigUint::from(p);
        if n == &p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // n - 1 = d · 2^s with d odd
    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    let rounds = rounds.clamp(1, SMALL_PRIMES.len());
    'witness: for &a in SMALL_PRIMES.iter().take(rounds) {
        let mut x = BigUint::from(a).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&BigUint::from(2u32), n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }

    true
}
