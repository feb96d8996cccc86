//! Trial-division prime search over an inclusive range.

/// Find every prime in `[start, end]`, sorted ascending.
///
/// 2 is handled explicitly; all other candidates are odd, so an even
/// `start` is bumped to the next odd value. Divisors run over the odd
/// numbers up to `floor(sqrt(n))`.
///
/// # Examples
///
/// ```rust
/// use primepool::primes::find_primes;
///
/// assert_eq!(find_primes(2, 10), [2, 3, 5, 7]);
/// ```
pub fn find_primes(start: u64, end: u64) -> Vec<u64> {
    if end < 2 {
        return Vec::new();
    }

    let mut primes = Vec::new();
    if start <= 2 {
        primes.push(2);
    }

    // 0, 1 and 2 are settled above; only odd candidates remain
    let mut n = start.max(3);
    if n % 2 == 0 {
        n += 1;
    }
    while n <= end {
        if is_odd_prime(n) {
            primes.push(n);
        }
        n += 2;
    }

    primes
}

fn is_odd_prime(n: u64) -> bool {
    let limit = (n as f64).sqrt() as u64;
    let mut d = 3;
    while d <= limit {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
