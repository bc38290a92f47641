//! Code generation between two boundaries.
//!
//! A *code* is the raw symbol sequence of an order key. [`generate`] emits a batch of
//! codes strictly between two boundaries, preferring one-symbol extensions of the
//! shared prefix ("direct" codes) and only recursing into deeper levels when the
//! direct slots run out.

use crate::distribute::{positions, weighted};
use crate::keyspace::Keyspace;

/// Generates `n` strictly increasing codes between `start` and `end`, each prefixed
/// by `prefix`.
///
/// Every code is strictly greater than `prefix + start` and, when `end` is given,
/// strictly less than `prefix + end`. An empty `start` leaves the range open below
/// (the codes are still greater than `prefix` itself); `None` leaves it open above.
/// Codes never end with a zero symbol, so they are already normalized.
///
/// # Panics
///
/// Panics if `end` is `Some` but empty or ends with a zero symbol, since no code can
/// be placed below such a boundary, or if `end` does not come strictly after `start`.
///
/// # Examples
///
/// ```
/// use orderkey::{Keyspace, generate::generate};
///
/// let codes = generate(&Keyspace::default(), 3, &[], None, &[]);
/// assert_eq!(codes, vec![vec![64], vec![128], vec![192]]);
///
/// let codes = generate(&Keyspace::default(), 2, &[10], Some(&[12]), &[7]);
/// assert_eq!(codes, vec![vec![7, 11], vec![7, 11, 128]]);
/// ```
pub fn generate(
    keyspace: &Keyspace,
    n: usize,
    start: &[u8],
    end: Option<&[u8]>,
    prefix: &[u8],
) -> Vec<Vec<u8>> {
    if let Some(end) = end {
        assert!(
            end.last().is_some_and(|&symbol| symbol != 0),
            "end boundary must be a normalized, non-sentinel code"
        );
        assert!(
            start < end,
            "start boundary {start:?} must come before end boundary {end:?}"
        );
    }

    let mut out = Vec::with_capacity(n);
    let mut prefix = prefix.to_vec();
    emit(keyspace, n, start, end, &mut prefix, &mut out);
    out
}

fn emit(
    keyspace: &Keyspace,
    n: usize,
    start: &[u8],
    end: Option<&[u8]>,
    prefix: &mut Vec<u8>,
    out: &mut Vec<Vec<u8>>,
) {
    if n == 0 {
        return;
    }

    let start_first = u32::from(start.first().copied().unwrap_or(0));
    let (end_first, end_second) = match end {
        Some(end) => (u32::from(end[0]), end.get(1).copied()),
        None => (u32::from(keyspace.max_symbol()), None),
    };

    // `prefix + end_first` is itself a usable code unless it is exactly `end`
    let end_is_single = end.is_some_and(|end| end.len() == 1);
    let upper = if end_is_single {
        end_first - 1
    } else {
        end_first
    };

    let direct_count = upper.saturating_sub(start_first) as usize;

    if direct_count >= n {
        for symbol in positions(n, start_first + 1, upper) {
            prefix.push(symbol as u8);
            out.push(prefix.clone());
            prefix.pop();
        }
        return;
    }

    let top = f64::from(keyspace.top_value());
    let start_second = start.get(1).copied();
    let longer = weighted(n - direct_count, start_first, upper, |symbol| {
        let at_start = symbol == start_first && start_second.is_some();
        let at_end = symbol == end_first && end_second.is_some();
        match (at_start, at_end) {
            (true, true) => {
                // Both boundaries share this symbol: only the window between their
                // second symbols is usable
                let low = f64::from(start_second.unwrap_or(0));
                let high = f64::from(end_second.unwrap_or(0));
                (high - low).max(0.0) / top
            }
            (true, false) => (top - f64::from(start_second.unwrap_or(0))) / top,
            (false, true) => f64::from(end_second.unwrap_or(0)) / top,
            (false, false) => 1.0,
        }
    });

    debug_assert_eq!(direct_count + longer.iter().sum::<usize>(), n);
    tracing::trace!(
        n,
        direct = direct_count,
        depth = prefix.len(),
        "Generating codes past the direct slots"
    );

    for (symbol, &count) in (start_first..=upper).zip(&longer) {
        prefix.push(symbol as u8);

        if symbol > start_first {
            out.push(prefix.clone());
        }

        if count > 0 {
            let sub_start = if symbol == start_first {
                start.get(1..).unwrap_or(&[])
            } else {
                &[]
            };
            let sub_end = match end {
                Some(end) if symbol == end_first => Some(&end[1..]),
                _ => None,
            };
            emit(keyspace, count, sub_start, sub_end, prefix, out);
        }

        prefix.pop();
    }
}
