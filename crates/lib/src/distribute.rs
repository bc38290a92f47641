//! Digit distribution over integer ranges.
//!
//! These are the pure building blocks of the code generator: they decide which
//! symbols of a range receive a new key and how many keys each symbol's subtree has
//! to hold. Nothing here knows about keys; positions are plain integers.

/// Spreads `n` distinct positions over the inclusive range `[lo, hi]`.
///
/// The positions are returned in increasing order. One position goes to the middle
/// of the range rounded up, two positions go to the thirds, and larger counts place
/// a pivot at the middle and recurse on both halves, giving the lower half the
/// larger share. The biggest gap is therefore always left at the top of the range,
/// where appends will land.
///
/// # Panics
///
/// Panics if `n` exceeds the number of slots in the range.
///
/// # Examples
///
/// ```
/// use orderkey::distribute::positions;
///
/// assert_eq!(positions(1, 0, 255), vec![128]);
/// assert_eq!(positions(2, 0, 8), vec![2, 5]);
/// assert_eq!(positions(3, 1, 255), vec![64, 128, 192]);
/// ```
pub fn positions(n: usize, lo: u32, hi: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity(n);
    spread(n, lo, hi, &mut out);
    out
}

fn spread(n: usize, lo: u32, hi: u32, out: &mut Vec<u32>) {
    if n == 0 {
        return;
    }

    let slots = hi - lo + 1;
    assert!(
        n <= slots as usize,
        "cannot place {n} positions in {slots} slots"
    );

    if n == 2 {
        out.push(lo + (slots - 1) / 3);
        out.push(lo + (2 * slots - 1) / 3);
        return;
    }

    let pivot = lo + slots / 2;
    if n == 1 {
        out.push(pivot);
        return;
    }

    let right = (n - 1) / 2;
    spread(n - 1 - right, lo, pivot - 1, out);
    out.push(pivot);
    spread(right, pivot + 1, hi, out);
}

/// Splits `n` allocations among the slots of `[lo, hi]`, proportionally to `weight`.
///
/// Returns one count per slot, indexed from `lo`. When there are more allocations
/// than slots, every slot first receives its proportional share rounded down; the
/// leftover allocations are then handed out one per slot at the slots chosen by
/// [`positions`]. A range whose weights are all zero is treated as uniformly
/// weighted.
///
/// # Examples
///
/// ```
/// use orderkey::distribute::weighted;
///
/// let counts = weighted(10, 0, 3, |_| 1.0);
/// assert_eq!(counts.iter().sum::<usize>(), 10);
///
/// // The last slot only has half the room of the others
/// let counts = weighted(70, 0, 3, |slot| if slot == 3 { 0.5 } else { 1.0 });
/// assert_eq!(counts, vec![20, 20, 20, 10]);
/// ```
pub fn weighted(n: usize, lo: u32, hi: u32, weight: impl Fn(u32) -> f64) -> Vec<usize> {
    let slots = (hi - lo + 1) as usize;
    let mut counts = vec![0usize; slots];
    let mut remaining = n;

    if n > slots {
        let mut weights: Vec<f64> = (lo..=hi).map(|slot| weight(slot).max(0.0)).collect();
        let mut total: f64 = weights.iter().sum();
        if total <= 0.0 {
            weights.fill(1.0);
            total = slots as f64;
        }

        for (count, w) in counts.iter_mut().zip(&weights) {
            let share = ((n as f64 * w / total) as usize).min(remaining);
            *count = share;
            remaining -= share;
        }
    }

    for slot in positions(remaining, lo, hi) {
        counts[(slot - lo) as usize] += 1;
    }

    counts
}
