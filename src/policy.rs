//! Capacity arithmetic shared by every [`crate::HystVec`].
//!
//! The grow point is the capacity itself; the shrink point is the low-water mark, at most
//! `capacity / 6`. The band between the two keeps alternating add/remove workloads from
//! reallocating back and forth.

/// Capacity of a freshly created (or cleared) container.
pub const DEFAULT_CAPACITY: usize = 64;

/// The low-water mark is `capacity / SHRINK_DIVISOR`...
pub const SHRINK_DIVISOR: usize = 6;

/// ... unless that is below this, in which case shrinking is disabled (low-water mark is `0`).
/// Effectively no container with capacity below `64 * 6 == 384` ever shrinks.
pub const MIN_LOW_WATER_MARK: usize = 64;

/// Returns the length below which a removal first halves the capacity.
///
/// - `capacity / 6` if that is at least [`MIN_LOW_WATER_MARK`]
/// - `0` otherwise
pub const fn low_water_mark(capacity: usize) -> usize {
    let mark = capacity / SHRINK_DIVISOR;
    if mark < MIN_LOW_WATER_MARK { 0 } else { mark }
}

/// Returns the capacity after one growth step: `floor(capacity * 1.5)`.
/// - `0` grows to [`DEFAULT_CAPACITY`].
/// - `1` grows to `2` (so that the result is always strictly larger).
///
/// Returns `None` if the result does not fit in `usize`.
pub const fn grown_capacity(capacity: usize) -> Option<usize> {
    if capacity == 0 {
        return Some(DEFAULT_CAPACITY);
    }
    match capacity.checked_add(capacity / 2) {
        Some(c) if c > capacity => Some(c),
        Some(_) => capacity.checked_add(1),
        None => None,
    }
}

/// Returns the capacity after one shrink step: `floor(capacity / 2)`.
pub const fn shrunk_capacity(capacity: usize) -> usize {
    capacity / 2
}

/// Returns the capacity reached by repeatedly growing `capacity` until at least `required`
/// elements fit. Returns `capacity` unchanged if it is already large enough.
///
/// Returns `None` on overflow.
pub const fn grown_to_fit(capacity: usize, required: usize) -> Option<usize> {
    let mut c = capacity;
    while c < required {
        c = match grown_capacity(c) {
            Some(c) => c,
            None => return None,
        };
    }
    Some(c)
}

/// Whether a container with this length and low-water mark should shrink before a removal.
pub const fn should_shrink(len: usize, low_water_mark: usize) -> bool {
    len < low_water_mark
}
