//! Feed widget placement.
//!
//! The home feed drops a suggested-users widget after one of the first
//! few posts. Placement is cosmetic: the slot is uniform over
//! `min(1, len - 1) ..= min(3, len - 1)` so the widget lands near the
//! top without pinning itself to one position. The index source is
//! injectable so tests stay deterministic.

use rand::Rng;
use std::ops::RangeInclusive;

/// Pick the post index after which the widget is rendered, using the
/// supplied index source. Returns `None` for an empty feed.
pub fn suggested_slot_with<F>(post_count: usize, mut pick: F) -> Option<usize>
where
    F: FnMut(RangeInclusive<usize>) -> usize,
{
    if post_count == 0 {
        return None;
    }
    let min_index = 1.min(post_count - 1);
    let max_index = 3.min(post_count - 1);
    let slot = pick(min_index..=max_index).clamp(min_index, max_index);
    Some(slot)
}

/// [`suggested_slot_with`] backed by the thread-local RNG.
pub fn suggested_slot(post_count: usize) -> Option<usize> {
    suggested_slot_with(post_count, |range| rand::thread_rng().gen_range(range))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_feed_has_no_slot() {
        assert_eq!(suggested_slot(0), None);
    }

    #[test]
    fn single_post_pins_to_zero() {
        assert_eq!(suggested_slot_with(1, |range| *range.start()), Some(0));
        assert_eq!(suggested_slot(1), Some(0));
    }

    #[test]
    fn bounds_for_short_and_long_feeds() {
        // Two posts: slot is always index 1.
        assert_eq!(suggested_slot_with(2, |range| *range.end()), Some(1));
        // Ten posts: slot stays within 1..=3.
        assert_eq!(suggested_slot_with(10, |range| *range.start()), Some(1));
        assert_eq!(suggested_slot_with(10, |range| *range.end()), Some(3));
    }

    #[test]
    fn random_slot_stays_in_bounds() {
        for _ in 0..100 {
            let slot = suggested_slot(10).unwrap();
            assert!((1..=3).contains(&slot));
        }
    }

    #[test]
    fn out_of_range_pick_is_clamped() {
        assert_eq!(suggested_slot_with(10, |_| 99), Some(3));
    }
}
