//! Filter-and-sample selection: the heart of the recommendation cycle.
//!
//! Selection is a pure function of the spot table and the three filter
//! values; the only nondeterminism is the sampling RNG, which is an
//! injected dependency so tests can pin a seed.

use crate::models::{Companion, DurationBucket, Mood, Spot};
use rand::Rng;
use rand::seq::SliceRandom;

/// Upper bound on how many spots one recommendation returns.
pub const MAX_RESULTS: usize = 3;

/// The three independently optional filter dimensions.
/// `None` is the "no filter" sentinel: that dimension imposes no
/// constraint at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filters {
    pub mood: Option<Mood>,
    pub duration: Option<DurationBucket>,
    pub companion: Option<Companion>,
}

impl Filters {
    pub fn is_unconstrained(&self) -> bool {
        self.mood.is_none() && self.duration.is_none() && self.companion.is_none()
    }
}

/// Whether a single spot satisfies every active filter predicate.
///
/// Mood and companion are substring matches against free-text tag
/// fields, with absent fields treated as the empty string (never a
/// match). Duration is a numeric threshold; unknown durations are
/// dropped whenever a specific bucket is requested.
pub fn matches(spot: &Spot, filters: &Filters) -> bool {
    if let Some(mood) = filters.mood
        && !spot.mood_tags().contains(mood.tag())
    {
        return false;
    }

    if let Some(bucket) = filters.duration
        && !bucket.matches(spot.duration_min)
    {
        return false;
    }

    if let Some(companion) = filters.companion
        && !spot.who_with_tags().contains(companion.tag())
    {
        return false;
    }

    true
}

/// Filter the table, then bound the result: more than [`MAX_RESULTS`]
/// matches yield a uniform no-replacement sample of exactly
/// [`MAX_RESULTS`]; fewer are returned whole, in table order.
///
/// An empty result is a valid outcome meaning "no matches", not an
/// error.
pub fn select<'a, R: Rng + ?Sized>(
    spots: &'a [Spot],
    filters: &Filters,
    rng: &mut R,
) -> Vec<&'a Spot> {
    let matched: Vec<&Spot> = spots.iter().filter(|s| matches(s, filters)).collect();

    if matched.len() > MAX_RESULTS {
        matched
            .choose_multiple(rng, MAX_RESULTS)
            .copied()
            .collect()
    } else {
        matched
    }
}
