//! Uniform and weighted random selection over small candidate lists.
//!
//! Both selectors borrow the caller's RNG, so seeded generators give
//! reproducible picks.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::IndexedRandom;
use tilegrid_core::GeomError;

/// Picks one of a fixed set of choices with equal probability.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RandomChoice<T> {
    choices: Vec<T>,
}

impl<T> RandomChoice<T> {
    pub fn new(choices: Vec<T>) -> Self {
        Self { choices }
    }

    pub fn choices(&self) -> &[T] {
        &self.choices
    }

    /// A uniformly chosen element, or `None` if there are no choices.
    pub fn select_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        self.choices.choose(rng)
    }
}

/// Picks one of a set of choices with probability proportional to its
/// weight.
///
/// Weights need not sum to one. Zero-weight entries are never picked.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedChoice<T> {
    population: Vec<T>,
    weights: Vec<f64>,
}

impl<T> Default for WeightedChoice<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WeightedChoice<T> {
    pub const fn new() -> Self {
        Self {
            population: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Replace all entries. `choices` and `weights` must have the same length.
    pub fn set(&mut self, choices: Vec<T>, weights: Vec<f64>) -> Result<(), GeomError> {
        if choices.len() != weights.len() {
            return Err(GeomError::InvalidArgument(format!(
                "{} choices but {} weights",
                choices.len(),
                weights.len()
            )));
        }
        self.population = choices;
        self.weights = weights;
        Ok(())
    }

    pub fn add(&mut self, choice: T, weight: f64) {
        self.population.push(choice);
        self.weights.push(weight);
    }

    /// Remove every entry.
    pub fn reset(&mut self) {
        self.population.clear();
        self.weights.clear();
    }

    pub fn len(&self) -> usize {
        self.population.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    pub fn choices(&self) -> &[T] {
        &self.population
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// A weighted pick, or `None` if there are no entries or no weight is
    /// positive. Negative or NaN weights also yield `None`.
    pub fn select_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        match WeightedIndex::new(&self.weights) {
            Ok(dist) => self.population.get(dist.sample(rng)),
            Err(err) => {
                log::debug!("weighted choice over {} entries: {err}", self.len());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xC0FFEE)
    }

    // -----------------------------------------------------------------------
    // RandomChoice
    // -----------------------------------------------------------------------

    #[test]
    fn random_choice_picks_member() {
        let rc = RandomChoice::new(vec!["A", "B", "C"]);
        let mut rng = rng();
        for _ in 0..50 {
            assert!(rc.choices().contains(rc.select_one(&mut rng).unwrap()));
        }
    }

    #[test]
    fn random_choice_single_and_empty() {
        let mut rng = rng();
        assert_eq!(RandomChoice::new(vec![7]).select_one(&mut rng), Some(&7));
        assert_eq!(RandomChoice::<i32>::new(vec![]).select_one(&mut rng), None);
    }

    #[test]
    fn random_choice_reaches_every_member() {
        let rc = RandomChoice::new(vec![1, 2, 3, 4]);
        let mut rng = rng();
        let mut seen = [false; 4];
        for _ in 0..400 {
            seen[*rc.select_one(&mut rng).unwrap() as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn random_choice_is_reproducible() {
        let rc = RandomChoice::new((0..100).collect::<Vec<_>>());
        let a: Vec<_> = {
            let mut rng = rng();
            (0..20).map(|_| *rc.select_one(&mut rng).unwrap()).collect()
        };
        let b: Vec<_> = {
            let mut rng = rng();
            (0..20).map(|_| *rc.select_one(&mut rng).unwrap()).collect()
        };
        assert_eq!(a, b);
    }

    // -----------------------------------------------------------------------
    // WeightedChoice
    // -----------------------------------------------------------------------

    #[test]
    fn weighted_starts_empty() {
        let wc = WeightedChoice::<&str>::new();
        assert!(wc.is_empty());
        assert_eq!(wc.len(), 0);
        assert!(wc.weights().is_empty());
        assert_eq!(wc.select_one(&mut rng()), None);
    }

    #[test]
    fn weighted_set_replaces_entries() {
        let mut wc = WeightedChoice::new();
        wc.set(vec!["X", "Y"], vec![0.5, 0.5]).unwrap();
        wc.set(vec!["A", "B", "C"], vec![0.3, 0.4, 0.3]).unwrap();
        assert_eq!(wc.choices(), &["A", "B", "C"]);
        assert_eq!(wc.weights(), &[0.3, 0.4, 0.3]);
    }

    #[test]
    fn weighted_set_rejects_length_mismatch() {
        let mut wc = WeightedChoice::new();
        wc.add("keep", 1.0);
        let err = wc.set(vec!["A", "B"], vec![1.0]).unwrap_err();
        assert!(matches!(err, GeomError::InvalidArgument(_)));
        assert_eq!(wc.choices(), &["keep"]);
    }

    #[test]
    fn weighted_add_appends() {
        let mut wc = WeightedChoice::new();
        wc.set(vec!["A", "B"], vec![0.4, 0.4]).unwrap();
        wc.add("C", 0.2);
        assert_eq!(wc.choices(), &["A", "B", "C"]);
        assert_eq!(wc.weights(), &[0.4, 0.4, 0.2]);
        assert_eq!(wc.len(), 3);
    }

    #[test]
    fn weighted_reset_clears() {
        let mut wc = WeightedChoice::new();
        wc.add("A", 1.0);
        wc.reset();
        assert!(wc.is_empty());
        assert!(wc.weights().is_empty());
    }

    #[test]
    fn zero_weights_are_never_picked() {
        let mut wc = WeightedChoice::new();
        wc.add("never", 0.0);
        wc.add("always", 2.5);
        wc.add("also never", 0.0);
        let mut rng = rng();
        for _ in 0..200 {
            assert_eq!(wc.select_one(&mut rng), Some(&"always"));
        }
    }

    #[test]
    fn all_zero_or_invalid_weights_select_nothing() {
        let mut wc = WeightedChoice::new();
        wc.set(vec!["A", "B"], vec![0.0, 0.0]).unwrap();
        assert_eq!(wc.select_one(&mut rng()), None);
        wc.set(vec!["A", "B"], vec![1.0, -1.0]).unwrap();
        assert_eq!(wc.select_one(&mut rng()), None);
    }

    #[test]
    fn weights_bias_selection() {
        let mut wc = WeightedChoice::new();
        wc.add("rare", 1.0);
        wc.add("common", 9.0);
        let mut rng = rng();
        let common = (0..2000)
            .filter(|_| wc.select_one(&mut rng) == Some(&"common"))
            .count();
        // Expected 1800; allow generous slack.
        assert!((1650..=1950).contains(&common), "common picked {common} times");
    }
}
