//! Letter shuffling for the scrambled display

use rand::Rng;

/// Produce a uniformly random permutation of `chars`
///
/// Fisher-Yates from the last index down to 1, swapping index `i` with a
/// uniform index in `[0, i]`. The input slice is left untouched.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_scramble::core::shuffle;
///
/// let letters: Vec<char> = "planet".chars().collect();
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut shuffled = shuffle(&letters, &mut rng);
///
/// shuffled.sort_unstable();
/// let mut sorted = letters.clone();
/// sorted.sort_unstable();
/// assert_eq!(shuffled, sorted);
/// ```
#[must_use]
pub fn shuffle<R: Rng + ?Sized>(chars: &[char], rng: &mut R) -> Vec<char> {
    let mut out = chars.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Shuffle the letters of a word into a display string
#[must_use]
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let letters: Vec<char> = word.chars().collect();
    shuffle(&letters, rng).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn shuffle_keeps_letters() {
        let mut rng = StdRng::seed_from_u64(1);
        let word = "mountain";
        let scrambled = scramble(word, &mut rng);
        assert_eq!(scrambled.len(), word.len());
        assert_eq!(sorted(&scrambled), sorted(word));
    }

    #[test]
    fn shuffle_does_not_mutate_input() {
        let mut rng = StdRng::seed_from_u64(2);
        let letters = vec!['a', 'b', 'c', 'd'];
        let _ = shuffle(&letters, &mut rng);
        assert_eq!(letters, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let a = scramble("breakfast", &mut StdRng::seed_from_u64(42));
        let b = scramble("breakfast", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_trivial_inputs() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(shuffle(&[], &mut rng).is_empty());
        assert_eq!(shuffle(&['x'], &mut rng), vec!['x']);
    }

    #[test]
    fn shuffle_reaches_every_permutation() {
        // 3! = 6 orderings; a few hundred draws should hit them all
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(scramble("abc", &mut rng));
        }
        assert_eq!(seen.len(), 6);
    }
}
