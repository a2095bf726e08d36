//! Random symbol corpus generation.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::Rng;

use crate::symbols::SymbolCorpus;
use crate::types::{Symbol, SymbolKind};

/// Draw `count` random symbols.
///
/// Each symbol gets a uniformly chosen kind, a length uniform in
/// `len_min..=len_max`, and a name sampled from the case-sensitive
/// alphanumeric alphabet. Names are drawn independently and are not
/// guaranteed unique; dedup the corpus when a set is needed.
pub fn generate_symbols(
    rng: &mut StdRng,
    count: usize,
    len_min: usize,
    len_max: usize,
) -> SymbolCorpus {
    let mut corpus = SymbolCorpus::new();

    for _ in 0..count {
        let kind = if rng.gen_bool(0.5) {
            SymbolKind::Role
        } else {
            SymbolKind::Concept
        };
        let len = rng.gen_range(len_min..=len_max);
        let name: String = (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect();
        corpus.push(Symbol { kind, name });
    }

    corpus
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let corpus = generate_symbols(&mut rng, 40, 5, 10);
        assert_eq!(corpus.len(), 40);
    }

    #[test]
    fn test_names_respect_length_range_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let corpus = generate_symbols(&mut rng, 100, 3, 8);
        for name in corpus.roles().iter().chain(corpus.concepts()) {
            assert!((3..=8).contains(&name.len()), "bad length: {}", name);
            assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_same_seed_same_corpus() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let ca = generate_symbols(&mut a, 25, 5, 20);
        let cb = generate_symbols(&mut b, 25, 5, 20);
        assert_eq!(ca.roles(), cb.roles());
        assert_eq!(ca.concepts(), cb.concepts());
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_symbols(&mut rng, 0, 5, 10).is_empty());
    }
}
