use rand::Rng;

/// Randomly returns `true` or `false` using the thread-local generator.
pub fn rand_bool() -> bool {
    rand_bool_with(&mut rand::thread_rng())
}

/// Randomly returns `true` or `false` using the given generator.
pub fn rand_bool_with<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rand_bool_yields_both_values() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws: Vec<bool> = (0..200).map(|_| rand_bool_with(&mut rng)).collect();
        assert!(draws.contains(&true));
        assert!(draws.contains(&false));
    }

    #[test]
    fn test_rand_bool_is_deterministic_for_a_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            assert_eq!(rand_bool_with(&mut a), rand_bool_with(&mut b));
        }
    }

    #[test]
    fn test_rand_bool_thread_rng() {
        let trues = (0..500).filter(|_| rand_bool()).count();
        assert!(trues > 0 && trues < 500);
    }
}
