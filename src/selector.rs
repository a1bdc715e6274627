use log::debug;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::dictionary::Dictionary;

/// Random source for answer selection: fixed when `seed` is given,
/// otherwise seeded from the thread generator.
pub fn rng_from_seed(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            debug!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Pick one word uniformly at random. `None` if the dictionary is empty.
pub fn draw_answer<R: Rng + ?Sized>(dictionary: &Dictionary, rng: &mut R) -> Option<String> {
    dictionary.words().choose(rng).cloned()
}
