//! Random code generation for the codemaker

use super::color::{CODE_LENGTH, Code, Color};
use rand::Rng;

/// Generate a code from the thread-local random source
///
/// Each peg is chosen independently and uniformly; colours may repeat.
#[must_use]
pub fn generate() -> Code {
    generate_with(&mut rand::rng())
}

/// Generate a code from the given random source
///
/// # Examples
/// ```
/// use mastermind::core::generate_with;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let a = generate_with(&mut rng);
/// let b = generate_with(&mut StdRng::seed_from_u64(7));
/// assert_eq!(a, b);
/// ```
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Code {
    let pegs: [Color; CODE_LENGTH] =
        std::array::from_fn(|_| Color::ALL[rng.random_range(0..Color::ALL.len())]);
    tracing::debug!("generated code");
    Code::new(pegs)
}
