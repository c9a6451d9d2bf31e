//! Random user generation
//!
//! Composes plausible user records from fixed name lists and a randomized
//! email domain label. Collision handling against the store lives in the
//! registry service; this module only produces candidates.

use rand::seq::SliceRandom;
use rand::Rng;

/// Fixed pool of first names
const FIRST_NAMES: &[&str] = &[
    "Ana", "João", "Maria", "Pedro", "Lucas", "Fernanda", "Juliana", "Carlos",
];

/// Fixed pool of surnames
const SURNAMES: &[&str] = &[
    "Silva",
    "Souza",
    "Oliveira",
    "Santos",
    "Pereira",
    "Lima",
    "Eduarda",
    "Miguel",
    "Guilherme",
    "Batata",
];

/// Compose a random "First Surname" name
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Ana");
    let last = SURNAMES.choose(rng).copied().unwrap_or("Silva");
    format!("{} {}", first, last)
}

/// Derive a random email address from a name
///
/// The local part is the lowercased name with spaces turned into dots,
/// restricted to characters valid in an address local part. The domain is
/// a five-letter random label glued onto "gmail.com", so the address never
/// points at a real mailbox.
pub fn random_email<R: Rng + ?Sized>(rng: &mut R, name: &str) -> String {
    let local: String = name
        .to_lowercase()
        .replace(' ', ".")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .collect();

    let label: String = (0..5).map(|_| rng.gen_range('a'..='z')).collect();

    format!("{}@{}gmail.com", local, label)
}
