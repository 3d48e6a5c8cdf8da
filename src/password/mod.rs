//! Random password generation from a set of character categories.
//!
//! The pool is the concatenation of the selected categories' fixed sets, in
//! canonical order. Every character of the output is drawn independently and
//! uniformly (with replacement) from that pool.

pub mod request;

use rand::Rng;

pub use request::{PasswordRequest, RequestError};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
const EMOJIS: &str = "😀😎🔒🌟🎉🚀🔑";
const MATH: &str = "+-*/=^";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Uppercase,
    Lowercase,
    Numbers,
    Special,
    Emojis,
    Math,
}

impl Category {
    /// Canonical pool order
    pub const ALL: [Category; 6] = [
        Category::Uppercase,
        Category::Lowercase,
        Category::Numbers,
        Category::Special,
        Category::Emojis,
        Category::Math,
    ];

    /// Used when the request names no category at all
    pub const DEFAULT: [Category; 4] = [
        Category::Uppercase,
        Category::Lowercase,
        Category::Numbers,
        Category::Special,
    ];

    /// Maps a request tag to its category; unknown tags yield `None`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "uppercase" => Some(Self::Uppercase),
            "lowercase" => Some(Self::Lowercase),
            "numbers" => Some(Self::Numbers),
            "special" => Some(Self::Special),
            "emojis" => Some(Self::Emojis),
            "math" => Some(Self::Math),
            _ => None,
        }
    }

    pub fn charset(self) -> &'static str {
        match self {
            Self::Uppercase => UPPERCASE,
            Self::Lowercase => LOWERCASE,
            Self::Numbers => DIGITS,
            Self::Special => PUNCTUATION,
            Self::Emojis => EMOJIS,
            Self::Math => MATH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    #[error("no recognized character category was requested")]
    EmptyPool,
}

/// Builds the character pool for the given categories.
///
/// Each category contributes its set once, whatever its position or
/// multiplicity in `categories`.
pub fn build_pool(categories: &[Category]) -> Vec<char> {
    Category::ALL
        .iter()
        .filter(|category| categories.contains(category))
        .flat_map(|category| category.charset().chars())
        .collect()
}

/// Generates a password using the thread-local random generator
pub fn generate(length: usize, categories: &[Category]) -> Result<String, GeneratorError> {
    generate_with(&mut rand::rng(), length, categories)
}

/// Generates a password drawing from `rng`
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    categories: &[Category],
) -> Result<String, GeneratorError> {
    let pool = build_pool(categories);
    if pool.is_empty() {
        return Err(GeneratorError::EmptyPool);
    }

    tracing::debug!(length, ?categories, pool_size = pool.len(), "Generating password");

    Ok((0..length)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect())
}
