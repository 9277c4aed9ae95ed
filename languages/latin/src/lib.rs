pub mod frequency;
pub mod lexicon;
pub mod loader;
pub mod paradigm;
pub mod processor;

pub use frequency::LatinFrequency;
pub use lexicon::{LatinLexeme, LatinLexicon};
pub use loader::LexiconLoader;
pub use paradigm::{LatinStemStripper, Paradigm, find_paradigm};
pub use processor::{DEFAULT_MAX_INPUT_CHARS, LatinProcessor, STEM_RANK};
