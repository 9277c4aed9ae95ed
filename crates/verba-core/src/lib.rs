pub mod dictionary;
pub mod error;
pub mod language;
pub mod morphology;
pub mod preprocess;

pub use error::{EngineError, InputProblem};
pub use language::{FrequencyProvider, LanguageProcessor, StemCandidate, StemStripper, Token};
pub use morphology::{AnalysisResult, Feature, MorphParse, PartOfSpeech};
