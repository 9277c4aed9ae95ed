use std::path::Path;

use verba_core::dictionary::LoadError;

use crate::lexicon::LatinLexicon;

pub struct LexiconLoader;

impl LexiconLoader {
    /// Load embedded lexicon data
    pub fn load_embedded() -> Result<LatinLexicon, LoadError> {
        let json = include_str!("../data/lexicon.json");
        tracing::info!("Loading embedded Latin lexicon...");
        let lexicon = LatinLexicon::from_json(json)?;
        tracing::info!(
            "Loaded {} lexicon entries, {} forms",
            lexicon.entry_count(),
            lexicon.form_count()
        );
        Ok(lexicon)
    }

    /// Load lexicon from file path
    pub fn load_from_file(path: &Path) -> Result<LatinLexicon, LoadError> {
        tracing::info!("Loading lexicon from file: {}", path.display());
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        let json = std::fs::read_to_string(path)?;
        let lexicon = LatinLexicon::from_json(&json)?;
        tracing::info!("Loaded {} lexicon entries from file", lexicon.entry_count());
        Ok(lexicon)
    }

    /// Merge two lexicons (later entries override earlier ones by lemma and part of speech)
    pub fn merge(base: LatinLexicon, additional: LatinLexicon) -> LatinLexicon {
        base.merge(additional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_lexicon_loads() {
        let lexicon = LexiconLoader::load_embedded().unwrap();
        assert!(lexicon.entry_count() > 40);
    }

    #[test]
    fn test_missing_file() {
        let result = LexiconLoader::load_from_file(Path::new("/nonexistent/lexicon.json"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }
}
