use std::collections::HashMap;

use verba_core::language::FrequencyProvider;

/// Lemma frequency ranks, used to order otherwise equal parses
pub struct LatinFrequency {
    frequencies: HashMap<String, u32>,
}

impl LatinFrequency {
    /// Create empty frequency database
    pub fn new() -> Self {
        Self {
            frequencies: HashMap::new(),
        }
    }

    /// Create with embedded high-frequency lemmas
    pub fn with_defaults() -> Self {
        let mut frequencies = HashMap::new();

        // Approximate ranks from classical prose word counts (simplified)
        let common_lemmas = [
            ("et", 1), ("esse", 2), ("in", 3), ("non", 4), ("cum", 5),
            ("qui", 6), ("is", 7), ("ad", 8), ("sed", 9), ("ut", 10),
            ("hic", 11), ("ego", 12), ("tu", 13), ("de", 14), ("ex", 15),
            ("quod", 16), ("ille", 17), ("omnis", 18), ("facere", 19), ("habere", 20),
            ("dicere", 21), ("magnus", 22), ("videre", 23), ("res", 24), ("posse", 25),
            ("suus", 26), ("ipse", 27), ("si", 28), ("rex", 29), ("dare", 30),
            ("venire", 31), ("homo", 32), ("bonus", 33), ("ducere", 34), ("pater", 35),
            ("amare", 36), ("semper", 37), ("bene", 38), ("terra", 39), ("annus", 40),
            ("mittere", 41), ("audire", 42), ("vita", 43), ("lex", 44), ("bellum", 45),
            ("regere", 46), ("via", 47), ("mater", 48), ("amicus", 49), ("dominus", 50),
            ("saepe", 51), ("malus", 52), ("verbum", 53), ("aqua", 54), ("servus", 55),
            ("vocare", 56), ("amor", 57), ("regina", 58), ("portare", 59), ("monere", 60),
            ("laudare", 61), ("donum", 62), ("puella", 63), ("nauta", 64), ("ambulare", 65),
        ];

        for (lemma, rank) in common_lemmas {
            frequencies.insert(lemma.to_string(), rank);
        }

        Self { frequencies }
    }

    /// Load frequency data from TSV file (lemma\trank format)
    pub fn load_from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_tsv(&content))
    }

    fn from_tsv(content: &str) -> Self {
        let mut frequencies = HashMap::new();

        for line in content.lines() {
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() >= 2 {
                if let Ok(rank) = parts[1].trim().parse::<u32>() {
                    frequencies.insert(parts[0].trim().to_string(), rank);
                }
            }
        }

        Self { frequencies }
    }

    /// Get frequency rank for a lemma (lower = more common)
    pub fn get_rank(&self, lemma: &str) -> Option<u32> {
        self.frequencies.get(lemma).copied()
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl Default for LatinFrequency {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl FrequencyProvider for LatinFrequency {
    fn frequency(&self, lemma: &str) -> Option<u32> {
        self.get_rank(lemma)
    }
}
