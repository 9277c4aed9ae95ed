use verba_core::language::{StemCandidate, StemStripper};
use verba_core::morphology::{Feature, FeatureMap, PartOfSpeech};

type Tag = (Feature, &'static str);

const NOM: Tag = (Feature::Case, "nominative");
const GEN: Tag = (Feature::Case, "genitive");
const DAT: Tag = (Feature::Case, "dative");
const ACC: Tag = (Feature::Case, "accusative");
const ABL: Tag = (Feature::Case, "ablative");
const VOC: Tag = (Feature::Case, "vocative");

const SG: Tag = (Feature::Number, "singular");
const PL: Tag = (Feature::Number, "plural");

const MASC: Tag = (Feature::Gender, "masculine");
const FEM: Tag = (Feature::Gender, "feminine");
const NEUT: Tag = (Feature::Gender, "neuter");
const POSITIVE: Tag = (Feature::Degree, "positive");

const P1: Tag = (Feature::Person, "first");
const P2: Tag = (Feature::Person, "second");
const P3: Tag = (Feature::Person, "third");

const PRES: Tag = (Feature::Tense, "present");
const IMPF: Tag = (Feature::Tense, "imperfect");
const FUT: Tag = (Feature::Tense, "future");
const IND: Tag = (Feature::Mood, "indicative");
const INF: Tag = (Feature::Mood, "infinitive");
const ACT: Tag = (Feature::Voice, "active");
const PASS: Tag = (Feature::Voice, "passive");

/// A single inflectional ending and the features it marks
pub struct Ending {
    pub suffix: &'static str,
    pub tags: &'static [Tag],
}

const fn e(suffix: &'static str, tags: &'static [Tag]) -> Ending {
    Ending { suffix, tags }
}

/// Endings that share features, e.g. one tense of a conjugation
pub struct EndingSet {
    pub endings: &'static [Ending],
    pub shared: &'static [Tag],
}

const fn set(endings: &'static [Ending], shared: &'static [Tag]) -> EndingSet {
    EndingSet { endings, shared }
}

/// Inflection class a lexeme declares in the lexicon
pub struct Paradigm {
    pub name: &'static str,
    pub part_of_speech: PartOfSpeech,
    pub sets: &'static [EndingSet],
}

// Nouns. Listed in stored order; ambiguous endings get one row per reading.

const FIRST_DECLENSION: &[Ending] = &[
    e("a", &[NOM, SG]),
    e("a", &[VOC, SG]),
    e("a", &[ABL, SG]),
    e("ae", &[GEN, SG]),
    e("ae", &[DAT, SG]),
    e("am", &[ACC, SG]),
    e("ae", &[NOM, PL]),
    e("ae", &[VOC, PL]),
    e("arum", &[GEN, PL]),
    e("is", &[DAT, PL]),
    e("is", &[ABL, PL]),
    e("as", &[ACC, PL]),
];

const SECOND_DECLENSION_MASCULINE: &[Ending] = &[
    e("us", &[NOM, SG]),
    e("e", &[VOC, SG]),
    e("i", &[GEN, SG]),
    e("o", &[DAT, SG]),
    e("o", &[ABL, SG]),
    e("um", &[ACC, SG]),
    e("i", &[NOM, PL]),
    e("i", &[VOC, PL]),
    e("orum", &[GEN, PL]),
    e("is", &[DAT, PL]),
    e("is", &[ABL, PL]),
    e("os", &[ACC, PL]),
];

const SECOND_DECLENSION_NEUTER: &[Ending] = &[
    e("um", &[NOM, SG]),
    e("um", &[ACC, SG]),
    e("um", &[VOC, SG]),
    e("i", &[GEN, SG]),
    e("o", &[DAT, SG]),
    e("o", &[ABL, SG]),
    e("a", &[NOM, PL]),
    e("a", &[ACC, PL]),
    e("a", &[VOC, PL]),
    e("orum", &[GEN, PL]),
    e("is", &[DAT, PL]),
    e("is", &[ABL, PL]),
];

// Nominative singular is not predictable from the oblique stem, the lexicon lists it
const THIRD_DECLENSION: &[Ending] = &[
    e("is", &[GEN, SG]),
    e("i", &[DAT, SG]),
    e("em", &[ACC, SG]),
    e("e", &[ABL, SG]),
    e("es", &[NOM, PL]),
    e("es", &[ACC, PL]),
    e("es", &[VOC, PL]),
    e("um", &[GEN, PL]),
    e("ibus", &[DAT, PL]),
    e("ibus", &[ABL, PL]),
];

// Verbs. One table per tense/voice; person and number come from the row.

const FIRST_PRESENT: &[Ending] = &[
    e("o", &[P1, SG]),
    e("as", &[P2, SG]),
    e("at", &[P3, SG]),
    e("amus", &[P1, PL]),
    e("atis", &[P2, PL]),
    e("ant", &[P3, PL]),
];

const FIRST_IMPERFECT: &[Ending] = &[
    e("abam", &[P1, SG]),
    e("abas", &[P2, SG]),
    e("abat", &[P3, SG]),
    e("abamus", &[P1, PL]),
    e("abatis", &[P2, PL]),
    e("abant", &[P3, PL]),
];

const FIRST_FUTURE: &[Ending] = &[
    e("abo", &[P1, SG]),
    e("abis", &[P2, SG]),
    e("abit", &[P3, SG]),
    e("abimus", &[P1, PL]),
    e("abitis", &[P2, PL]),
    e("abunt", &[P3, PL]),
];

const FIRST_PRESENT_PASSIVE: &[Ending] = &[
    e("or", &[P1, SG]),
    e("aris", &[P2, SG]),
    e("atur", &[P3, SG]),
    e("amur", &[P1, PL]),
    e("amini", &[P2, PL]),
    e("antur", &[P3, PL]),
];

const SECOND_PRESENT: &[Ending] = &[
    e("eo", &[P1, SG]),
    e("es", &[P2, SG]),
    e("et", &[P3, SG]),
    e("emus", &[P1, PL]),
    e("etis", &[P2, PL]),
    e("ent", &[P3, PL]),
];

const SECOND_IMPERFECT: &[Ending] = &[
    e("ebam", &[P1, SG]),
    e("ebas", &[P2, SG]),
    e("ebat", &[P3, SG]),
    e("ebamus", &[P1, PL]),
    e("ebatis", &[P2, PL]),
    e("ebant", &[P3, PL]),
];

const SECOND_FUTURE: &[Ending] = &[
    e("ebo", &[P1, SG]),
    e("ebis", &[P2, SG]),
    e("ebit", &[P3, SG]),
    e("ebimus", &[P1, PL]),
    e("ebitis", &[P2, PL]),
    e("ebunt", &[P3, PL]),
];

const THIRD_PRESENT: &[Ending] = &[
    e("o", &[P1, SG]),
    e("is", &[P2, SG]),
    e("it", &[P3, SG]),
    e("imus", &[P1, PL]),
    e("itis", &[P2, PL]),
    e("unt", &[P3, PL]),
];

// Shared by the third and second conjugations' imperfect
const THIRD_IMPERFECT: &[Ending] = SECOND_IMPERFECT;

const THIRD_FUTURE: &[Ending] = &[
    e("am", &[P1, SG]),
    e("es", &[P2, SG]),
    e("et", &[P3, SG]),
    e("emus", &[P1, PL]),
    e("etis", &[P2, PL]),
    e("ent", &[P3, PL]),
];

const FOURTH_PRESENT: &[Ending] = &[
    e("io", &[P1, SG]),
    e("is", &[P2, SG]),
    e("it", &[P3, SG]),
    e("imus", &[P1, PL]),
    e("itis", &[P2, PL]),
    e("iunt", &[P3, PL]),
];

const FOURTH_IMPERFECT: &[Ending] = &[
    e("iebam", &[P1, SG]),
    e("iebas", &[P2, SG]),
    e("iebat", &[P3, SG]),
    e("iebamus", &[P1, PL]),
    e("iebatis", &[P2, PL]),
    e("iebant", &[P3, PL]),
];

const FOURTH_FUTURE: &[Ending] = &[
    e("iam", &[P1, SG]),
    e("ies", &[P2, SG]),
    e("iet", &[P3, SG]),
    e("iemus", &[P1, PL]),
    e("ietis", &[P2, PL]),
    e("ient", &[P3, PL]),
];

const FIRST_INFINITIVE: &[Ending] = &[e("are", &[])];
const ERE_INFINITIVE: &[Ending] = &[e("ere", &[])];
const FOURTH_INFINITIVE: &[Ending] = &[e("ire", &[])];

const PRESENT_ACTIVE_INDICATIVE: &[Tag] = &[PRES, IND, ACT];
const IMPERFECT_ACTIVE_INDICATIVE: &[Tag] = &[IMPF, IND, ACT];
const FUTURE_ACTIVE_INDICATIVE: &[Tag] = &[FUT, IND, ACT];
const PRESENT_PASSIVE_INDICATIVE: &[Tag] = &[PRES, IND, PASS];
const PRESENT_ACTIVE_INFINITIVE: &[Tag] = &[PRES, INF, ACT];

pub const PARADIGMS: &[Paradigm] = &[
    Paradigm {
        name: "first_declension",
        part_of_speech: PartOfSpeech::Noun,
        sets: &[set(FIRST_DECLENSION, &[])],
    },
    Paradigm {
        name: "second_declension_masculine",
        part_of_speech: PartOfSpeech::Noun,
        sets: &[set(SECOND_DECLENSION_MASCULINE, &[])],
    },
    Paradigm {
        name: "second_declension_neuter",
        part_of_speech: PartOfSpeech::Noun,
        sets: &[set(SECOND_DECLENSION_NEUTER, &[])],
    },
    Paradigm {
        name: "third_declension",
        part_of_speech: PartOfSpeech::Noun,
        sets: &[set(THIRD_DECLENSION, &[])],
    },
    Paradigm {
        name: "first_second_adjective",
        part_of_speech: PartOfSpeech::Adjective,
        sets: &[
            set(SECOND_DECLENSION_MASCULINE, &[MASC, POSITIVE]),
            set(FIRST_DECLENSION, &[FEM, POSITIVE]),
            set(SECOND_DECLENSION_NEUTER, &[NEUT, POSITIVE]),
        ],
    },
    Paradigm {
        name: "first_conjugation",
        part_of_speech: PartOfSpeech::Verb,
        sets: &[
            set(FIRST_PRESENT, PRESENT_ACTIVE_INDICATIVE),
            set(FIRST_IMPERFECT, IMPERFECT_ACTIVE_INDICATIVE),
            set(FIRST_FUTURE, FUTURE_ACTIVE_INDICATIVE),
            set(FIRST_PRESENT_PASSIVE, PRESENT_PASSIVE_INDICATIVE),
            set(FIRST_INFINITIVE, PRESENT_ACTIVE_INFINITIVE),
        ],
    },
    Paradigm {
        name: "second_conjugation",
        part_of_speech: PartOfSpeech::Verb,
        sets: &[
            set(SECOND_PRESENT, PRESENT_ACTIVE_INDICATIVE),
            set(SECOND_IMPERFECT, IMPERFECT_ACTIVE_INDICATIVE),
            set(SECOND_FUTURE, FUTURE_ACTIVE_INDICATIVE),
            set(ERE_INFINITIVE, PRESENT_ACTIVE_INFINITIVE),
        ],
    },
    Paradigm {
        name: "third_conjugation",
        part_of_speech: PartOfSpeech::Verb,
        sets: &[
            set(THIRD_PRESENT, PRESENT_ACTIVE_INDICATIVE),
            set(THIRD_IMPERFECT, IMPERFECT_ACTIVE_INDICATIVE),
            set(THIRD_FUTURE, FUTURE_ACTIVE_INDICATIVE),
            set(ERE_INFINITIVE, PRESENT_ACTIVE_INFINITIVE),
        ],
    },
    Paradigm {
        name: "fourth_conjugation",
        part_of_speech: PartOfSpeech::Verb,
        sets: &[
            set(FOURTH_PRESENT, PRESENT_ACTIVE_INDICATIVE),
            set(FOURTH_IMPERFECT, IMPERFECT_ACTIVE_INDICATIVE),
            set(FOURTH_FUTURE, FUTURE_ACTIVE_INDICATIVE),
            set(FOURTH_INFINITIVE, PRESENT_ACTIVE_INFINITIVE),
        ],
    },
];

/// Find a paradigm by the name the lexicon uses for it
pub fn find_paradigm(name: &str) -> Option<&'static Paradigm> {
    PARADIGMS.iter().find(|p| p.name == name)
}

/// Suffix-paradigm stem stripper
pub struct LatinStemStripper {
    paradigms: &'static [Paradigm],
}

impl LatinStemStripper {
    pub fn new() -> Self {
        Self {
            paradigms: PARADIGMS,
        }
    }

    fn candidates_for(&self, paradigm: &Paradigm, word: &str) -> Vec<StemCandidate> {
        let mut results = Vec::new();

        for ending_set in paradigm.sets {
            for ending in ending_set.endings {
                // The stem must keep at least one letter
                if word.len() <= ending.suffix.len() || !word.ends_with(ending.suffix) {
                    continue;
                }

                let stem = &word[..word.len() - ending.suffix.len()];
                let features: FeatureMap = ending_set
                    .shared
                    .iter()
                    .chain(ending.tags.iter())
                    .map(|(feature, value)| (*feature, value.to_string()))
                    .collect();

                results.push(StemCandidate {
                    stem: stem.to_string(),
                    ending: ending.suffix.to_string(),
                    paradigm: paradigm.name.to_string(),
                    part_of_speech: paradigm.part_of_speech,
                    features,
                });
            }
        }

        results
    }
}

impl Default for LatinStemStripper {
    fn default() -> Self {
        Self::new()
    }
}

impl StemStripper for LatinStemStripper {
    fn strip(&self, word: &str) -> Vec<StemCandidate> {
        self.paradigms
            .iter()
            .flat_map(|paradigm| self.candidates_for(paradigm, word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(candidates: &[StemCandidate], stem: &str, paradigm: &str, tags: &[Tag]) -> bool {
        candidates.iter().any(|c| {
            c.stem == stem
                && c.paradigm == paradigm
                && tags
                    .iter()
                    .all(|(f, v)| c.features.get(f).map(String::as_str) == Some(*v))
        })
    }

    #[test]
    fn test_first_conjugation_third_person() {
        let candidates = LatinStemStripper::new().strip("amat");
        assert!(has(&candidates, "am", "first_conjugation", &[PRES, IND, ACT, P3, SG]));
    }

    #[test]
    fn test_ambiguous_first_declension_ending() {
        let candidates = LatinStemStripper::new().strip("puellae");
        let readings: Vec<_> = candidates
            .iter()
            .filter(|c| c.stem == "puell" && c.paradigm == "first_declension")
            .collect();
        // genitive, dative singular; nominative, vocative plural
        assert_eq!(readings.len(), 4);
    }

    #[test]
    fn test_third_declension_and_conjugation_overlap() {
        let candidates = LatinStemStripper::new().strip("regis");
        assert!(has(&candidates, "reg", "third_declension", &[GEN, SG]));
        assert!(has(&candidates, "reg", "third_conjugation", &[P2, SG]));
    }

    #[test]
    fn test_adjective_carries_gender_and_degree() {
        let candidates = LatinStemStripper::new().strip("bonam");
        assert!(has(
            &candidates,
            "bon",
            "first_second_adjective",
            &[ACC, SG, FEM, POSITIVE]
        ));
    }

    #[test]
    fn test_bare_ending_yields_no_empty_stem() {
        let candidates = LatinStemStripper::new().strip("is");
        assert!(candidates.iter().all(|c| !c.stem.is_empty()));
    }

    #[test]
    fn test_find_paradigm() {
        assert!(find_paradigm("fourth_conjugation").is_some());
        assert!(find_paradigm("fifth_declension").is_none());
    }
}
