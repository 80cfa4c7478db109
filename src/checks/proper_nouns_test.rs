#[cfg(test)]
mod tests {
    use super::super::proper_nouns::*;
    use crate::resources::{LexiconTagger, PosTagger, TaggedToken, UniversalPos, WordFrequencyTable};

    const LEXICON: &str = "\
the DT
The DT
a DT
in IN
of IN
is VBZ
was VBD
capital NN
city NN
cast VBD
spells NNS
wizard NN
Paris NNP
France NNP
London NNP
";

    fn tagger() -> LexiconTagger {
        LexiconTagger::parse(LEXICON).expect("lexicon should parse")
    }

    fn frequencies() -> WordFrequencyTable {
        WordFrequencyTable::from_pairs([
            ("the", 5e-2),
            ("paris", 4.2e-5),
            ("france", 5.1e-5),
            ("london", 6.0e-5),
            ("ed", 2.0e-6),
            ("zorkblatt", 1.0e-9),
        ])
    }

    fn check(text: &str) -> bool {
        has_unusual_proper_nouns(text, &tagger(), &frequencies(), DEFAULT_RARE_THRESHOLD)
    }

    #[test]
    fn test_common_proper_nouns_are_not_unusual() {
        assert!(!check("Paris is the capital of France"));
        assert!(!check("London"));
    }

    #[test]
    fn test_rare_and_unknown_proper_nouns_are_unusual() {
        assert!(check("The wizard Zorkblatt cast spells"));
        assert!(check("The city of Quuxville"));
    }

    #[test]
    fn test_quoted_questions() {
        assert!(check("'Zorkblatt cast spells'"));
        assert!(check("'The wizard Zorkblatt cast spells'"));
        assert!(!check("'Paris is the capital of France'"));
    }

    #[test]
    fn test_names_with_inner_apostrophes() {
        assert!(check("The wizard O'Brien cast spells"));
        assert!(check("O'Brien's city"));
        let found = unusual_proper_nouns("O'Brien", &tagger(), &frequencies(), DEFAULT_RARE_THRESHOLD);
        assert_eq!(found, vec![("O'Brien".to_string(), 0.0)]);
    }

    #[test]
    fn test_blank_text() {
        assert!(!check(""));
        assert!(!check("   \n\t"));
    }

    #[test]
    fn test_short_and_non_alphabetic_tokens_are_ignored() {
        // "Xu" is too short, "R2D2" is not purely alphabetic.
        assert!(!check("the Xu in London"));
        assert!(!check("the R2D2 in London"));
    }

    #[test]
    fn test_no_proper_nouns() {
        assert!(!check("the wizard cast spells"));
    }

    #[test]
    fn test_threshold_is_strict() {
        let tagger = tagger();
        let freqs = frequencies();
        assert!(!has_unusual_proper_nouns("in Paris", &tagger, &freqs, 4.2e-5));
        assert!(has_unusual_proper_nouns("in Paris", &tagger, &freqs, 5e-5));
        assert!(!has_unusual_proper_nouns("the Zorkblatt", &tagger, &freqs, 0.0));
    }

    #[test]
    fn test_lists_rare_proper_nouns() {
        let found = unusual_proper_nouns(
            "Zorkblatt left Paris for Quuxville",
            &tagger(),
            &frequencies(),
            DEFAULT_RARE_THRESHOLD,
        );
        assert_eq!(
            found,
            vec![("Zorkblatt".to_string(), 1.0e-9), ("Quuxville".to_string(), 0.0)]
        );
    }

    struct FixedTagger(Vec<TaggedToken>);

    impl PosTagger for FixedTagger {
        fn tag(&self, _text: &str) -> Vec<TaggedToken> {
            self.0.clone()
        }
    }

    fn token(text: &str, pos: UniversalPos) -> TaggedToken {
        TaggedToken {
            text: text.to_string(),
            tag: String::new(),
            pos,
            is_alpha: text.chars().all(char::is_alphabetic),
            sentence_start: false,
        }
    }

    #[test]
    fn test_only_propn_tokens_are_candidates() {
        let freqs = frequencies();
        let nouns = FixedTagger(vec![token("Zorkblatt", UniversalPos::Noun)]);
        assert!(!has_unusual_proper_nouns("x", &nouns, &freqs, DEFAULT_RARE_THRESHOLD));

        let propn = FixedTagger(vec![token("ZORKBLATT", UniversalPos::Propn)]);
        assert!(has_unusual_proper_nouns("x", &propn, &freqs, DEFAULT_RARE_THRESHOLD));
    }
}
