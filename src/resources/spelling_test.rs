#[cfg(test)]
mod tests {
    use super::super::spelling::SpellDictionary;
    use std::fs;
    use tempfile::TempDir;

    fn dictionary() -> SpellDictionary {
        SpellDictionary::from_words(["hello", "world", "Paris", "NASA", "McDonald's", "can't"])
    }

    #[test]
    fn test_exact_matches() {
        let dict = dictionary();
        assert!(dict.check("hello"));
        assert!(dict.check("Paris"));
        assert!(dict.check("NASA"));
        assert!(dict.check("McDonald's"));
        assert!(!dict.check(""));
    }

    #[test]
    fn test_lowercase_entry_accepts_capitalized_and_upper() {
        let dict = dictionary();
        assert!(dict.check("Hello"));
        assert!(dict.check("HELLO"));
        assert!(!dict.check("hELLO"), "mixed case is not a casing variant");
    }

    #[test]
    fn test_proper_noun_entry_is_case_sensitive() {
        let dict = dictionary();
        assert!(!dict.check("paris"));
        assert!(dict.check("PARIS"));
        assert!(!dict.check("nasa"));
        assert!(!dict.check("Nasa"));
    }

    #[test]
    fn test_all_caps_form_of_mixed_case_entry() {
        let dict = dictionary();
        assert!(dict.check("MCDONALD'S"));
        assert!(!dict.check("Mcdonald's"));
        assert!(!dict.check("mcdonald's"));
    }

    #[test]
    fn test_hyphenated_compounds_check_each_piece() {
        let dict = SpellDictionary::from_words(["a", "little", "known", "story", "self", "made"]);
        assert!(dict.check("little-known"));
        assert!(dict.check("self-made"));
        assert!(dict.check("Self-Made"));
        assert!(dict.check("-known"));
        assert!(dict.check("self-"));
        assert!(!dict.check("little-knwon"));
        assert!(!dict.check("-"));
    }

    #[test]
    fn test_numbers_pass_inside_compounds() {
        let dict = SpellDictionary::from_words(["letter", "word"]);
        assert!(dict.check("5-letter"));
        assert!(dict.check("1,000"));
        assert!(!dict.check("5kg-letter"));
    }

    #[test]
    fn test_break_directive_overrides_default_patterns() {
        let dic = "little\nknown\n";
        let default_breaks = SpellDictionary::parse_hunspell(dic, "SET UTF-8\n");
        assert!(default_breaks.check("little-known"));

        let no_breaks = SpellDictionary::parse_hunspell(dic, "BREAK 0\n");
        assert!(!no_breaks.check("little-known"));
        assert!(no_breaks.check("little"));

        let underscore = SpellDictionary::parse_hunspell(dic, "BREAK 1\nBREAK _\n");
        assert!(underscore.check("little_known"));
        assert!(!underscore.check("little-known"));
    }

    #[test]
    fn test_typographic_apostrophe() {
        let dict = dictionary();
        assert!(dict.check("can\u{2019}t"));
        assert!(dict.check("McDonald\u{2019}s"));
    }

    #[test]
    fn test_parse_word_list_skips_comments() {
        let dict = SpellDictionary::parse_word_list("# header\nalpha\n\n  beta  \n");
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("alpha"));
        assert!(dict.contains("beta"));
    }

    #[test]
    fn test_load_dispatches_on_extension() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let word_list = temp_dir.path().join("words.txt");
        fs::write(&word_list, "apple\nbanana\n").expect("Failed to write word list");
        let dict = SpellDictionary::load(&word_list).expect("word list should load");
        assert!(dict.check("Apple"));

        let dic_path = temp_dir.path().join("mini.dic");
        fs::write(&dic_path, "1\ncat/S\n").expect("Failed to write dic");
        fs::write(
            temp_dir.path().join("mini.aff"),
            "SFX S Y 1\nSFX S 0 s .\n",
        )
        .expect("Failed to write aff");
        let dict = SpellDictionary::load(&dic_path).expect("hunspell should load");
        assert!(dict.check("cats"));
        assert!(dict.check("Cat"));
    }

    #[test]
    fn test_load_reports_missing_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let missing = temp_dir.path().join("absent.dic");
        let err = SpellDictionary::load(&missing).unwrap_err();
        assert!(err.to_string().contains("not found"));

        let dic_only = temp_dir.path().join("lonely.dic");
        fs::write(&dic_only, "word\n").expect("Failed to write dic");
        let err = SpellDictionary::load(&dic_only).unwrap_err();
        assert!(err.to_string().contains("affix file not found"));
    }
}
