#[cfg(test)]
mod tests {
    use super::super::hunspell::*;
    use std::collections::HashSet;

    const AFF: &str = r#"
SET UTF-8
TRY esianrtolcdugmphbyfvkwzESIANRTOLCDUGMPHBYFVKWZ'
FORBIDDENWORD !
ONLYINCOMPOUND c
NEEDAFFIX X

PFX A Y 1
PFX A   0     re         .

SFX S Y 4
SFX S   y     ies        [^aeiou]y
SFX S   0     s          [aeiou]y
SFX S   0     es         [sxzh]
SFX S   0     s          [^sxzhy]

SFX M Y 1
SFX M   0     's         .

SFX D Y 2
SFX D   0     d          e
SFX D   0     ed         [^e]

SFX N N 1
SFX N   e     ion/S      e
"#;

    fn expand(dic: &str) -> HashSet<String> {
        let affixes = parse_affix_file(AFF);
        expand_dictionary(dic, &affixes).into_iter().collect()
    }

    #[test]
    fn test_parse_affix_counts() {
        let affixes = parse_affix_file(AFF);
        assert_eq!(affixes.prefix_count(), 1);
        assert_eq!(affixes.suffix_count(), 8);
        assert_eq!(affixes.flag_mode, FlagMode::Char);
    }

    #[test]
    fn test_suffix_conditions() {
        let forms = expand("4\ncity/S\nday/S\nbox/S\ncat/S\n");
        for expected in ["city", "cities", "day", "days", "box", "boxes", "cat", "cats"] {
            assert!(forms.contains(expected), "missing form {}", expected);
        }
        assert!(!forms.contains("citys"));
        assert!(!forms.contains("daies"));
    }

    #[test]
    fn test_possessive_and_mixed_case_stems() {
        let forms = expand("McDonald/M\nJohn/M\n");
        assert!(forms.contains("McDonald's"));
        assert!(forms.contains("John's"));
        assert!(forms.contains("John"));
    }

    #[test]
    fn test_strip_and_continuation_flags() {
        let forms = expand("create/DN\n");
        assert!(forms.contains("created"));
        assert!(forms.contains("creation"));
        // Continuation flags on "ion/S" are not expanded.
        assert!(!forms.contains("creations"));
    }

    #[test]
    fn test_cross_product() {
        let forms = expand("load/AD\n");
        for expected in ["load", "loaded", "reload", "reloaded"] {
            assert!(forms.contains(expected), "missing form {}", expected);
        }
    }

    #[test]
    fn test_special_flags() {
        let forms = expand("irregardless/!\n1th/c\nfoo/XS\n");
        assert!(!forms.contains("irregardless"));
        assert!(!forms.contains("1th"));
        assert!(!forms.contains("foo"), "NEEDAFFIX stems are not words on their own");
        assert!(forms.contains("foos"));
    }

    #[test]
    fn test_dic_entry_fields() {
        let entries = parse_dic_entries("2\nAC\\/DC/M\tpo:noun\nhello\n", FlagMode::Char);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word, "AC/DC");
        assert_eq!(entries[0].flags, vec!["M".to_string()]);
        assert_eq!(entries[1].word, "hello");
        assert!(entries[1].flags.is_empty());
    }

    #[test]
    fn test_flag_modes() {
        assert_eq!(
            FlagMode::Long.split("AaBb"),
            vec!["Aa".to_string(), "Bb".to_string()]
        );
        assert_eq!(
            FlagMode::Num.split("101,7"),
            vec!["101".to_string(), "7".to_string()]
        );
        assert_eq!(
            FlagMode::Char.split("SM"),
            vec!["S".to_string(), "M".to_string()]
        );
    }

    #[test]
    fn test_condition_parsing() {
        let condition = Condition::parse("[^aeiou]y");
        assert_eq!(condition, Condition::parse("[^aeiou]y"));
        assert_eq!(Condition::parse("."), Condition::parse(""));
    }

    #[test]
    fn test_break_patterns() {
        assert_eq!(parse_affix_file(AFF).break_patterns(), BreakPattern::defaults());
        assert!(parse_affix_file("BREAK 0\n").break_patterns().is_empty());
        assert_eq!(
            parse_affix_file("BREAK 3\nBREAK ^-\nBREAK --\nBREAK '$\n").break_patterns(),
            vec![
                BreakPattern::Start("-".to_string()),
                BreakPattern::Inner("--".to_string()),
                BreakPattern::End("'".to_string()),
            ]
        );
    }
}
