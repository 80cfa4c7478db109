//! Hunspell dictionary expansion.
//!
//! A Hunspell dictionary ships as a `.dic` file of stems annotated with affix
//! flags plus an `.aff` file describing what each flag does. Spell checking
//! here is plain set membership, so the stems are expanded into every surface
//! form their prefix and suffix rules produce.
//!
//! # Supported subset
//! - `FLAG` modes: single character (default), `long`, `num`, `UTF-8`
//! - `PFX` / `SFX` groups with strip, append and condition fields
//! - Cross-product of prefixes and suffixes
//! - `FORBIDDENWORD`, `ONLYINCOMPOUND` and `NEEDAFFIX`
//! - `BREAK` word-break patterns (default `-`, `^-`, `-$`)
//!
//! Compounding, conversion tables and morphological fields are ignored.

use std::collections::HashMap;

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum FlagMode {
    #[default]
    Char,
    Long,
    Num,
}

impl FlagMode {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "long" => FlagMode::Long,
            "num" => FlagMode::Num,
            // UTF-8 flags are single code points, same as the default.
            _ => FlagMode::Char,
        }
    }

    pub(crate) fn split(self, flags: &str) -> Vec<String> {
        match self {
            FlagMode::Char => flags.chars().map(String::from).collect(),
            FlagMode::Long => {
                let chars: Vec<char> = flags.chars().collect();
                chars.chunks(2).map(|pair| pair.iter().collect()).collect()
            }
            FlagMode::Num => flags
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConditionPart {
    Any,
    Literal(char),
    Set { chars: Vec<char>, negated: bool },
}

impl ConditionPart {
    fn matches(&self, c: char) -> bool {
        match self {
            ConditionPart::Any => true,
            ConditionPart::Literal(l) => *l == c,
            ConditionPart::Set { chars, negated } => chars.contains(&c) != *negated,
        }
    }
}

/// Affix condition: a tiny regular expression anchored at the start (prefix)
/// or end (suffix) of the stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Condition {
    parts: Vec<ConditionPart>,
}

impl Condition {
    pub(crate) fn parse(pattern: &str) -> Self {
        let mut parts = Vec::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '.' => parts.push(ConditionPart::Any),
                '[' => {
                    let negated = chars.peek() == Some(&'^');
                    if negated {
                        chars.next();
                    }
                    let mut set = Vec::new();
                    for member in chars.by_ref() {
                        if member == ']' {
                            break;
                        }
                        set.push(member);
                    }
                    parts.push(ConditionPart::Set {
                        chars: set,
                        negated,
                    });
                }
                other => parts.push(ConditionPart::Literal(other)),
            }
        }

        // A lone "." means "no condition".
        if parts == [ConditionPart::Any] {
            parts.clear();
        }

        Self { parts }
    }

    fn matches_start(&self, word: &[char]) -> bool {
        word.len() >= self.parts.len()
            && self
                .parts
                .iter()
                .zip(word.iter())
                .all(|(part, c)| part.matches(*c))
    }

    fn matches_end(&self, word: &[char]) -> bool {
        if word.len() < self.parts.len() {
            return false;
        }
        let offset = word.len() - self.parts.len();
        self.parts
            .iter()
            .zip(word[offset..].iter())
            .all(|(part, c)| part.matches(*c))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AffixRule {
    strip: String,
    append: String,
    condition: Condition,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct AffixGroup {
    cross_product: bool,
    rules: Vec<AffixRule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AffixKind {
    Prefix,
    Suffix,
}

impl AffixRule {
    fn apply(&self, word: &str, kind: AffixKind) -> Option<String> {
        let chars: Vec<char> = word.chars().collect();
        match kind {
            AffixKind::Suffix => {
                if !self.condition.matches_end(&chars) || !word.ends_with(self.strip.as_str()) {
                    return None;
                }
                let stem = &word[..word.len() - self.strip.len()];
                if stem.is_empty() && self.append.is_empty() {
                    return None;
                }
                Some(format!("{}{}", stem, self.append))
            }
            AffixKind::Prefix => {
                if !self.condition.matches_start(&chars) || !word.starts_with(self.strip.as_str()) {
                    return None;
                }
                let stem = &word[self.strip.len()..];
                if stem.is_empty() && self.append.is_empty() {
                    return None;
                }
                Some(format!("{}{}", self.append, stem))
            }
        }
    }
}

/// Where a word may be split before its pieces are checked on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BreakPattern {
    /// `^-`: a leading occurrence is dropped.
    Start(String),
    /// `-$`: a trailing occurrence is dropped.
    End(String),
    /// `-`: the word is split at every occurrence.
    Inner(String),
}

impl BreakPattern {
    pub(crate) fn parse(pattern: &str) -> Option<Self> {
        if let Some(rest) = pattern.strip_prefix('^') {
            return (!rest.is_empty()).then(|| BreakPattern::Start(rest.to_string()));
        }
        if let Some(rest) = pattern.strip_suffix('$') {
            return (!rest.is_empty()).then(|| BreakPattern::End(rest.to_string()));
        }
        (!pattern.is_empty()).then(|| BreakPattern::Inner(pattern.to_string()))
    }

    /// Hunspell's default when an affix file declares no `BREAK` table.
    pub(crate) fn defaults() -> Vec<Self> {
        vec![
            BreakPattern::Inner("-".to_string()),
            BreakPattern::Start("-".to_string()),
            BreakPattern::End("-".to_string()),
        ]
    }
}

/// Parsed `.aff` file.
#[derive(Debug, Clone, Default)]
pub(crate) struct AffixFile {
    pub(crate) flag_mode: FlagMode,
    prefixes: HashMap<String, AffixGroup>,
    suffixes: HashMap<String, AffixGroup>,
    forbidden_flag: Option<String>,
    only_in_compound_flag: Option<String>,
    need_affix_flag: Option<String>,
    /// `None` until a `BREAK` directive is seen; `BREAK 0` leaves it empty.
    break_patterns: Option<Vec<BreakPattern>>,
}

impl AffixFile {
    pub(crate) fn break_patterns(&self) -> Vec<BreakPattern> {
        self.break_patterns
            .clone()
            .unwrap_or_else(BreakPattern::defaults)
    }

    pub(crate) fn prefix_count(&self) -> usize {
        self.prefixes.values().map(|g| g.rules.len()).sum()
    }

    pub(crate) fn suffix_count(&self) -> usize {
        self.suffixes.values().map(|g| g.rules.len()).sum()
    }
}

/// Parses the affix rules out of `.aff` content. Unknown directives are skipped.
pub(crate) fn parse_affix_file(content: &str) -> AffixFile {
    let mut affixes = AffixFile::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields[0] {
            "FLAG" if fields.len() > 1 => affixes.flag_mode = FlagMode::parse(fields[1]),
            "FORBIDDENWORD" if fields.len() > 1 => {
                affixes.forbidden_flag = Some(fields[1].to_string())
            }
            "ONLYINCOMPOUND" if fields.len() > 1 => {
                affixes.only_in_compound_flag = Some(fields[1].to_string())
            }
            "NEEDAFFIX" | "PSEUDOROOT" if fields.len() > 1 => {
                affixes.need_affix_flag = Some(fields[1].to_string())
            }
            "BREAK" if fields.len() > 1 => {
                let patterns = affixes.break_patterns.get_or_insert_with(Vec::new);
                // The first BREAK line carries the table size.
                if fields[1].parse::<usize>().is_err() {
                    patterns.extend(BreakPattern::parse(fields[1]));
                }
            }
            "PFX" | "SFX" if fields.len() >= 4 => {
                let groups = if fields[0] == "PFX" {
                    &mut affixes.prefixes
                } else {
                    &mut affixes.suffixes
                };
                parse_affix_line(groups, &fields);
            }
            _ => {}
        }
    }

    debug!(
        "Parsed affix file: {} prefix rules, {} suffix rules",
        affixes.prefix_count(),
        affixes.suffix_count()
    );

    affixes
}

fn parse_affix_line(groups: &mut HashMap<String, AffixGroup>, fields: &[&str]) {
    let flag = fields[1].to_string();
    let is_header = !groups.contains_key(&flag)
        && fields.len() == 4
        && matches!(fields[2], "Y" | "N")
        && fields[3].parse::<usize>().is_ok();

    if is_header {
        groups.insert(
            flag,
            AffixGroup {
                cross_product: fields[2] == "Y",
                rules: Vec::new(),
            },
        );
        return;
    }

    let strip = if fields[2] == "0" { "" } else { fields[2] };
    // Continuation flags after '/' describe two-level affixation, which is not expanded.
    let append = fields[3].split('/').next().unwrap_or("");
    let append = if append == "0" { "" } else { append };
    let condition = fields.get(4).copied().unwrap_or(".");

    groups.entry(flag).or_default().rules.push(AffixRule {
        strip: strip.to_string(),
        append: append.to_string(),
        condition: Condition::parse(condition),
    });
}

/// One stem from a `.dic` file with its flags split according to the flag mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DicEntry {
    pub(crate) word: String,
    pub(crate) flags: Vec<String>,
}

/// Parses `.dic` content. The optional leading entry count is skipped.
pub(crate) fn parse_dic_entries(content: &str, flag_mode: FlagMode) -> Vec<DicEntry> {
    let mut entries = Vec::new();

    for (line_number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line_number == 0 && line.parse::<usize>().is_ok() {
            continue;
        }

        let Some(field) = line.split(['\t', ' ']).next() else {
            continue;
        };
        let (word, flags) = split_word_and_flags(field);
        if word.is_empty() {
            continue;
        }

        entries.push(DicEntry {
            word,
            flags: flag_mode.split(&flags),
        });
    }

    entries
}

fn split_word_and_flags(field: &str) -> (String, String) {
    let mut word = String::new();
    let mut chars = field.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    word.push(escaped);
                }
            }
            '/' => return (word, chars.collect()),
            other => word.push(other),
        }
    }

    (word, String::new())
}

/// Expands every `.dic` stem into all surface forms allowed by the affix rules.
pub(crate) fn expand_dictionary(dic_content: &str, affixes: &AffixFile) -> Vec<String> {
    let entries = parse_dic_entries(dic_content, affixes.flag_mode);
    let mut forms = Vec::with_capacity(entries.len() * 2);

    for entry in &entries {
        forms.extend(expand_entry(entry, affixes));
    }

    forms
}

pub(crate) fn expand_entry(entry: &DicEntry, affixes: &AffixFile) -> Vec<String> {
    let has_flag = |flag: &Option<String>| {
        flag.as_ref()
            .is_some_and(|f| entry.flags.iter().any(|ef| ef == f))
    };

    if has_flag(&affixes.forbidden_flag) || has_flag(&affixes.only_in_compound_flag) {
        return Vec::new();
    }

    let mut forms = Vec::new();
    if !has_flag(&affixes.need_affix_flag) {
        forms.push(entry.word.clone());
    }

    let mut cross_suffixed = Vec::new();
    for flag in &entry.flags {
        if let Some(group) = affixes.suffixes.get(flag) {
            for rule in &group.rules {
                if let Some(form) = rule.apply(&entry.word, AffixKind::Suffix) {
                    if group.cross_product {
                        cross_suffixed.push(form.clone());
                    }
                    forms.push(form);
                }
            }
        }
    }

    for flag in &entry.flags {
        if let Some(group) = affixes.prefixes.get(flag) {
            for rule in &group.rules {
                if let Some(form) = rule.apply(&entry.word, AffixKind::Prefix) {
                    forms.push(form);
                }
                if group.cross_product {
                    forms.extend(
                        cross_suffixed
                            .iter()
                            .filter_map(|suffixed| rule.apply(suffixed, AffixKind::Prefix)),
                    );
                }
            }
        }
    }

    forms
}
