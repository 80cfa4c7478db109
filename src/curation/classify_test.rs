#[cfg(test)]
mod tests {
    use super::super::classify::*;
    use crate::checks::DEFAULT_RARE_THRESHOLD;
    use crate::dataset::loader::read_dataset;
    use crate::models::Category;
    use crate::resources::{LinguisticResources, ResourcePaths};
    use indicatif::ProgressBar;
    use std::path::PathBuf;

    fn testdata(path: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("testdata")
            .join(path)
    }

    fn classifier() -> QuestionClassifier {
        let resources = LinguisticResources::load(&ResourcePaths::in_dir(testdata("resources")))
            .expect("test resources should load");
        QuestionClassifier::new(resources, DEFAULT_RARE_THRESHOLD)
    }

    #[test]
    fn test_categories_of_single_questions() {
        let classifier = classifier();
        assert_eq!(
            classifier.categories("This city is the capital of France"),
            Vec::<Category>::new()
        );
        assert_eq!(
            classifier.categories("Its 2 moons are Phobos and Deimos"),
            vec![Category::Numbers, Category::UnusualProperNouns]
        );
        assert_eq!(
            classifier.categories("The wizard Zorkblatt cast spells"),
            vec![Category::NonEnglish, Category::UnusualProperNouns]
        );
        assert_eq!(
            classifier.categories("A 5-letter word for a large body of water"),
            vec![Category::Numbers]
        );
        assert!(classifier.categories("   ").is_empty());
    }

    #[test]
    fn test_quoted_questions_classify_like_bare_ones() {
        let classifier = classifier();
        for question in [
            "Kublai Khan founded this dynasty",
            "Zorkblatt cast spells",
            "This city is the capital of France",
            "A 5-letter word for a large body of water, la mer",
        ] {
            assert_eq!(
                classifier.categories(&format!("'{}'", question)),
                classifier.categories(question),
                "{}",
                question
            );
        }
        assert_eq!(
            classifier.categories("'Kublai Khan founded this dynasty'"),
            vec![Category::UnusualProperNouns]
        );
        assert_eq!(
            classifier.categories("'Zorkblatt cast spells'"),
            vec![Category::NonEnglish, Category::UnusualProperNouns]
        );
    }

    #[test]
    fn test_classify_fixture_dataset() {
        let dataset = read_dataset(&testdata("jeopardy/questions.json")).expect("fixture loads");
        let progress_bar = ProgressBar::hidden();

        let classification = classify(&dataset, &classifier(), &progress_bar);

        assert_eq!(classification.numbers, vec![1, 4, 8, 11]);
        assert_eq!(classification.non_english, vec![2, 3, 8]);
        assert_eq!(classification.unusual_proper_nouns, vec![2, 3, 9, 11]);
        assert_eq!(progress_bar.position(), 12);
    }

    #[test]
    fn test_threshold_changes_proper_noun_results() {
        let resources = LinguisticResources::load(&ResourcePaths::in_dir(testdata("resources")))
            .expect("test resources should load");
        let strict = QuestionClassifier::new(resources, 1e-5);

        assert_eq!(strict.rare_threshold(), 1e-5);
        // Cairo sits at 7.94e-6, rare under the stricter threshold.
        assert!(strict.matches(Category::UnusualProperNouns, "This river flows through Cairo"));
        assert!(!classifier().matches(Category::UnusualProperNouns, "This river flows through Cairo"));
    }

    #[test]
    fn test_indices_by_category() {
        let classification = Classification {
            numbers: vec![0, 2],
            non_english: vec![1],
            unusual_proper_nouns: vec![],
        };
        assert_eq!(classification.indices(Category::Numbers), &[0, 2]);
        assert_eq!(classification.indices(Category::NonEnglish), &[1]);
        assert!(classification.indices(Category::UnusualProperNouns).is_empty());
    }
}
