#[cfg(test)]
mod tests {
    use super::super::table::*;
    use serde_json::{Value, json};

    fn sample() -> Dataset {
        Dataset::from_value(json!([
            {"category": "HISTORY", "question": "In 1492 he sailed the ocean blue", "value": "$200"},
            {"category": "SCIENCE", "question": null, "value": null},
            {"category": "GEOGRAPHY", "answer": "Nile"},
            {"category": "NUMBERS", "question": 42, "value": "$400"}
        ]))
        .expect("valid dataset")
    }

    #[test]
    fn test_columns_are_union_in_first_seen_order() {
        let dataset = sample();
        assert_eq!(
            dataset.columns(),
            &["category", "question", "value", "answer"]
        );
        assert_eq!(dataset.shape(), (4, 4));
        assert_eq!(dataset.len(), 4);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_question_text() {
        let dataset = sample();
        assert_eq!(dataset.question_text(0), "In 1492 he sailed the ocean blue");
        assert_eq!(dataset.question_text(1), "");
        assert_eq!(dataset.question_text(2), "");
        assert_eq!(dataset.question_text(3), "42");
        assert_eq!(dataset.question_text(99), "");
    }

    #[test]
    fn test_record_fills_missing_columns_with_null() {
        let dataset = sample();
        let record = dataset.record(2).expect("row exists");
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["category", "question", "value", "answer"]);
        assert_eq!(record["question"], Value::Null);
        assert_eq!(record["answer"], json!("Nile"));
        assert!(dataset.record(4).is_none());
    }

    #[test]
    fn test_head() {
        let dataset = sample();
        assert_eq!(dataset.head(2).len(), 2);
        assert_eq!(dataset.head(10).len(), 4);
        assert_eq!(dataset.head(1)[0]["category"], json!("HISTORY"));
    }

    #[test]
    fn test_missing_percentages() {
        let dataset = sample();
        assert_eq!(
            dataset.missing_percentages(),
            vec![
                ("category".to_string(), 0.0),
                ("question".to_string(), 50.0),
                ("value".to_string(), 50.0),
                ("answer".to_string(), 75.0),
            ]
        );

        let thirds = Dataset::from_value(json!([{"a": 1}, {"a": null}, {"a": 3}]))
            .expect("valid dataset");
        assert_eq!(thirds.missing_percentages(), vec![("a".to_string(), 33.33)]);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::from_json_str("[]").expect("valid dataset");
        assert!(dataset.is_empty());
        assert_eq!(dataset.shape(), (0, 0));
        assert!(dataset.missing_percentages().is_empty());
    }

    #[test]
    fn test_rejects_non_array_and_non_object_records() {
        let err = Dataset::from_json_str(r#"{"question": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("Expected a JSON array"));

        let err = Dataset::from_json_str(r#"[{"question": "x"}, "oops"]"#).unwrap_err();
        assert!(err.to_string().contains("Record 1 is not a JSON object"));

        assert!(Dataset::from_json_str("[{").is_err());
    }
}
