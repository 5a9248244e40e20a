//! Integration tests for the counting pipeline.

use wordfreq::pipeline::{count_words, rank_words, total_words, CountMap, FrequencySummary, WordFrequencyPipeline};
use wordfreq::text::{normalize, tokenize, CaseFolding, PunctuationSet, StopwordSet};

fn owned(entries: &[(&str, usize)]) -> Vec<(String, usize)> {
    entries.iter().map(|&(w, c)| (w.to_string(), c)).collect()
}

fn as_pairs(counts: &CountMap) -> Vec<(String, usize)> {
    counts.iter().map(|(w, &c)| (w.clone(), c)).collect()
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_counts_without_stopwords() {
        let counts = count_words(["cat", "dog", "cat"], &StopwordSet::empty(), &PunctuationSet::new(""));
        assert_eq!(as_pairs(&counts), owned(&[("cat", 2), ("dog", 1)]));
    }

    #[test]
    fn test_counts_with_stopwords() {
        let counts = count_words(
            ["the", "cat", "and", "the", "dog"],
            &StopwordSet::from_words(["the"]),
            &PunctuationSet::new(""),
        );
        assert_eq!(as_pairs(&counts), owned(&[("cat", 1), ("and", 1), ("dog", 1)]));
    }

    #[test]
    fn test_counts_with_punctuation() {
        let counts = count_words(
            ["hello,", "hello!", "world."],
            &StopwordSet::empty(),
            &PunctuationSet::new(".,!"),
        );
        assert_eq!(as_pairs(&counts), owned(&[("hello", 2), ("world", 1)]));
    }

    #[test]
    fn test_ranking() {
        let counts: CountMap = [("a", 1), ("b", 3), ("c", 2)]
            .iter()
            .map(|&(w, c)| (w.to_string(), c))
            .collect();
        assert_eq!(rank_words(&counts), owned(&[("b", 3), ("c", 2), ("a", 1)]));
    }

    #[test]
    fn test_total_words() {
        let counts: CountMap = [("a", 2), ("b", 3)]
            .iter()
            .map(|&(w, c)| (w.to_string(), c))
            .collect();
        assert_eq!(total_words(&counts), 5);
    }

    #[test]
    fn test_normalize_and_tokenize() {
        assert_eq!(normalize("Hello WORLD", CaseFolding::Lowercase), "hello world");
        assert_eq!(tokenize("one two three", CaseFolding::Lowercase), vec!["one", "two", "three"]);
    }
}

mod pipeline_tests {
    use super::*;

    fn english_pipeline() -> WordFrequencyPipeline {
        WordFrequencyPipeline::new(
            StopwordSet::from_words(["the", "and", "a", "of"]),
            PunctuationSet::new(".,!?;:\"()[]"),
        )
    }

    #[test]
    fn test_sentence_with_mixed_case_and_punctuation() {
        let summary = english_pipeline().process("The Quick fox. The quick DOG! (Quick?)");
        assert_eq!(summary.counts["quick"], 3);
        assert_eq!(summary.counts["fox"], 1);
        assert_eq!(summary.counts["dog"], 1);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.unique, 3);
        assert_eq!(summary.top, owned(&[("quick", 3), ("fox", 1), ("dog", 1)]));
    }

    #[test]
    fn test_only_stopwords() {
        let summary = english_pipeline().process("The and a of. THE!");
        assert_eq!(summary, FrequencySummary::empty());
    }

    #[test]
    fn test_top_n_larger_than_vocabulary() {
        let summary = english_pipeline().with_top_n(50).process("one two two");
        assert_eq!(summary.top.len(), 2);
    }

    #[test]
    fn test_top_n_zero() {
        let summary = english_pipeline().with_top_n(0).process("one two two");
        assert!(summary.top.is_empty());
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn test_interior_punctuation_kept() {
        let summary = english_pipeline().process("state-of-the-art e.g. don't");
        assert!(summary.counts.contains_key("state-of-the-art"));
        assert!(summary.counts.contains_key("e.g"));
        assert!(summary.counts.contains_key("don't"));
    }

    #[test]
    fn test_unicode_words() {
        let summary = english_pipeline().process("Café café CAFÉ naïve");
        assert_eq!(summary.counts["café"], 3);
        assert_eq!(summary.counts["naïve"], 1);
    }
}
