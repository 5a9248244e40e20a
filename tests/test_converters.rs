//! Integration tests for report converters.

use wordfreq::converters::{ConsoleConverter, CsvConverter, JsonConverter, OutputFormat, ReportConverter};
use wordfreq::pipeline::{FrequencySummary, WordFrequencyPipeline};
use wordfreq::text::{PunctuationSet, StopwordSet};
use wordfreq::WordFreqConfig;

fn sample_summary() -> FrequencySummary {
    WordFrequencyPipeline::new(StopwordSet::from_words(["the"]), PunctuationSet::new(".,"))
        .with_top_n(3)
        .process("the cat, the dog. the cat and the bird. cat!")
}

// Console converter tests

#[test]
fn test_console_report_sections() {
    let summary = sample_summary();
    let config = WordFreqConfig::default().with_input_file("essay.txt").with_top_n(3);
    let out = ConsoleConverter::new().convert(&summary, &config).unwrap();

    assert!(out.starts_with('\n'));
    assert!(out.contains("WORD FREQUENCY ANALYSIS - essay.txt"));
    assert!(out.contains("Total words (after removing stopwords): 6"));
    assert!(out.contains("Unique words: 5"));
    assert!(out.contains("Top 3 most frequent words:"));
}

#[test]
fn test_console_rows_in_rank_order() {
    let summary = sample_summary();
    let config = WordFreqConfig::default().with_word_width(8).with_top_n(3);
    let out = ConsoleConverter::new().convert(&summary, &config).unwrap();
    let rows: Vec<&str> = out.lines().filter(|l| l.contains(". ") && l.ends_with('*')).collect();

    // "cat!" keeps its '!' because the punctuation set is ".,"
    assert_eq!(rows, vec![" 1. cat        2 **", " 2. dog        1 *", " 3. and        1 *"]);
}

#[test]
fn test_console_bar_length_matches_count() {
    let summary = WordFrequencyPipeline::default().process("x x x x x x x y");
    let out = ConsoleConverter::new()
        .convert(&summary, &WordFreqConfig::default().with_bar_char('#'))
        .unwrap();
    let row = out.lines().find(|l| l.contains(" x ")).unwrap();
    assert!(row.ends_with(" #######"));
}

// JSON converter tests

#[test]
fn test_json_contains_full_counts() {
    let summary = sample_summary();
    let json = JsonConverter::new()
        .convert(&summary, &WordFreqConfig::default())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["total"], 6);
    assert_eq!(value["unique"], 5);
    assert_eq!(value["counts"].as_object().unwrap().len(), 5);
    assert_eq!(value["counts"]["cat!"], 1);
    assert_eq!(value["top"].as_array().unwrap().len(), 3);
    assert_eq!(value["top"][0], serde_json::json!(["cat", 2]));
}

#[test]
fn test_json_roundtrip() {
    let summary = sample_summary();
    let json = OutputFormat::Json
        .render(&summary, &WordFreqConfig::default())
        .unwrap();
    assert_eq!(FrequencySummary::from_json(&json).unwrap(), summary);
}

// CSV converter tests

#[test]
fn test_csv_top_rows() {
    let summary = sample_summary();
    let csv = CsvConverter::new()
        .convert(&summary, &WordFreqConfig::default())
        .unwrap();
    assert_eq!(csv, "word,count\ncat,2\ndog,1\nand,1");
}

#[test]
fn test_all_formats_handle_empty_summary() {
    let summary = FrequencySummary::empty();
    let config = WordFreqConfig::default();
    for format in OutputFormat::ALL {
        let rendered = format.render(&summary, &config);
        assert!(rendered.is_ok(), "{} failed on empty summary", format);
    }
}
