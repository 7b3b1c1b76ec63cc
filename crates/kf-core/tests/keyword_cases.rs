// Table-driven extract/remove/replace/mask cases.
//
// Every table runs twice: once on a case-insensitive processor and once on a
// case-sensitive one, each with its own expectations.

use std::collections::BTreeMap;

use serde::Deserialize;

use kf_core::{KeywordProcessor, MatchOptions};

const EXTRACT_CASES: &str = r#"[
    {
        "sentence": "I love Big Apple and Bay Area.",
        "keyword_dict": {"New York": ["Big Apple"], "Bay Area": ["Bay Area"]},
        "explanation": "multi-word keywords with labels",
        "keywords": ["New York", "Bay Area"],
        "keywords_case_sensitive": ["New York", "Bay Area"]
    },
    {
        "sentence": "I love big apple and bay area.",
        "keyword_dict": {"New York": ["Big Apple"], "Bay Area": ["Bay Area"]},
        "explanation": "lowercase input only matches when folding",
        "keywords": ["New York", "Bay Area"],
        "keywords_case_sensitive": []
    },
    {
        "sentence": "Python is great, python-dev is not python",
        "keyword_dict": {"Python": ["python"]},
        "explanation": "hyphen is a word character",
        "keywords": ["Python", "Python"],
        "keywords_case_sensitive": ["Python"]
    },
    {
        "sentence": "Machine learning and machine learning engineers",
        "keyword_dict": {"ML": ["machine learning"], "MLE": ["machine learning engineer"]},
        "explanation": "longest keyword must still end on a token edge",
        "keywords": ["ML", "ML"],
        "keywords_case_sensitive": ["ML"]
    },
    {
        "sentence": "C++ and C# devs",
        "keyword_dict": {"cpp": ["C++"]},
        "explanation": "keywords may contain separators",
        "keywords": ["cpp"],
        "keywords_case_sensitive": ["cpp"]
    },
    {
        "sentence": "",
        "keyword_dict": {"cpp": ["C++"]},
        "explanation": "empty sentence",
        "keywords": [],
        "keywords_case_sensitive": []
    }
]"#;

const REMOVE_CASES: &str = r#"[
    {
        "sentence": "I love Big Apple and Bay Area.",
        "keyword_dict": {"New York": ["Big Apple", "NY"], "Bay Area": ["Bay Area"]},
        "remove_keyword_dict": {"New York": ["big apple"]},
        "keywords": ["Bay Area"],
        "keywords_case_sensitive": ["New York", "Bay Area"]
    },
    {
        "sentence": "NY and Bay Area",
        "keyword_dict": {"New York": ["Big Apple", "NY"], "Bay Area": ["Bay Area"]},
        "remove_keyword_dict": {"Bay Area": ["Bay Area"], "Unknown": ["never added"]},
        "keywords": ["New York"],
        "keywords_case_sensitive": ["New York"]
    }
]"#;

const REPLACE_CASES: &str = r#"[
    {
        "sentence": "I love Big Apple and bay area.",
        "keyword_dict": {"New York": ["Big Apple"], "SF": ["Bay Area"]},
        "explanation": "labels of different length",
        "keywords": ["New York", "SF"],
        "keywords_case_sensitive": ["New York"],
        "expected": "I love New York and SF.",
        "expected_case_sensitive": "I love New York and bay area."
    },
    {
        "sentence": "Résumé of São Paulo team",
        "keyword_dict": {"SP": ["são paulo"]},
        "explanation": "non-ASCII text around and inside the match",
        "keywords": ["SP"],
        "keywords_case_sensitive": [],
        "expected": "Résumé of SP team",
        "expected_case_sensitive": "Résumé of São Paulo team"
    },
    {
        "sentence": "Go to NY, then NY again",
        "keyword_dict": {"New York City": ["NY"]},
        "explanation": "repeated growing replacement",
        "keywords": ["New York City", "New York City"],
        "keywords_case_sensitive": ["New York City", "New York City"],
        "expected": "Go to New York City, then New York City again",
        "expected_case_sensitive": "Go to New York City, then New York City again"
    }
]"#;

const MASK_CASES: &str = r#"[
    {
        "sentence": "My name is John Smith and johnny smith",
        "keyword_dict": {"_": ["smith", "john"]},
        "explanation": "mask length follows the keyword",
        "expected": "My name is :XXXX: :XXXXX: and johnny :XXXXX:",
        "expected_case_sensitive": "My name is John Smith and johnny :XXXXX:"
    },
    {
        "sentence": "no names here",
        "keyword_dict": {"_": ["smith"]},
        "explanation": "nothing to mask",
        "expected": "no names here",
        "expected_case_sensitive": "no names here"
    }
]"#;

#[derive(Debug, Deserialize)]
struct ExtractCase {
    sentence: String,
    keyword_dict: BTreeMap<String, Vec<String>>,
    explanation: String,
    keywords: Vec<String>,
    keywords_case_sensitive: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RemoveCase {
    sentence: String,
    keyword_dict: BTreeMap<String, Vec<String>>,
    remove_keyword_dict: BTreeMap<String, Vec<String>>,
    keywords: Vec<String>,
    keywords_case_sensitive: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ReplaceCase {
    sentence: String,
    keyword_dict: BTreeMap<String, Vec<String>>,
    explanation: String,
    keywords: Vec<String>,
    keywords_case_sensitive: Vec<String>,
    expected: String,
    expected_case_sensitive: String,
}

#[derive(Debug, Deserialize)]
struct MaskCase {
    sentence: String,
    keyword_dict: BTreeMap<String, Vec<String>>,
    explanation: String,
    expected: String,
    expected_case_sensitive: String,
}

fn load<T: for<'de> Deserialize<'de>>(json: &str) -> Vec<T> {
    serde_json::from_str(json).expect("fixture table should parse")
}

fn labelled_processor(case_sensitive: bool, dict: &BTreeMap<String, Vec<String>>) -> KeywordProcessor {
    let processor = KeywordProcessor::new();
    processor.set_case_sensitive(case_sensitive);
    for (label, keywords) in dict {
        for keyword in keywords {
            processor.add_keyword_with_label(keyword, label);
        }
    }
    processor
}

fn mask_with_x(keyword: &str) -> String {
    format!(":{}:", "X".repeat(keyword.chars().count()))
}

#[test]
fn extract_cases() {
    for case in load::<ExtractCase>(EXTRACT_CASES) {
        for (case_sensitive, expected) in [
            (false, &case.keywords),
            (true, &case.keywords_case_sensitive),
        ] {
            let processor = labelled_processor(case_sensitive, &case.keyword_dict);
            let found: Vec<String> = processor
                .extract_keywords(&case.sentence, MatchOptions::longest_match())
                .into_iter()
                .map(|m| m.label)
                .collect();
            assert_eq!(
                &found, expected,
                "case_sensitive={} sentence={:?} ({})",
                case_sensitive, case.sentence, case.explanation
            );
        }
    }
}

#[test]
fn remove_cases() {
    for case in load::<RemoveCase>(REMOVE_CASES) {
        for (case_sensitive, expected) in [
            (false, &case.keywords),
            (true, &case.keywords_case_sensitive),
        ] {
            let processor = labelled_processor(case_sensitive, &case.keyword_dict);
            for keywords in case.remove_keyword_dict.values() {
                processor.remove_keywords(keywords);
            }
            let found: Vec<String> = processor
                .extract_keywords(&case.sentence, MatchOptions::default())
                .into_iter()
                .map(|m| m.label)
                .collect();
            assert_eq!(
                &found, expected,
                "case_sensitive={} sentence={:?}",
                case_sensitive, case.sentence
            );
        }
    }
}

#[test]
fn replace_cases() {
    for case in load::<ReplaceCase>(REPLACE_CASES) {
        for (case_sensitive, expected_labels, expected_text) in [
            (false, &case.keywords, &case.expected),
            (true, &case.keywords_case_sensitive, &case.expected_case_sensitive),
        ] {
            let processor = labelled_processor(case_sensitive, &case.keyword_dict);
            let (text, found) = processor.replace_keywords(&case.sentence, MatchOptions::default());
            let labels: Vec<String> = found.iter().map(|m| m.label.clone()).collect();

            assert_eq!(&labels, expected_labels, "{}", case.explanation);
            assert_eq!(&text, expected_text, "{}", case.explanation);

            // Reported offsets point into the original sentence
            let original: Vec<char> = case.sentence.chars().collect();
            let extracted = processor.extract_keywords(&case.sentence, MatchOptions::default());
            assert_eq!(found, extracted, "{}", case.explanation);
            for m in &found {
                assert!(m.end <= original.len());
            }
        }
    }
}

#[test]
fn mask_cases() {
    for case in load::<MaskCase>(MASK_CASES) {
        for (case_sensitive, expected) in [
            (false, &case.expected),
            (true, &case.expected_case_sensitive),
        ] {
            let processor = KeywordProcessor::new();
            processor.set_case_sensitive(case_sensitive);
            for keywords in case.keyword_dict.values() {
                processor.add_keywords(keywords);
            }
            let masked = processor.mask_keywords(&case.sentence, mask_with_x, MatchOptions::default());
            assert_eq!(&masked, expected, "{}", case.explanation);
        }
    }
}

#[test]
fn replace_reports_original_coordinates() {
    let processor = KeywordProcessor::new();
    processor.add_keyword_with_label("ny", "New York City");
    processor.add_keyword_with_label("los angeles", "LA");

    let sentence = "NY, Los Angeles, NY";
    let (text, found) = processor.replace_keywords(sentence, MatchOptions::default());
    assert_eq!(text, "New York City, LA, New York City");

    let spans: Vec<(usize, usize)> = found.iter().map(|m| (m.start, m.end)).collect();
    assert_eq!(spans, vec![(0, 2), (4, 15), (17, 19)]);

    let original: Vec<char> = sentence.chars().collect();
    let matched: Vec<String> = found
        .iter()
        .map(|m| original[m.start..m.end].iter().collect())
        .collect();
    assert_eq!(matched, vec!["NY", "Los Angeles", "NY"]);
}
