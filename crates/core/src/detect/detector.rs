//! Multi-tier confidence scoring over the fixed rule tables

use tracing::debug;

use super::rules::{RULES, definitive_match};
use crate::error::{Error, Result};
use crate::types::{DetectionResult, Language};

/// Confidence assigned to a tier-1 definitive marker hit
const DEFINITIVE_CONFIDENCE: f64 = 0.98;

/// Additive score per weak keyword occurrence, and its cap
const WEAK_WEIGHT: f64 = 0.08;
const WEAK_CAP: f64 = 0.35;

/// Scores `code` against every supported language.
///
/// The result always has one entry per supported language, sorted by
/// confidence descending with ties broken by language identifier ascending.
/// Blank input yields an all-zero vector in enumeration order. Pure: no I/O,
/// no shared mutable state.
pub fn detect(code: &str) -> Vec<DetectionResult> {
    if code.trim().is_empty() {
        return Language::ALL
            .iter()
            .map(|&language| DetectionResult::new(language, 0.0))
            .collect();
    }

    // Tier 1: a definitive marker short-circuits all further scoring
    if let Some(winner) = definitive_match(code) {
        debug!("definitive marker resolved language: {}", winner);
        let mut results: Vec<DetectionResult> = Language::ALL
            .iter()
            .map(|&language| {
                let confidence = if language == winner {
                    DEFINITIVE_CONFIDENCE
                } else {
                    0.0
                };
                DetectionResult::new(language, confidence)
            })
            .collect();
        sort_results(&mut results);
        return results;
    }

    let mut results: Vec<DetectionResult> = RULES
        .iter()
        .map(|rules| {
            let strong = strong_score(rules.strong.iter().filter(|re| re.is_match(code)).count());
            let weak = weak_score(code, rules.weak);
            let combined = (strong + weak).min(1.0);
            debug!(
                "scored {}: strong={:.2} weak={:.2} combined={:.2}",
                rules.language, strong, weak, combined
            );
            DetectionResult::new(rules.language, combined)
        })
        .collect();

    sort_results(&mut results);
    results
}

/// Returns the highest-confidence result for `code`
pub fn detect_top(code: &str) -> DetectionResult {
    detect(code)
        .into_iter()
        .next()
        .expect("detect always covers the supported-language set")
}

/// Returns the `n` highest-confidence results for `code`.
///
/// `n` of zero is a precondition failure; `n` beyond the language count is
/// clamped to the full result set.
pub fn detect_top_n(code: &str, n: usize) -> Result<Vec<DetectionResult>> {
    if n == 0 {
        return Err(Error::InvalidArgument(
            "top-n count must be at least 1".to_string(),
        ));
    }
    let mut results = detect(code);
    results.truncate(n);
    Ok(results)
}

/// Step function mapping strong-feature hit counts to a score; 0.92 is a hard
/// cap, never exceeded
fn strong_score(matches: usize) -> f64 {
    match matches {
        0 => 0.0,
        1 => 0.25,
        2 => 0.55,
        3 => 0.85,
        _ => 0.92,
    }
}

/// Case-insensitive substring occurrence count, capped
fn weak_score(code: &str, keywords: &[&str]) -> f64 {
    let haystack = code.to_lowercase();
    let count: usize = keywords
        .iter()
        .map(|keyword| haystack.matches(keyword).count())
        .sum();
    (count as f64 * WEAK_WEIGHT).min(WEAK_CAP)
}

fn sort_results(results: &mut [DetectionResult]) {
    results.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| a.language.as_str().cmp(b.language.as_str()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_scores_zero_in_enumeration_order() {
        for code in ["", "   ", "\n\t\n"] {
            let results = detect(code);
            assert_eq!(results.len(), Language::ALL.len());
            for (result, expected) in results.iter().zip(Language::ALL) {
                assert_eq!(result.language, expected);
                assert_eq!(result.confidence, 0.0);
            }
        }
    }

    #[test]
    fn test_results_cover_language_set_and_stay_bounded() {
        let samples = [
            "def foo():\n    return 1\n",
            "const x = () => console.log(x);",
            "random words with no syntax at all",
            "func main() { fmt.Println(1) }",
        ];
        for code in samples {
            let results = detect(code);
            assert_eq!(results.len(), Language::ALL.len());
            for result in &results {
                assert!((0.0..=1.0).contains(&result.confidence));
            }
            for pair in results.windows(2) {
                assert!(pair[0].confidence >= pair[1].confidence);
            }
        }
    }

    #[test]
    fn test_definitive_marker_short_circuits() {
        // Plenty of python-looking text after the batch marker; tier 1 must win
        let code = "@echo off\ndef foo():\n    import os\n    print(os)\n";
        let results = detect(code);
        assert_eq!(results[0].language, Language::Batch);
        assert_eq!(results[0].confidence, 0.98);
        for other in &results[1..] {
            assert_eq!(other.confidence, 0.0);
        }
    }

    #[test]
    fn test_shebang_wins_over_features() {
        let code = "#!/usr/bin/env python3\nconsole.log('not js');\n";
        let top = detect_top(code);
        assert_eq!(top.language, Language::Python);
        assert_eq!(top.confidence, 0.98);
    }

    #[test]
    fn test_strong_feature_step_function() {
        assert_eq!(strong_score(0), 0.0);
        assert_eq!(strong_score(1), 0.25);
        assert_eq!(strong_score(2), 0.55);
        assert_eq!(strong_score(3), 0.85);
        assert_eq!(strong_score(4), 0.92);
        assert_eq!(strong_score(17), 0.92);
    }

    #[test]
    fn test_weak_score_caps_at_035() {
        let code = "def def def def def def def def def def";
        let score = weak_score(code, &["def"]);
        assert_eq!(score, WEAK_CAP);
        assert_eq!(weak_score("one def here", &["def"]), WEAK_WEIGHT);
        assert_eq!(weak_score("DEF also counts", &["def"]), WEAK_WEIGHT);
    }

    #[test]
    fn test_python_snippet_ranks_python_first() {
        let code = "import os\n\ndef main():\n    if __name__ == '__main__':\n        print(os.getcwd())\n";
        assert_eq!(detect_top(code).language, Language::Python);
    }

    #[test]
    fn test_javascript_snippet_ranks_javascript_first() {
        let code = "const add = (a, b) => a + b;\nconsole.log(add(1, 2));\nlet x = 3;\n";
        assert_eq!(detect_top(code).language, Language::Javascript);
    }

    #[test]
    fn test_powershell_snippet_ranks_powershell_first() {
        let code = "param($Name)\n$greeting = \"hi\"\nWrite-Host $greeting\nforeach ($f in $files) {}\n";
        assert_eq!(detect_top(code).language, Language::Powershell);
    }

    #[test]
    fn test_ties_break_by_language_id_ascending() {
        let results = detect("plain prose, nothing matches here either way");
        let zero_ids: Vec<&str> = results
            .iter()
            .filter(|r| r.confidence == 0.0)
            .map(|r| r.language.as_str())
            .collect();
        let mut sorted = zero_ids.clone();
        sorted.sort();
        assert_eq!(zero_ids, sorted);
    }

    #[test]
    fn test_top_n_validates_count() {
        assert!(matches!(
            detect_top_n("def x():", 0),
            Err(Error::InvalidArgument(_))
        ));
        let results = detect_top_n("def x():", 1000).unwrap();
        assert_eq!(results.len(), Language::ALL.len());
        assert_eq!(detect_top_n("def x():", 2).unwrap().len(), 2);
    }
}
