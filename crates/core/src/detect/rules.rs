//! Fixed per-language detection rule tables
//!
//! These tables are reproducible configuration data, not tunable logic: the
//! detector's behavior is fully determined by them plus the tier constants in
//! `detector.rs`. All tables are process-wide immutable statics.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Language;

/// Interpreter basenames recognized on a `#!` first line, longest-first so
/// that `bash` never falls through to `sh`
pub(crate) const SHEBANG_INTERPRETERS: &[(&str, Language)] = &[
    ("powershell", Language::Powershell),
    ("python", Language::Python),
    ("node", Language::Javascript),
    ("pwsh", Language::Powershell),
    ("bash", Language::Bash),
    ("zsh", Language::Bash),
    ("sh", Language::Bash),
];

/// Per-language detection rules: a definitive predicate, the strong-feature
/// regex set, and the weak-feature keyword list
pub(crate) struct DetectionRules {
    pub language: Language,
    pub definitive: Option<fn(&str) -> bool>,
    pub strong: Vec<Regex>,
    pub weak: &'static [&'static str],
}

// Patterns are fixed at compile time; a failure here is a programming error.
fn rx(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static detection pattern")
}

/// Batch files announce themselves on the first non-blank line
fn batch_definitive(code: &str) -> bool {
    let Some(first) = code.lines().find(|l| !l.trim().is_empty()) else {
        return false;
    };
    let first = first.trim_start().to_lowercase();
    first.starts_with("@echo off") || first.starts_with("rem ")
}

/// A `package main` declaration on its own line is unmistakably Go
fn go_definitive(code: &str) -> bool {
    code.lines().any(|l| l.trim() == "package main")
}

pub(crate) static RULES: LazyLock<Vec<DetectionRules>> = LazyLock::new(|| {
    vec![
        DetectionRules {
            language: Language::Python,
            definitive: None,
            strong: vec![
                rx(r"(?m)^\s*def\s+\w+\s*\([^)]*\)\s*:"),
                rx(r"(?m)^\s*class\s+\w+(\([^)]*\))?\s*:"),
                rx(r"(?m)^\s*import\s+\w+"),
                rx(r"(?m)^\s*from\s+[\w.]+\s+import\s"),
                rx(r"(?m)^\s*(el)?if\s+.+:\s*$"),
                rx(r#"\bif\s+__name__\s*==\s*['"]__main__['"]"#),
            ],
            weak: &[
                "def", "import", "self", "elif", "lambda", "none", "pass", "yield", "print",
                "range",
            ],
        },
        DetectionRules {
            language: Language::Javascript,
            definitive: None,
            strong: vec![
                rx(r"\bfunction\s+\w+\s*\("),
                rx(r"\b(const|let)\s+\w+\s*="),
                rx(r"=>"),
                rx(r"\bconsole\.(log|error|warn|info)\s*\("),
                rx(r#"\brequire\s*\(\s*['"]"#),
                rx(r"===|!=="),
            ],
            weak: &[
                "function",
                "var",
                "let",
                "const",
                "return",
                "typeof",
                "null",
                "undefined",
                "async",
                "await",
            ],
        },
        DetectionRules {
            language: Language::Batch,
            definitive: Some(batch_definitive),
            strong: vec![
                rx(r"(?mi)^\s*set\s+\w+="),
                rx(r"(?mi)^\s*if\s+(not\s+)?(exist|defined|errorlevel)\b"),
                rx(r"%\w+%"),
                rx(r"(?mi)^\s*goto\s+:?\w+"),
                rx(r"(?m)^\s*:\w+\s*$"),
                rx(r"(?mi)^\s*echo[\s.]"),
            ],
            weak: &[
                "echo",
                "set",
                "goto",
                "call",
                "exit",
                "errorlevel",
                "pause",
                "exist",
                "setlocal",
                "cls",
            ],
        },
        DetectionRules {
            language: Language::Powershell,
            definitive: None,
            strong: vec![
                rx(r"\$\w+\s*="),
                rx(r"\b(Write-Host|Write-Output|Get-ChildItem|Set-Location|Get-Content)\b"),
                rx(r"(?m)^\s*param\s*\("),
                rx(r"\bforeach\s*\(\s*\$\w+\s+in\b"),
                rx(r"\s-(eq|ne|gt|lt|ge|le)\b"),
                rx(r"\[(string|int|bool|array|switch)\]"),
            ],
            weak: &[
                "param", "function", "foreach", "write-", "get-", "set-", "process", "begin",
                "end", "module",
            ],
        },
        DetectionRules {
            language: Language::Bash,
            definitive: None,
            strong: vec![
                rx(r"(?m)^\s*\w+\s*\(\)\s*\{"),
                rx(r"(?m)^\s*(local|export)\s+\w+"),
                rx(r"\[\[\s.+\s\]\]"),
                rx(r"\$\{\w+[^}]*\}"),
                rx(r"(?m)^\s*(fi|esac|done)\s*$"),
                rx(r"\bthen\b"),
            ],
            weak: &[
                "echo", "then", "else", "done", "local", "export", "source", "case", "esac",
                "trap",
            ],
        },
        DetectionRules {
            language: Language::Go,
            definitive: Some(go_definitive),
            strong: vec![
                rx(r"(?m)^func\s+\w+\s*\("),
                rx(r":="),
                rx(r"\bfmt\.\w+\("),
                rx(r"(?m)^import\s+\("),
                rx(r"(?m)^\s*(var|const)\s+\w+\s+\[?\]?\w+"),
                rx(r"\b(defer|go)\s+\w+"),
            ],
            weak: &[
                "func",
                "package",
                "import",
                "defer",
                "chan",
                "struct",
                "interface",
                "range",
                "nil",
                "err",
            ],
        },
    ]
});

/// Tier-1 resolution: shebang lookup first, then per-language predicates
pub(crate) fn definitive_match(code: &str) -> Option<Language> {
    if let Some(lang) = shebang_language(code) {
        return Some(lang);
    }
    RULES
        .iter()
        .find(|rules| rules.definitive.is_some_and(|pred| pred(code)))
        .map(|rules| rules.language)
}

fn shebang_language(code: &str) -> Option<Language> {
    let first = code.lines().next()?.trim_start();
    let rest = first.strip_prefix("#!")?;
    // `#!/usr/bin/env python3` and `#!/usr/bin/python3` both resolve through
    // the last whitespace-separated token
    let interpreter = rest.split_whitespace().last()?;
    let basename = interpreter.rsplit(['/', '\\']).next()?.to_lowercase();
    SHEBANG_INTERPRETERS
        .iter()
        .find(|(name, _)| {
            basename
                .strip_prefix(name)
                .is_some_and(|tail| tail.chars().all(|c| c.is_ascii_digit() || c == '.'))
        })
        .map(|(_, lang)| *lang)
}
