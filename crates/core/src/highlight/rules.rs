//! Fixed per-language lexical tables for the highlighter
//!
//! Like the detection tables, these are immutable configuration data. Every
//! delimiter and keyword is ASCII, which the analyzer's byte-offset scanning
//! relies on.

use crate::types::Language;

/// Lexical description of one language
pub(crate) struct LexicalRules {
    /// Multi-line comment delimiter pair, if the language has one
    pub block_comment: Option<(&'static str, &'static str)>,
    /// Single-line comment prefixes; a match runs to the next line break
    pub line_comments: &'static [&'static str],
    /// Multi-line string delimiter pairs (triple quotes, backtick raws)
    pub block_strings: &'static [(&'static str, &'static str)],
    /// Single-character string delimiters; spans end at the line break
    pub string_delimiters: &'static [u8],
    /// Whether a backslash escapes the following character inside strings
    pub string_escapes: bool,
    /// Whole-word keywords
    pub keywords: &'static [&'static str],
    /// Whether keyword and comment-prefix matching ignores ASCII case
    pub case_insensitive: bool,
}

pub(crate) fn rules_for(language: Language) -> &'static LexicalRules {
    match language {
        Language::Python => &PYTHON,
        Language::Javascript => &JAVASCRIPT,
        Language::Batch => &BATCH,
        Language::Powershell => &POWERSHELL,
        Language::Bash => &BASH,
        Language::Go => &GO,
    }
}

static PYTHON: LexicalRules = LexicalRules {
    block_comment: None,
    line_comments: &["#"],
    block_strings: &[("\"\"\"", "\"\"\""), ("'''", "'''")],
    string_delimiters: &[b'"', b'\''],
    string_escapes: true,
    keywords: &[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield",
    ],
    case_insensitive: false,
};

static JAVASCRIPT: LexicalRules = LexicalRules {
    block_comment: Some(("/*", "*/")),
    line_comments: &["//"],
    block_strings: &[("`", "`")],
    string_delimiters: &[b'"', b'\''],
    string_escapes: true,
    keywords: &[
        "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
        "default", "delete", "do", "else", "export", "extends", "false", "finally", "for",
        "function", "if", "import", "in", "instanceof", "let", "new", "null", "of", "return",
        "static", "super", "switch", "this", "throw", "true", "try", "typeof", "undefined", "var",
        "void", "while", "with", "yield",
    ],
    case_insensitive: false,
};

static BATCH: LexicalRules = LexicalRules {
    block_comment: None,
    line_comments: &["REM ", "::"],
    block_strings: &[],
    string_delimiters: &[b'"'],
    string_escapes: false,
    keywords: &[
        "call", "cls", "defined", "do", "echo", "else", "endlocal", "errorlevel", "exist", "exit",
        "for", "goto", "if", "in", "not", "off", "pause", "rem", "set", "setlocal", "shift",
        "start",
    ],
    case_insensitive: true,
};

static POWERSHELL: LexicalRules = LexicalRules {
    block_comment: Some(("<#", "#>")),
    line_comments: &["#"],
    block_strings: &[],
    string_delimiters: &[b'"', b'\''],
    string_escapes: true,
    keywords: &[
        "begin", "break", "catch", "class", "continue", "do", "dynamicparam", "else", "elseif",
        "end", "enum", "exit", "filter", "finally", "for", "foreach", "function", "if", "in",
        "param", "process", "return", "switch", "throw", "trap", "try", "until", "while",
    ],
    case_insensitive: true,
};

static BASH: LexicalRules = LexicalRules {
    block_comment: None,
    line_comments: &["#"],
    block_strings: &[],
    string_delimiters: &[b'"', b'\''],
    string_escapes: true,
    keywords: &[
        "break", "case", "continue", "declare", "do", "done", "elif", "else", "esac", "exit",
        "export", "fi", "for", "function", "if", "in", "local", "readonly", "return", "select",
        "shift", "source", "then", "trap", "until", "while",
    ],
    case_insensitive: false,
};

static GO: LexicalRules = LexicalRules {
    block_comment: Some(("/*", "*/")),
    line_comments: &["//"],
    block_strings: &[("`", "`")],
    string_delimiters: &[b'"', b'\''],
    string_escapes: true,
    keywords: &[
        "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
        "false", "for", "func", "go", "goto", "if", "import", "interface", "map", "nil",
        "package", "range", "return", "select", "struct", "switch", "true", "type", "var",
    ],
    case_insensitive: false,
};
