//! Per-line pattern checks backing the analyzer.
//!
//! All checks are shallow string/regex heuristics over raw source lines;
//! comments and string literals are not stripped, so false positives are
//! possible and accepted.

use regex::Regex;
use std::sync::LazyLock;

static RAW_POINTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\s*\*\s*\w+\s*=").unwrap());

static C_STYLE_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\s+\w+\[\d+\]").unwrap());

static FLOAT_COMPARISON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(==|!=)\s*\d*\.\d+f?").unwrap());

static FLOAT_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.]\d+\.\d+f?").unwrap());

static CONST_FLOAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"const\s+float").unwrap());

static PRIMITIVE_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(int|float|double|bool|char)\s+\w+;").unwrap());

const PRIMITIVE_TYPES: [&str; 5] = ["int", "float", "double", "bool", "char"];

/// `type * name =` with no namespace qualifier or smart-pointer mention
pub(super) fn raw_pointer(line: &str) -> bool {
    RAW_POINTER.is_match(line)
        && !line.contains("std::")
        && !line.contains("shared_ptr")
        && !line.contains("unique_ptr")
}

/// `type name[N]`, excluding char arrays that may back C strings
pub(super) fn c_style_array(line: &str) -> bool {
    C_STYLE_ARRAY.is_match(line) && !line.contains("char")
}

/// Index-based iteration bounded by a container size query
pub(super) fn index_loop(line: &str) -> bool {
    line.contains("for") && line.contains("; i < ") && line.contains(".size()")
}

pub(super) fn sqrt_call(line: &str) -> bool {
    line.contains("sqrt")
}

/// String type mention, or concatenation next to a quoted literal
pub(super) fn string_heavy(line: &str) -> bool {
    line.contains("std::string") || (line.contains("+=") && line.contains('"'))
}

/// `==` or `!=` directly against a decimal literal
pub(super) fn float_comparison(line: &str) -> bool {
    FLOAT_COMPARISON.is_match(line)
}

/// Decimal literal not preceded by a dot, outside `const float` declarations
/// and preprocessor defines
pub(super) fn magic_number(line: &str) -> bool {
    FLOAT_LITERAL.is_match(line) && !CONST_FLOAT.is_match(line) && !line.contains("#define")
}

/// Primitive-type tokens declared without an initializer on this line, in
/// fixed type order. Empty when the line assigns or declares a compound type.
pub(super) fn uninitialized_primitives(line: &str) -> Vec<&'static str> {
    if line.contains('=')
        || line.contains("class")
        || line.contains("struct")
        || line.contains("enum")
    {
        return Vec::new();
    }
    let hits: Vec<&str> = PRIMITIVE_DECL
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();
    PRIMITIVE_TYPES
        .iter()
        .copied()
        .filter(|ty| hits.contains(ty))
        .collect()
}

pub(super) fn pointer_member_access(line: &str) -> bool {
    line.contains("->")
}
