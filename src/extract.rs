use regex::Regex;
use std::sync::LazyLock;

static CPP_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```cpp\n(.*?)```").unwrap());

/// Split a model response into improved code and explanation.
///
/// The first ```cpp fenced block becomes the code, trimmed; the explanation
/// is the response with every such block removed, trimmed. A response with
/// no fenced block is a valid outcome, not an error: the code comes back
/// empty and the explanation is the response unchanged.
pub fn extract_code_and_explanation(response: &str) -> (String, String) {
    match CPP_BLOCK.captures(response) {
        Some(caps) => {
            let code = caps[1].trim().to_string();
            let explanation = CPP_BLOCK.replace_all(response, "").trim().to_string();
            (code, explanation)
        }
        None => (String::new(), response.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_first_block_and_strips_it_from_explanation() {
        let response = "prefix ```cpp\nCODE\n``` suffix";
        let (code, explanation) = extract_code_and_explanation(response);
        assert_eq!(code, "CODE");
        assert!(explanation.contains("prefix"));
        assert!(explanation.contains("suffix"));
        assert!(!explanation.contains("CODE"));
        assert!(!explanation.contains("```"));
    }

    #[test]
    fn test_no_block_returns_response_unchanged() {
        let response = "The code looks fine as written.";
        let (code, explanation) = extract_code_and_explanation(response);
        assert_eq!(code, "");
        assert_eq!(explanation, response);
    }

    #[test]
    fn test_multiple_blocks_all_removed_from_explanation() {
        let response = "first ```cpp\nint a;\n``` middle ```cpp\nint b;\n``` last";
        let (code, explanation) = extract_code_and_explanation(response);
        assert_eq!(code, "int a;");
        assert!(explanation.contains("first"));
        assert!(explanation.contains("middle"));
        assert!(explanation.contains("last"));
        assert!(!explanation.contains("int b;"));
    }

    #[test]
    fn test_untagged_block_is_not_extracted() {
        let response = "see ```\nint a;\n``` above";
        let (code, explanation) = extract_code_and_explanation(response);
        assert_eq!(code, "");
        assert_eq!(explanation, response);
    }

    #[test]
    fn test_multiline_code_preserved() {
        let response = "```cpp\nint a = 1;\nint b = 2;\n```";
        let (code, explanation) = extract_code_and_explanation(response);
        assert_eq!(code, "int a = 1;\nint b = 2;");
        assert_eq!(explanation, "");
    }
}
