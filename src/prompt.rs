//! Prompt composition for the completion service. Pure template
//! substitution; no control flow.

/// System instruction: reviewer persona, the static-analysis report, and the
/// expected response format.
pub fn system_prompt(analysis_text: &str) -> String {
    format!(
        "You are a C++ expert specializing in game development.\n\
         Your task is to improve the provided code based on the user's request and the static analysis results.\n\
         Focus on performance, readability, and best practices for game development.\n\n\
         Here's the static analysis of the code:\n\
         {}\n\n\
         Provide your response in the following format:\n\
         1. The complete improved code in a ```cpp code block\n\
         2. A detailed explanation of all changes made, organized by category (performance, memory management, etc.)\n\
         3. Highlight the most important improvements first\n\n\
         Make sure your improvements address both the user's specific request and the issues identified in the analysis.\n\
         For game development, prioritize performance optimizations and memory management improvements.",
        analysis_text
    )
}

/// User instruction: the original code in a fenced block, then the free-text
/// improvement request.
pub fn user_prompt(code: &str, request: &str) -> String {
    format!(
        "Here is my C++ game development code:\n\n```cpp\n{}\n```\n\nI want to improve it by: {}",
        code, request
    )
}
