// src/core/cleaner.rs
//! Line cleaning: strips LaTeX markup from a single line so that only prose
//! is left for counting.
//!
//! [`clean_line`] runs four stages in a fixed order:
//!
//! 1. [`strip_environments`] - `\begin{..}` / `\end{..}` delimiters
//! 2. [`strip_comment`] - `%` to end of line
//! 3. [`unwrap_decorations`] - `\cmd{text}` becomes `text`
//! 4. [`strip_commands`] - any bare `\cmd` left over
//!
//! The order matters. A `%` inside an environment name is removed together
//! with the delimiter, and commands written after a `%` are gone before the
//! command stages run.
//!
//! Every line is cleaned on its own. Environments and comment blocks that
//! span several lines are not tracked.
use regex::Regex;
use std::sync::LazyLock;

static ENV_BEGIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\begin\{.*?\}").expect("valid environment begin regex"));
static ENV_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\end\{.*?\}").expect("valid environment end regex"));
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%.*$").expect("valid comment regex"));
// Non-greedy: the first `}` closes the argument, so nested braces are cut short.
static DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+\{(.*?)\}").expect("valid decoration regex"));
static COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+").expect("valid command regex"));

/// Removes `\begin{name}` and `\end{name}` tokens. Text between them stays.
#[inline]
#[must_use]
pub fn strip_environments(line: &str) -> String {
    let line = ENV_BEGIN.replace_all(line, "");
    ENV_END.replace_all(&line, "").into_owned()
}

/// Truncates the line at its first `%`. `\%` is not treated as an escape.
#[inline]
#[must_use]
pub fn strip_comment(line: &str) -> String {
    COMMENT.replace(line, "").into_owned()
}

/// Replaces `\name{content}` with `content`.
#[inline]
#[must_use]
pub fn unwrap_decorations(line: &str) -> String {
    DECORATION.replace_all(line, "${1}").into_owned()
}

/// Removes bare `\name` command tokens.
#[inline]
#[must_use]
pub fn strip_commands(line: &str) -> String {
    COMMAND.replace_all(line, "").into_owned()
}

/// Runs the whole cleaning pipeline over one line of LaTeX source.
///
/// # Examples
///
/// ```
/// use ldc::core::cleaner::clean_line;
///
/// assert_eq!(clean_line(r"\textbf{加油} % TODO"), "加油 ");
/// assert_eq!(clean_line(r"\begin{itemize}\item one"), " one");
/// ```
#[inline]
#[must_use]
pub fn clean_line(line: &str) -> String {
    let line = strip_environments(line);
    let line = strip_comment(&line);
    let line = unwrap_decorations(&line);
    strip_commands(&line)
}
