//! Line splitting

/// Split buffer text into lines on `\n`
///
/// Empty lines are kept, including the trailing one after a final
/// newline. Empty input yields a single empty line. `\r` is left in
/// the line text.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}
