//! Pure text transformations.

/// A transformation applied to file content before it is written back out.
///
/// All variants are pure and infallible; empty input always yields empty
/// output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Transformation {
    /// Map every character to its uppercase form.
    #[default]
    Uppercase,
    /// Map every character to its lowercase form.
    Lowercase,
    /// Capitalize the first character of each line, lowercasing the rest of
    /// that line.
    CapitalizeLines,
    /// Reverse the order of lines; line content is untouched.
    ReverseLines,
}

impl Transformation {
    /// Parses a menu choice ("1" through "4"). Anything unrecognized falls
    /// back to the default, [`Transformation::Uppercase`].
    #[must_use]
    pub fn from_choice(input: &str) -> Self {
        match input.trim() {
            "2" => Self::Lowercase,
            "3" => Self::CapitalizeLines,
            "4" => Self::ReverseLines,
            _ => Self::Uppercase,
        }
    }

    /// Stable name for reporting which transformation was applied.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::CapitalizeLines => "capitalize_lines",
            Self::ReverseLines => "reverse_lines",
        }
    }

    /// Applies the transformation to `content`, returning the new text.
    #[must_use]
    pub fn apply(self, content: &str) -> String {
        match self {
            Self::Uppercase => content.to_uppercase(),
            Self::Lowercase => content.to_lowercase(),
            Self::CapitalizeLines => {
                content.split('\n').map(capitalize).collect::<Vec<_>>().join("\n")
            }
            Self::ReverseLines => {
                content.split('\n').rev().collect::<Vec<_>>().join("\n")
            }
        }
    }
}

/// Uppercases the first character and lowercases the remainder.
fn capitalize(line: &str) -> String {
    let mut chars = line.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
