//! Chapter heading matchers.
//!
//! Each pattern recognizes a marker at the very start of a line and reports
//! how many bytes of the line the marker covers. Anything after the marker on
//! the same line is body text.

/// A recognized chapter heading convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingPattern {
    /// `Chapter 12`
    Chapter,
    /// `CHAPTER 12`
    ChapterUpper,
    /// `12.`
    Numbered,
    /// `Part 3`
    Part,
}

impl HeadingPattern {
    /// The conventions recognized by default.
    pub const DEFAULT: [HeadingPattern; 4] = [
        HeadingPattern::Chapter,
        HeadingPattern::ChapterUpper,
        HeadingPattern::Numbered,
        HeadingPattern::Part,
    ];

    /// Match this pattern at the start of `line`.
    ///
    /// Returns the byte length of the marker, or `None` if the line does not
    /// open with this heading.
    ///
    /// ```
    /// use folio::segment::HeadingPattern;
    ///
    /// assert_eq!(HeadingPattern::Chapter.match_prefix("Chapter 12: Rain"), Some(10));
    /// assert_eq!(HeadingPattern::Numbered.match_prefix("3. Snow"), Some(2));
    /// assert_eq!(HeadingPattern::Part.match_prefix("Partial"), None);
    /// ```
    pub fn match_prefix(self, line: &str) -> Option<usize> {
        match self {
            HeadingPattern::Chapter => keyword_number(line, "Chapter "),
            HeadingPattern::ChapterUpper => keyword_number(line, "CHAPTER "),
            HeadingPattern::Part => keyword_number(line, "Part "),
            HeadingPattern::Numbered => {
                let digits = digit_run(line);
                if digits > 0 && line.as_bytes().get(digits) == Some(&b'.') {
                    Some(digits + 1)
                } else {
                    None
                }
            }
        }
    }
}

/// `keyword` followed by at least one ASCII digit; the digit run is greedy.
fn keyword_number(line: &str, keyword: &str) -> Option<usize> {
    let rest = line.strip_prefix(keyword)?;
    match digit_run(rest) {
        0 => None,
        n => Some(keyword.len() + n),
    }
}

fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_forms() {
        assert_eq!(HeadingPattern::Chapter.match_prefix("Chapter 1"), Some(9));
        assert_eq!(HeadingPattern::Chapter.match_prefix("Chapter 104 The End"), Some(11));
        assert_eq!(HeadingPattern::ChapterUpper.match_prefix("CHAPTER 7"), Some(9));
        assert_eq!(HeadingPattern::Part.match_prefix("Part 2"), Some(6));
    }

    #[test]
    fn test_case_is_literal() {
        assert_eq!(HeadingPattern::Chapter.match_prefix("chapter 1"), None);
        assert_eq!(HeadingPattern::Chapter.match_prefix("CHAPTER 1"), None);
        assert_eq!(HeadingPattern::ChapterUpper.match_prefix("Chapter 1"), None);
        assert_eq!(HeadingPattern::Part.match_prefix("PART 1"), None);
    }

    #[test]
    fn test_requires_single_space_and_digits() {
        assert_eq!(HeadingPattern::Chapter.match_prefix("Chapter  1"), None);
        assert_eq!(HeadingPattern::Chapter.match_prefix("Chapter One"), None);
        assert_eq!(HeadingPattern::Chapter.match_prefix("Chapter"), None);
        assert_eq!(HeadingPattern::Chapter.match_prefix(" Chapter 1"), None);
    }

    #[test]
    fn test_numbered() {
        assert_eq!(HeadingPattern::Numbered.match_prefix("1."), Some(2));
        assert_eq!(HeadingPattern::Numbered.match_prefix("42. Answer"), Some(3));
        assert_eq!(HeadingPattern::Numbered.match_prefix("42 Answer"), None);
        assert_eq!(HeadingPattern::Numbered.match_prefix(".5"), None);
        assert_eq!(HeadingPattern::Numbered.match_prefix(""), None);
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert_eq!(HeadingPattern::Chapter.match_prefix("Chapter ٣"), None);
        assert_eq!(HeadingPattern::Numbered.match_prefix("٣."), None);
    }
}
