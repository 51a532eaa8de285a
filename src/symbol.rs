use std::fmt;

/// Trait for the elements of an input sequence
///
/// Classification is ASCII-only: symbols outside the ASCII range never
/// belong to the whitespace, word or digit classes.
pub trait Symbol: Copy + PartialEq + PartialOrd + fmt::Debug {
    /// The ASCII byte this symbol stands for, if any
    fn to_ascii(self) -> Option<u8>;

    /// Render a slice of symbols as text
    fn slice_to_string(slice: &[Self]) -> String;

    fn is_whitespace(self) -> bool {
        matches!(self.to_ascii(), Some(b' ' | b'\t' | b'\r' | b'\n'))
    }

    fn is_word(self) -> bool {
        matches!(self.to_ascii(), Some(b) if b.is_ascii_alphanumeric() || b == b'_')
    }

    fn is_digit(self) -> bool {
        matches!(self.to_ascii(), Some(b) if b.is_ascii_digit())
    }
}

impl Symbol for u8 {
    fn to_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self)
    }

    fn slice_to_string(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).into_owned()
    }
}

impl Symbol for char {
    fn to_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self as u8)
    }

    fn slice_to_string(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}
