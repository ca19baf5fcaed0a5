// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter, Result},
          ops::Deref};

/// A Unicode scalar value in `[0, 0x10FFFF]`, decoded from one or more code units.
///
/// Unlike [`char`] this can hold a lone surrogate (`0xD800..=0xDFFF`), since an unpaired
/// surrogate in UTF-16 input decodes to its raw 16 bit value instead of failing.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(pub u32);

pub fn code_point(arg_code_point: impl Into<CodePoint>) -> CodePoint {
    arg_code_point.into()
}

impl CodePoint {
    pub const MAX: CodePoint = CodePoint(0x10_FFFF);

    #[must_use]
    pub fn as_u32(&self) -> u32 { self.0 }

    /// Returns `None` for surrogates, since they are not valid [`char`]s.
    #[must_use]
    pub fn as_char(&self) -> Option<char> { char::from_u32(self.0) }
}

impl Deref for CodePoint {
    type Target = u32;
    fn deref(&self) -> &Self::Target { &self.0 }
}

/// Formats as `U+XXXX`, which is how code points are written in the Unicode data
/// files.
impl Debug for CodePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "U+{:04X}", self.0) }
}

mod conversions {
    use super::CodePoint;

    impl From<u32> for CodePoint {
        fn from(it: u32) -> Self { Self(it) }
    }

    impl From<u16> for CodePoint {
        fn from(it: u16) -> Self { Self(u32::from(it)) }
    }

    impl From<char> for CodePoint {
        fn from(it: char) -> Self { Self(u32::from(it)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(code_point('A'), CodePoint(0x41));
        assert_eq!(code_point(0xD800_u16), CodePoint(0xD800));
        assert_eq!(code_point(0x1_F1EF_u32).as_char(), Some('🇯'));
        assert_eq!(code_point(0xDC00_u16).as_char(), None);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", code_point('\n')), "U+000A");
        assert_eq!(format!("{:?}", code_point(0x1_F3FB_u32)), "U+1F3FB");
    }
}
