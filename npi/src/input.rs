use std::borrow::Cow;

/// A candidate identifier, supplied either as text or as a native integer.
///
/// Both variants are normalized to the same canonical decimal text before any
/// check runs, so `"1215290382"` and `1215290382` always validate identically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NpiInput<'a> {
    Text(Cow<'a, str>),
    Integer(i128),
}

impl NpiInput<'_> {
    /// The plain decimal text of the input. Integers render without padding or
    /// separators, negative integers keep their leading `-`.
    pub fn canonical_text(&self) -> Cow<'_, str> {
        match self {
            NpiInput::Text(text) => Cow::Borrowed(text.as_ref()),
            NpiInput::Integer(value) => Cow::Owned(value.to_string()),
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, NpiInput::Integer(value) if *value < 0)
    }
}

impl<'a> From<&'a str> for NpiInput<'a> {
    fn from(text: &'a str) -> Self {
        NpiInput::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for NpiInput<'a> {
    fn from(text: &'a String) -> Self {
        NpiInput::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for NpiInput<'_> {
    fn from(text: String) -> Self {
        NpiInput::Text(Cow::Owned(text))
    }
}

macro_rules! impl_from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for NpiInput<'_> {
                fn from(value: $int) -> Self {
                    NpiInput::Integer(i128::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for NpiInput<'_> {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits wide on every supported target
        NpiInput::Integer(value as i128)
    }
}

impl From<usize> for NpiInput<'_> {
    fn from(value: usize) -> Self {
        NpiInput::Integer(value as i128)
    }
}

impl From<u128> for NpiInput<'_> {
    fn from(value: u128) -> Self {
        // Anything above i128::MAX is far too long to be an NPI, but it still
        // has to go through the regular checks.
        match i128::try_from(value) {
            Ok(value) => NpiInput::Integer(value),
            Err(_) => NpiInput::Text(Cow::Owned(value.to_string())),
        }
    }
}
