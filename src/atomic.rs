use std::fmt;

/// Trait for atomic elements that can be used in parsing
///
/// An element only needs equality to be matched by literals; ordered
/// terminals such as [`range`](crate::element::range) additionally require
/// `PartialOrd`. The provided methods drive error messages and line-aware
/// diagnostics.
pub trait Atomic: Copy + PartialEq + fmt::Debug {
    /// Whether this element terminates a line for diagnostic purposes
    fn is_newline(&self) -> bool {
        false
    }

    /// Render a single element for an error message
    fn describe(&self) -> String {
        format!("{:?}", self)
    }

    /// Render a slice of elements for an error message or a context line
    fn describe_slice(slice: &[Self]) -> String {
        format!("{:?}", slice)
    }
}

impl Atomic for u8 {
    fn is_newline(&self) -> bool {
        *self == b'\n'
    }

    fn describe(&self) -> String {
        if self.is_ascii_graphic() || *self == b' ' {
            format!("'{}'", *self as char)
        } else {
            format!("0x{:02X}", self)
        }
    }

    fn describe_slice(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).into_owned()
    }
}

impl Atomic for char {
    fn is_newline(&self) -> bool {
        *self == '\n'
    }

    fn describe(&self) -> String {
        format!("{:?}", self)
    }

    fn describe_slice(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}

impl Atomic for u16 {}
impl Atomic for u32 {}
impl Atomic for u64 {}
impl Atomic for i32 {}
impl Atomic for i64 {}
