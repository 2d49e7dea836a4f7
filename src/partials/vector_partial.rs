use std::fmt::{Debug, Formatter};

use crate::partials::prefix_length_common;

/// Owned run of key bytes held by a node.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct VectorPartial {
    data: Box<[u8]>,
}

impl VectorPartial {
    pub fn from_slice(src: &[u8]) -> Self {
        Self {
            data: Box::from(src),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a partial up to `length` bytes.
    pub fn partial_before(&self, length: usize) -> Self {
        assert!(length <= self.data.len());
        VectorPartial::from_slice(&self.data[..length])
    }

    /// Returns a partial from `start` onwards.
    pub fn partial_after(&self, start: usize) -> Self {
        assert!(start <= self.data.len());
        VectorPartial::from_slice(&self.data[start..])
    }

    #[inline(always)]
    pub fn at(&self, pos: usize) -> u8 {
        self.data[pos]
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the length of the common prefix between `self` and `slice`.
    pub fn prefix_length_slice(&self, slice: &[u8]) -> usize {
        prefix_length_common(&self.data, slice)
    }

    pub fn to_slice(&self) -> &[u8] {
        &self.data
    }
}

impl From<&[u8]> for VectorPartial {
    fn from(src: &[u8]) -> Self {
        Self::from_slice(src)
    }
}

impl From<Vec<u8>> for VectorPartial {
    fn from(src: Vec<u8>) -> Self {
        Self {
            data: src.into_boxed_slice(),
        }
    }
}

impl AsRef<[u8]> for VectorPartial {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

// Printable keys show up as text, anything else as hex.
impl Debug for VectorPartial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match std::str::from_utf8(&self.data) {
            Ok(s) if s.chars().all(|c| !c.is_control()) => write!(f, "{:?}", s),
            _ => write!(f, "{}", hex_str(&self.data)),
        }
    }
}

pub(crate) fn hex_str(bytes: &[u8]) -> String {
    let s = bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", s)
}

#[cfg(test)]
mod tests {
    use crate::partials::vector_partial::{hex_str, VectorPartial};

    #[test]
    fn test_before_after() {
        let p = VectorPartial::from_slice(b"foobar");
        assert_eq!(p.partial_before(5).to_slice(), b"fooba");
        assert_eq!(p.partial_after(5).to_slice(), b"r");
        assert_eq!(p.partial_before(0).to_slice(), b"");
        assert_eq!(p.partial_after(6).to_slice(), b"");
        assert_eq!(p.at(0), b'f');
        assert_eq!(p.len(), 6);
    }

    #[test]
    fn test_prefix_length_slice() {
        let p = VectorPartial::from_slice(b"fooba");
        assert_eq!(p.prefix_length_slice(b"foobar"), 5);
        assert_eq!(p.prefix_length_slice(b"fox"), 2);
        assert_eq!(p.prefix_length_slice(b"x"), 0);
    }

    #[test]
    fn test_debug_repr() {
        assert_eq!(format!("{:?}", VectorPartial::from_slice(b"ab")), "\"ab\"");
        assert_eq!(
            format!("{:?}", VectorPartial::from_slice(&[0, 255])),
            "[00 ff]"
        );
        assert_eq!(hex_str(&[]), "[]");
    }
}
