//! Keys accepted by the tree.
//!
//! Anything that can present itself as a byte slice can be used as a key. Strings are stored
//! as their UTF-8 bytes with no terminator, since the tree can hold keys that are prefixes of
//! other keys.

pub mod slice_key;
pub mod vector_key;

pub use slice_key::SliceKey;
pub use vector_key::VectorKey;

pub trait Key {
    fn as_slice(&self) -> &[u8];

    fn at(&self, pos: usize) -> u8 {
        self.as_slice()[pos]
    }

    fn length(&self) -> usize {
        self.as_slice().len()
    }

    fn partial_after(&self, pos: usize) -> &[u8] {
        &self.as_slice()[pos..]
    }
}

impl Key for [u8] {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> Key for [u8; N] {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl Key for Vec<u8> {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl Key for str {
    fn as_slice(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Key for String {
    fn as_slice(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use crate::keys::Key;

    #[test]
    fn test_primitive_keys() {
        assert_eq!(b"abc".as_slice(), Key::as_slice(b"abc"));
        assert_eq!(Key::as_slice("abc"), b"abc");
        assert_eq!(Key::as_slice(&String::from("abc")), b"abc");
        assert_eq!(Key::as_slice(&vec![1u8, 2]), &[1, 2]);
        assert_eq!("abc".at(1), b'b');
        assert_eq!("abc".length(), 3);
        assert_eq!("abc".partial_after(1), b"bc");
    }
}
