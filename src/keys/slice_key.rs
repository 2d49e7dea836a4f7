use crate::keys::Key;

// Non-owning byte slice key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceKey<'a> {
    data: &'a [u8],
}

impl<'a> SliceKey<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl<'a> Key for SliceKey<'a> {
    fn as_slice(&self) -> &[u8] {
        self.data
    }
}

impl<'a> From<&'a [u8]> for SliceKey<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<'a> From<&'a str> for SliceKey<'a> {
    fn from(data: &'a str) -> Self {
        Self::new(data.as_bytes())
    }
}
