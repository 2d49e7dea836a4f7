use num_traits::{ToBytes, Unsigned};

use crate::keys::Key;

// Owns variable sized key data.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VectorKey {
    data: Box<[u8]>,
}

impl VectorKey {
    pub fn from_slice(data: &[u8]) -> Self {
        Self {
            data: Box::from(data),
        }
    }

    pub fn from_vec(data: Vec<u8>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }

    /// Big-endian encoding, so byte order matches numeric order.
    pub fn from_unsigned<T: Unsigned + ToBytes>(un: T) -> Self {
        Self::from_slice(un.to_be_bytes().as_ref())
    }

    pub fn to_be_u64(&self) -> Option<u64> {
        let bytes: [u8; 8] = self.data[..].try_into().ok()?;
        Some(u64::from_be_bytes(bytes))
    }
}

impl Key for VectorKey {
    fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl From<&str> for VectorKey {
    fn from(data: &str) -> Self {
        Self::from_slice(data.as_bytes())
    }
}

impl From<String> for VectorKey {
    fn from(data: String) -> Self {
        Self::from_vec(data.into_bytes())
    }
}

impl From<&String> for VectorKey {
    fn from(data: &String) -> Self {
        Self::from_slice(data.as_bytes())
    }
}

impl From<&[u8]> for VectorKey {
    fn from(data: &[u8]) -> Self {
        Self::from_slice(data)
    }
}

impl From<Vec<u8>> for VectorKey {
    fn from(data: Vec<u8>) -> Self {
        Self::from_vec(data)
    }
}

macro_rules! impl_from_unsigned {
    ( $($t:ty),* ) => {
    $(
    impl From< $t > for VectorKey
    {
        fn from(data: $t) -> Self {
            VectorKey::from_unsigned(data)
        }
    }
    impl From< &$t > for VectorKey
    {
        fn from(data: &$t) -> Self {
            (*data).into()
        }
    }
    ) *
    }
}
impl_from_unsigned!(u8, u16, u32, u64, usize, u128);

// Flipping the sign bit makes negative numbers sort below positive ones bytewise.
macro_rules! impl_from_signed {
    ( $t:ty, $tu:ty ) => {
        impl From<$t> for VectorKey {
            fn from(val: $t) -> Self {
                let v = (val as $tu) ^ (1 << (<$tu>::BITS - 1));
                VectorKey::from_unsigned(v)
            }
        }

        impl From<&$t> for VectorKey {
            fn from(val: &$t) -> Self {
                (*val).into()
            }
        }
    };
}

impl_from_signed!(i8, u8);
impl_from_signed!(i16, u16);
impl_from_signed!(i32, u32);
impl_from_signed!(i64, u64);
impl_from_signed!(i128, u128);
impl_from_signed!(isize, usize);
