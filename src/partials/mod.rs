//! Prefix storage and prefix comparison.

pub mod vector_partial;

pub use vector_partial::VectorPartial;

/// Returns the length of the longest run of bytes that both `a` and `b` start with.
#[inline]
pub fn prefix_length_common(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

/// Returns the longest common leading run of `a` and `b`, borrowed from `a`.
///
/// Empty when either input is empty or the first bytes already differ.
#[inline]
pub fn common_prefix<'a>(a: &'a [u8], b: &[u8]) -> &'a [u8] {
    &a[..prefix_length_common(a, b)]
}
