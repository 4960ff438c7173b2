//! Handle identity hashing

/// FNV-1a 32-bit offset basis
pub const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime
pub const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a hash of the string's UTF-8 bytes.
pub const fn hash_fnv1a(name: &str) -> u32 {
    let bytes = name.as_bytes();
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash = (hash ^ bytes[i] as u32).wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Stable identity of one gizmo across frames.
///
/// Two handles sharing an id share their interaction state. Nothing detects
/// that, so pick distinct names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(pub u32);

impl HandleId {
    /// Id derived from a human-readable name with [`hash_fnv1a`].
    pub const fn from_name(name: &str) -> Self {
        Self(hash_fnv1a(name))
    }
}

impl From<u32> for HandleId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<&str> for HandleId {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}
