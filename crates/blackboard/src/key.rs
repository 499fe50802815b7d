use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the UTF-8 bytes of `s`.
pub fn fnv1a_32(s: &str) -> u32 {
    s.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Interned handle into a [`Blackboard`](crate::Blackboard).
///
/// Identity is the FNV-1a hash of the name and nothing else: equality, ordering and `Hash` all
/// ignore the name, so two names that collide are the same key. Keys are minted by
/// [`Blackboard::get_or_register_key`](crate::Blackboard::get_or_register_key).
#[derive(Debug, Clone)]
pub struct BlackboardKey {
    name: Arc<str>,
    hash: u32,
}

impl BlackboardKey {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            hash: fnv1a_32(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.hash
    }
}

impl PartialEq for BlackboardKey {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for BlackboardKey {}

impl PartialOrd for BlackboardKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BlackboardKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hash.cmp(&other.hash)
    }
}

impl Hash for BlackboardKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl fmt::Display for BlackboardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_matches_reference_vectors() {
        assert_eq!(fnv1a_32(""), 0x811C_9DC5);
        assert_eq!(fnv1a_32("a"), 0xE40C_292C);
        assert_eq!(fnv1a_32("foobar"), 0xBF9C_F968);
    }

    #[test]
    fn non_ascii_names_hash_their_utf8_bytes() {
        assert_eq!(fnv1a_32("é"), 0x1E9D_E8C1);
        assert_eq!(fnv1a_32("Größe"), 0x48B3_427A);
        assert_eq!(BlackboardKey::new("Größe").id(), 0x48B3_427A);
    }

    #[test]
    fn colliding_names_are_the_same_key() {
        let a = BlackboardKey::new("costarring");
        let b = BlackboardKey::new("liquid");
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_ne!(a.name(), b.name());
    }
}
