use std::fmt;

/// Generation-tagged reference to a body.
///
/// `index` names a slot in the simulation's slot table; `generation` is bumped
/// every time that slot is freed, so a handle kept past `remove_body` can never
/// alias a body created later in the same slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

impl BodyHandle {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Pack into a single integer (JS side sees a BigInt).
    pub fn to_bits(self) -> u64 {
        ((self.generation as u64) << 32) | self.index as u64
    }

    pub fn from_bits(bits: u64) -> Self {
        Self {
            index: bits as u32,
            generation: (bits >> 32) as u32,
        }
    }
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_keep_index_and_generation_apart() {
        let h = BodyHandle::new(7, 3);
        let back = BodyHandle::from_bits(h.to_bits());
        assert_eq!(back, h);
        assert_eq!(back.index(), 7);
        assert_eq!(back.generation(), 3);
        assert_ne!(BodyHandle::new(7, 4).to_bits(), h.to_bits());
    }
}
