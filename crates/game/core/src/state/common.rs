use std::fmt;

use crate::action::SessionError;

/// Index of an entity slot within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Slot that owns the first turn of every new session.
    pub const FIRST: Self = Self(0);

    /// Converts a client-supplied index into an id.
    ///
    /// Negative or oversized values can never name a slot and are rejected
    /// with [`SessionError::InvalidActor`] carrying the raw value.
    pub fn from_wire(raw: i64) -> Result<Self, SessionError> {
        u32::try_from(raw)
            .map(Self)
            .map_err(|_| SessionError::InvalidActor { actor: raw })
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for EntityId {
    fn from(index: usize) -> Self {
        Self(index as u32)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Grid cell expressed in axial-looking `(q, r)` coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub q: i32,
    pub r: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

impl From<(i32, i32)> for Position {
    fn from((q, r): (i32, i32)) -> Self {
        Self { q, r }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
