//! Cache keys for football entities.
//!
//! Every entity is cached under `<prefix><id>`, e.g. `arena_42`, so entries of
//! different kinds can share one cache without colliding.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Entity kinds that are cached by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Arena,
    Match,
    Team,
    Player,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Arena,
        EntityKind::Match,
        EntityKind::Team,
        EntityKind::Player,
    ];

    /// Key prefix for this kind, including the trailing underscore.
    pub fn prefix(self) -> &'static str {
        match self {
            EntityKind::Arena => "arena_",
            EntityKind::Match => "match_",
            EntityKind::Team => "team_",
            EntityKind::Player => "player_",
        }
    }
}

/// Typed cache key, rendered as `<prefix><id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    kind: EntityKind,
    id: i32,
}

impl CacheKey {
    pub fn new(kind: EntityKind, id: i32) -> Self {
        Self { kind, id }
    }

    pub fn arena(id: i32) -> Self {
        Self::new(EntityKind::Arena, id)
    }

    pub fn match_(id: i32) -> Self {
        Self::new(EntityKind::Match, id)
    }

    pub fn team(id: i32) -> Self {
        Self::new(EntityKind::Team, id)
    }

    pub fn player(id: i32) -> Self {
        Self::new(EntityKind::Player, id)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    /// Parses a rendered key back into kind and id.
    ///
    /// Returns None for unknown prefixes or a non-numeric id.
    pub fn parse(raw: &str) -> Option<Self> {
        EntityKind::ALL.into_iter().find_map(|kind| {
            raw.strip_prefix(kind.prefix())
                .and_then(|id| id.parse().ok())
                .map(|id| Self::new(kind, id))
        })
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.id)
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_rendering() {
        assert_eq!(CacheKey::arena(1).to_string(), "arena_1");
        assert_eq!(CacheKey::match_(42).to_string(), "match_42");
        assert_eq!(CacheKey::team(7).to_string(), "team_7");
        assert_eq!(CacheKey::player(300).to_string(), "player_300");
    }

    #[test]
    fn test_same_id_different_kinds_differ() {
        let arena: String = CacheKey::arena(5).into();
        let team: String = CacheKey::team(5).into();
        assert_ne!(arena, team);
    }

    #[test]
    fn test_parse_roundtrips_every_kind() {
        for kind in EntityKind::ALL {
            let key = CacheKey::new(kind, 17);
            assert_eq!(CacheKey::parse(&key.to_string()), Some(key));
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(CacheKey::parse("stadium_1"), None);
        assert_eq!(CacheKey::parse("arena_"), None);
        assert_eq!(CacheKey::parse("arena_abc"), None);
        assert_eq!(CacheKey::parse(""), None);
    }

    #[test]
    fn test_parse_negative_id() {
        let key = CacheKey::parse("player_-3").unwrap();
        assert_eq!(key.kind(), EntityKind::Player);
        assert_eq!(key.id(), -3);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&EntityKind::Match).unwrap();
        assert_eq!(json, "\"match\"");
    }
}
