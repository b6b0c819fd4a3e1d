//! Mapping from piece kinds to the visual resources front ends draw.

use crate::piece::{Color, Kind, Role};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("no visual resource for {kind}")]
    Missing { kind: Kind },
}

/// Stable lookup key for a kind's visual resource, e.g. `"black_king"`.
pub fn resource_id(kind: Kind) -> &'static str {
    match (kind.color, kind.role) {
        (Color::Black, Role::King) => "black_king",
        (Color::Black, Role::Queen) => "black_queen",
        (Color::Black, Role::Rook) => "black_rook",
        (Color::Black, Role::Bishop) => "black_bishop",
        (Color::Black, Role::Knight) => "black_knight",
        (Color::Black, Role::Pawn) => "black_pawn",
        (Color::White, Role::King) => "white_king",
        (Color::White, Role::Queen) => "white_queen",
        (Color::White, Role::Rook) => "white_rook",
        (Color::White, Role::Bishop) => "white_bishop",
        (Color::White, Role::Knight) => "white_knight",
        (Color::White, Role::Pawn) => "white_pawn",
    }
}

/// Front-end resource behind a sprite, e.g. a texture. Dropped with the sprite.
pub type Backing = Arc<dyn Any + Send + Sync>;

/// A resolved visual resource, owned by exactly one piece.
pub struct Sprite {
    id: &'static str,
    glyph: char,
    backing: Option<Backing>,
}

impl Sprite {
    pub fn new(id: &'static str, glyph: char) -> Self {
        Sprite { id, glyph, backing: None }
    }

    /// Attaches the front-end resource this sprite owns.
    pub fn with_backing(mut self, backing: Backing) -> Self {
        self.backing = Some(backing);
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn backing(&self) -> Option<&Backing> {
        self.backing.as_ref()
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("id", &self.id)
            .field("glyph", &self.glyph)
            .field("backing", &self.backing.is_some())
            .finish()
    }
}

impl PartialEq for Sprite {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.glyph == other.glyph
    }
}

impl Eq for Sprite {}

impl Drop for Sprite {
    fn drop(&mut self) {
        trace!(id = self.id, "sprite released");
    }
}

/// Turns a kind into its visual resource. Failure is fatal to the caller.
pub trait AssetResolver {
    fn resolve(&self, kind: Kind) -> Result<Sprite, AssetError>;
}

/// Fails with the first kind `resolver` cannot provide.
///
/// Front ends call this before the first frame so that lazy creation on
/// render cannot fail later.
pub fn ensure_complete<R: AssetResolver + ?Sized>(resolver: &R) -> Result<(), AssetError> {
    for kind in Kind::all() {
        resolver.resolve(kind)?;
    }
    Ok(())
}

/// Resolves every kind to its Unicode chess glyph.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlyphSet;

impl AssetResolver for GlyphSet {
    fn resolve(&self, kind: Kind) -> Result<Sprite, AssetError> {
        Ok(Sprite::new(resource_id(kind), kind.glyph()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_kind_has_a_distinct_resource() {
        let ids: HashSet<_> = Kind::all().map(resource_id).collect();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn incomplete_resolver_is_detected() {
        struct NoKings;
        impl AssetResolver for NoKings {
            fn resolve(&self, kind: Kind) -> Result<Sprite, AssetError> {
                match kind.role {
                    Role::King => Err(AssetError::Missing { kind }),
                    _ => GlyphSet.resolve(kind),
                }
            }
        }

        assert_eq!(ensure_complete(&GlyphSet), Ok(()));
        assert_eq!(
            ensure_complete(&NoKings),
            Err(AssetError::Missing { kind: Kind::new(Color::Black, Role::King) })
        );
    }

    #[test]
    fn glyph_set_uses_resource_id() {
        let kind = Kind::new(Color::White, Role::Rook);
        let sprite = GlyphSet.resolve(kind).unwrap();
        assert_eq!(sprite.id(), "white_rook");
        assert_eq!(sprite.glyph(), '♖');
    }
}
