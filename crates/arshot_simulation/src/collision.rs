//! Collision categories
//!
//! Битовые маски физических тел — centralised constants для всего проекта.
//!
//! ## Архитектура:
//! - **Category (битовая маска):** к какому классу принадлежит тело
//! - **Contact test (битовая маска):** о контактах с какими классами сообщать
//!
//! ## Categories:
//! - Bit 0 (0b01 = 1): Projectiles
//! - Bit 1 (0b10 = 2): Targets
//!
//! Маски переводятся в Rapier `CollisionGroups` (memberships = category,
//! filters = contact test), поэтому targets не сталкиваются друг с другом,
//! projectiles тоже.

use std::ops::{BitAnd, BitOr};

use bevy::prelude::*;
use bevy_rapier3d::prelude::{CollisionGroups, Group};

/// Category bitmask of a physics body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub struct CollisionCategory(pub u32);

impl CollisionCategory {
    pub const NONE: Self = Self(0);
    pub const PROJECTILE: Self = Self(1 << 0);
    pub const TARGET: Self = Self(1 << 1);

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn group(self) -> Group {
        Group::from_bits_truncate(self.0)
    }

    /// Имя для debug логов
    pub fn name(self) -> &'static str {
        match self {
            Self::PROJECTILE => "Projectile",
            Self::TARGET => "Target",
            Self::NONE => "None",
            _ => "Mixed",
        }
    }
}

impl BitOr for CollisionCategory {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for CollisionCategory {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Physics tag attached to every game body.
///
/// The contact system reads `category` from both sides of a reported contact.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct PhysicsTag {
    pub category: CollisionCategory,
    pub contact_test: CollisionCategory,
}

impl PhysicsTag {
    pub const TARGET: Self = Self {
        category: CollisionCategory::TARGET,
        contact_test: CollisionCategory::PROJECTILE,
    };

    pub const PROJECTILE: Self = Self {
        category: CollisionCategory::PROJECTILE,
        contact_test: CollisionCategory::TARGET,
    };

    pub fn collision_groups(&self) -> CollisionGroups {
        CollisionGroups::new(self.category.group(), self.contact_test.group())
    }
}

/// Which side of a contact pair is the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSide {
    A,
    B,
}

/// Contact guard: exactly one side is a target and the other a projectile.
///
/// Returns `None` for every other combination (target/target, projectile/projectile,
/// untagged bodies, mixed masks).
pub fn classify_contact(a: CollisionCategory, b: CollisionCategory) -> Option<TargetSide> {
    if a | b != CollisionCategory::TARGET | CollisionCategory::PROJECTILE {
        return None;
    }

    match (a, b) {
        (CollisionCategory::TARGET, CollisionCategory::PROJECTILE) => Some(TargetSide::A),
        (CollisionCategory::PROJECTILE, CollisionCategory::TARGET) => Some(TargetSide::B),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_disjoint() {
        assert_eq!(
            CollisionCategory::TARGET & CollisionCategory::PROJECTILE,
            CollisionCategory::NONE
        );
        assert_eq!(CollisionCategory::PROJECTILE.bits(), 1);
        assert_eq!(CollisionCategory::TARGET.bits(), 2);
    }

    #[test]
    fn test_classify_valid_pairs() {
        assert_eq!(
            classify_contact(CollisionCategory::TARGET, CollisionCategory::PROJECTILE),
            Some(TargetSide::A)
        );
        assert_eq!(
            classify_contact(CollisionCategory::PROJECTILE, CollisionCategory::TARGET),
            Some(TargetSide::B)
        );
    }

    #[test]
    fn test_classify_rejects_same_kind_and_mixed() {
        let t = CollisionCategory::TARGET;
        let p = CollisionCategory::PROJECTILE;

        assert_eq!(classify_contact(t, t), None);
        assert_eq!(classify_contact(p, p), None);
        assert_eq!(classify_contact(t | p, p), None);
        assert_eq!(classify_contact(t | p, t | p), None);
        assert_eq!(classify_contact(CollisionCategory::NONE, p), None);
        assert_eq!(classify_contact(t, CollisionCategory(1 << 5)), None);
    }

    #[test]
    fn test_tags_test_against_each_other() {
        assert!(PhysicsTag::TARGET.contact_test.contains(PhysicsTag::PROJECTILE.category));
        assert!(PhysicsTag::PROJECTILE.contact_test.contains(PhysicsTag::TARGET.category));
    }

    #[test]
    fn test_category_names() {
        assert_eq!(CollisionCategory::TARGET.name(), "Target");
        assert_eq!((CollisionCategory::TARGET | CollisionCategory::PROJECTILE).name(), "Mixed");
    }
}
