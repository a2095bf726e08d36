//! Display-name decoration applied while concept forests are built.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{EXISTS_PREFIX, NOT_PREFIX};

/// Final display name produced by a decorator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedName {
    /// The text that becomes the node's display name.
    pub text: String,
    /// Whether the negation decoration was applied.
    pub negated: bool,
}

impl DecoratedName {
    fn plain(text: String) -> Self {
        Self {
            text,
            negated: false,
        }
    }
}

/// Hook invoked on every candidate node name before the node is created.
///
/// `any_placed` is true once the forest already holds a node; negation is
/// never injected into the very first node.
pub trait NameDecorator {
    /// Produce the final display name for `base`.
    fn decorate(&self, rng: &mut StdRng, base: &str, any_placed: bool) -> DecoratedName;
}

/// No-op decorator used for role forests.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityDecorator;

impl NameDecorator for IdentityDecorator {
    fn decorate(&self, _rng: &mut StdRng, base: &str, _any_placed: bool) -> DecoratedName {
        DecoratedName::plain(base.to_string())
    }
}

/// Concept decorator: existential-role replacement and negation injection.
///
/// `role_names` are the vertex names of the already-built, already-joined
/// role graph. Both probability draws are consumed on every call so a fixed
/// seed yields a fixed stream regardless of which branches fire.
#[derive(Debug, Clone, Copy)]
pub struct ConceptDecorator<'a> {
    exists_probability: f64,
    conflict_probability: f64,
    role_names: &'a [String],
}

impl<'a> ConceptDecorator<'a> {
    /// New decorator over the given role reference names.
    pub fn new(
        exists_probability: f64,
        conflict_probability: f64,
        role_names: &'a [String],
    ) -> Self {
        Self {
            exists_probability,
            conflict_probability,
            role_names,
        }
    }
}

impl NameDecorator for ConceptDecorator<'_> {
    fn decorate(&self, rng: &mut StdRng, base: &str, any_placed: bool) -> DecoratedName {
        // Existential replacement discards the original concept name; with
        // no role names available the base name is kept.
        let mut text = if rng.gen_bool(self.exists_probability) {
            match self.role_names.choose(rng) {
                Some(role) => format!("{}{}", EXISTS_PREFIX, role),
                None => base.to_string(),
            }
        } else {
            base.to_string()
        };

        let negated = rng.gen_bool(self.conflict_probability) && any_placed;
        if negated {
            text = format!("{}{}", NOT_PREFIX, text);
        }

        DecoratedName { text, negated }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_identity_keeps_base_name() {
        let mut rng = rng();
        let d = IdentityDecorator.decorate(&mut rng, "Engine", true);
        assert_eq!(d.text, "Engine");
        assert!(!d.negated);
    }

    #[test]
    fn test_exists_replaces_base_name() {
        let roles = vec!["hasPart".to_string()];
        let deco = ConceptDecorator::new(1.0, 0.0, &roles);
        let mut rng = rng();
        let d = deco.decorate(&mut rng, "Engine", true);
        assert_eq!(d.text, "EXISTS hasPart");
        assert!(!d.negated);
    }

    #[test]
    fn test_exists_without_roles_keeps_base_name() {
        let deco = ConceptDecorator::new(1.0, 0.0, &[]);
        let mut rng = rng();
        let d = deco.decorate(&mut rng, "Engine", true);
        assert_eq!(d.text, "Engine");
    }

    #[test]
    fn test_conflict_prefixes_not() {
        let deco = ConceptDecorator::new(0.0, 1.0, &[]);
        let mut rng = rng();
        let d = deco.decorate(&mut rng, "Engine", true);
        assert_eq!(d.text, "NOT Engine");
        assert!(d.negated);
    }

    #[test]
    fn test_first_node_is_never_negated() {
        let deco = ConceptDecorator::new(0.0, 1.0, &[]);
        let mut rng = rng();
        let d = deco.decorate(&mut rng, "Engine", false);
        assert_eq!(d.text, "Engine");
        assert!(!d.negated);
    }

    #[test]
    fn test_combined_decoration() {
        let roles = vec!["r".to_string()];
        let deco = ConceptDecorator::new(1.0, 1.0, &roles);
        let mut rng = rng();
        let d = deco.decorate(&mut rng, "Engine", true);
        assert_eq!(d.text, "NOT EXISTS r");
        assert!(d.negated);
    }
}
