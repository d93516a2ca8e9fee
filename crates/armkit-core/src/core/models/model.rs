use super::entities::{Entry, Group, Parameter, Species};
use super::names::QualifiedName;
use crate::core::reactions::template::ReactionTemplate;
use indexmap::IndexMap;

/// A reaction-network model definition.
///
/// The contents are an ordered mapping from top-level name to entry, so species,
/// parameters, groups and reactions keep their declaration order (inherited entries
/// first). A `Model` is immutable; derived models are produced by
/// [`ModelBuilder`](super::builder::ModelBuilder).
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub(super) name: String,
    pub(super) ancestry: Vec<String>,
    pub(super) entries: IndexMap<String, Entry>,
}

impl Model {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the models this one derives from, root first.
    pub fn ancestry(&self) -> &[String] {
        &self.ancestry
    }

    pub fn derives_from(&self, model: &str) -> bool {
        self.ancestry.iter().any(|m| m == model)
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a top-level species or a group member.
    pub fn species(&self, name: &QualifiedName) -> Option<&Species> {
        match (name.scope(), self.entries.get(name.root())?) {
            (None, Entry::Species(species)) => Some(species),
            (Some(_), Entry::Group(group)) => group.member(name.name()),
            _ => None,
        }
    }

    /// Initial amount of a species given by its dotted path.
    pub fn initial_amount(&self, path: &str) -> Option<f64> {
        self.species(&QualifiedName::parse(path)).map(|s| s.initial)
    }

    /// All species, top-level and grouped, flattened in declaration order.
    pub fn all_species(&self) -> Vec<(QualifiedName, &Species)> {
        let mut out = Vec::new();
        for (name, entry) in &self.entries {
            match entry {
                Entry::Species(species) => out.push((QualifiedName::top(name.as_str()), species)),
                Entry::Group(group) => out.extend(
                    group
                        .members()
                        .map(|(member, s)| (QualifiedName::scoped(name.as_str(), member), s)),
                ),
                _ => {}
            }
        }
        out
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        match self.entries.get(name)? {
            Entry::Parameter(p) => Some(p),
            _ => None,
        }
    }

    pub fn parameters(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.entries.iter().filter_map(|(k, v)| match v {
            Entry::Parameter(p) => Some((k.as_str(), p)),
            _ => None,
        })
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        match self.entries.get(name)? {
            Entry::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &Group)> {
        self.entries.iter().filter_map(|(k, v)| match v {
            Entry::Group(g) => Some((k.as_str(), g)),
            _ => None,
        })
    }

    /// Group instances created from the named template.
    pub fn groups_of(&self, template: &str) -> Vec<(&str, &Group)> {
        self.groups().filter(|(_, g)| g.template() == template).collect()
    }

    pub fn reaction(&self, name: &str) -> Option<&ReactionTemplate> {
        match self.entries.get(name)? {
            Entry::Reaction(r) => Some(r),
            _ => None,
        }
    }

    pub fn reactions(&self) -> impl Iterator<Item = (&str, &ReactionTemplate)> {
        self.entries.iter().filter_map(|(k, v)| match v {
            Entry::Reaction(r) => Some((k.as_str(), r)),
            _ => None,
        })
    }

    pub fn reaction_count(&self) -> usize {
        self.reactions().count()
    }
}
