use super::entities::{Entry, EntryKind, GroupTemplate, Parameter, Species, validate_amount};
use super::error::ModelError;
use super::model::Model;
use super::names::{QualifiedName, is_valid_identifier};
use crate::core::reactions::template::ReactionTemplate;
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Composes a model, either from scratch or by deriving from a base model.
///
/// Deriving copies the base contents; the builder then applies the delta of the
/// derived model:
///
/// * declarations add new entries and fail on names already in use,
/// * overrides replace the value of an inherited species or parameter,
/// * deletions remove inherited reactions and fail on unknown names.
///
/// Every operation is checked immediately, so a stale deletion list or a typo'd
/// override surfaces at composition time.
#[derive(Debug)]
pub struct ModelBuilder {
    model: Model,
    /// Top-level names declared by this derivation level.
    declared: HashSet<String>,
    /// Qualified names overridden by this derivation level.
    overridden: HashSet<QualifiedName>,
}

impl ModelBuilder {
    /// Starts a root model with no ancestor.
    pub fn new(name: &str) -> Self {
        Self {
            model: Model {
                name: name.to_string(),
                ancestry: Vec::new(),
                entries: IndexMap::new(),
            },
            declared: HashSet::new(),
            overridden: HashSet::new(),
        }
    }

    /// Starts a model inheriting every entry of `base`.
    pub fn derive(name: &str, base: &Model) -> Self {
        debug!("Deriving model '{}' from '{}'.", name, base.name());
        let mut ancestry = base.ancestry.clone();
        ancestry.push(base.name.clone());
        Self {
            model: Model {
                name: name.to_string(),
                ancestry,
                entries: base.entries.clone(),
            },
            declared: HashSet::new(),
            overridden: HashSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.model.name
    }

    fn insert_new(&mut self, name: &str, entry: Entry) -> Result<&mut Self, ModelError> {
        if !is_valid_identifier(name) {
            return Err(ModelError::InvalidName(name.to_string()));
        }
        if self.model.entries.contains_key(name) {
            return Err(ModelError::DuplicateEntry {
                model: self.model.name.clone(),
                name: name.to_string(),
            });
        }
        trace!("Declaring {} '{}' in '{}'.", entry.kind(), name, self.model.name);
        self.model.entries.insert(name.to_string(), entry);
        self.declared.insert(name.to_string());
        Ok(self)
    }

    pub fn declare_species(&mut self, name: &str, initial: f64) -> Result<&mut Self, ModelError> {
        validate_amount(name, initial)?;
        self.insert_new(name, Entry::Species(Species::new(initial)))
    }

    pub fn declare_parameter(&mut self, name: &str, value: f64) -> Result<&mut Self, ModelError> {
        validate_amount(name, value)?;
        self.insert_new(name, Entry::Parameter(Parameter::fixed(value)))
    }

    /// Declares a parameter whose value is left to a derived model or to compile time.
    pub fn declare_abstract_parameter(&mut self, name: &str) -> Result<&mut Self, ModelError> {
        self.insert_new(name, Entry::Parameter(Parameter::abstract_()))
    }

    pub fn add_group(
        &mut self,
        name: &str,
        template: &GroupTemplate,
        values: &[(&str, f64)],
    ) -> Result<&mut Self, ModelError> {
        let group = template.instantiate(values)?;
        self.insert_new(name, Entry::Group(group))
    }

    /// Adds a reaction rule. Its references are resolved by [`Model::finalize`].
    pub fn add_reaction(
        &mut self,
        name: &str,
        template: impl Into<ReactionTemplate>,
    ) -> Result<&mut Self, ModelError> {
        self.insert_new(name, Entry::Reaction(template.into()))
    }

    fn claim_override(&mut self, name: &QualifiedName) -> Result<(), ModelError> {
        // Entries declared at this level have no ancestor to shadow.
        if self.declared.contains(name.root()) {
            return Err(self.unknown(name));
        }
        if !self.overridden.insert(name.clone()) {
            return Err(ModelError::DuplicateOverride {
                model: self.model.name.clone(),
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn unknown(&self, name: impl ToString) -> ModelError {
        ModelError::UnknownEntry {
            model: self.model.name.clone(),
            name: name.to_string(),
        }
    }

    fn mismatch(&self, name: impl ToString, expected: EntryKind, found: EntryKind) -> ModelError {
        ModelError::KindMismatch {
            model: self.model.name.clone(),
            name: name.to_string(),
            expected,
            found,
        }
    }

    /// Replaces the initial amount of an inherited species (`L`, `Smac.M`).
    pub fn override_species(&mut self, path: &str, initial: f64) -> Result<&mut Self, ModelError> {
        validate_amount(path, initial)?;
        let name = QualifiedName::parse(path);
        let found = self
            .model
            .entries
            .get(name.root())
            .map(Entry::kind)
            .ok_or_else(|| self.unknown(&name))?;
        let expected = if name.is_scoped() {
            EntryKind::Group
        } else {
            EntryKind::Species
        };
        if found != expected {
            return Err(self.mismatch(&name, expected, found));
        }
        if name.is_scoped() {
            let exists = self
                .model
                .group(name.root())
                .is_some_and(|g| g.member(name.name()).is_some());
            if !exists {
                return Err(self.unknown(&name));
            }
        }
        self.claim_override(&name)?;

        let slot = match self.model.entries.get_mut(name.root()) {
            Some(Entry::Species(species)) => Some(species),
            Some(Entry::Group(group)) => group.member_mut(name.name()),
            _ => None,
        };
        if let Some(species) = slot {
            debug!("Overriding species '{}': {} -> {}", name, species.initial, initial);
            species.initial = initial;
        }
        Ok(self)
    }

    /// Replaces (or supplies) the value of an inherited parameter.
    pub fn override_parameter(&mut self, name: &str, value: f64) -> Result<&mut Self, ModelError> {
        validate_amount(name, value)?;
        let qualified = QualifiedName::top(name);
        match self.model.entries.get(name) {
            None => return Err(self.unknown(name)),
            Some(Entry::Parameter(_)) => {}
            Some(other) => return Err(self.mismatch(name, EntryKind::Parameter, other.kind())),
        }
        self.claim_override(&qualified)?;
        if let Some(Entry::Parameter(parameter)) = self.model.entries.get_mut(name) {
            debug!("Overriding parameter '{}': {:?} -> {}", name, parameter.value, value);
            parameter.value = Some(value);
        }
        Ok(self)
    }

    /// Overrides a species or a parameter, whichever the path names.
    pub fn override_value(&mut self, path: &str, value: f64) -> Result<&mut Self, ModelError> {
        let name = QualifiedName::parse(path);
        match self.model.entries.get(name.root()) {
            Some(Entry::Parameter(_)) if !name.is_scoped() => self.override_parameter(path, value),
            Some(_) => self.override_species(path, value),
            None => Err(self.unknown(path)),
        }
    }

    /// Removes a reaction from the contents; fails if no such reaction exists.
    pub fn remove_reaction(&mut self, name: &str) -> Result<&mut Self, ModelError> {
        match self.model.entries.get(name) {
            None => return Err(self.unknown(name)),
            Some(Entry::Reaction(_)) => {}
            Some(other) => return Err(self.mismatch(name, EntryKind::Reaction, other.kind())),
        }
        debug!("Removing reaction '{}' from '{}'.", name, self.model.name);
        self.model.entries.shift_remove(name);
        self.declared.remove(name);
        Ok(self)
    }

    pub fn build(self) -> Model {
        self.model
    }
}
