use super::error::ModelError;
use super::names::is_valid_identifier;
use crate::core::reactions::template::ReactionTemplate;
use indexmap::IndexMap;
use std::fmt;

/// A tracked molecular population with its initial amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Species {
    pub initial: f64,
}

impl Species {
    pub fn new(initial: f64) -> Self {
        Self { initial }
    }
}

impl Default for Species {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// A named rate constant. `None` marks an abstract parameter whose value is supplied
/// by a derived model or at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Parameter {
    pub value: Option<f64>,
}

impl Parameter {
    pub fn fixed(value: f64) -> Self {
        Self { value: Some(value) }
    }

    pub fn abstract_() -> Self {
        Self { value: None }
    }

    pub fn is_abstract(&self) -> bool {
        self.value.is_none()
    }
}

/// Declares the members of a reusable species namespace.
///
/// A member without default must be given an initial value every time the template
/// is instantiated.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTemplate {
    name: String,
    members: IndexMap<String, Option<f64>>,
}

impl GroupTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: IndexMap::new(),
        }
    }

    pub fn required(mut self, member: &str) -> Self {
        self.members.insert(member.to_string(), None);
        self
    }

    pub fn with_default(mut self, member: &str, initial: f64) -> Self {
        self.members.insert(member.to_string(), Some(initial));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.members.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Creates a group instance, taking each member's value from `values` or, failing
    /// that, from the template default.
    pub fn instantiate(&self, values: &[(&str, f64)]) -> Result<Group, ModelError> {
        for (member, value) in values {
            if !self.members.contains_key(*member) {
                return Err(ModelError::UnknownGroupMember {
                    template: self.name.clone(),
                    member: member.to_string(),
                });
            }
            validate_amount(member, *value)?;
        }

        let mut members = IndexMap::with_capacity(self.members.len());
        for (member, default) in &self.members {
            if !is_valid_identifier(member) {
                return Err(ModelError::InvalidName(member.clone()));
            }
            let explicit = values
                .iter()
                .rev()
                .find(|(name, _)| name == member)
                .map(|(_, v)| *v);
            let initial = explicit.or(*default).ok_or_else(|| {
                ModelError::MissingInitialValue {
                    group: self.name.clone(),
                    member: member.clone(),
                }
            })?;
            members.insert(member.clone(), Species::new(initial));
        }

        Ok(Group {
            template: self.name.clone(),
            members,
        })
    }
}

/// An instantiated group: an ordered set of species under one scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    template: String,
    members: IndexMap<String, Species>,
}

impl Group {
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn member(&self, name: &str) -> Option<&Species> {
        self.members.get(name)
    }

    pub(crate) fn member_mut(&mut self, name: &str) -> Option<&mut Species> {
        self.members.get_mut(name)
    }

    pub fn members(&self) -> impl Iterator<Item = (&str, &Species)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// One top-level entry of a model's contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Species(Species),
    Parameter(Parameter),
    Group(Group),
    Reaction(ReactionTemplate),
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Species(_) => EntryKind::Species,
            Entry::Parameter(_) => EntryKind::Parameter,
            Entry::Group(_) => EntryKind::Group,
            Entry::Reaction(_) => EntryKind::Reaction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Species,
    Parameter,
    Group,
    Reaction,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Species => "species",
            EntryKind::Parameter => "parameter",
            EntryKind::Group => "group",
            EntryKind::Reaction => "reaction",
        };
        f.write_str(label)
    }
}

pub(crate) fn validate_amount(name: &str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidAmount {
            name: name.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor() -> GroupTemplate {
        GroupTemplate::new("Sensor")
            .required("dimer")
            .with_default("monomer", 0.0)
    }

    #[test]
    fn instantiate_uses_explicit_values_and_defaults() {
        let group = sensor().instantiate(&[("dimer", 7.5e5)]).unwrap();
        assert_eq!(group.template(), "Sensor");
        assert_eq!(group.member("dimer"), Some(&Species::new(7.5e5)));
        assert_eq!(group.member("monomer"), Some(&Species::new(0.0)));
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn explicit_value_replaces_a_default() {
        let group = sensor()
            .instantiate(&[("dimer", 1.0), ("monomer", 3.0)])
            .unwrap();
        assert_eq!(group.member("monomer").unwrap().initial, 3.0);
    }

    #[test]
    fn instantiate_fails_when_required_member_has_no_value() {
        let err = sensor().instantiate(&[]).unwrap_err();
        assert_eq!(
            err,
            ModelError::MissingInitialValue {
                group: "Sensor".to_string(),
                member: "dimer".to_string(),
            }
        );
    }

    #[test]
    fn instantiate_rejects_unknown_members_and_negative_amounts() {
        assert!(matches!(
            sensor().instantiate(&[("dimer", 1.0), ("trimer", 1.0)]),
            Err(ModelError::UnknownGroupMember { .. })
        ));
        assert!(matches!(
            sensor().instantiate(&[("dimer", -1.0)]),
            Err(ModelError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn abstract_parameters_have_no_value() {
        assert!(Parameter::abstract_().is_abstract());
        assert_eq!(Parameter::fixed(1e-3).value, Some(1e-3));
    }
}
