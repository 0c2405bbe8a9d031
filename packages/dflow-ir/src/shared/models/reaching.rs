//! Reaching-definitions sets
//!
//! A definition `(variable, label)` says that `variable` was last assigned at
//! program point `label`. Several labels may coexist for one variable where
//! control-flow paths join.
//!
//! Sets are ordered (variable, then label) so printing is deterministic.

use super::label::Label;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Ordered set of variable names
pub type VarSet = BTreeSet<String>;

/// A single reaching definition
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Definition {
    pub variable: String,
    pub label: Label,
}

impl Definition {
    pub fn new(variable: impl Into<String>, label: Label) -> Self {
        Self {
            variable: variable.into(),
            label,
        }
    }
}

/// Set of definitions that may reach a program point
///
/// Stored as variable -> defining labels; a variable never maps to an empty
/// label set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReachingSet {
    defs: BTreeMap<String, BTreeSet<Label>>,
}

impl ReachingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one definition; returns true if it was not present
    pub fn insert(&mut self, variable: &str, label: Label) -> bool {
        self.defs
            .entry(variable.to_string())
            .or_default()
            .insert(label)
    }

    /// Drop every definition of `variable`
    pub fn kill(&mut self, variable: &str) {
        self.defs.remove(variable);
    }

    /// In-place set union
    pub fn union_with(&mut self, other: &ReachingSet) {
        for (variable, labels) in &other.defs {
            self.defs
                .entry(variable.clone())
                .or_default()
                .extend(labels.iter().copied());
        }
    }

    /// Set union of two sets
    pub fn union(&self, other: &ReachingSet) -> ReachingSet {
        let mut out = self.clone();
        out.union_with(other);
        out
    }

    pub fn contains(&self, variable: &str, label: Label) -> bool {
        self.defs
            .get(variable)
            .map_or(false, |labels| labels.contains(&label))
    }

    /// Labels of the definitions of `variable` that reach this point
    pub fn labels_of(&self, variable: &str) -> Option<&BTreeSet<Label>> {
        self.defs.get(variable)
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.defs.keys().map(String::as_str)
    }

    /// All definitions, ordered by variable then label
    pub fn iter(&self) -> impl Iterator<Item = Definition> + '_ {
        self.defs.iter().flat_map(|(variable, labels)| {
            labels
                .iter()
                .map(move |label| Definition::new(variable.clone(), *label))
        })
    }

    /// Number of (variable, label) pairs
    pub fn len(&self) -> usize {
        self.defs.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl FromIterator<Definition> for ReachingSet {
    fn from_iter<I: IntoIterator<Item = Definition>>(iter: I) -> Self {
        let mut set = ReachingSet::new();
        for def in iter {
            set.insert(&def.variable, def.label);
        }
        set
    }
}

impl<'a> FromIterator<(&'a str, u32)> for ReachingSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, u32)>>(iter: I) -> Self {
        let mut set = ReachingSet::new();
        for (variable, label) in iter {
            set.insert(variable, Label(label));
        }
        set
    }
}

/// Prints as `{x: {1, 5}, y: {3}}`
impl fmt::Display for ReachingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (variable, labels)) in self.defs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {{", variable)?;
            for (j, label) in labels.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", label)?;
            }
            write!(f, "}}")?;
        }
        write!(f, "}}")
    }
}
