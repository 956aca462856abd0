// Role grouping snapshot

use super::report::GroupLine;
use crate::domain::{Employee, Role};
use std::collections::BTreeMap;

/// Point-in-time mapping of role to member employees.
///
/// A snapshot does not follow later roster mutations. `revision` records
/// the roster revision it was built from so callers can tell when it is
/// stale. Roles iterate in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    revision: u64,
    groups: BTreeMap<Role, Vec<Employee>>,
}

impl Grouping {
    /// Build a snapshot, keeping each employee's relative order inside its group
    pub(crate) fn build(employees: &[Employee], revision: u64) -> Self {
        let mut groups: BTreeMap<Role, Vec<Employee>> = BTreeMap::new();
        for employee in employees {
            groups
                .entry(employee.role())
                .or_default()
                .push(employee.clone());
        }
        Self { revision, groups }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True when the roster changed after this snapshot was built
    pub fn is_stale_for(&self, roster_revision: u64) -> bool {
        self.revision != roster_revision
    }

    /// Groups in role declaration order
    pub fn groups(&self) -> impl Iterator<Item = (Role, &[Employee])> {
        self.groups
            .iter()
            .map(|(role, members)| (*role, members.as_slice()))
    }

    /// Members of `role` (empty if nobody holds it)
    pub fn members(&self, role: Role) -> &[Employee] {
        self.groups.get(&role).map(Vec::as_slice).unwrap_or_default()
    }

    /// Role to member names, one entry per non-empty role
    pub fn lines(&self) -> Vec<GroupLine> {
        self.groups()
            .map(|(role, members)| GroupLine {
                role,
                names: members.iter().map(|e| e.name().to_string()).collect(),
            })
            .collect()
    }

    /// Total number of grouped employees
    pub fn member_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
