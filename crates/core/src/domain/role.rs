// Role Domain Model

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Job title held by an employee.
///
/// Variants are ordered by declaration, which is also the order grouped
/// listings use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Operator,
    Coordinator,
    Director,
    Receptionist,
    Accountant,
    Manager,
    Electrician,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 7] = [
        Role::Operator,
        Role::Coordinator,
        Role::Director,
        Role::Receptionist,
        Role::Accountant,
        Role::Manager,
        Role::Electrician,
    ];

    /// Programmatic name (e.g. `OPERATOR`)
    pub fn name(self) -> &'static str {
        match self {
            Role::Operator => "OPERATOR",
            Role::Coordinator => "COORDINATOR",
            Role::Director => "DIRECTOR",
            Role::Receptionist => "RECEPTIONIST",
            Role::Accountant => "ACCOUNTANT",
            Role::Manager => "MANAGER",
            Role::Electrician => "ELECTRICIAN",
        }
    }

    /// Human-readable label (e.g. `Operador`)
    pub fn label(self) -> &'static str {
        match self {
            Role::Operator => "Operador",
            Role::Coordinator => "Coordenador",
            Role::Director => "Diretor",
            Role::Receptionist => "Recepcionista",
            Role::Accountant => "Contador",
            Role::Manager => "Gerente",
            Role::Electrician => "Eletricista",
        }
    }

    /// Look up a role by programmatic name or label, ignoring case.
    pub fn lookup(input: &str) -> Result<Role, DomainError> {
        let wanted = input.trim().to_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| {
                role.name().to_lowercase() == wanted || role.label().to_lowercase() == wanted
            })
            .ok_or_else(|| DomainError::InvalidRole(input.to_string()))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::lookup(s)
    }
}

impl TryFrom<String> for Role {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Role::lookup(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.name().to_string()
    }
}
