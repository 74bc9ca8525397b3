//! Person records in progressively richer variants.
//!
//! A person is one of three shapes: a bare named person, a shopper who
//! carries money, or an employee who additionally has an employer. The
//! shapes form a sum type rather than an inheritance chain, so matching
//! is exhaustive and adding a shape is a compile-visible change.

use std::fmt;

/// Error returned when a person discriminant names no known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPersonKind {
    kind: String,
}

impl UnknownPersonKind {
    /// Get the discriminant that failed to match.
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for UnknownPersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown person kind: {}", self.kind)
    }
}

impl std::error::Error for UnknownPersonKind {}

/// A person in one of three variants.
///
/// # Example
/// ```
/// use layered_calc::Person;
///
/// let shopper = Person::from_kind("shopper", "Swapnil", 100.0).unwrap();
/// assert_eq!(shopper.name(), "Swapnil");
/// assert_eq!(shopper.money(), Some(100.0));
/// assert!(!shopper.is_employed());
///
/// assert!(Person::from_kind("wizard", "Merlin", 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Person {
    /// A person with nothing but a name
    Basic {
        /// Display name
        name: String,
    },
    /// A person carrying money to spend
    Shopper {
        /// Display name
        name: String,
        /// Money available to spend
        money: f64,
    },
    /// An employed shopper
    Employee {
        /// Display name
        name: String,
        /// Money available to spend
        money: f64,
        /// Name of the employer, possibly empty if not yet assigned
        employer: String,
    },
}

impl Person {
    /// Create a basic person.
    pub fn basic(name: &str) -> Self {
        Person::Basic {
            name: name.to_string(),
        }
    }

    /// Create a shopper with money to spend.
    pub fn shopper(name: &str, money: f64) -> Self {
        Person::Shopper {
            name: name.to_string(),
            money,
        }
    }

    /// Create an employee.
    pub fn employee(name: &str, money: f64, employer: &str) -> Self {
        Person::Employee {
            name: name.to_string(),
            money,
            employer: employer.to_string(),
        }
    }

    /// Create a person from a discriminant token.
    ///
    /// Recognizes `person`, `shopper` and `employee`, ASCII-case-insensitively.
    /// Any other discriminant is an explicit error rather than a silent
    /// fallback to some default variant.
    ///
    /// Shoppers and employees receive `money`; a basic person carries none
    /// and the argument is ignored. An employee created this way starts
    /// without an employer name.
    ///
    /// # Arguments
    /// * `kind` - Discriminant selecting the variant
    /// * `name` - Display name for the person
    /// * `money` - Money to give a shopper or employee
    ///
    /// # Returns
    /// The person, or [`UnknownPersonKind`] if the discriminant is not
    /// recognized.
    pub fn from_kind(kind: &str, name: &str, money: f64) -> Result<Self, UnknownPersonKind> {
        match kind.to_ascii_lowercase().as_str() {
            "person" => Ok(Person::basic(name)),
            "shopper" => Ok(Person::shopper(name, money)),
            "employee" => Ok(Person::employee(name, money, "")),
            _ => Err(UnknownPersonKind {
                kind: kind.to_string(),
            }),
        }
    }

    /// Get the person's name.
    pub fn name(&self) -> &str {
        match self {
            Person::Basic { name } => name,
            Person::Shopper { name, .. } => name,
            Person::Employee { name, .. } => name,
        }
    }

    /// Get the money carried, if this variant carries any.
    pub fn money(&self) -> Option<f64> {
        match self {
            Person::Basic { .. } => None,
            Person::Shopper { money, .. } => Some(*money),
            Person::Employee { money, .. } => Some(*money),
        }
    }

    /// Check whether this person is employed.
    pub fn is_employed(&self) -> bool {
        matches!(self, Person::Employee { .. })
    }

    /// Get the employer name, if this person has one.
    pub fn employer(&self) -> Option<&str> {
        match self {
            Person::Employee { employer, .. } => Some(employer),
            _ => None,
        }
    }
}

impl Default for Person {
    fn default() -> Self {
        Person::basic("unnamed person")
    }
}
