use std::fmt;

/// Groups competing receptor contacts by residue: the residue name together with its
/// sequence number (e.g. `LYS47`). Chain identifiers are deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidueIdentity {
    pub name: String,
    pub number: isize,
}

impl ResidueIdentity {
    pub fn new(name: &str, number: isize) -> Self {
        Self {
            name: name.trim().to_string(),
            number,
        }
    }
}

impl fmt::Display for ResidueIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.number)
    }
}
