//! Consumables discovered by foraging.

use std::fmt;

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResourceItem {
    pub name: &'static str,
    /// Nourishment when positive, poison damage when negative.
    pub value: i32,
}

impl ResourceItem {
    pub fn new(name: &'static str, value: i32) -> Self {
        Self { name, value }
    }

    pub fn is_poisonous(&self) -> bool {
        self.value < 0
    }
}

impl fmt::Display for ResourceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_poisonous() { write!(f, "Poisonous {}", self.name) } else { f.write_str(self.name) }
    }
}
