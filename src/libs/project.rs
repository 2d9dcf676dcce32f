use crate::libs::error::{GtdError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
}

impl Project {
    pub fn new(name: &str) -> Self {
        Project { name: name.to_string() }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GtdError::Validation("project name must not be empty".to_string()));
        }
        Ok(())
    }
}
