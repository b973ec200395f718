// registry.rs - Genetic code registry for managing available codon tables

use std::collections::BTreeMap;
use super::traits::GeneticCode;
use super::{BacterialCode, StandardCode, VertebrateMitoCode};

/// Registry for available genetic codes
pub struct CodeRegistry {
    codes: BTreeMap<String, Box<dyn GeneticCode>>,
}

impl CodeRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            codes: BTreeMap::new(),
        };

        registry.register_code("standard", Box::new(StandardCode));
        registry.register_code("bacterial", Box::new(BacterialCode));
        registry.register_code("vertebrate-mito", Box::new(VertebrateMitoCode));

        registry
    }

    /// Register a new genetic code
    pub fn register_code(&mut self, name: &str, code: Box<dyn GeneticCode>) {
        self.codes.insert(name.to_string(), code);
    }

    /// Get a code by registry name or NCBI table number
    pub fn get_code(&self, name: &str) -> Option<&dyn GeneticCode> {
        let key = self.resolve_name(name)?;
        self.codes.get(key).map(|c| c.as_ref())
    }

    /// Registry name for a registry name or NCBI table number
    pub fn resolve_name(&self, name: &str) -> Option<&str> {
        if let Some((key, _)) = self.codes.get_key_value(name) {
            return Some(key.as_str());
        }
        let table: u8 = name.parse().ok()?;
        self.codes
            .iter()
            .find(|(_, c)| c.table_id() == table)
            .map(|(key, _)| key.as_str())
    }

    pub fn has_code(&self, name: &str) -> bool {
        self.get_code(name).is_some()
    }

    /// List all available codes as (registry name, description)
    pub fn list_codes(&self) -> Vec<(&str, &str)> {
        self.codes
            .iter()
            .map(|(name, c)| (name.as_str(), c.description()))
            .collect()
    }

    pub fn get_code_names(&self) -> Vec<&str> {
        self.codes.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for CodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
