use std::collections::{BTreeSet, HashMap};

/// ## Identifier interning
///
/// Indices are handed out densely in order of first appearance.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NameTable {
    index: HashMap<String, u32>,
    names: Vec<String>,
}

impl NameTable {
    pub fn new() -> NameTable {
        NameTable::default()
    }

    pub fn intern(&mut self, name: &str) -> u32 {
        if let Some(index) = self.index.get(name) {
            return *index;
        }
        let index = self.names.len() as u32;
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), index);
        index
    }

    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.index.get(name).copied()
    }

    pub fn name(&self, index: u32) -> Option<&str> {
        self.names.get(index as usize).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, s)| (i as u32, s.as_str()))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConstantTable {
    values: BTreeSet<u32>,
}

impl ConstantTable {
    pub fn new() -> ConstantTable {
        ConstantTable::default()
    }

    /// Returns true if the value was not already pooled.
    pub fn insert(&mut self, value: u32) -> bool {
        self.values.insert(value)
    }

    pub fn contains(&self, value: u32) -> bool {
        self.values.contains(&value)
    }

    pub fn index_of(&self, value: u32) -> Option<usize> {
        self.values.iter().position(|v| *v == value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.values.iter().copied()
    }
}

/// Vector literals in the order they appear in the source.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VectorTable {
    vectors: Vec<Vec<u32>>,
}

impl VectorTable {
    pub fn new() -> VectorTable {
        VectorTable::default()
    }

    pub fn push(&mut self, vector: Vec<u32>) -> usize {
        self.vectors.push(vector);
        self.vectors.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&[u32]> {
        self.vectors.get(index).map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u32]> {
        self.vectors.iter().map(|v| v.as_slice())
    }
}

impl From<Vec<Vec<u32>>> for VectorTable {
    fn from(vectors: Vec<Vec<u32>>) -> Self {
        VectorTable { vectors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_intern_once() {
        let mut t = NameTable::new();
        assert_eq!(t.intern("b"), 0);
        assert_eq!(t.intern("a"), 1);
        assert_eq!(t.intern("b"), 0);
        assert_eq!(t.len(), 2);
        assert_eq!(t.name(1), Some("a"));
        assert_eq!(t.iter().collect::<Vec<_>>(), vec![(0, "b"), (1, "a")]);
    }

    #[test]
    fn test_constants_deduplicate() {
        let mut t = ConstantTable::new();
        assert!(t.insert(10));
        assert!(t.insert(3));
        assert!(!t.insert(10));
        assert_eq!(t.len(), 2);
        assert_eq!(t.index_of(10), Some(1));
        assert_eq!(t.index_of(4), None);
    }
}
