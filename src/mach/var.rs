use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::BTreeMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Ordered by name so dumps are stable.

#[derive(Debug, Default)]
pub struct Var {
    vars: BTreeMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn get(&self, var_name: &str) -> Option<&Val> {
        self.vars.get(var_name)
    }

    pub fn fetch(&self, var_name: &Rc<str>) -> Result<Val> {
        match self.vars.get(var_name) {
            Some(val) => Ok(val.clone()),
            None => Err(error!(VariableNotFound; format!("'{}'", var_name))),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: Val) {
        self.vars.insert(var_name.clone(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Val)> {
        self.vars.iter().map(|(k, v)| (k.as_ref(), v))
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, val) in self.iter() {
            writeln!(f, "{} = {}", name, val)?;
        }
        Ok(())
    }
}
