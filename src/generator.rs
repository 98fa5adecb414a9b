//! Generators: the atomic boxes of a diagram.
use core::fmt;

use crate::object::Type;

/// A named box `name : dom → cod`.
///
/// The optional `data` is an opaque payload carried unchanged through every operation. It takes
/// part in equality, as does the dagger flag: `f.dagger() != f` but `f.dagger().dagger() == f`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generator {
    name: String,
    dom: Type,
    cod: Type,
    data: Option<String>,
    is_dagger: bool,
}

impl Generator {
    pub fn new(name: impl Into<String>, dom: Type, cod: Type) -> Self {
        Generator {
            name: name.into(),
            dom,
            cod,
            data: None,
            is_dagger: false,
        }
    }

    /// Attach an opaque payload.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dom(&self) -> &Type {
        &self.dom
    }

    pub fn cod(&self) -> &Type {
        &self.cod
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    pub fn is_dagger(&self) -> bool {
        self.is_dagger
    }

    /// Swap domain and codomain and toggle the dagger flag.
    pub fn dagger(&self) -> Self {
        Generator {
            name: self.name.clone(),
            dom: self.cod.clone(),
            cod: self.dom.clone(),
            data: self.data.clone(),
            is_dagger: !self.is_dagger,
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.is_dagger {
            f.write_str("[::-1]")?;
        }
        Ok(())
    }
}
