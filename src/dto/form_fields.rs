use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::utils::flag::parse_flag;

/// Text parts of a `multipart/form-data` body, keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    pub fn required(&self, name: &str) -> Result<&str> {
        self.text(name)
            .ok_or_else(|| Error::BadRequest(format!("Missing form field: {}", name)))
    }

    pub fn parse<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.text(name)
            .map(|raw| {
                raw.trim()
                    .parse()
                    .map_err(|e| Error::BadRequest(format!("Invalid value for {}: {}", name, e)))
            })
            .transpose()
    }

    pub fn parse_required<T>(&self, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.parse(name)?
            .ok_or_else(|| Error::BadRequest(format!("Missing form field: {}", name)))
    }

    /// Checkbox semantics: an absent field means `false`.
    pub fn flag(&self, name: &str) -> Result<bool> {
        match self.text(name) {
            None => Ok(false),
            Some(raw) => parse_flag(raw)
                .ok_or_else(|| Error::BadRequest(format!("Invalid value for {}: {}", name, raw))),
        }
    }
}
