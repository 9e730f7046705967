use super::{RecordMapping, Result, StorageClass};
use crate::Error;

use std::collections::HashSet;

struct Verify<'a> {
    mapping: &'a RecordMapping,
}

impl RecordMapping {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { mapping: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        self.verify_table_name()?;
        self.verify_one_primary_key()?;
        self.verify_column_names_are_unique()?;
        self.verify_vector_sizes()?;
        Ok(())
    }

    fn verify_table_name(&self) -> Result<()> {
        if self.mapping.table.trim().is_empty() {
            return Err(Error::invalid_schema(format!(
                "record `{}` maps to an empty table name",
                self.mapping.name
            )));
        }
        Ok(())
    }

    fn verify_one_primary_key(&self) -> Result<()> {
        let mut keys = self.mapping.columns.iter().filter(|c| c.primary_key);

        let Some(key) = keys.next() else {
            return Err(Error::invalid_schema(format!(
                "record `{}` has no primary key",
                self.mapping.name
            )));
        };

        if let Some(other) = keys.next() {
            return Err(Error::invalid_schema(format!(
                "record `{}` declares more than one primary key (`{}` and `{}`)",
                self.mapping.name, key.field, other.field
            )));
        }

        if !matches!(key.storage, StorageClass::Integer | StorageClass::Text) {
            return Err(Error::invalid_schema(format!(
                "primary key `{}.{}` must be an integer or a string",
                self.mapping.name, key.field
            )));
        }

        if key.nullable {
            return Err(Error::invalid_schema(format!(
                "primary key `{}.{}` cannot be nullable",
                self.mapping.name, key.field
            )));
        }

        Ok(())
    }

    fn verify_column_names_are_unique(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for column in &self.mapping.columns {
            if !seen.insert(column.name.to_ascii_lowercase()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate column name `{}` in record `{}`",
                    column.name, self.mapping.name
                )));
            }
        }

        Ok(())
    }

    fn verify_vector_sizes(&self) -> Result<()> {
        for column in &self.mapping.columns {
            if column.storage == StorageClass::FixedVector(0) {
                return Err(Error::invalid_schema(format!(
                    "vector column `{}.{}` must declare its size",
                    self.mapping.name, column.field
                )));
            }
        }
        Ok(())
    }
}
