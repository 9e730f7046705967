use std::fmt;

/// A possibly qualified SQL name, such as `users` or `users.id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub Vec<String>);

impl Name {
    pub fn qualified(table: &str, column: &str) -> Name {
        Name(vec![table.to_string(), column.to_string()])
    }

    /// Last segment of the name.
    pub fn base(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(vec![value.into()])
    }
}

impl From<&String> for Name {
    fn from(value: &String) -> Self {
        Self::from(&value[..])
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for ident in &self.0 {
            write!(f, "{s}{ident}")?;
            s = ".";
        }

        Ok(())
    }
}
