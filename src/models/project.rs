use serde::Serialize;
use std::fmt;

/// A trackable work category identified by a number and a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: i64,
    pub number: String,
    pub name: String,
}

impl Project {
    /// Label shown in the project selector, e.g. `3 - P-100: Website`.
    pub fn label(&self) -> String {
        format!("{} - {}: {}", self.id, self.number, self.name)
    }

    /// Extract the leading id from a selector label (`"{id} - ..."`).
    ///
    /// Returns `None` when the text has no ` - ` separator or the part
    /// before it is not an integer.
    pub fn id_from_label(label: &str) -> Option<i64> {
        let (head, _) = label.split_once(" - ")?;
        head.trim().parse().ok()
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
