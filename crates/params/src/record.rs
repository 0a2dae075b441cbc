/// Maximum byte length of a parameter name or value.
///
/// Characters scanned past the cap are dropped while scanning continues,
/// so an oversized field is truncated rather than rejected.
pub const FIELD_CAP: usize = 256;

/// Maximum number of bytes of a line that are scanned.
///
/// Anything past the bound is cut off; the truncated prefix is still
/// processed as a complete line.
pub const LINE_CAP: usize = 1024;

/// One `name=value` record extracted from a parameter file line.
///
/// Both fields are bounded at [`FIELD_CAP`] bytes. The name is never
/// empty: a record only exists once a line with a name, a separator, and
/// at least one value character has been fully scanned.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    /// Creates a record, truncating both fields at [`FIELD_CAP`] bytes.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut name = name.into();
        let mut value = value.into();
        truncate_at_cap(&mut name);
        truncate_at_cap(&mut value);
        Self { name, value }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Cuts `field` down to at most [`FIELD_CAP`] bytes on a char boundary.
fn truncate_at_cap(field: &mut String) {
    if field.len() <= FIELD_CAP {
        return;
    }
    let mut end = FIELD_CAP;
    while !field.is_char_boundary(end) {
        end -= 1;
    }
    field.truncate(end);
}
