//! Textual rendering of model objects.
//!
//! Every model type renders as `{Label: value,Label: value}`. Absent fields
//! are skipped, lists render as `[a, b]`, and the separator only ever sits
//! between two present fields.

use std::fmt;

/// Writes the `{Label: value,...}` form of a model object.
pub struct FieldList<'a, 'b> {
    fmt: &'a mut fmt::Formatter<'b>,
    has_fields: bool,
    result: fmt::Result,
}

impl<'a, 'b> FieldList<'a, 'b> {
    /// Open the field list (writes the leading brace)
    pub fn new(fmt: &'a mut fmt::Formatter<'b>) -> Self {
        let result = fmt.write_str("{");
        Self {
            fmt,
            has_fields: false,
            result,
        }
    }

    /// Write `label: value` when the value is present
    pub fn field<T: fmt::Display + ?Sized>(&mut self, label: &str, value: Option<&T>) -> &mut Self {
        let Some(value) = value else {
            return self;
        };
        if self.result.is_err() {
            return self;
        }
        let separator = if self.has_fields { "," } else { "" };
        self.result = write!(self.fmt, "{separator}{label}: {value}");
        self.has_fields = true;
        self
    }

    /// Write `label: [a, b]` when the list is present (an empty list renders `[]`)
    pub fn list<T: fmt::Display>(&mut self, label: &str, values: Option<&[T]>) -> &mut Self {
        match values {
            Some(values) => self.field(label, Some(&DisplayList(values))),
            None => self,
        }
    }

    /// Close the field list (writes the trailing brace)
    pub fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.fmt.write_str("}")
    }
}

/// Renders a slice as `[a, b, c]`.
pub struct DisplayList<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for DisplayList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
