//! Validation spec: which fields must be present in which request sections

/// An ordered list of field names required within one section
///
/// A bare string converts to a one-element list, so `spec.section("query", "foo")`
/// and `spec.section("query", ["foo"])` declare the same requirement. An empty
/// list means the section carries no requirement and always passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredFields(Vec<String>);

impl RequiredFields {
    /// Whether this list names no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the field names in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of required fields
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&str> for RequiredFields {
    fn from(field: &str) -> Self {
        Self(vec![field.to_string()])
    }
}

impl From<String> for RequiredFields {
    fn from(field: String) -> Self {
        Self(vec![field])
    }
}

impl From<Vec<String>> for RequiredFields {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl From<Vec<&str>> for RequiredFields {
    fn from(fields: Vec<&str>) -> Self {
        Self(fields.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RequiredFields {
    fn from(fields: [&str; N]) -> Self {
        Self(fields.iter().map(|f| (*f).to_string()).collect())
    }
}

impl FromIterator<String> for RequiredFields {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Mapping from section name to the fields required within it
///
/// Sections are checked in declaration order, so the first failing section is
/// deterministic across invocations. Re-declaring a section replaces its field
/// list while keeping its original position.
#[derive(Debug, Clone, Default)]
pub struct ValidationSpec {
    sections: Vec<(String, RequiredFields)>,
}

impl ValidationSpec {
    /// Create an empty spec
    ///
    /// At least one section must be declared before the spec is handed to
    /// [`RequiredFieldsValidator::new`](crate::RequiredFieldsValidator::new).
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the required fields for a named section
    pub fn section(mut self, name: impl Into<String>, fields: impl Into<RequiredFields>) -> Self {
        let name = name.into();
        let fields = fields.into();
        match self.sections.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = fields,
            None => self.sections.push((name, fields)),
        }
        self
    }

    /// Whether the spec declares no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether the spec declares the given section
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.iter().any(|(n, _)| n == name)
    }

    /// Iterate sections in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RequiredFields)> {
        self.sections.iter().map(|(n, f)| (n.as_str(), f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_string_normalizes_to_single_field() {
        let single: RequiredFields = "foo".into();
        let listed: RequiredFields = ["foo"].into();
        assert_eq!(single, listed);
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_sections_keep_declaration_order() {
        let spec = ValidationSpec::new()
            .section("query", ["bar"])
            .section("body", ["foo"])
            .section("headers", ["x-token"]);

        let names: Vec<&str> = spec.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["query", "body", "headers"]);
    }

    #[test]
    fn test_redeclaring_section_replaces_in_place() {
        let spec = ValidationSpec::new()
            .section("query", ["foo"])
            .section("body", ["baz"])
            .section("query", ["bar", "qux"]);

        let sections: Vec<(&str, Vec<&str>)> = spec
            .iter()
            .map(|(n, f)| (n, f.iter().collect()))
            .collect();
        assert_eq!(
            sections,
            vec![("query", vec!["bar", "qux"]), ("body", vec!["baz"])]
        );
    }

    #[test]
    fn test_empty_spec_reports_empty() {
        assert!(ValidationSpec::new().is_empty());
        assert!(!ValidationSpec::new().section("query", "foo").is_empty());
    }

    #[test]
    fn test_has_section() {
        let spec = ValidationSpec::new().section("query", ["foo"]);
        assert!(spec.has_section("query"));
        assert!(!spec.has_section("body"));
    }
}
