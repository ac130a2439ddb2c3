/// Information for a named record field.
///
/// Records expose a table of these, one per field in declaration order.
/// The table is usually generated by [`#[derive(Namespace)]`](crate::derive::Namespace),
/// but can be written by hand with the `const` builder methods:
///
/// ```
/// use ns_lookup::info::{FieldInfo, NamingRule};
///
/// const FIELDS: &[FieldInfo] = &[
///     FieldInfo::new("addr").with_tag("address"),
///     FieldInfo::new("base").embedded(),
///     FieldInfo::new("port"),
/// ];
///
/// assert_eq!(FIELDS[0].naming_rule(), NamingRule::Renamed("address"));
/// assert_eq!(FIELDS[1].naming_rule(), NamingRule::Transparent);
/// assert_eq!(FIELDS[2].naming_rule(), NamingRule::Declared("port"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldInfo {
    name: &'static str,
    tag: Option<&'static str>,
    embedded: bool,
    hidden: bool,
}

/// How a record field appears in the namespace of its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingRule {
    /// Visible under an explicit override name.
    Renamed(&'static str),
    /// Occupies no path segment, its children are spliced into the parent.
    Transparent,
    /// Visible under the declared field name.
    Declared(&'static str),
}

/// The override tag that marks a field transparent.
pub const TRANSPARENT_TAG: &str = "-";

impl FieldInfo {
    /// Creates a new [`FieldInfo`] with the declared field `name`.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            tag: None,
            embedded: false,
            hidden: false,
        }
    }

    /// Sets the override tag. `"-"` marks the field transparent,
    /// any other non-empty value renames it.
    #[inline]
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Marks the field as embedded (anonymous).
    ///
    /// Embedded fields are transparent unless renamed by a tag.
    #[inline]
    pub const fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Marks the field as permanently hidden: it is never matched,
    /// suggested or enumerated.
    #[inline]
    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the override tag, if any.
    #[inline]
    pub const fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    #[inline]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Computes the [`NamingRule`] of this field.
    ///
    /// An empty tag counts as no tag.
    pub fn naming_rule(&self) -> NamingRule {
        match self.tag {
            Some(TRANSPARENT_TAG) => NamingRule::Transparent,
            Some(tag) if !tag.is_empty() => NamingRule::Renamed(tag),
            _ if self.embedded => NamingRule::Transparent,
            _ => NamingRule::Declared(self.name),
        }
    }
}

impl NamingRule {
    /// Returns the name this field answers to, `None` if transparent.
    #[inline]
    pub const fn visible_name(&self) -> Option<&'static str> {
        match self {
            Self::Renamed(name) | Self::Declared(name) => Some(*name),
            Self::Transparent => None,
        }
    }

    #[inline]
    pub const fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{FieldInfo, NamingRule};

    #[test]
    fn untagged_field_uses_declared_name() {
        let info = FieldInfo::new("Key");
        assert_eq!(info.naming_rule(), NamingRule::Declared("Key"));
        assert_eq!(info.naming_rule().visible_name(), Some("Key"));
    }

    #[test]
    fn dash_tag_is_transparent() {
        let info = FieldInfo::new("Sub").with_tag("-");
        assert!(info.naming_rule().is_transparent());
        assert_eq!(info.naming_rule().visible_name(), None);
    }

    #[test]
    fn rename_replaces_declared_name() {
        let info = FieldInfo::new("Sub").with_tag("rename");
        assert_eq!(info.naming_rule().visible_name(), Some("rename"));
    }

    #[test]
    fn embedded_defaults_to_transparent() {
        assert!(FieldInfo::new("Embedded").embedded().naming_rule().is_transparent());

        let renamed = FieldInfo::new("Embedded").embedded().with_tag("inner");
        assert_eq!(renamed.naming_rule(), NamingRule::Renamed("inner"));
    }

    #[test]
    fn empty_tag_counts_as_absent() {
        assert_eq!(
            FieldInfo::new("Key").with_tag("").naming_rule(),
            NamingRule::Declared("Key")
        );
        assert!(FieldInfo::new("Key").with_tag("").embedded().naming_rule().is_transparent());
    }
}
