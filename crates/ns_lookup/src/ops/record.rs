use crate::Namespace;
use crate::info::FieldInfo;

// -----------------------------------------------------------------------------
// Record trait

/// A value with named fields in a fixed declaration order.
///
/// Implemented by [`#[derive(Namespace)]`](crate::derive::Namespace) for
/// structs with named fields. Field `i` of the table returned by
/// [`field_infos`] describes the value returned by [`field_at(i)`].
///
/// # Examples
///
/// ```
/// use ns_lookup::{derive::Namespace, ops::{NsRef, Record}, Namespace as _};
///
/// #[derive(Namespace)]
/// struct Foo {
///     a: i32,
///     #[ns("bee")]
///     b: bool,
/// }
///
/// let foo = Foo { a: 1, b: true };
/// let NsRef::Record(record) = foo.ns_ref() else { unreachable!() };
///
/// assert_eq!(record.field_len(), 2);
/// assert_eq!(record.field_infos()[1].tag(), Some("bee"));
/// assert!(record.field_at(2).is_none());
/// ```
///
/// [`field_infos`]: Record::field_infos
/// [`field_at(i)`]: Record::field_at
pub trait Record: Namespace {
    /// Returns the field table, in declaration order.
    fn field_infos(&self) -> &'static [FieldInfo];

    /// Returns the value of the field at `index`, or `None` if out of bounds.
    fn field_at(&self, index: usize) -> Option<&dyn Namespace>;

    /// Returns the number of fields.
    #[inline]
    fn field_len(&self) -> usize {
        self.field_infos().len()
    }
}

impl dyn Record {
    /// Returns an iterator over `(info, value)` pairs in declaration order.
    #[inline]
    pub fn iter_fields(&self) -> RecordFieldIter<'_> {
        RecordFieldIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// Record field iterator

/// An iterator over the fields of a [`Record`].
pub struct RecordFieldIter<'a> {
    record: &'a dyn Record,
    index: usize,
}

impl<'a> RecordFieldIter<'a> {
    /// Creates a new iterator for the given record.
    #[inline(always)]
    pub const fn new(record: &'a dyn Record) -> Self {
        RecordFieldIter { record, index: 0 }
    }
}

impl<'a> Iterator for RecordFieldIter<'a> {
    type Item = (&'a FieldInfo, &'a dyn Namespace);

    fn next(&mut self) -> Option<Self::Item> {
        let info = self.record.field_infos().get(self.index)?;
        let value = self.record.field_at(self.index)?;
        self.index += 1;
        Some((info, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.record.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for RecordFieldIter<'_> {}
