use crate::ifd::ImageFileDirectory;
use crate::tiff::tags::TagTable;
use crate::tiff::FieldValue;

/// Named fields of one directory, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    fields: Vec<(&'static str, FieldValue)>,
}

impl Summary {
    /// Build a summary of `ifd`, naming tags with the table `T` and passing each value through
    /// `format`.
    ///
    /// Entries whose tag is not in the table, whose value has no [`FieldValue`] shape, or that
    /// `format` rejects are skipped. A later duplicate tag replaces the earlier value.
    pub(crate) fn build<T, F>(ifd: &ImageFileDirectory, format: F) -> Self
    where
        T: TagTable,
        F: Fn(T, FieldValue) -> Option<FieldValue>,
    {
        let mut summary = Self::default();
        for entry in ifd.entries() {
            let Some(tag) = T::lookup(entry.tag()) else {
                continue;
            };
            let Some(value) = entry.value().to_field().and_then(|value| format(tag, value)) else {
                continue;
            };
            summary.insert(tag.tag_name(), value);
        }
        summary
    }

    fn insert(&mut self, name: &'static str, value: FieldValue) {
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// The value of the field called `name`.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Returns `true` if a field called `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over `(name, value)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    /// Field names in file order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// The number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl IntoIterator for Summary {
    type Item = (&'static str, FieldValue);
    type IntoIter = std::vec::IntoIter<(&'static str, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
