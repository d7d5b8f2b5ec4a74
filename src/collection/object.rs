use crate::finder::ElementFinder;

/// Ordered collection of sub-finders, one per node matched by an `object`
/// query.
///
/// Sub-finders own a parsed document and an evaluation context, so this
/// collection is not `Clone`; `merge` and `add` consume their inputs instead
/// of copying them.
#[derive(Default)]
pub struct ObjectCollection {
    items: Vec<ElementFinder>,
}

impl ObjectCollection {
    pub fn new(items: Vec<ElementFinder>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ElementFinder> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&ElementFinder> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&ElementFinder> {
        self.items.last()
    }

    pub fn items(&self) -> &[ElementFinder] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ElementFinder> {
        self.items.iter()
    }

    /// Concatenate two collections, preserving order.
    pub fn merge(self, other: ObjectCollection) -> Self {
        let mut items = self.items;
        items.extend(other.items);
        Self { items }
    }

    /// Append one sub-finder.
    pub fn add(self, finder: ElementFinder) -> Self {
        let mut items = self.items;
        items.push(finder);
        Self { items }
    }
}

impl From<Vec<ElementFinder>> for ObjectCollection {
    fn from(items: Vec<ElementFinder>) -> Self {
        Self::new(items)
    }
}

impl IntoIterator for ObjectCollection {
    type Item = ElementFinder;
    type IntoIter = std::vec::IntoIter<ElementFinder>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ObjectCollection {
    type Item = &'a ElementFinder;
    type IntoIter = std::slice::Iter<'a, ElementFinder>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
