use crate::collection::StringCollection;
use crate::element::Element;
use std::collections::HashMap;

/// Ordered, immutable collection of element handles from one query call.
#[derive(Debug, Clone, Default)]
pub struct ElementCollection {
    items: Vec<Element>,
}

impl ElementCollection {
    pub fn new(items: Vec<Element>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&Element> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&Element> {
        self.items.last()
    }

    pub fn items(&self) -> &[Element] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.items.iter()
    }

    /// New collection with `other`'s elements appended after this one's.
    pub fn merge(&self, other: &ElementCollection) -> Self {
        let mut items = self.items.clone();
        items.extend(other.items.iter().cloned());
        Self { items }
    }

    /// New collection with one element appended; the source is untouched.
    pub fn add(&self, element: Element) -> Self {
        let mut items = self.items.clone();
        items.push(element);
        Self { items }
    }

    /// Values of `name` over the elements that carry that attribute.
    pub fn attribute(&self, name: &str) -> StringCollection {
        self.items
            .iter()
            .filter_map(|element| element.attribute(name))
            .collect()
    }

    /// Per-element attribute maps, in collection order.
    pub fn attributes(&self) -> Vec<HashMap<String, String>> {
        self.items.iter().map(Element::attributes).collect()
    }

    /// String-value of every element, in collection order.
    pub fn texts(&self) -> StringCollection {
        self.items.iter().map(|element| element.text()).collect()
    }
}

impl From<Vec<Element>> for ElementCollection {
    fn from(items: Vec<Element>) -> Self {
        Self::new(items)
    }
}

impl IntoIterator for ElementCollection {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ElementCollection {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
