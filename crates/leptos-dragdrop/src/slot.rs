//! Slot Algebra
//!
//! Where a drop lands, expressed independently of the DOM. The same
//! index translation is used for the backing collections and, since the
//! view is rendered from them, for the on-screen order.

/// Insertion point inside a container
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<Id> {
    Start,
    End,
    Before(Id),
    After(Id),
}

impl<Id: PartialEq> Slot<Id> {
    /// Sibling this slot is anchored to, if any
    pub fn sibling(&self) -> Option<&Id> {
        match self {
            Slot::Before(id) | Slot::After(id) => Some(id),
            Slot::Start | Slot::End => None,
        }
    }

    /// Whether the slot is anchored to `id`
    pub fn references(&self, id: &Id) -> bool {
        self.sibling() == Some(id)
    }
}

/// Resolved drop destination
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropTarget<Container, Id> {
    pub container: Container,
    pub slot: Slot<Id>,
}

impl<Container, Id> DropTarget<Container, Id> {
    pub fn new(container: Container, slot: Slot<Id>) -> Self {
        Self { container, slot }
    }
}

/// An index inside a specific container
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position<Container> {
    pub container: Container,
    pub index: usize,
}

impl<Container> Position<Container> {
    pub fn new(container: Container, index: usize) -> Self {
        Self { container, index }
    }
}

/// Translate a slot into an insertion index over `ids`.
///
/// `ids` must already exclude the entry being moved. Returns `None` when
/// the slot's sibling is not present.
pub fn insertion_index<Id: PartialEq>(ids: &[Id], slot: &Slot<Id>) -> Option<usize> {
    match slot {
        Slot::Start => Some(0),
        Slot::End => Some(ids.len()),
        Slot::Before(sibling) => ids.iter().position(|id| id == sibling),
        Slot::After(sibling) => ids.iter().position(|id| id == sibling).map(|i| i + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_index() {
        let ids = ["a", "b", "c"];
        assert_eq!(insertion_index(&ids, &Slot::Start), Some(0));
        assert_eq!(insertion_index(&ids, &Slot::End), Some(3));
        assert_eq!(insertion_index(&ids, &Slot::Before("b")), Some(1));
        assert_eq!(insertion_index(&ids, &Slot::After("b")), Some(2));
        assert_eq!(insertion_index(&ids, &Slot::After("c")), Some(3));
        assert_eq!(insertion_index(&ids, &Slot::Before("z")), None);
    }

    #[test]
    fn test_empty_container() {
        let ids: [&str; 0] = [];
        assert_eq!(insertion_index(&ids, &Slot::Start), Some(0));
        assert_eq!(insertion_index(&ids, &Slot::End), Some(0));
    }

    #[test]
    fn test_slot_references() {
        assert!(Slot::Before(7).references(&7));
        assert!(!Slot::After(7).references(&8));
        assert!(!Slot::<u32>::End.references(&7));
    }
}
