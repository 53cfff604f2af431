use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// ArrayEdit

/// A change to an array requested by a visitor in [`exit_array`].
///
/// Serialization never edits arrays and always answers [`ArrayEdit::None`].
/// Interactive visitors, such as an inspector with remove and reorder
/// buttons, use the other verbs.
///
/// [`exit_array`]: crate::visit::FieldVisitor::exit_array
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ArrayEdit {
    #[default]
    None,
    /// Remove the element at the index.
    Remove(usize),
    /// Swap the element at the index with its predecessor.
    MoveForward(usize),
}

impl ArrayEdit {
    /// Applies the edit to `items`. Out-of-range edits do nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_reflect::visit::ArrayEdit;
    ///
    /// let mut items = vec!['a', 'b', 'c'];
    /// ArrayEdit::MoveForward(2).apply(&mut items);
    /// assert_eq!(items, ['a', 'c', 'b']);
    /// ArrayEdit::Remove(0).apply(&mut items);
    /// assert_eq!(items, ['c', 'b']);
    /// ```
    pub fn apply<T>(self, items: &mut Vec<T>) {
        match self {
            Self::None => {}
            Self::Remove(index) => {
                if index < items.len() {
                    items.remove(index);
                }
            }
            Self::MoveForward(index) => {
                if index > 0 && index < items.len() {
                    items.swap(index - 1, index);
                }
            }
        }
    }
}
