use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

/// A copyable handle to a heap allocated [`Node`].
///
/// A NodeRef is only ever held by the list that allocated it (or by an iterator borrowing that
/// list), and only while the node is still linked into it. Every accessor relies on that.
pub(crate) struct NodeRef<T>(NonNull<Node<T>>);

impl<T> NodeRef<T> {
    pub fn alloc(value: T, prev: Link<T>, next: Link<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(Node {
            value,
            prev,
            next,
        }))))
    }

    /// Takes the node back out of the heap.
    ///
    /// # Safety
    /// The node must be unlinked from its list by the caller, and no other copy of this NodeRef
    /// may be used afterwards.
    pub unsafe fn free(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in alloc and, per the caller's contract, is
        // freed exactly once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(self) -> &'a T {
        // SAFETY: The node is live while its owning list is borrowed, which bounds 'a at the call
        // site.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: As for value. Callers only reach this through a mutable borrow of the list.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev(self) -> Link<T> {
        // SAFETY: The node is live.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn next(self) -> Link<T> {
        // SAFETY: The node is live.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_prev(self, link: Link<T>) {
        // SAFETY: The node is live and links are only rewritten through a mutable list borrow.
        unsafe { (*self.0.as_ptr()).prev = link }
    }

    pub fn set_next(self, link: Link<T>) {
        // SAFETY: The node is live and links are only rewritten through a mutable list borrow.
        unsafe { (*self.0.as_ptr()).next = link }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
