/// Exclusive ownership of an optional heap value.
///
/// It can be moved but never cloned. Dropping it drops the value it owns.
#[derive(Debug, PartialEq, Eq)]
pub struct UniqueOwner<T>(Option<Box<T>>);

impl<T> UniqueOwner<T> {
    /// Allocates `value` and takes ownership of it.
    pub fn make(value: T) -> UniqueOwner<T> {
        UniqueOwner(Some(Box::new(value)))
    }

    pub const fn empty() -> UniqueOwner<T> {
        UniqueOwner(None)
    }

    pub fn from_box(value: Box<T>) -> UniqueOwner<T> {
        UniqueOwner(Some(value))
    }

    pub const fn is_some(&self) -> bool {
        self.0.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_deref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.0.as_deref_mut()
    }

    /// Gives up ownership without dropping anything, leaving this owner empty.
    pub fn release(&mut self) -> Option<Box<T>> {
        self.0.take()
    }

    /// Takes ownership of `value`. The previously owned value is dropped after the new one is in
    /// place.
    pub fn reset(&mut self, value: Option<Box<T>>) {
        drop(std::mem::replace(&mut self.0, value));
    }
}

impl<T> Default for UniqueOwner<T> {
    fn default() -> Self {
        UniqueOwner::empty()
    }
}
