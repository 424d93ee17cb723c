use std::cell::Cell;
use std::rc::Rc;

/// A value that bumps a shared counter when it is dropped, so tests can observe exactly when
/// ownership ends.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new(counter: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop(Rc::clone(counter))
    }

    pub fn counter() -> Rc<Cell<usize>> {
        Rc::new(Cell::new(0))
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
