use std::rc::{Rc, Weak};

use super::UniqueOwner;
use crate::tour::{EventLog, FAILURE_MARKER, TourError, Transcript};

/// Traces its construction as its title and its drop as `~` and its title.
pub struct Book {
    title: String,
    log: EventLog,
}

impl Book {
    pub fn new<S: Into<String>>(log: &EventLog, title: S) -> Book {
        let title = title.into();
        log.record(&title);
        Book {
            title,
            log: log.clone(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title<S: Into<String>>(&mut self, title: S) {
        self.title = title.into();
    }
}

impl Clone for Book {
    fn clone(&self) -> Self {
        Book {
            title: self.title.clone(),
            log: self.log.clone(),
        }
    }
}

impl Drop for Book {
    fn drop(&mut self) {
        self.log.record(format_args!("~{}", self.title));
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Author;

/// A book that can be cloned even though it exclusively owns its author: each clone gets an
/// author of its own.
#[derive(Debug)]
pub struct BookWithAuthor {
    pub title: String,
    author: UniqueOwner<Author>,
}

impl BookWithAuthor {
    pub fn new<S: Into<String>>(title: S) -> BookWithAuthor {
        BookWithAuthor {
            title: title.into(),
            author: UniqueOwner::make(Author),
        }
    }

    pub fn author(&self) -> Option<&Author> {
        self.author.get()
    }
}

impl Clone for BookWithAuthor {
    fn clone(&self) -> Self {
        BookWithAuthor {
            title: self.title.clone(),
            author: UniqueOwner::make(Author),
        }
    }
}

pub fn get_book(log: &EventLog, title: &str) -> UniqueOwner<Book> {
    UniqueOwner::make(Book::new(log, title))
}

/// Takes the book, renames it and hands ownership back.
pub fn update_book(mut book: UniqueOwner<Book>) -> UniqueOwner<Book> {
    if let Some(book) = book.get_mut() {
        book.set_title("X");
    }
    book
}

/// The strong count of an optional shared owner, 0 when there is none.
pub fn strong_count<T>(p: &Option<Rc<T>>) -> usize {
    p.as_ref().map_or(0, Rc::strong_count)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SharedBook;

/// Holds a shared book, so the book can outlive the library.
pub struct Library {
    book: Rc<SharedBook>,
    log: EventLog,
}

impl Library {
    pub fn new(log: &EventLog) -> Library {
        log.record("Lib");
        Library {
            book: Rc::new(SharedBook),
            log: log.clone(),
        }
    }

    pub fn book(&self) -> Rc<SharedBook> {
        Rc::clone(&self.book)
    }
}

impl Clone for Library {
    fn clone(&self) -> Self {
        self.log.record("Lib");
        Library {
            book: Rc::clone(&self.book),
            log: self.log.clone(),
        }
    }
}

impl Drop for Library {
    fn drop(&mut self) {
        self.log.record("~Lib");
    }
}

fn check(out: &mut Transcript, condition: bool) -> Result<(), TourError> {
    if !condition {
        out.token(FAILURE_MARKER)?;
    }
    Ok(())
}

fn unique(log: &EventLog) {
    {
        let b1: UniqueOwner<Book> = UniqueOwner::empty();
        let b2: UniqueOwner<Book> = UniqueOwner::default();
        let b4 = UniqueOwner::from_box(Box::new(Book::new(log, "A")));
        let b5 = UniqueOwner::make(Book::new(log, "B"));
        let pb = Box::new(Book::new(log, "C"));
        let b6 = UniqueOwner::from_box(pb);
        let b = UniqueOwner::make(Book::new(log, "D"));
        debug_assert!(!b1.is_some() && !b2.is_some());
        debug_assert!(b4.is_some() && b5.is_some() && b6.is_some() && b.is_some());
    }

    {
        let b1 = UniqueOwner::make(Book::new(log, "E"));
        if b1.is_some() {
            log.record("b1");
        }
        let b2 = b1;
        // `b1` can't be touched any more, the compiler tracks the move.
        if b2.is_some() {
            log.record("b2");
        }
    }

    {
        let mut q = get_book(log, "Q");
        q = update_book(q);
        debug_assert_eq!(q.get().map(Book::title), Some("X"));
    }

    {
        let p = BookWithAuthor::new("P");
        let mut cp = p.clone();
        cp.clone_from(&p);
        debug_assert!(p.author().is_some() && cp.author().is_some());
    }

    {
        let mut b = UniqueOwner::make(Book::new(log, "F"));
        let copy = b.get().cloned();
        let ptr2 = b.release();
        debug_assert!(!b.is_some() && copy.is_some());
        b.reset(None);
        b.reset(ptr2);
    }
}

fn shared(log: &EventLog, out: &mut Transcript) -> Result<(), TourError> {
    let mut p: Option<Rc<SharedBook>> = None;
    check(out, p.is_none())?;
    out.token(format_args!("cnt={}", strong_count(&p)))?;

    p = Some(Rc::new(SharedBook));
    out.token(format_args!("cnt={}", strong_count(&p)))?;

    let pc = p.clone();
    out.token(format_args!("cnt={}", strong_count(&p)))?;
    out.token(format_args!("cnt={}", strong_count(&pc)))?;
    let same = matches!((&p, &pc), (Some(a), Some(b)) if Rc::ptr_eq(a, b));
    check(out, same)?;

    let b;
    {
        let lib = Library::new(log);
        b = lib.book();
        let lib2 = lib.clone();
        debug_assert!(Rc::ptr_eq(&lib.book, &lib2.book));
    }
    log.drain_into(out)?;
    if Rc::strong_count(&b) == 1 {
        out.token("alive")?;
    }
    Ok(())
}

fn weak(out: &mut Transcript) -> Result<(), TourError> {
    let sp = Rc::new(123);
    let mut wp: Weak<i32> = Weak::new();
    check(out, wp.upgrade().is_none())?;
    wp = Rc::downgrade(&sp);

    check(out, wp.strong_count() == 1 && Rc::weak_count(&sp) == 1)?;
    if let Some(locked) = wp.upgrade() {
        out.token(format_args!("locked:{locked}"))?;
    }

    drop(sp);
    check(out, wp.strong_count() == 0)?;
    if let Some(locked) = wp.upgrade() {
        out.token(format_args!("locked:{locked}"))?;
    }
    Ok(())
}

#[cfg(all(unix, feature = "handles"))]
fn handles(out: &mut Transcript) -> Result<(), TourError> {
    use super::{FdHandle, open_read_only};

    let mut handle = open_read_only(c"/dev/null")?;
    if handle.is_valid() {
        out.token("handle:valid")?;
    }

    let mut moved = FdHandle::invalid();
    moved.swap(&mut handle);
    if moved.is_valid() && !handle.is_valid() {
        out.token("handle:moved")?;
    }

    moved.close()?;
    if !moved.is_valid() {
        out.token("handle:closed")?;
    }
    Ok(())
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    let log = EventLog::new();
    unique(&log);
    log.drain_into(out)?;

    shared(&log, out)?;
    weak(out)?;

    #[cfg(all(unix, feature = "handles"))]
    handles(out)?;
    Ok(())
}
