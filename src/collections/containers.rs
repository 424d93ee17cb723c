use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Display;

use super::{
    Book, FileKey, LinkedList, MultiMap, Person, accumulate, find_all, generate, generate_n,
    next_permutation, partition_around, remove_if, replace_if, unique_copy,
};
use crate::exceptions::{Exception, at};
use crate::tour::{EventLog, TourError, Transcript};

/// Writes every element of `values` back to back, followed by one space.
pub fn print_elements<I>(out: &mut Transcript, values: I) -> Result<(), TourError>
where
    I: IntoIterator,
    I::Item: Display,
{
    for value in values {
        out.raw(value)?;
    }
    out.raw(' ')?;
    Ok(())
}

/// Counts each alphabetic character of `text`, ordered by character.
pub fn histogram(text: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for c in text.chars().filter(char::is_ascii_alphabetic) {
        *counts.entry(c).or_default() += 1;
    }
    counts
}

fn iteration(out: &mut Transcript) -> Result<(), TourError> {
    let mut vec = vec![1, 2, 3];

    print_elements(out, vec.clone())?;
    print_elements(out, &vec)?;
    for n in &mut vec {
        *n += 1;
    }
    print_elements(out, &vec)?;

    for n in vec.iter_mut() {
        *n *= 2;
    }
    for i in 0..vec.len() {
        out.raw(vec[i])?;
    }
    out.raw(' ')?;
    print_elements(out, vec.iter())?;

    let mut iter = vec.iter();
    while let Some(n) = iter.next() {
        out.raw(n)?;
    }
    out.raw(' ')?;

    print_elements(out, vec.as_slice())?;
    print_elements(out, vec.iter().copied())?;
    print_elements(out, vec.iter().rev())?;

    vec.iter().try_for_each(|n| out.raw(n))?;
    out.raw(' ')?;

    print_elements(out, [1, 2, 3])?;

    let sum: i32 = [1, 2, 3].iter().sum();
    for multiple in [sum, sum * 2, sum * 4] {
        out.raw(format_args!("{multiple},"))?;
    }
    out.raw(' ')?;

    print_elements(out, [4, 3, 2, 1])?;
    Ok(())
}

struct Tracked {
    log: EventLog,
}

impl Tracked {
    fn new(log: &EventLog) -> Tracked {
        log.record("A");
        Tracked {
            log: log.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.record("~A");
    }
}

fn vector(out: &mut Transcript) -> Result<(), TourError> {
    let v1: Vec<i32> = Vec::new();
    let v2 = vec![1, 2, 3];
    let v3: Vec<i32> = v2.iter().copied().collect();
    let v4 = v2[1..v2.len() - 1].to_vec();
    let v5 = vec![123; 10];
    debug_assert!(v1.is_empty() && v3.len() == 3 && v4 == [2] && v5.len() == 10);

    let mut v = vec![1, 2, 3];
    v.push(4);
    v.insert(0, 8);
    print_elements(out, &v)?;

    let mut values: Vec<f32> = vec![1.0, 2.0, 3.0];
    values.push(8.0);
    values.push(4.5);
    values.pop();
    out.token(values[3])?;
    if let Err(exc) = at(&values, 5) {
        out.token(format_args!("\"{exc}\""))?;
    }

    // Pushing moves the values in; growing the buffer relocates them without running any code.
    let log = EventLog::new();
    {
        let a1 = Tracked::new(&log);
        let a2 = Tracked::new(&log);
        let mut tracked = Vec::new();
        tracked.push(a1);
        tracked.push(a2);
    }
    log.drain_into(out)?;
    Ok(())
}

fn list(out: &mut Transcript) -> Result<(), TourError> {
    let mut c: LinkedList<i32> = LinkedList::new();
    debug_assert!(c.is_empty());

    c = LinkedList::from([1, 2, 3, 4, 5]);
    c = c.iter().copied().collect();
    c = c.iter().skip(1).take(c.len() - 2).copied().collect();
    debug_assert_eq!(c.len(), 3);

    c = LinkedList::from([1, 2, 3, 4, 5]);
    c.push_back(6);
    c.push_front(0);
    c.insert(0, -1);
    c.insert(c.len(), 7);
    print_elements(out, &c)?;

    c.remove(0);
    c.pop_front();
    c.remove(c.len() - 1);
    c.pop_back();
    let _middle = c.remove_range(1..c.len() - 1).map_err(Exception::from)?;
    c.insert_all(1, [2, 3, 4]);
    c.reverse();
    c.sort();
    c.retain(|value| value & 1 == 0);
    print_elements(out, &c)?;
    Ok(())
}

fn set(out: &mut Transcript) -> Result<(), TourError> {
    let mut c = BTreeSet::from([1, 2, 4, 5, 3]);
    c.insert(0);
    let inserted = c.insert(6);
    let again = c.insert(6);
    debug_assert!(inserted && !again);

    c.pop_first();
    c.remove(&6);
    c.remove(&123);

    let (below, equal, above) = partition_around(&c, &3);
    print_elements(out, below)?;
    print_elements(out, equal)?;
    print_elements(out, above)?;

    let letters: BTreeSet<char> = "to be, or not to be, that is the question"
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect();
    print_elements(out, letters)?;
    Ok(())
}

fn map(out: &mut Transcript) -> Result<(), TourError> {
    let mut c: BTreeMap<String, i32> =
        [("A", 1), ("D", 4), ("B", 2), ("C", 3), ("E", 5)].map(|(k, v)| (k.to_string(), v)).into();
    c.insert("F".to_string(), 6);
    let g = *c.entry("G".to_string()).or_default();
    debug_assert_eq!((g, c.len()), (0, 7));
    c.insert("H".to_string(), 8);
    c.entry("I".to_string()).or_insert(9);
    c.remove("D");
    c.remove("G");
    for (key, value) in &c {
        out.raw(format_args!("{key}{value},"))?;
    }
    out.raw(' ')?;

    for (letter, count) in histogram("to be, or not to be") {
        out.raw(format_args!("{letter}:{count},"))?;
    }
    out.raw(' ')?;

    let book1 = Book::new(1, "X", "A");
    let book2 = Book::new(3, "Z", "C");
    let book3 = Book::new(2, "Y", "B");
    let mut books = BTreeMap::new();
    books.insert(book1.id, book1);
    books.insert(book2.id, book2);
    books.entry(book3.id).or_insert(book3);
    out.tokens(books.values())?;
    if let Some((id, book)) = books.get_key_value(&2) {
        out.token(format_args!("Found1:{id}{}{}", book.title, book.author))?;
    }
    if let Some(book) = books.get(&2) {
        out.token(format_args!("Found2:{book}"))?;
    }
    Ok(())
}

fn multimap(out: &mut Transcript) -> Result<(), TourError> {
    let mut c: MultiMap<&str, i32> = [("A", 10), ("B", 21), ("B", 23), ("C", 30)].into_iter().collect();
    let inserted = *c.insert("B", 22);
    debug_assert_eq!((inserted, c.len()), (22, 5));

    for (key, value) in c.iter() {
        out.raw(format_args!("{key}{value},"))?;
    }
    out.raw(' ')?;
    for _ in 0..2 {
        for (key, value) in c.equal_range("B") {
            out.raw(format_args!("{key}{value},"))?;
        }
        out.raw(' ')?;
    }
    Ok(())
}

fn unordered_map(out: &mut Transcript) -> Result<(), TourError> {
    let mut f: HashMap<FileKey, i32> =
        HashMap::from([(FileKey::new("A", 1), 11), (FileKey::new("B", 2), 22)]);
    f.insert(FileKey::new("C", 3), 33);
    let k = FileKey::new("D", 2);
    f.insert(k, 44);

    // Hash order is unspecified, so sort before printing.
    let mut entries: Vec<_> = f.iter().collect();
    entries.sort_by(|(a, _), (b, _)| (a.id, &a.name).cmp(&(b.id, &b.name)));
    for (key, value) in entries {
        out.raw(format_args!("{}-{}{},", key.id, key.name, value))?;
    }
    out.raw(' ')?;
    Ok(())
}

fn algorithms(out: &mut Transcript) -> Result<(), TourError> {
    let mut vec = vec![3, 4, 1, 3, 2, 5];
    vec.sort();
    out.raw("sorted:")?;
    print_elements(out, &vec)?;

    out.token(vec.iter().filter(|&&n| n == 3).count())?;

    out.raw("unique:")?;
    print_elements(out, unique_copy(&vec))?;

    let sum = accumulate(&vec, 0.0_f32, |acc, &n| acc + n as f32);
    out.token(format_args!("sum:{sum}"))?;

    let sv = ["a", "b", "c"];
    let abc = accumulate(&sv, String::from(">"), |acc, &s| acc + s);
    out.token(format_args!("abc:{abc}"))?;
    let abc2 = accumulate(&sv, String::from(">"), |acc, &s| acc + "," + s);
    out.token(format_args!("abc:{abc2}"))?;

    if let Some(found) = vec.iter().find(|&&i| i % 5 == 0) {
        out.token(format_args!("found:{found}"))?;
    }

    let mut people = vec![Person::new("A", 1), Person::new("B", 3), Person::new("C", 5)];
    out.tokens(&people)?;

    if let Some(oldest) = people.iter().max_by_key(|p| p.age) {
        out.token(oldest)?;
    }
    if let Some(person) = people.iter().find(|p| p.name == "B") {
        out.token(&person.name)?;
    }
    out.token(people.iter().filter(|p| p.age < 5).count())?;

    replace_if(&mut people, |p| p.name == "C", &Person::new("X", 2));
    out.tokens(&people)?;
    people.sort_by_key(|p| p.age);
    out.tokens(&people)?;

    let mut v = vec![1, 2, 3, 4];
    next_permutation(&mut v);
    print_elements(out, &v)?;
    next_permutation(&mut v);
    print_elements(out, &v)?;

    print_elements(out, find_all(&vec, |n| n % 2 == 1))?;

    let mut v = vec![0; 5];
    let mut n = 1;
    generate(&mut v, || {
        n += 1;
        n - 1
    });
    out.raw("gen:")?;
    print_elements(out, &v)?;

    let mut v = vec![0; 5];
    let mut n = 1;
    generate_n(&mut v, 5, || {
        n += 1;
        n - 1
    });
    out.raw("gen_n:")?;
    print_elements(out, &v)?;
    Ok(())
}

fn removing(out: &mut Transcript) -> Result<(), TourError> {
    let v = vec![3, 4, 1, 3, 2, 5];
    let mut v1 = v.clone();
    let removed = remove_if(&mut v1, |&elem| elem == 3);
    out.raw(format_args!("removed{removed}:"))?;
    print_elements(out, &v1)?;

    let (rows, cols) = (5, 3);
    let mut field = vec![vec![0; cols]; rows];
    let mut n = 0;
    for row in field.iter_mut() {
        for cell in row.iter_mut() {
            *cell = n;
            n += 1;
        }
    }
    out.token(format_args!("field:{}", field[rows - 1][cols - 1]))?;
    Ok(())
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    iteration(out)?;
    vector(out)?;
    list(out)?;
    set(out)?;
    map(out)?;
    multimap(out)?;
    unordered_map(out)?;
    algorithms(out)?;
    removing(out)?;
    Ok(())
}
