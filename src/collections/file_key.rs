use std::hash::{DefaultHasher, Hash, Hasher};

/// A composite hash map key. Equality compares both fields and the hash combines the hashes of
/// both fields with XOR.
#[derive(Debug, Clone)]
pub struct FileKey {
    pub name: String,
    pub id: i32,
}

impl FileKey {
    pub fn new<S: Into<String>>(name: S, id: i32) -> FileKey {
        FileKey {
            name: name.into(),
            id,
        }
    }

    pub fn combined_hash(&self) -> u64 {
        hash_one(&self.name) ^ hash_one(&self.id)
    }
}

fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl PartialEq for FileKey {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.id == other.id
    }
}

impl Eq for FileKey {}

impl Hash for FileKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.combined_hash());
    }
}
