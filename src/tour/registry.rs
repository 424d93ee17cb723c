use super::Topic;
use crate::{
    arrays, casting, classes, collections, conversion, enums, exceptions, inference, initialization,
    lambda, moves, numbers, operators, pointers, recursion, smart_pointers, streams, strings,
    templates, timing,
};

/// Every topic compiled into this build, in the order the driver prints them.
pub fn registry() -> Vec<Topic> {
    let mut topics = vec![
        Topic::new("arrays", "Arrays", arrays::run),
        Topic::new("inference", "Auto, Decltype, Typedef (type inference)", inference::run),
        Topic::new("casting", "Casting", casting::run),
        Topic::new("chrono", "Chrono", timing::run),
        Topic::new("classes", "Classes", classes::run),
        Topic::new("containers", "Containers", collections::run),
        Topic::new("conversion", "Conversion", conversion::run),
        Topic::new("enums", "Enums", enums::run),
        Topic::new("exceptions", "Exceptions", exceptions::run),
        Topic::new("files", "Files & Streams", streams::run_files),
        Topic::new("formatting", "Formatting", streams::run_formatting),
        Topic::new("initialization", "Initialization", initialization::run),
        Topic::new("lambda", "Lambda", lambda::run),
        Topic::new("moves", "Move semantics", moves::run),
        Topic::new("operators", "Operator overloading", operators::run),
        Topic::new("numbers", "Numbers", numbers::run),
        Topic::new("pointers", "Pointers & References", pointers::run),
    ];

    #[cfg(feature = "random")]
    topics.push(Topic::new("rand", "Rand", crate::random::run));
    #[cfg(feature = "regex")]
    topics.push(Topic::new("regex", "Regular expressions", crate::regular_expressions::run));

    topics.extend([
        Topic::new("smart-pointers", "Smart pointers", smart_pointers::run),
        Topic::new("strings", "Strings", strings::run),
        Topic::new("templates", "Templates", templates::run),
        Topic::new("recursion", "Recursion", recursion::run),
    ]);

    #[cfg(feature = "graphics")]
    topics.push(Topic::new("graphics", "Graphics math", crate::graphics::run));

    topics
}

/// Looks up a single topic by its key.
pub fn find(key: &str) -> Option<Topic> {
    registry().into_iter().find(|topic| topic.key == key)
}
