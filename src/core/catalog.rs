//! # Topic Catalog
//!
//! The ordered, immutable list of topics the walkthrough presents.
//! Built once at startup from compiled-in data and never mutated.
//!
//! Lookup is by integer index only. Titles are unique and are used by the
//! TUI for tab labels and active-tab checks, but they are never the identity
//! key for navigation — the cursor in `core::state` is.

/// One unit of content: a short title and a descriptive body.
///
/// The body may contain embedded newlines; the TUI wraps it to the
/// terminal width when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub title: &'static str,
    pub body: &'static str,
}

/// Ordered sequence of [`Topic`]s, fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct Catalog {
    topics: Vec<Topic>,
}

const BUILTIN_TOPICS: &[Topic] = &[
    Topic {
        title: "Programming",
        body: "A set of instructions to perform a task, programming is a collaboration between humans and computers,\nwhere humans create instructions (code) that computers can follow to perform tasks efficiently.",
    },
    Topic {
        title: "Coding",
        body: "Writing instructions in a programming language.\nThe process of writing, implementing, and testing instructions in a programming language to create software or applications.",
    },
    Topic {
        title: "Python",
        body: "Guido van Rossum created Python. He began developing the language in December 1989, and the first version, Python 0.9.0, was released on February 20, 1991.",
    },
    Topic {
        title: "Loops",
        body: "Loops in Python are used to repeat a block of code multiple times. There are two main types of loops: for loops and while loops.",
    },
    Topic {
        title: "Conditionals",
        body: "Conditional statements in Python are used to execute certain blocks of code based on specific conditions. These help control the program's flow.",
    },
];

impl Catalog {
    /// Build a catalog from the given topics.
    ///
    /// # Panics
    ///
    /// Panics if `topics` is empty. An empty catalog has no valid cursor
    /// position, so it is rejected at construction rather than left as a
    /// latent out-of-range error.
    pub fn new(topics: Vec<Topic>) -> Self {
        assert!(!topics.is_empty(), "catalog must contain at least one topic");
        Self { topics }
    }

    /// The compiled-in Python walkthrough topics.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TOPICS.to_vec())
    }

    /// Topic at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. Every caller is bounds-checked by the
    /// navigation state machine, so an out-of-range index here is a bug,
    /// not a recoverable condition.
    pub fn get(&self, index: usize) -> &Topic {
        &self.topics[index]
    }

    /// Number of topics. Constant for the process lifetime, always >= 1.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Always false; kept so clippy's `len_without_is_empty` holds.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over topics in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter()
    }
}
