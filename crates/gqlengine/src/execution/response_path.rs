use crate::error::PathSegment;

/// The response path of the field currently being resolved, kept as a
/// linked list of stack frames so that descending never allocates.
#[derive(Clone, Copy, Debug)]
pub enum ResponsePath<'a> {
    Root,
    Key(&'a str, &'a ResponsePath<'a>),
    Index(usize, &'a ResponsePath<'a>),
}

impl<'a> ResponsePath<'a> {
    pub fn key(&'a self, key: &'a str) -> Self {
        Self::Key(key, self)
    }

    pub fn index(&'a self, index: usize) -> Self {
        Self::Index(index, self)
    }

    /// The path from the root, as it appears in an error's `path`.
    pub fn to_vec(&self) -> Vec<PathSegment> {
        let mut segments = vec![];
        let mut current = self;
        loop {
            match current {
                Self::Root => break,
                Self::Key(key, parent) => {
                    segments.push(PathSegment::Key(key.to_string()));
                    current = parent;
                },
                Self::Index(index, parent) => {
                    segments.push(PathSegment::Index(*index));
                    current = parent;
                },
            }
        }
        segments.reverse();
        segments
    }
}
