/// Knobs controlling how much positional information the parser attaches
/// to AST nodes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// Skip [`Location`](crate::Location) construction entirely; every
    /// node's `loc` will be `None`.
    pub no_location: bool,

    /// Keep byte offsets in each [`Location`](crate::Location) but do not
    /// attach the shared [`Source`](crate::Source) handle.
    pub no_source: bool,
}
