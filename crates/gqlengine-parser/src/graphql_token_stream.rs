//! Buffered lookahead over a [`GraphQLTokenSource`].

use std::collections::VecDeque;

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;

/// Buffered lookahead over any [`GraphQLTokenSource`].
///
/// Unconsumed tokens sit in a [`VecDeque`]; `consume()` pops from the front.
/// Once the underlying source is exhausted the stream keeps answering with an
/// `Eof` token positioned at the end of the last token seen, so the parser
/// never has to handle a missing token.
pub struct GraphQLTokenStream<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_source: TTokenSource,
    buffer: VecDeque<GraphQLToken<'src>>,
    last_end: usize,
    eof: GraphQLToken<'src>,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLTokenStream<'src, TTokenSource> {
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
            last_end: 0,
            eof: GraphQLToken::new(GraphQLTokenKind::Eof, 0, 0),
        }
    }

    /// Advances past the next token and returns it.
    pub fn consume(&mut self) -> GraphQLToken<'src> {
        self.ensure_buffer_has(1);
        match self.buffer.pop_front() {
            Some(token) => token,
            None => self.synthesized_eof(),
        }
    }

    #[inline]
    pub fn peek(&mut self) -> &GraphQLToken<'src> {
        self.peek_nth(0)
    }

    /// Peeks `n` tokens ahead; `peek_nth(0)` is the next unconsumed token.
    pub fn peek_nth(&mut self, n: usize) -> &GraphQLToken<'src> {
        self.ensure_buffer_has(n + 1);
        if self.buffer.len() > n {
            &self.buffer[n]
        } else {
            self.eof = self.synthesized_eof();
            &self.eof
        }
    }

    pub fn is_at_end(&mut self) -> bool {
        matches!(self.peek().kind, GraphQLTokenKind::Eof)
    }

    pub fn current_buffer_len(&self) -> usize {
        self.buffer.len()
    }

    fn synthesized_eof(&self) -> GraphQLToken<'src> {
        GraphQLToken::new(GraphQLTokenKind::Eof, self.last_end, self.last_end)
    }

    fn ensure_buffer_has(&mut self, count: usize) {
        while self.buffer.len() < count {
            match self.token_source.next() {
                Some(token) => {
                    self.last_end = token.end;
                    self.buffer.push_back(token);
                },
                None => break,
            }
        }
    }
}
