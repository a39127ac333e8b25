//! Backtracking cursor over a fixed input buffer.
//!
//! Model:
//! - A [`Cursor`] is an immutable, `Copy` view of the not-yet-consumed
//!   input. Combinators consume a prefix and return a new `Cursor`; the
//!   original is never mutated, so trying a failed alternative cannot
//!   corrupt a sibling alternative's starting point.
//! - An invalid `Cursor` is the engine's sole failure signal. It carries no
//!   reason, only the fact that a step could not continue.
//! - Failure is absorbing: every operation derived from an invalid `Cursor`
//!   is itself invalid, which lets long `.skip(..).tag(..).skip(..)` chains
//!   read linearly with no interleaved error checks.
//!
//! Matching is byte-wise and intended for ASCII grammars. A multi-byte
//! UTF-8 sequence never begins with an ASCII byte, so successful matches
//! always advance to a character boundary.

/// A position in the input, or the invalid failure marker.
///
/// A `Cursor` that has consumed exactly to the end of its input is still
/// valid; only a failed parse step produces an invalid one. Cursors are
/// derived from other Cursors (never from arbitrary positions), which
/// bounds every read to the original buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    rest: Option<&'a str>,
}

impl<'a> Cursor<'a> {
    /// A cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Cursor { rest: Some(input) }
    }

    /// The invalid cursor every failed parse step collapses to.
    pub fn failed() -> Self {
        Cursor { rest: None }
    }

    /// Whether any further matching can succeed from here.
    pub fn is_valid(&self) -> bool {
        self.rest.is_some()
    }

    /// The not-yet-consumed input, or `None` for an invalid cursor.
    pub fn rest(&self) -> Option<&'a str> {
        self.rest
    }

    /// Match a single byte, advancing past it on success.
    pub fn byte(self, value: u8) -> Self {
        let Some(rest) = self.rest else {
            return Cursor::failed();
        };
        if rest.as_bytes().first() != Some(&value) {
            return Cursor::failed();
        }
        // `get` refuses a mid-character split, so a non-ASCII `value` can
        // never produce an out-of-boundary cursor.
        match rest.get(1..) {
            Some(tail) => Cursor { rest: Some(tail) },
            None => Cursor::failed(),
        }
    }

    /// Match `tag` byte for byte. The empty string matches trivially,
    /// returning `self` unchanged.
    pub fn tag(self, tag: &str) -> Self {
        let mut cursor = self;
        for &value in tag.as_bytes() {
            cursor = cursor.byte(value);
        }
        cursor
    }

    /// Match any single byte of `set`, trying them in order. Fails when
    /// `set` is empty or none of its bytes match.
    pub fn one_of(self, set: &str) -> Self {
        for &value in set.as_bytes() {
            let result = self.byte(value);
            if result.is_valid() {
                return result;
            }
        }
        Cursor::failed()
    }

    /// Try each alternative in order and return the first success. Order is
    /// the only ambiguity resolution: the first alternative that matches
    /// wins. Fails when the list is empty or every alternative fails.
    pub fn first_of(self, alternatives: &[&dyn Fn(Cursor<'a>) -> Cursor<'a>]) -> Self {
        for alternative in alternatives {
            let result = alternative(self);
            if result.is_valid() {
                return result;
            }
        }
        Cursor::failed()
    }

    /// Apply `item` at least `n` times, then keep applying it greedily
    /// until it first fails, returning the last successful position.
    ///
    /// `n = 0` is legal and makes the repetition fully optional; the single
    /// primitive covers "exactly n", "zero or more" and "one or more".
    /// `item` must consume input on success, or the greedy phase will not
    /// terminate.
    pub fn at_least(self, n: usize, mut item: impl FnMut(Cursor<'a>) -> Cursor<'a>) -> Self {
        let mut cursor = self;
        for _ in 0..n {
            cursor = item(cursor);
            if !cursor.is_valid() {
                return Cursor::failed();
            }
        }
        loop {
            let next = item(cursor);
            if !next.is_valid() {
                return cursor;
            }
            cursor = next;
        }
    }

    /// Consume zero or more bytes of `set`. Never fails on a valid cursor.
    pub fn skip(self, set: &str) -> Self {
        self.at_least(0, |cursor| cursor.one_of(set))
    }

    /// Run `inner` and record the exact byte range it consumed into `out`
    /// as a borrowed subslice of the input (zero allocation). On failure,
    /// `out` is cleared and the invalid cursor is returned.
    pub fn capture(
        self,
        out: &mut &'a str,
        inner: impl FnOnce(Cursor<'a>) -> Cursor<'a>,
    ) -> Self {
        let Some(start) = self.rest else {
            *out = "";
            return Cursor::failed();
        };
        let next = inner(self);
        match next.rest {
            Some(rest) => {
                *out = &start[..start.len() - rest.len()];
                next
            }
            None => {
                *out = "";
                Cursor::failed()
            }
        }
    }
}
