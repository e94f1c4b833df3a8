/// External, restartable iteration over a container, tracked by a position stored in the
/// container itself.
///
/// A cursor performs a single forward pass: [`rewind`](Cursor::rewind) returns to the first
/// element, [`valid`](Cursor::valid) reports whether the position refers to an element and
/// [`next`](Cursor::next) advances. The position is not adjusted by structural mutation, so
/// mutating a container during a pass gives unspecified (but memory safe) results.
pub trait Cursor {
    type Key<'a> where Self: 'a;
    type Item<'a> where Self: 'a;

    fn rewind(&mut self);

    fn valid(&self) -> bool;

    fn current(&self) -> Option<Self::Item<'_>>;

    fn key(&self) -> Option<Self::Key<'_>>;

    fn next(&mut self);
}
