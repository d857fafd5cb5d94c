pub trait Set {
    fn is_empty(&self) -> bool;
}

/// a set whose elements can be exhaustively counted
pub trait Finite: Set {
    fn size(&self) -> usize;
}

pub trait Collecting<T> {
    fn collect(&mut self, item: T);
}
