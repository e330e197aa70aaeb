use strata_inmem::index::Index;

/// Removes consecutive duplicates from an iterator of term indices.
pub(crate) trait IndexIteratorDedup: Iterator<Item = Index> + Sized {
    fn dedup(self) -> Dedup<Self> {
        Dedup {
            inner: self,
            last: None,
        }
    }
}
impl<I: Iterator<Item = Index>> IndexIteratorDedup for I {}

pub(crate) struct Dedup<I> {
    inner: I,
    last: Option<Index>,
}

impl<I: Iterator<Item = Index>> Iterator for Dedup<I> {
    type Item = Index;

    fn next(&mut self) -> Option<Index> {
        loop {
            let cand = self.inner.next()?;
            if self.last != Some(cand) {
                self.last = Some(cand);
                return Some(cand);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dedup() {
        let v: Vec<_> = [1, 1, 2, 3, 3, 3, 1].into_iter().dedup().collect();
        assert_eq!(v, vec![1, 2, 3, 1]);
    }
}
