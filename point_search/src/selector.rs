use common::shapes::Point;

/// Keeps the lowest ranked points offered so far, sorted ascending by rank,
/// in a caller-owned buffer.
///
/// Points of equal rank stay in arrival order, and once the buffer is full a
/// later point never displaces an earlier one of the same rank.
#[derive(Debug)]
pub struct RankedSelector<'a> {
    buffer: &'a mut [Point],
    len: usize,
}

impl<'a> RankedSelector<'a> {
    pub fn new(buffer: &'a mut [Point]) -> Self {
        Self { buffer, len: 0 }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.buffer.len()
    }

    pub fn results(&self) -> &[Point] {
        &self.buffer[..self.len]
    }

    // Returns whether `p` was kept.
    pub fn offer(&mut self, p: &Point) -> bool {
        let capacity = self.buffer.len();
        if capacity == 0 {
            return false;
        }
        if self.len == capacity && p.rank >= self.buffer[capacity - 1].rank {
            return false;
        }

        let i = self.buffer[..self.len].partition_point(|q| q.rank <= p.rank);
        let last = self.len.min(capacity - 1);
        self.buffer.copy_within(i..last, i + 1);
        self.buffer[i] = *p;
        if self.len < capacity {
            self.len += 1;
        }
        true
    }

    pub fn into_len(self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::RankedSelector;
    use common::shapes::Point;

    fn ranked(rank: i32) -> Point {
        Point::new(0, rank, 0.0, 0.0)
    }

    #[test]
    fn full_buffer_drops_tail() {
        let mut buffer = [Point::default(); 3];
        let mut selector = RankedSelector::new(&mut buffer);
        for rank in [5, 1, 4, 2] {
            selector.offer(&ranked(rank));
        }
        assert!(selector.is_full());
        let ranks: Vec<i32> = selector.results().iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![1, 2, 4]);
        assert_eq!(selector.into_len(), 3);
        assert_eq!(buffer[2].rank, 4);
    }

    #[test]
    fn insert_at_front_of_partial_buffer() {
        let mut buffer = [Point::default(); 4];
        let mut selector = RankedSelector::new(&mut buffer);
        assert!(selector.offer(&ranked(7)));
        assert!(selector.offer(&ranked(3)));
        assert_eq!(selector.len(), 2);
        assert_eq!(selector.results()[0].rank, 3);
        assert_eq!(selector.results()[1].rank, 7);
    }
}
