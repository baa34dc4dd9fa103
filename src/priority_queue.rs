/// A generic largest-first priority queue over a binary heap.
///
/// Standalone container, not used by the clustering engine.
///
///     use apclust::PriorityQueue;
///
///     let mut queue = PriorityQueue::new();
///     queue.push(3);
///     queue.push(7);
///     queue.push(5);
///     assert_eq!(Some(&7), queue.peek());
///     assert_eq!(Some(7), queue.pop());
///     assert_eq!(2, queue.len());
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: Vec<T>,
}

impl<T> PriorityQueue<T>
where
    T: Ord,
{
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Push a new item into the queue.
    pub fn push(&mut self, value: T) {
        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
    }

    /// The largest item currently in the queue.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Remove and return the largest item in the queue.
    pub fn pop(&mut self) -> Option<T> {
        let mut value = self.heap.pop()?;
        if !self.heap.is_empty() {
            std::mem::swap(&mut value, &mut self.heap[0]);
            self.sift_down(0);
        }
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Remove all items from the queue.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) >> 1;
            if self.heap[index] <= self.heap[parent] {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let mut child = (index << 1) | 1;
            if child >= self.heap.len() {
                break;
            }
            if child + 1 < self.heap.len() && self.heap[child + 1] > self.heap[child] {
                child += 1;
            }
            if self.heap[index] >= self.heap[child] {
                break;
            }
            self.heap.swap(index, child);
            index = child;
        }
    }
}

impl<T> Default for PriorityQueue<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use crate::priority_queue::PriorityQueue;

    #[test]
    fn pops_largest_first() {
        let mut queue = PriorityQueue::new();
        for value in [5, 1, 9, 3, 7, 2, 8, 6, 4, 0] {
            queue.push(value);
        }
        for expected in (0..10).rev() {
            assert_eq!(Some(expected), queue.pop());
        }
        assert_eq!(None, queue.pop());
    }

    #[test]
    fn peek_leaves_queue_intact() {
        let mut queue = PriorityQueue::new();
        queue.push("b");
        queue.push("c");
        queue.push("a");
        assert_eq!(Some(&"c"), queue.peek());
        assert_eq!(3, queue.len());
    }

    #[test]
    fn handles_duplicates() {
        let mut queue = PriorityQueue::new();
        for value in [2, 2, 1, 2] {
            queue.push(value);
        }
        assert_eq!(Some(2), queue.pop());
        assert_eq!(Some(2), queue.pop());
        assert_eq!(Some(2), queue.pop());
        assert_eq!(Some(1), queue.pop());
    }

    #[test]
    fn clear_empties_the_queue() {
        let mut queue = PriorityQueue::with_capacity(4);
        queue.push(1);
        queue.push(2);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(None, queue.peek());
        assert!(queue.capacity() >= 4);
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut queue = PriorityQueue::with_capacity(2);
        for value in 0..100 {
            queue.push(value);
        }
        assert_eq!(100, queue.len());
        assert!(queue.capacity() >= 100);
        assert_eq!(Some(99), queue.pop());
    }
}
