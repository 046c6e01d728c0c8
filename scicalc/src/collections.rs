use std::collections::VecDeque;
use std::fmt;

/// Last-in first-out container used for operators and operands.
#[derive(Clone, PartialEq, Debug)]
pub struct Stack<T>(Vec<T>);

impl<T> Stack<T> {
    pub fn new() -> Self { Stack(Vec::new()) }

    pub fn push(&mut self, item: T) { self.0.push(item); }

    pub fn pop(&mut self) -> Option<T> { self.0.pop() }

    pub fn peek(&self) -> Option<&T> { self.0.last() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl<T> Default for Stack<T> {
    fn default() -> Self { Self::new() }
}

/// First-in first-out container, the postfix output of the converter.
#[derive(Clone, PartialEq)]
pub struct Queue<T>(VecDeque<T>);

impl<T> Queue<T> {
    pub fn new() -> Self { Queue(VecDeque::new()) }

    pub fn enqueue(&mut self, item: T) { self.0.push_back(item); }

    pub fn dequeue(&mut self) -> Option<T> { self.0.pop_front() }

    pub fn peek(&self) -> Option<&T> { self.0.front() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &T> { self.0.iter() }
}

impl<T> Default for Queue<T> {
    fn default() -> Self { Self::new() }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Queue(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

// print like a list, front first
impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Queue, Stack};

    #[test]
    fn stack_is_lifo() {
        let mut s = Stack::new();
        assert!(s.is_empty());
        assert_eq!(s.peek(), None);
        s.push(1);
        s.push(2);
        assert_eq!(s.len(), 2);
        assert_eq!(s.peek(), Some(&2));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn queue_is_fifo() {
        let mut q = Queue::new();
        q.enqueue('a');
        q.enqueue('b');
        assert_eq!(q.peek(), Some(&'a'));
        assert_eq!(format!("{:?}", q), "['a', 'b']");
        assert_eq!(q.dequeue(), Some('a'));
        assert_eq!(q.len(), 1);
        assert_eq!(q.dequeue(), Some('b'));
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn queue_collects() {
        let q = (1..4).collect::<Queue<_>>();
        assert_eq!(q.iter().sum::<i32>(), 6);
        assert_eq!(q.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
