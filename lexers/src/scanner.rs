#![deny(warnings)]

/// A backtracking cursor over any iterator.
///
/// Items pulled from the source are buffered until `extract` or `ignore`
/// drops them, so a scan can rewind with `set_buffer_pos` when a rule
/// fails half way through.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.fill_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.current()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: -1}
    }

    pub fn buffer_pos(&self) -> isize { self.pos }

    pub fn set_buffer_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > self.buf.len() as isize {
            return false;
        }
        self.pos = pos;
        true
    }

    /// The last item consumed, None before the first `next` or after EOF.
    pub fn current(&self) -> Option<I::Item> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).cloned()
    }

    // pull from the source until pos is backed by the buffer
    fn fill_buffer(&mut self) {
        while self.pos >= self.buf.len() as isize {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// Drop everything consumed so far, the next scan starts fresh.
    pub fn ignore(&mut self) {
        let consumed = (self.pos + 1).max(0) as usize;
        self.buf.drain(..consumed.min(self.buf.len()));
        self.pos = -1;
    }

    /// Take everything consumed so far out of the buffer.
    pub fn extract(&mut self) -> Vec<I::Item> {
        let consumed = ((self.pos + 1).max(0) as usize).min(self.buf.len());
        let items = self.buf.drain(..consumed).collect();
        self.pos = -1;
        items
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_any(std::slice::from_ref(what))
    }

    // Advance only if the next item is in the 'any' set
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        let backtrack = self.pos;
        match self.next() {
            Some(next) if any.contains(&next) => Some(next),
            _ => {
                self.set_buffer_pos(backtrack);
                None
            }
        }
    }

    /// Accept the whole of `seq` or nothing at all.
    pub fn accept_seq(&mut self, seq: &[I::Item]) -> bool {
        let backtrack = self.pos;
        if seq.iter().all(|item| self.accept(item).is_some()) {
            return true;
        }
        self.set_buffer_pos(backtrack);
        false
    }

    // Skip over the 'over' set, result is if the scanner was advanced
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() { advanced = true; }
        advanced
    }
}
