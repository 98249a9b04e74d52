/// Wrapping cursor over a fixed number of entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    len: usize,
    index: usize,
}

impl Selector {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jump to `index`, ignoring positions past the end
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut sel = Selector::new(3);
        sel.prev();
        assert_eq!(sel.index(), 2);
        sel.next();
        assert_eq!(sel.index(), 0);
        sel.next();
        sel.next();
        assert_eq!(sel.index(), 2);
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut sel = Selector::new(2);
        sel.select(1);
        assert_eq!(sel.index(), 1);
        sel.select(5);
        assert_eq!(sel.index(), 1);
    }

    #[test]
    fn test_empty_selector_stays_put() {
        let mut sel = Selector::new(0);
        sel.next();
        sel.prev();
        assert_eq!(sel.index(), 0);
        assert!(sel.is_empty());
    }
}
