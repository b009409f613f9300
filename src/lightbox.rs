//! Index-based navigation over the fixed image list shown by the modal.
//!
//! Navigation wraps modularly, so `next` applied `count` times is the
//! identity and `next` then `previous` round-trips from any index. The modal
//! also carries its open flag here: the document-level key and touch
//! listeners stay registered for the life of the page, and the guard on
//! `open` is what keeps their stale events away from a closed viewer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    index: usize,
    count: usize,
    open: bool,
}

impl Lightbox {
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count,
            open: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the viewer on `index`. Indices come from rendering the fixed
    /// list, but an out-of-range value is still refused rather than trusted.
    pub fn open_at(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        self.index = index;
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Advance with wraparound; dead while the viewer is closed. Returns
    /// whether the index moved (the caller schedules the fade only then).
    pub fn next(&mut self) -> bool {
        if !self.open || self.count == 0 {
            return false;
        }
        self.index = (self.index + 1) % self.count;
        true
    }

    pub fn previous(&mut self) -> bool {
        if !self.open || self.count == 0 {
            return false;
        }
        self.index = (self.index + self.count - 1) % self.count;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNT: usize = 5;

    fn open_lightbox(index: usize) -> Lightbox {
        let mut lb = Lightbox::new(COUNT);
        assert!(lb.open_at(index));
        lb
    }

    #[test]
    fn starts_closed_at_zero() {
        let lb = Lightbox::new(COUNT);
        assert!(!lb.is_open());
        assert_eq!(lb.index(), 0);
    }

    #[test]
    fn open_at_sets_index_and_reveals() {
        let lb = open_lightbox(3);
        assert!(lb.is_open());
        assert_eq!(lb.index(), 3);
    }

    #[test]
    fn open_at_refuses_out_of_range() {
        let mut lb = Lightbox::new(COUNT);
        assert!(!lb.open_at(COUNT));
        assert!(!lb.is_open());
        assert_eq!(lb.index(), 0);
    }

    #[test]
    fn next_then_previous_round_trips_from_any_index() {
        for start in 0..COUNT {
            let mut lb = open_lightbox(start);
            assert!(lb.next());
            assert!(lb.previous());
            assert_eq!(lb.index(), start);
        }
    }

    #[test]
    fn count_nexts_is_identity() {
        for start in 0..COUNT {
            let mut lb = open_lightbox(start);
            for _ in 0..COUNT {
                lb.next();
            }
            assert_eq!(lb.index(), start);
        }
    }

    #[test]
    fn wraps_at_both_edges() {
        let mut lb = open_lightbox(COUNT - 1);
        lb.next();
        assert_eq!(lb.index(), 0);

        let mut lb = open_lightbox(0);
        lb.previous();
        assert_eq!(lb.index(), COUNT - 1);
    }

    #[test]
    fn navigation_is_dead_while_closed() {
        let mut lb = Lightbox::new(COUNT);
        assert!(!lb.next());
        assert!(!lb.previous());
        assert_eq!(lb.index(), 0);

        let mut lb = open_lightbox(2);
        lb.close();
        assert!(!lb.next());
        assert_eq!(lb.index(), 2);
    }

    #[test]
    fn reopen_overrides_previous_position() {
        let mut lb = open_lightbox(4);
        lb.close();
        assert!(lb.open_at(1));
        assert_eq!(lb.index(), 1);
    }
}
