use smallvec::SmallVec;

/// What a toggle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
    /// Nothing changed: the set is at capacity, or the flow is no longer
    /// accepting selections.
    Rejected,
}

impl Toggle {
    pub fn changed(self) -> bool {
        !matches!(self, Toggle::Rejected)
    }
}

/// Insertion-ordered set of titles with a hard cap.
///
/// `len() <= capacity()` holds after every call.
#[derive(Clone, Debug)]
pub struct InterestSet {
    items: SmallVec<[String; 8]>,
    cap: usize,
}

impl InterestSet {
    pub fn new(cap: usize) -> Self {
        Self {
            items: SmallVec::new(),
            cap,
        }
    }

    pub fn toggle(&mut self, title: &str) -> Toggle {
        if let Some(pos) = self.items.iter().position(|t| t == title) {
            self.items.remove(pos);
            Toggle::Removed
        } else if self.items.len() < self.cap {
            self.items.push(title.to_string());
            Toggle::Added
        } else {
            Toggle::Rejected
        }
    }

    pub fn contains(&self, title: &str) -> bool {
        self.items.iter().any(|t| t == title)
    }

    /// Selected titles can always be toggled off; others only below the cap.
    pub fn is_selectable(&self, title: &str) -> bool {
        self.contains(title) || !self.is_full()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.cap
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_exceeds_cap() {
        let mut s = InterestSet::new(3);
        let titles = ["a", "b", "c", "d", "a", "e", "b", "f", "g", "c", "a"];
        for t in titles {
            s.toggle(t);
            assert!(s.len() <= 3);
        }
    }

    #[test]
    fn remove_allowed_at_capacity() {
        let mut s = InterestSet::new(2);
        assert_eq!(s.toggle("x"), Toggle::Added);
        assert_eq!(s.toggle("y"), Toggle::Added);
        assert_eq!(s.toggle("z"), Toggle::Rejected);
        assert!(s.is_full());
        assert!(!s.is_selectable("z"));
        assert!(s.is_selectable("x"));

        assert_eq!(s.toggle("x"), Toggle::Removed);
        assert_eq!(s.as_slice(), ["y".to_string()]);
        assert_eq!(s.toggle("z"), Toggle::Added);
        assert_eq!(s.to_vec(), vec!["y".to_string(), "z".to_string()]);
    }

    #[test]
    fn zero_cap_rejects_everything() {
        let mut s = InterestSet::new(0);
        assert_eq!(s.toggle("x"), Toggle::Rejected);
        assert!(s.is_empty());
        assert!(!Toggle::Rejected.changed());
    }
}
