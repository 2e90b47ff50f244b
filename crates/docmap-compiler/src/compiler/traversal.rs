/// Traversal state for one position in the embedding tree.
///
/// Each embedding derives a fresh child context, so a bound tightened in one
/// branch never leaks into its siblings.
#[derive(Debug, Clone)]
pub(crate) struct Traversal {
    pub is_root: bool,
    /// Dotted prefix path from the root, e.g. `Addresses.Country.`.
    pub path: String,
    pub depth: u32,
    /// `None` means unlimited.
    pub max_depth: Option<u32>,
    /// Types currently being expanded on the path from the root.
    processed: Vec<String>,
}

impl Traversal {
    pub fn root(root: &str, max_depth: Option<u32>) -> Self {
        Self {
            is_root: true,
            path: String::new(),
            depth: 0,
            max_depth,
            processed: vec![root.to_string()],
        }
    }

    /// Context for expanding an embedding declared with `declared_depth`
    /// under `prefix`. A missing or zero bound is unlimited.
    pub fn embed(&self, declared_depth: Option<u32>, prefix: &str) -> Self {
        let potential = declared_depth
            .filter(|d| *d > 0)
            .and_then(|d| d.checked_add(self.depth));
        let max_depth = match (self.max_depth, potential) {
            (Some(current), Some(potential)) => Some(current.min(potential)),
            (current, None) => current,
            (None, potential) => potential,
        };

        Self {
            is_root: false,
            path: format!("{}{prefix}", self.path),
            depth: self.depth + 1,
            max_depth,
            processed: self.processed.clone(),
        }
    }

    /// Whether expanding `type_name` here would recurse without end.
    pub fn is_cycle(&self, type_name: &str) -> bool {
        self.max_depth.is_none() && self.processed.iter().any(|t| t == type_name)
    }

    pub fn within_bound(&self) -> bool {
        self.max_depth.map_or(true, |max| self.depth <= max)
    }

    pub fn enter(mut self, type_name: &str) -> Self {
        self.processed.push(type_name.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_embedding_stays_unbounded() {
        let root = Traversal::root("A", None);
        let child = root.embed(None, "a.");
        assert_eq!(child.depth, 1);
        assert_eq!(child.max_depth, None);
        assert!(child.within_bound());
        assert!(child.is_cycle("A"));
        assert_eq!(child.path, "a.");
    }

    #[test]
    fn test_bound_is_relative_to_current_depth() {
        let root = Traversal::root("A", None);
        let first = root.embed(Some(2), "a.").enter("B");
        assert_eq!(first.max_depth, Some(2));
        assert!(!first.is_cycle("A"));

        // A looser bound deeper down can not relax the ceiling.
        let second = first.embed(Some(5), "b.");
        assert_eq!(second.max_depth, Some(2));
        assert!(second.within_bound());

        let third = second.enter("C").embed(None, "c.");
        assert_eq!(third.depth, 3);
        assert!(!third.within_bound());
        assert_eq!(third.path, "a.b.c.");
    }

    #[test]
    fn test_zero_bound_is_unlimited() {
        let root = Traversal::root("A", None);
        assert_eq!(root.embed(Some(0), "x.").max_depth, None);
    }

    #[test]
    fn test_global_ceiling_applies() {
        let root = Traversal::root("A", Some(1));
        let child = root.embed(None, "a.");
        assert_eq!(child.max_depth, Some(1));
        assert!(child.within_bound());
        assert!(!child.is_cycle("A"));
        assert!(!child.embed(None, "b.").within_bound());
    }

    #[test]
    fn test_siblings_do_not_share_state() {
        let root = Traversal::root("A", None);
        let tight = root.embed(Some(1), "x.").enter("X");
        let loose = root.embed(None, "y.");
        assert_eq!(tight.max_depth, Some(1));
        assert_eq!(loose.max_depth, None);
        assert!(!loose.is_cycle("X"));
    }
}
