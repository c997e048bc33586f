//! Nesting queries over the sorted matcher arena.
//!
//! Nothing here is precomputed. Sorting places every interval after the
//! intervals containing it, and nested intervals never partially overlap,
//! so all descendants of a matcher form one contiguous run right after it.

use crate::lookup::LookupTable;

impl LookupTable {
    /// Indices of every matcher containing `offset`, outermost first.
    pub fn enclosing(&self, offset: usize) -> Vec<usize> {
        self.matchers
            .iter()
            .enumerate()
            .take_while(|(_, m)| m.begin() <= offset)
            .filter(|(_, m)| m.contains_offset(offset))
            .map(|(i, _)| i)
            .collect()
    }

    /// Index of the smallest matcher containing `offset`.
    pub fn innermost(&self, offset: usize) -> Option<usize> {
        self.enclosing(offset).last().copied()
    }

    /// Index of the closest matcher strictly before `idx` that contains it.
    pub fn parent(&self, idx: usize) -> Option<usize> {
        let child = self.matchers.get(idx)?;
        self.matchers[..idx].iter().rposition(|m| m.contains(child))
    }

    /// Indices of the matchers whose parent is `idx`, in table order.
    pub fn children(&self, idx: usize) -> Vec<usize> {
        let Some(parent) = self.matchers.get(idx) else {
            return Vec::new();
        };

        let mut children: Vec<usize> = Vec::new();
        for (j, m) in self.matchers.iter().enumerate().skip(idx + 1) {
            if !parent.contains(m) {
                break;
            }
            // Skip grandchildren: they sit inside the last direct child.
            if let Some(&last) = children.last() {
                if self.matchers[last].contains(m) {
                    continue;
                }
            }
            children.push(j);
        }
        children
    }

    /// Number of strict ancestors of `idx`; the root has depth 0.
    pub fn depth(&self, idx: usize) -> usize {
        let mut depth = 0;
        let mut cur = idx;
        while let Some(p) = self.parent(cur) {
            depth += 1;
            cur = p;
        }
        depth
    }

    /// Depth of every matcher, computed in a single pass.
    pub fn depths(&self) -> Vec<usize> {
        let mut open: Vec<usize> = Vec::new();
        let mut depths = Vec::with_capacity(self.matchers.len());
        for (i, m) in self.matchers.iter().enumerate() {
            while let Some(&top) = open.last() {
                if self.matchers[top].contains(m) {
                    break;
                }
                open.pop();
            }
            depths.push(open.len());
            open.push(i);
        }
        depths
    }
}
