//! Indentation depth tracking.

/// Current nesting depth plus the unit each level expands to.
#[derive(Debug, Clone)]
pub struct Indent {
    depth: usize,
    unit: String,
}

impl Indent {
    pub fn new(unit: impl Into<String>) -> Self {
        Self { depth: 0, unit: unit.into() }
    }

    #[inline]
    pub fn increase(&mut self) {
        self.depth += 1;
    }

    /// Panics if the depth is already zero; that is an unbalanced caller.
    #[inline]
    pub fn decrease(&mut self) {
        assert!(self.depth > 0, "indentation decreased below zero");
        self.depth -= 1;
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Write the prefix for the current depth into `out`.
    pub fn write_to(&self, out: &mut String) {
        for _ in 0..self.depth {
            out.push_str(&self.unit);
        }
    }

    pub fn prefix(&self) -> String {
        self.unit.repeat(self.depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::new("    ")
    }
}
