/// A last-in-first-out stack of vertex handles used while walking predecessor chains
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexStack {
    items: Vec<usize>,
}

impl VertexStack {
    /// Creates a new empty stack
    pub fn new() -> Self {
        VertexStack { items: Vec::new() }
    }

    /// Creates an empty stack able to hold `capacity` handles without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        VertexStack {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, vertex: usize) {
        self.items.push(vertex);
    }

    /// Removes and returns the most recently pushed handle
    pub fn pop(&mut self) -> Option<usize> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<usize> {
        self.items.last().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pops every element, returning them in pop order (last pushed first)
    pub fn drain_lifo(&mut self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Some(vertex) = self.pop() {
            out.push(vertex);
        }
        out
    }
}
