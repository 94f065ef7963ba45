pub mod stack;

pub use stack::VertexStack;
