// Concrete monads, each given as a minimal definition and completed by the
// builder.
pub mod monoid;
pub mod option;
pub mod reader;
pub mod vec;
pub mod writer;
