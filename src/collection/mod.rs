//! Typed result collections.
//!
//! Each collection is an immutable value wrapper around the list produced
//! by one query call. Combinators (`merge`, `add`, `filter`, ...) return new
//! collections and leave their sources untouched wherever the element type
//! is cheap to clone; [`ObjectCollection`] holds full sub-finders and uses
//! consuming combinators instead.

mod element;
mod object;
mod string;

pub use element::ElementCollection;
pub use object::ObjectCollection;
pub use string::StringCollection;
