//! Complete monads from minimal definitions.
//!
//! Supply `point` plus either `bind` or `map` and `join` to a [`Definition`];
//! [`Definition::build`] checks that once and derives the rest (`bind`, `map`,
//! `join`, `ap` and `lift_a2`) from the standard identities.
//!
//! ```
//! use monad_builder::monads::vec::vec_monad;
//! use monad_builder::{func, Kleisli};
//!
//! let m = vec_monad().unwrap();
//! let strs = m.bind(vec![3, 7], Kleisli::new(|x: i64| vec![x.to_string(), (x + 3).to_string()]));
//! assert_eq!(strs, vec!["3", "6", "7", "10"]);
//!
//! let pairs = m.lift_a2(vec![3, 7], vec![1, 2], func(|x: i64| func(move |y: i64| (x, y))));
//! assert_eq!(pairs, vec![(3, 1), (7, 1), (3, 2), (7, 2)]);
//! ```

pub mod builder;
pub mod curry;
pub mod derived;
pub mod error;
pub mod kind;
pub mod monad;
pub mod monads;
pub mod ops;

pub use builder::{Definition, Supplied};
pub use error::{InvalidDefinition, Result};
pub use kind::{func, Element, Func, Kind, Kleisli};
pub use monad::Monad;
pub use ops::{Absent, Ap, Bind, Join, Map, Op, Point};
