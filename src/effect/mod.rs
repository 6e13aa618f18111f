//! Effect system: deferred side effects.
//!
//! - [`IO`]: A description of a side effect, executed only by [`IO::exec`]
//!
//! # Examples
//!
//! ```rust
//! use monads::effect::IO;
//!
//! let greeting = IO::new(|| "Hello").map(|x| format!("{x} world!"));
//! assert_eq!(greeting.exec(), "Hello world!");
//! ```

mod io;

pub use io::IO;
