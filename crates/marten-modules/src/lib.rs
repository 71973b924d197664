//! Built-in module registration for the Marten runtime.
//!
//! The interpreter's module loader consults a single frozen table to decide
//! whether a name refers to a built-in module and, if so, which initializer
//! constructs it. Entries without an initializer reserve the name for a
//! module the interpreter core constructs itself during bootstrap; the
//! loader must skip initialization for those rather than treat them as
//! missing.
//!
//! # Usage
//!
//! ```
//! use marten_modules::Inittab;
//!
//! let table = Inittab::standard()?;
//! assert!(table.contains("math"));
//! assert!(table.lookup("no-such-module").is_none());
//! # Ok::<(), marten_modules::InittabError>(())
//! ```

pub mod builtins;
pub mod entry;
pub mod error;
pub mod module;
pub mod table;

pub use builtins::{STANDARD_INITTAB, standard_module_names};
pub use entry::{InittabEntry, ModuleEntry};
pub use error::InittabError;
pub use module::{InitResult, ModuleInitFn, NativeModule};
pub use table::{Inittab, InittabBuilder};
