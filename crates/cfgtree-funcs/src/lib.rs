/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template functions over `cfgtree` values.
//!
//! [`TemplateFuncs`] is what a template engine registers: every function
//! takes [`Value`](cfgtree::Value) arguments the way a template passes them,
//! checks their shape and delegates to `cfgtree`. Errors name the template
//! function that failed, so that `setValueAtPath: empty path` can be shown
//! to a user as-is.
//!
//! Two collaborators are pluggable:
//!
//! - [`cfgtree::TextDecoder`] backs `fromJson` ([`cfgtree::JsonDecoder`] by default)
//! - [`RedirectResolver`] backs `getRedirectedURL` ([`HttpRedirectResolver`] by default)
//!
//! # Example
//!
//! ```
//! use cfgtree::Value;
//! use cfgtree_funcs::TemplateFuncs;
//!
//! let funcs = TemplateFuncs::new();
//! let dict = funcs.set_value_at_path(&Value::from("core.editor"), Value::from("vim"), Value::Null)?;
//! assert_eq!(funcs.to_ini(dict)?, "\n[core]\neditor = vim\n");
//! # Ok::<(), cfgtree_funcs::FuncError>(())
//! ```

pub mod error;
pub mod funcs;
pub mod redirect;

pub use error::{FuncError, FuncResult, RedirectError, RedirectResult};
pub use funcs::TemplateFuncs;
pub use redirect::{HttpRedirectResolver, RedirectConfig, RedirectResolver};
