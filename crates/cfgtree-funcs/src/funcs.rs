/*
 * funcs.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The functions a template calls, with template-shaped arguments.
//!
//! Templates pass every argument as a [`Value`], so each function checks
//! shapes here and reports mismatches as [`FuncError::InvalidArgument`]
//! before handing off to `cfgtree`.

use crate::error::{FuncError, FuncResult};
use crate::redirect::{HttpRedirectResolver, RedirectResolver};
use cfgtree::{JsonDecoder, Mapping, ResolvedPath, TextDecoder, Value};

/// Template functions over config trees.
///
/// Text decoding and redirect resolution are pluggable; [`TemplateFuncs::new`]
/// uses JSON and real HTTP requests.
pub struct TemplateFuncs {
    decoder: Box<dyn TextDecoder + Send + Sync>,
    redirects: Box<dyn RedirectResolver + Send + Sync>,
}

impl Default for TemplateFuncs {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TemplateFuncs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateFuncs").finish_non_exhaustive()
    }
}

/// Interpret a template argument as a tree. `Null` means "no tree yet".
fn dict_arg(func: &'static str, dict: Value) -> FuncResult<Option<Mapping>> {
    match dict {
        Value::Null => Ok(None),
        Value::Mapping(map) => Ok(Some(map)),
        other => {
            tracing::debug!(func, found = other.type_name(), "dict argument is not a map");
            Err(FuncError::InvalidArgument {
                func,
                expected: "map",
                found: other.type_name(),
            })
        }
    }
}

fn path_err(func: &'static str) -> impl FnOnce(cfgtree::PathError) -> FuncError {
    move |source| FuncError::Path { func, source }
}

impl TemplateFuncs {
    pub fn new() -> Self {
        Self {
            decoder: Box::new(JsonDecoder),
            redirects: Box::new(HttpRedirectResolver::default()),
        }
    }

    /// Replace the decoder used by [`TemplateFuncs::from_json`].
    pub fn with_decoder(mut self, decoder: impl TextDecoder + Send + Sync + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    /// Replace the resolver used by [`TemplateFuncs::get_redirected_url`].
    pub fn with_redirect_resolver(
        mut self,
        resolver: impl RedirectResolver + Send + Sync + 'static,
    ) -> Self {
        self.redirects = Box::new(resolver);
        self
    }

    /// `resolvePath`: split a path into ancestors and leaf.
    pub fn resolve_path(&self, path: &Value) -> FuncResult<ResolvedPath> {
        cfgtree::resolve_path(path).map_err(path_err("resolvePath"))
    }

    /// `getValueAtPath`: the value at `path`, or `Null` if nothing is there.
    pub fn get_value_at_path(&self, path: &Value, dict: &Value) -> FuncResult<Value> {
        const FUNC: &str = "getValueAtPath";
        let empty = Mapping::new();
        let tree = match dict {
            Value::Null => &empty,
            Value::Mapping(map) => map,
            other => {
                return Err(FuncError::InvalidArgument {
                    func: FUNC,
                    expected: "map",
                    found: other.type_name(),
                });
            }
        };
        let located = cfgtree::navigate(tree, path).map_err(path_err(FUNC))?;
        Ok(located
            .and_then(|located| located.value().cloned())
            .unwrap_or_default())
    }

    /// `setValueAtPath`: store `value` at `path` in `dict` and return the
    /// updated dict. A `Null` dict starts out empty.
    pub fn set_value_at_path(&self, path: &Value, value: Value, dict: Value) -> FuncResult<Value> {
        const FUNC: &str = "setValueAtPath";
        let tree = dict_arg(FUNC, dict)?.unwrap_or_default();
        let updated = cfgtree::set_value_at_path(path, value, tree).map_err(path_err(FUNC))?;
        Ok(Value::Mapping(updated))
    }

    /// `deleteValueAtPath`: remove the value at `path` from `dict`.
    ///
    /// Deleting something that is not there returns `dict` as it was,
    /// including a `Null` dict.
    pub fn delete_value_at_path(&self, path: &Value, dict: Value) -> FuncResult<Value> {
        const FUNC: &str = "deleteValueAtPath";
        match dict_arg(FUNC, dict)? {
            Some(tree) => {
                let updated = cfgtree::delete_value_at_path(path, tree).map_err(path_err(FUNC))?;
                Ok(Value::Mapping(updated))
            }
            None => {
                let resolved = cfgtree::resolve_path(path).map_err(path_err(FUNC))?;
                tracing::debug!(path = %resolved.dotted(), "no dict to delete from");
                Ok(Value::Null)
            }
        }
    }

    /// `pruneEmptyDicts`: drop every empty nested dict.
    pub fn prune_empty_dicts(&self, dict: Value) -> FuncResult<Value> {
        Ok(match dict_arg("pruneEmptyDicts", dict)? {
            Some(tree) => Value::Mapping(cfgtree::prune_empty_mappings(tree)),
            None => Value::Null,
        })
    }

    /// `toIni`: serialize a dict as INI text.
    pub fn to_ini(&self, dict: Value) -> FuncResult<String> {
        let tree = dict_arg("toIni", dict)?.unwrap_or_default();
        Ok(cfgtree::ini::encode(&tree))
    }

    /// `fromIni`: parse INI text into a dict of strings.
    pub fn from_ini(&self, text: &str) -> FuncResult<Value> {
        cfgtree::ini::decode(text)
            .map(Value::Mapping)
            .map_err(|source| FuncError::Ini {
                func: "fromIni",
                source,
            })
    }

    /// `fromJson`: decode text with the configured decoder.
    pub fn from_json(&self, text: &str) -> FuncResult<Value> {
        self.decoder
            .decode_text(text)
            .map_err(|source| FuncError::Decode {
                func: "fromJson",
                source,
            })
    }

    /// `quote`: double-quote each value, space separated.
    pub fn quote(&self, values: &[Value]) -> String {
        cfgtree::quote(values)
    }

    /// `squote`: single-quote each value, space separated.
    pub fn squote(&self, values: &[Value]) -> String {
        cfgtree::squote(values)
    }

    /// `quoteList`: double-quote each value separately.
    pub fn quote_list(&self, values: &[Value]) -> Vec<String> {
        cfgtree::quote_list(values)
    }

    /// `needsQuote`: whether INI output would quote `s`.
    pub fn needs_quote(&self, s: &str) -> bool {
        cfgtree::needs_quote(s)
    }

    /// `getRedirectedURL`: where `url` ends up after following redirects.
    pub fn get_redirected_url(&self, url: &str) -> FuncResult<String> {
        self.redirects
            .resolve_final_url(url)
            .map_err(|source| FuncError::Redirect {
                func: "getRedirectedURL",
                source,
            })
    }
}
