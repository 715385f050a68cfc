//! classList Adapter
//!
//! Set-like view over an element's class attribute. Nothing is cached: every
//! call re-reads the attribute, and mutators write the result straight back.

use crate::config::Config;
use crate::error::{ClassListError, Method, Result};
use crate::host::{ClassAccess, ClassHost};
use crate::token::{self, TokenList};
use crate::value::{RemoveArg, TokenArg};

/// Wrap an element, like `classList(el)`
pub fn class_list<H: ClassHost + ?Sized>(host: &mut H) -> Result<ClassList<'_, H>> {
    ClassList::new(host)
}

/// classList over a borrowed host element
#[derive(Debug)]
pub struct ClassList<'a, H: ClassHost + ?Sized> {
    host: &'a mut H,
    access: ClassAccess,
    config: Config,
}

impl<'a, H: ClassHost + ?Sized> ClassList<'a, H> {
    /// Wrap a host with the default configuration
    pub fn new(host: &'a mut H) -> Result<Self> {
        Self::with_config(host, Config::default())
    }

    /// Wrap a host, failing if it exposes neither `className` nor attributes
    pub fn with_config(host: &'a mut H, config: Config) -> Result<Self> {
        let Some(access) = ClassAccess::probe(&*host) else {
            tracing::debug!("{} rejected a non-element host", config.interface_name);
            return Err(ClassListError::NotAnElement {
                interface: config.interface_name,
            });
        };
        Ok(Self { host, access, config })
    }

    /// Capability used to reach the class string
    pub fn access(&self) -> ClassAccess {
        self.access
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Raw class attribute string (empty if absent)
    pub fn value(&self) -> &str {
        self.access.read(&*self.host).unwrap_or("")
    }

    /// Overwrite the class attribute string as-is
    pub fn set_value(&mut self, value: &str) {
        self.write_raw("value", value);
    }

    /// Tokens as currently present in the attribute, duplicates included
    pub fn to_array(&self) -> Vec<String> {
        self.tokens().into_vec()
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        let mut tokens = self.tokens();
        tokens.dedup();
        tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        token::tokenize(self.value()).next().is_none()
    }

    /// Distinct token at index
    pub fn item(&self, index: usize) -> Option<String> {
        let mut tokens = self.tokens();
        tokens.dedup();
        tokens.item(index).map(str::to_string)
    }

    /// Add a token if absent
    pub fn add<'t>(&mut self, token: impl Into<TokenArg<'t>>) -> Result<()> {
        let token = self.validate(Method::Add, token.into())?;
        let mut tokens = self.tokens();
        if tokens.add(token) {
            self.write(Method::Add, &tokens);
        }
        Ok(())
    }

    /// Add several tokens in one write; nothing changes if any is invalid
    pub fn add_all<'t, I, T>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<TokenArg<'t>>,
    {
        let valid = self.validate_all(Method::Add, tokens)?;
        let mut list = self.tokens();
        let mut changed = false;
        for token in valid {
            changed |= list.add(token);
        }
        if changed {
            self.write(Method::Add, &list);
        }
        Ok(())
    }

    /// Remove a token, or every token matching a pattern
    pub fn remove<'t>(&mut self, arg: impl Into<RemoveArg<'t>>) -> Result<()> {
        let mut tokens = self.tokens();
        match arg.into() {
            RemoveArg::Token(arg) => {
                let token = self.validate(Method::Remove, arg)?;
                tokens.remove(token);
            }
            RemoveArg::Pattern(pattern) => {
                tokens.retain(|t| !pattern.is_match(t));
            }
        }
        self.write(Method::Remove, &tokens);
        Ok(())
    }

    /// Remove several tokens in one write; nothing changes if any is invalid
    pub fn remove_all<'t, I, T>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<TokenArg<'t>>,
    {
        let valid = self.validate_all(Method::Remove, tokens)?;
        let mut list = self.tokens();
        list.retain(|t| !valid.iter().any(|v| *v == t));
        self.write(Method::Remove, &list);
        Ok(())
    }

    /// Toggle a token; `force` pins the outcome. Returns whether it is present.
    pub fn toggle<'t>(&mut self, token: impl Into<TokenArg<'t>>, force: Option<bool>) -> Result<bool> {
        let token = self.validate(Method::Toggle, token.into())?;
        let mut tokens = self.tokens();
        let present = tokens.contains(token);
        let result = tokens.toggle(token, force);
        // Removal always rewrites, like `remove`; only a no-op add is skipped
        if !(result && present) {
            self.write(Method::Toggle, &tokens);
        }
        Ok(result)
    }

    /// Check if a token is present
    pub fn contains<'t>(&self, token: impl Into<TokenArg<'t>>) -> Result<bool> {
        let token = self.validate(Method::Contains, token.into())?;
        Ok(token::tokenize(self.value()).any(|t| t == token))
    }

    /// Replace `old` with `new`. Returns false (and writes nothing) if `old` is absent.
    pub fn replace<'t, 'u>(
        &mut self,
        old: impl Into<TokenArg<'t>>,
        new: impl Into<TokenArg<'u>>,
    ) -> Result<bool> {
        let old = self.validate(Method::Replace, old.into())?;
        let new = self.validate(Method::Replace, new.into())?;
        let mut tokens = self.tokens();
        if !tokens.replace(old, new) {
            return Ok(false);
        }
        self.write(Method::Replace, &tokens);
        Ok(true)
    }

    fn tokens(&self) -> TokenList {
        let value = self.value();
        tracing::trace!("{} read: {:?}", self.config.interface_name, value);
        TokenList::parse(value)
    }

    fn validate<'t>(&self, method: Method, arg: TokenArg<'t>) -> Result<&'t str> {
        token::validate(arg).map_err(|invalid| {
            let err = invalid.into_error(&self.config.interface_name, method);
            tracing::debug!("{}", err);
            err
        })
    }

    fn validate_all<'t, I, T>(&self, method: Method, tokens: I) -> Result<Vec<&'t str>>
    where
        I: IntoIterator<Item = T>,
        T: Into<TokenArg<'t>>,
    {
        tokens
            .into_iter()
            .map(|t| self.validate(method, t.into()))
            .collect()
    }

    fn write(&mut self, method: Method, tokens: &TokenList) {
        self.write_raw(method.as_str(), &tokens.value());
    }

    fn write_raw(&mut self, op: &str, value: &str) {
        tracing::debug!("{}.{} wrote {:?}", self.config.interface_name, op, value);
        self.access
            .write(&mut *self.host, value, self.config.clear_empty_attribute);
    }
}
