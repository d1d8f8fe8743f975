//! A tunable parameter whose value is read from an environment variable,
//! falling back to a compile-time default. Mirrors the pattern used
//! throughout the solver for flags such as the LCP encoder's symmetry
//! breaking mode: a `static EnvParam<T>` declared next to the code it
//! tunes, parsed once per `get()` call so tests can override the
//! environment and observe the new value without restarting anything.

use std::fmt::Debug;
use std::marker::PhantomData;
use std::str::FromStr;

pub struct EnvParam<T> {
    var_name: &'static str,
    default: &'static str,
    _marker: PhantomData<T>,
}

impl<T> EnvParam<T> {
    pub const fn new(var_name: &'static str, default: &'static str) -> Self {
        EnvParam {
            var_name,
            default,
            _marker: PhantomData,
        }
    }
}

impl<T: FromStr> EnvParam<T>
where
    T::Err: Debug,
{
    /// Reads the environment variable, parsing it as `T`. Falls back to the
    /// default if unset; panics if set but unparsable, since a malformed
    /// tuning knob is a configuration error the operator should see
    /// immediately rather than have silently ignored.
    pub fn get(&self) -> T {
        match std::env::var(self.var_name) {
            Ok(value) => value
                .parse()
                .unwrap_or_else(|e| panic!("invalid value for {}: {:?} ({:?})", self.var_name, value, e)),
            Err(_) => self
                .default
                .parse()
                .unwrap_or_else(|e| panic!("invalid default for {}: {:?} ({:?})", self.var_name, self.default, e)),
        }
    }

    /// Like [`Self::get`] but an explicit override takes precedence over
    /// both the environment and the default. Used where a caller passes a
    /// per-call `Option<usize>` budget that should win when present.
    pub fn get_or(&self, override_value: Option<T>) -> T {
        override_value.unwrap_or_else(|| self.get())
    }
}
