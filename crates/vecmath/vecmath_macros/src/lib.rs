//! Procedural macros for the `vecmath` crate.

mod swizzle;

use proc_macro::TokenStream;
use syn::{LitInt, parse_macro_input};

/// Generates the named component accessors and swizzles for vectors with the
/// given number of components.
///
/// For every component name family (`xyzw`, `rgba` and `stpq`) this emits
///
/// - `x()`, `x_mut()` and `set_x(value)` for each single component,
/// - a getter for every pattern of 2 to 4 letters referencing valid
///   components, with repetition allowed, returning a vector of the pattern's
///   length,
/// - a `set_<pattern>(value)` method for every pattern whose letters are
///   pairwise distinct.
///
/// Letters from different families are never mixed within one name.
///
/// ```ignore
/// impl_swizzles!(3);
/// ```
#[proc_macro]
pub fn impl_swizzles(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitInt);
    swizzle::impl_swizzles(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
