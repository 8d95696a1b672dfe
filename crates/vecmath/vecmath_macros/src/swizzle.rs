//! Generation of named swizzle accessors.

use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use syn::{Error, LitInt, Result};

/// The component name families, in component order.
const FAMILIES: [[char; 4]; 3] = [
    ['x', 'y', 'z', 'w'],
    ['r', 'g', 'b', 'a'],
    ['s', 't', 'p', 'q'],
];

const MAX_PATTERN_LEN: usize = 4;

pub(crate) fn impl_swizzles(input: &LitInt) -> Result<TokenStream> {
    let dim: usize = input.base10_parse()?;
    if !(2..=4).contains(&dim) {
        return Err(Error::new(
            input.span(),
            "swizzles can only be generated for vectors with 2, 3 or 4 components",
        ));
    }

    let mut methods = Vec::new();

    for letters in &FAMILIES {
        let letters = &letters[..dim];

        for (index, &letter) in letters.iter().enumerate() {
            methods.push(single_component_accessors(letter, index));
        }

        for len in 2..=MAX_PATTERN_LEN {
            for pattern in patterns(dim, len) {
                methods.push(swizzle_getter(letters, &pattern));
                if has_distinct_components(&pattern) {
                    methods.push(swizzle_setter(letters, &pattern));
                }
            }
        }
    }

    let dim = Literal::usize_unsuffixed(dim);

    Ok(quote! {
        impl<T: crate::num::Scalar> crate::vector::Vector<T, #dim> {
            #(#methods)*
        }
    })
}

/// Every sequence of `len` component indices below `dim`, in lexicographic
/// order.
fn patterns(dim: usize, len: usize) -> Vec<Vec<usize>> {
    let mut patterns = vec![Vec::new()];
    for _ in 0..len {
        patterns = patterns
            .into_iter()
            .flat_map(|prefix| {
                (0..dim).map(move |index| {
                    let mut pattern = prefix.clone();
                    pattern.push(index);
                    pattern
                })
            })
            .collect();
    }
    patterns
}

fn has_distinct_components(pattern: &[usize]) -> bool {
    pattern
        .iter()
        .enumerate()
        .all(|(i, index)| !pattern[..i].contains(index))
}

fn pattern_name(letters: &[char], pattern: &[usize]) -> String {
    pattern.iter().map(|&index| letters[index]).collect()
}

fn single_component_accessors(letter: char, index: usize) -> TokenStream {
    let getter = format_ident!("{}", letter);
    let getter_mut = format_ident!("{}_mut", letter);
    let setter = format_ident!("set_{}", letter);
    let index = Literal::usize_unsuffixed(index);

    let getter_doc = format!("The {letter}-component.");
    let getter_mut_doc = format!("A mutable reference to the {letter}-component.");
    let setter_doc = format!("Sets the {letter}-component.");

    quote! {
        #[doc = #getter_doc]
        #[inline]
        pub const fn #getter(&self) -> T {
            self.components()[#index]
        }

        #[doc = #getter_mut_doc]
        #[inline]
        pub fn #getter_mut(&mut self) -> &mut T {
            &mut self.components_mut()[#index]
        }

        #[doc = #setter_doc]
        #[inline]
        pub fn #setter(&mut self, value: T) {
            self.components_mut()[#index] = value;
        }
    }
}

fn swizzle_getter(letters: &[char], pattern: &[usize]) -> TokenStream {
    let name = pattern_name(letters, pattern);
    let getter = format_ident!("{}", name);
    let swizzle = format_ident!("swizzle{}", pattern.len());
    let len = Literal::usize_unsuffixed(pattern.len());
    let indices = pattern.iter().map(|&index| Literal::usize_unsuffixed(index));

    let doc = format!("Returns the `{name}` swizzle of the vector.");

    quote! {
        #[doc = #doc]
        #[inline]
        pub fn #getter(&self) -> crate::vector::Vector<T, #len> {
            self.#swizzle::<#(#indices),*>()
        }
    }
}

fn swizzle_setter(letters: &[char], pattern: &[usize]) -> TokenStream {
    let name = pattern_name(letters, pattern);
    let setter = format_ident!("set_{}", name);
    let set_swizzle = format_ident!("set_swizzle{}", pattern.len());
    let len = Literal::usize_unsuffixed(pattern.len());
    let indices = pattern.iter().map(|&index| Literal::usize_unsuffixed(index));

    let doc = format!(
        "Assigns the components of `value` to the `{name}` components of the vector, in order."
    );

    quote! {
        #[doc = #doc]
        #[inline]
        pub fn #setter(&mut self, value: crate::vector::Vector<T, #len>) {
            self.#set_swizzle::<#(#indices),*>(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_counts_match_dimension_powers() {
        assert_eq!(patterns(2, 2).len(), 4);
        assert_eq!(patterns(3, 3).len(), 27);
        assert_eq!(patterns(4, 4).len(), 256);
    }

    #[test]
    fn patterns_are_in_lexicographic_order() {
        assert_eq!(
            patterns(2, 2),
            vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
        );
    }

    #[test]
    fn only_patterns_without_repeats_are_distinct() {
        assert!(has_distinct_components(&[2, 0, 1]));
        assert!(!has_distinct_components(&[0, 1, 0]));
        assert_eq!(
            patterns(4, 4)
                .iter()
                .filter(|pattern| has_distinct_components(pattern))
                .count(),
            24
        );
    }

    #[test]
    fn pattern_names_use_family_letters() {
        assert_eq!(pattern_name(&FAMILIES[0], &[1, 0]), "yx");
        assert_eq!(pattern_name(&FAMILIES[1], &[0, 1, 2, 3]), "rgba");
        assert_eq!(pattern_name(&FAMILIES[2], &[3, 3]), "qq");
    }

    #[test]
    fn generating_for_unsupported_dimension_fails() {
        let input: LitInt = syn::parse_quote!(5);
        assert!(impl_swizzles(&input).is_err());
    }
}
