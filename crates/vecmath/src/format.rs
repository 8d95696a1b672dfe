//! Conversion of vectors to and from text.
//!
//! The text form of a vector lists its components in order, separated by
//! `", "`, e.g. `1, 2.5, -3`. Formatting options such as precision are
//! applied to each component.

use crate::{error::ParseVectorError, num::Scalar, vector::Vector};
use std::{fmt, str::FromStr};

/// The separator between components in the text form of a vector.
pub const SEPARATOR: &str = ", ";

/// Formats the components of a vector with a custom separator. Created by
/// [`Vector::formatted_with_separator`].
#[derive(Clone, Copy, Debug)]
pub struct SeparatedComponents<'a, T, const N: usize> {
    vector: &'a Vector<T, N>,
    separator: &'a str,
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Parses a vector from its text form, with components separated by
    /// `", "`.
    ///
    /// # Errors
    /// See [`Self::parse_with_separator`].
    pub fn parse(text: &str) -> Result<Self, ParseVectorError> {
        Self::parse_with_separator(text, SEPARATOR)
    }

    /// Parses a vector from text where the components are separated by the
    /// given separator. Whitespace around each component is ignored.
    ///
    /// # Errors
    /// Returns [`ParseVectorError::ComponentCount`] if the text does not hold
    /// exactly `N` components, and [`ParseVectorError::InvalidComponent`] if a
    /// component can not be parsed as a `T`.
    pub fn parse_with_separator(text: &str, separator: &str) -> Result<Self, ParseVectorError> {
        Self::parse_components(text, separator)
            .inspect_err(|error| log::debug!("Rejected vector text {text:?}: {error}"))
    }

    fn parse_components(text: &str, separator: &str) -> Result<Self, ParseVectorError> {
        let found = text.split(separator).count();
        if found != N {
            return Err(ParseVectorError::ComponentCount { expected: N, found });
        }

        let mut components = [T::ZERO; N];
        for (index, (component, token)) in
            components.iter_mut().zip(text.split(separator)).enumerate()
        {
            let token = token.trim();
            *component = match token.parse() {
                Ok(value) => value,
                Err(_) => {
                    return Err(ParseVectorError::InvalidComponent {
                        index,
                        token: token.to_owned(),
                    });
                }
            };
        }

        Ok(Self::from_array(components))
    }

    /// Returns an object that formats the vector with the given separator
    /// between the components instead of `", "`.
    pub fn formatted_with_separator<'a>(
        &'a self,
        separator: &'a str,
    ) -> SeparatedComponents<'a, T, N> {
        SeparatedComponents {
            vector: self,
            separator,
        }
    }
}

fn write_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    components: &[T],
    separator: &str,
) -> fmt::Result {
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        fmt::Display::fmt(component, f)?;
    }
    Ok(())
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(f, self.as_slice(), SEPARATOR)
    }
}

impl<T: Scalar, const N: usize> fmt::Display for SeparatedComponents<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(f, self.vector.as_slice(), self.separator)
    }
}

impl<T: Scalar, const N: usize> FromStr for Vector<T, N> {
    type Err = ParseVectorError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}
