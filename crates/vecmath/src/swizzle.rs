//! Component access by name and swizzle pattern.
//!
//! Every component of a vector can be reached through three synonymous name
//! families: positional (`x, y, z, w`), color (`r, g, b, a`) and texture
//! coordinate (`s, t, p, q`). A swizzle reads an ordered selection of 1 to 4
//! components into a new vector, and may write one back when it names each
//! component at most once.
//!
//! Swizzles come in three forms:
//!
//! - Named methods such as [`Vector::yx`] and [`Vector::set_yx`], generated for
//!   every valid pattern.
//! - Const-generic methods such as [`Vector::swizzle3`], taking component
//!   indices checked at compile time. The [`BLANK`] index produces a zero
//!   component.
//! - [`Swizzle`] patterns parsed from strings at runtime, where `_` denotes a
//!   blank.

use crate::{error::SwizzleError, num::Scalar, vector::Vector};
use std::{fmt, str::FromStr};

/// Swizzle index producing the zero value of the kind instead of reading a
/// component.
pub const BLANK: usize = usize::MAX;

vecmath_macros::impl_swizzles!(2);
vecmath_macros::impl_swizzles!(3);
vecmath_macros::impl_swizzles!(4);

/// A component name family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameFamily {
    /// `x, y, z, w`
    Position,
    /// `r, g, b, a`
    Color,
    /// `s, t, p, q`
    Texture,
}

/// One position in a swizzle pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Reads the component with the given index.
    Component(usize),
    /// Produces the zero value of the kind.
    Blank,
}

/// A swizzle pattern with `M` slots, for applying swizzles chosen at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Swizzle<const M: usize> {
    slots: [Slot; M],
}

const BLANK_LETTER: char = '_';

impl NameFamily {
    pub const ALL: [Self; 3] = [Self::Position, Self::Color, Self::Texture];

    /// The letters of the family, in component order.
    pub const fn letters(self) -> [char; 4] {
        match self {
            Self::Position => ['x', 'y', 'z', 'w'],
            Self::Color => ['r', 'g', 'b', 'a'],
            Self::Texture => ['s', 't', 'p', 'q'],
        }
    }

    /// Finds the family the given letter belongs to, together with the index
    /// of the component it names.
    pub fn of_letter(letter: char) -> Option<(Self, usize)> {
        Self::ALL.into_iter().find_map(|family| {
            family
                .letters()
                .iter()
                .position(|&l| l == letter)
                .map(|index| (family, index))
        })
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    #[inline]
    const fn slot_value(&self, index: usize) -> T {
        if index == BLANK {
            T::ZERO
        } else {
            self.components()[index]
        }
    }

    /// Returns a 2-component vector built from the components with the given
    /// indices. An index may be [`BLANK`], giving zero at that position.
    ///
    /// Indices out of range fail to compile.
    #[inline]
    pub fn swizzle2<const I: usize, const J: usize>(&self) -> Vector<T, 2> {
        const {
            assert!(
                (I < N || I == BLANK) && (J < N || J == BLANK),
                "swizzle index out of range"
            );
        }
        Vector::from_array([self.slot_value(I), self.slot_value(J)])
    }

    /// Returns a 3-component vector built from the components with the given
    /// indices. An index may be [`BLANK`], giving zero at that position.
    ///
    /// Indices out of range fail to compile.
    #[inline]
    pub fn swizzle3<const I: usize, const J: usize, const K: usize>(&self) -> Vector<T, 3> {
        const {
            assert!(
                (I < N || I == BLANK) && (J < N || J == BLANK) && (K < N || K == BLANK),
                "swizzle index out of range"
            );
        }
        Vector::from_array([self.slot_value(I), self.slot_value(J), self.slot_value(K)])
    }

    /// Returns a 4-component vector built from the components with the given
    /// indices. An index may be [`BLANK`], giving zero at that position.
    ///
    /// Indices out of range fail to compile.
    #[inline]
    pub fn swizzle4<const I: usize, const J: usize, const K: usize, const L: usize>(
        &self,
    ) -> Vector<T, 4> {
        const {
            assert!(
                (I < N || I == BLANK)
                    && (J < N || J == BLANK)
                    && (K < N || K == BLANK)
                    && (L < N || L == BLANK),
                "swizzle index out of range"
            );
        }
        Vector::from_array([
            self.slot_value(I),
            self.slot_value(J),
            self.slot_value(K),
            self.slot_value(L),
        ])
    }

    /// Writes the components of `value` to the components with the given
    /// indices, in order. Other components are left unchanged.
    ///
    /// The indices must be distinct and in range, otherwise this fails to
    /// compile.
    #[inline]
    pub fn set_swizzle2<const I: usize, const J: usize>(&mut self, value: Vector<T, 2>) {
        const {
            assert!(I < N && J < N, "swizzle index out of range");
            assert!(I != J, "swizzle write repeats a component");
        }
        let components = self.components_mut();
        components[I] = value.x();
        components[J] = value.y();
    }

    /// Writes the components of `value` to the components with the given
    /// indices, in order. Other components are left unchanged.
    ///
    /// The indices must be distinct and in range, otherwise this fails to
    /// compile.
    #[inline]
    pub fn set_swizzle3<const I: usize, const J: usize, const K: usize>(
        &mut self,
        value: Vector<T, 3>,
    ) {
        const {
            assert!(I < N && J < N && K < N, "swizzle index out of range");
            assert!(I != J && I != K && J != K, "swizzle write repeats a component");
        }
        let components = self.components_mut();
        components[I] = value.x();
        components[J] = value.y();
        components[K] = value.z();
    }

    /// Writes the components of `value` to the components with the given
    /// indices, in order. Other components are left unchanged.
    ///
    /// The indices must be distinct and in range, otherwise this fails to
    /// compile.
    #[inline]
    pub fn set_swizzle4<const I: usize, const J: usize, const K: usize, const L: usize>(
        &mut self,
        value: Vector<T, 4>,
    ) {
        const {
            assert!(I < N && J < N && K < N && L < N, "swizzle index out of range");
            assert!(
                I != J && I != K && I != L && J != K && J != L && K != L,
                "swizzle write repeats a component"
            );
        }
        let components = self.components_mut();
        components[I] = value.x();
        components[J] = value.y();
        components[K] = value.z();
        components[L] = value.w();
    }
}

impl<const M: usize> Swizzle<M> {
    /// Creates a swizzle with the given slots. Component indices are checked
    /// against the vector's length when the swizzle is applied.
    pub const fn new(slots: [Slot; M]) -> Self {
        const {
            assert!(M >= 1 && M <= 4, "swizzles have 1 to 4 slots");
        }
        Self { slots }
    }

    /// Parses a swizzle pattern of exactly `M` letters.
    ///
    /// The letters must come from a single [`NameFamily`], except for `_`,
    /// which denotes a blank slot and may appear with any family.
    ///
    /// # Errors
    /// Returns an error if the pattern has the wrong length, contains a letter
    /// that is not a component name, or mixes name families.
    pub fn parse(pattern: &str) -> Result<Self, SwizzleError> {
        Self::parse_slots(pattern)
            .map(Self::new)
            .inspect_err(|error| log::debug!("Rejected swizzle pattern {pattern:?}: {error}"))
    }

    fn parse_slots(pattern: &str) -> Result<[Slot; M], SwizzleError> {
        let found = pattern.chars().count();
        if found != M {
            return Err(SwizzleError::InvalidLength {
                pattern: pattern.to_owned(),
                expected: M,
                found,
            });
        }

        let mut slots = [Slot::Blank; M];
        let mut pattern_family = None;

        for (slot, letter) in slots.iter_mut().zip(pattern.chars()) {
            if letter == BLANK_LETTER {
                continue;
            }

            let (family, index) =
                NameFamily::of_letter(letter).ok_or_else(|| SwizzleError::InvalidLetter {
                    pattern: pattern.to_owned(),
                    letter,
                })?;

            if *pattern_family.get_or_insert(family) != family {
                return Err(SwizzleError::MixedFamilies {
                    pattern: pattern.to_owned(),
                });
            }

            *slot = Slot::Component(index);
        }

        Ok(slots)
    }

    pub const fn slots(&self) -> &[Slot; M] {
        &self.slots
    }

    /// Whether the swizzle can be written through, which requires every slot
    /// to name a distinct component.
    pub fn is_writable(&self) -> bool {
        self.slots.iter().enumerate().all(|(i, slot)| match slot {
            Slot::Component(_) => !self.slots[..i].contains(slot),
            Slot::Blank => false,
        })
    }

    /// Reads the swizzled components of the given vector.
    ///
    /// # Errors
    /// Returns [`SwizzleError::ComponentOutOfRange`] if a slot names a
    /// component the vector does not have.
    pub fn read<T: Scalar, const N: usize>(
        &self,
        vector: &Vector<T, N>,
    ) -> Result<Vector<T, M>, SwizzleError> {
        let mut components = [T::ZERO; M];
        for (component, slot) in components.iter_mut().zip(&self.slots) {
            if let Slot::Component(index) = *slot {
                *component = vector
                    .components()
                    .get(index)
                    .copied()
                    .ok_or(SwizzleError::ComponentOutOfRange { index, len: N })?;
            }
        }
        Ok(Vector::from_array(components))
    }

    /// Assigns the components of `value` to the components of `vector` named
    /// by the slots, in order. Other components are left unchanged.
    ///
    /// # Errors
    /// Returns [`SwizzleError::NotWritable`] if the swizzle repeats a component
    /// or has a blank slot, and [`SwizzleError::ComponentOutOfRange`] if a
    /// slot names a component the vector does not have. The vector is not
    /// modified on error.
    pub fn write<T: Scalar, const N: usize>(
        &self,
        vector: &mut Vector<T, N>,
        value: &Vector<T, M>,
    ) -> Result<(), SwizzleError> {
        if !self.is_writable() {
            return Err(SwizzleError::NotWritable);
        }
        for slot in &self.slots {
            if let Slot::Component(index) = *slot
                && index >= N
            {
                return Err(SwizzleError::ComponentOutOfRange { index, len: N });
            }
        }
        for (slot, &component) in self.slots.iter().zip(value) {
            if let Slot::Component(index) = *slot {
                vector[index] = component;
            }
        }
        Ok(())
    }
}

impl<const M: usize> FromStr for Swizzle<M> {
    type Err = SwizzleError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Self::parse(pattern)
    }
}

impl<const M: usize> fmt::Display for Swizzle<M> {
    /// Writes the pattern using the positional letters. A slot naming a
    /// component beyond the fourth has no letter and is written as its index
    /// in brackets, e.g. `[5]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = NameFamily::Position.letters();
        for slot in &self.slots {
            match *slot {
                Slot::Component(index) => match letters.get(index) {
                    Some(letter) => write!(f, "{letter}")?,
                    None => write!(f, "[{index}]")?,
                },
                Slot::Blank => write!(f, "{BLANK_LETTER}")?,
            }
        }
        Ok(())
    }
}
