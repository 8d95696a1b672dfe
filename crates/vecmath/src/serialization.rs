//! Serialization of vectors as fixed-length tuples of their components.

use crate::{num::Scalar, vector::Vector};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, SeqAccess, Visitor},
    ser::SerializeTuple,
};
use std::{fmt, marker::PhantomData};

impl<T: Scalar + Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(N)?;
        for component in self {
            tuple.serialize_element(component)?;
        }
        tuple.end()
    }
}

impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(N, ComponentVisitor(PhantomData))
    }
}

struct ComponentVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Visitor<'de> for ComponentVisitor<T, N> {
    type Value = Vector<T, N>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a sequence of {N} vector components")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut components = [T::ZERO; N];
        for (index, component) in components.iter_mut().enumerate() {
            *component = seq
                .next_element()?
                .ok_or_else(|| A::Error::invalid_length(index, &self))?;
        }
        if seq.next_element::<T>()?.is_some() {
            return Err(A::Error::invalid_length(N + 1, &self));
        }
        Ok(Vector::from_array(components))
    }
}

#[cfg(test)]
mod tests {
    use crate::vector::*;

    #[test]
    fn vectors_serialize_as_their_components_in_order() {
        let v = Int3::new(1, -2, 3);
        let bytes = postcard::to_allocvec(&v).unwrap();
        let tuple_bytes = postcard::to_allocvec(&(1_i32, -2_i32, 3_i32)).unwrap();
        assert_eq!(bytes, tuple_bytes);
    }

    #[test]
    fn serializing_and_deserializing_vector_works() {
        let v = Double4::new(0.5, -1.0, f64::INFINITY, 1e-300);
        let bytes = postcard::to_allocvec(&v).unwrap();
        let deserialized: Double4 = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(deserialized, v);

        let flags = Bool2::new(true, false);
        let bytes = postcard::to_allocvec(&flags).unwrap();
        assert_eq!(postcard::from_bytes::<Bool2>(&bytes).unwrap(), flags);
    }

    #[test]
    fn deserializing_from_too_few_components_fails() {
        let bytes = postcard::to_allocvec(&(1_u32, 2_u32)).unwrap();
        assert!(postcard::from_bytes::<UInt3>(&bytes).is_err());
    }
}
