//! Request/response mapping
//!
//! [`ToWire`] builds the sparse payload sent for a domain value: anything left
//! unset is omitted rather than sent as `null` or `0`, because the API treats
//! a present field as an explicit update. [`FromWire`] rebuilds a domain value
//! from its wire DTO, normalizing ids on the way.

use serde::Serialize;
use serde::de::{self, DeserializeOwned};
use serde_json::Value;

use crate::codec::WireError;
use crate::domain::user::User;
use crate::dto::WireCollection;
use crate::dto::person::WirePerson;

/// Domain values that can be rebuilt from a response DTO
pub trait FromWire: Sized {
    /// Shape read from the response body
    type Wire: DeserializeOwned;

    fn from_wire(wire: Self::Wire) -> Result<Self, WireError>;
}

/// Domain values that can be written to the API
pub trait ToWire {
    /// Sparse request body
    type Payload: Serialize;

    fn to_wire(&self) -> Self::Payload;
}

/// Decode a response body into a domain value
pub fn decode<T: FromWire>(bytes: &[u8]) -> Result<T, WireError> {
    let wire: T::Wire =
        serde_json::from_slice(bytes).map_err(|source| WireError::decode(bytes, source))?;
    T::from_wire(wire)
}

/// Decode the response of a contact-to-user conversion
///
/// The body is either a plain user object or an envelope holding the
/// resulting `user` and, optionally, the source `contact`. In the envelope
/// case both are decoded strictly and merged: user fields win, gaps are filled
/// from the contact. A malformed `user` or `contact` is a decode error.
pub fn decode_conversion(bytes: &[u8]) -> Result<User, WireError> {
    let failed = |source: serde_json::Error| WireError::decode(bytes, source);

    let body: Value = serde_json::from_slice(bytes).map_err(failed)?;
    let Value::Object(mut fields) = body else {
        return Err(failed(de::Error::invalid_type(
            de::Unexpected::Other("non-object conversion response"),
            &"a user object",
        )));
    };

    let person = match fields.remove("user") {
        Some(user) => {
            let user: WirePerson = serde_json::from_value(user).map_err(failed)?;
            match fields.remove("contact") {
                Some(contact) => {
                    let contact: WirePerson =
                        serde_json::from_value(contact).map_err(failed)?;
                    user.or_fill(contact)
                }
                None => user,
            }
        }
        None => serde_json::from_value(Value::Object(fields)).map_err(failed)?,
    };

    User::from_wire(person)
}

/// Map every element of a wire sequence
pub fn from_wire_all<T: FromWire>(items: Vec<T::Wire>) -> Result<Vec<T>, WireError> {
    items.into_iter().map(T::from_wire).collect()
}

/// Map an optional nested collection; absent means empty
pub(crate) fn collection<T: FromWire>(
    wire: Option<WireCollection<T::Wire>>,
) -> Result<Vec<T>, WireError> {
    wire.map(WireCollection::into_items)
        .map(from_wire_all::<T>)
        .unwrap_or_else(|| Ok(Vec::new()))
}

/// `None` for the empty string
pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
