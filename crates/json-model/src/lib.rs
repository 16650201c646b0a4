//! json-model - strongly-typed models over `serde_json` values.
//!
//! Fields are addressed through a closed, per-model key enum
//! ([`ModelKey`], declared with [`model_keys!`]) and every lookup is a
//! fallible, type-directed conversion. A failure anywhere in a nested model
//! graph surfaces as a single [`ModelError`] carrying the full path from the
//! document root:
//!
//! ```
//! use json_model::{model_keys, json_model, FieldMap, ModelError, ObjectAccessor, ObjectModel};
//! use serde_json::json;
//!
//! model_keys! {
//!     pub enum CityKey { Name => "name", Population => "population" }
//! }
//!
//! #[derive(Debug)]
//! pub struct City {
//!     name: String,
//!     population: Option<u64>,
//! }
//!
//! impl ObjectModel for City {
//!     type Key = CityKey;
//!
//!     fn decode(object: &ObjectAccessor<'_, CityKey>) -> Result<Self, ModelError> {
//!         Ok(City {
//!             name: object.required(CityKey::Name)?,
//!             population: object.optional(CityKey::Population)?,
//!         })
//!     }
//!
//!     fn encode(&self, fields: &mut FieldMap<CityKey>) {
//!         fields
//!             .set(CityKey::Name, &self.name)
//!             .set_optional(CityKey::Population, self.population.as_ref());
//!     }
//! }
//!
//! json_model!(City);
//!
//! let err = json_model::from_value::<Vec<City>>(&json!([{"name": "Cocoa"}, {"name": 1}]))
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "[1][name]: Invalid element");
//! ```

pub mod accessor;
pub mod constants;
pub mod convert;
pub mod decode;
mod depth;
pub mod error;
pub mod key;
pub mod model;

pub use accessor::{ArrayAccessor, ObjectAccessor};
pub use constants::DEFAULT_MAX_DEPTH;
pub use convert::{Initializable, Representable};
pub use decode::{
    from_slice, from_slice_with, from_str, from_str_with, from_value, from_value_with, to_string,
    to_string_pretty, to_value, DecodeError, DecodeOptions,
};
pub use error::{ErrorKind, ModelError};
pub use json_model_path::{FieldPath, PathSegment};
pub use key::ModelKey;
pub use model::{
    decode_array, decode_object, encode_array, encode_object, ArrayModel, FieldMap, Model,
    ObjectModel,
};

#[doc(hidden)]
pub use serde_json;
