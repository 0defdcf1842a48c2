//! Domain input to request body conversion.
//!
//! The generic path round-trips the source through a JSON object, so every
//! field whose wire name and shape agree is copied and the rest of the
//! destination keeps its defaults. Shapes that cannot line up by name (an
//! embedded object that the body wants as an ID, nested boxed collections,
//! narrower integer IDs) are corrected by a fixup registered for the
//! destination type. A fixup owns a set of destination fields: they are
//! dropped from the generic copy and filled in by the fixup alone.

mod fixups;

use crate::error::copy::CopyError;

use common::ErrorLocation;

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::panic::Location;

use log::error;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

type ErasedFixup = Box<dyn Fn(&dyn Any, &mut dyn Any) -> Result<(), CopyError> + Send + Sync>;

pub(crate) struct Fixup {
    source: TypeId,
    source_name: &'static str,
    destination_name: &'static str,
    owned_fields: &'static [&'static str],
    apply: ErasedFixup,
}

impl Fixup {
    /// Register `fixup` for destination `D`, accepting only source `S`.
    pub(crate) fn new<S: 'static, D: 'static>(
        owned_fields: &'static [&'static str],
        fixup: fn(&S, &mut D) -> Result<(), CopyError>,
    ) -> (TypeId, Self) {
        let apply: ErasedFixup = Box::new(move |source, destination| {
            match (source.downcast_ref::<S>(), destination.downcast_mut::<D>()) {
                (Some(source), Some(destination)) => fixup(source, destination),
                _ => Err(CopyError::SourceMismatch {
                    destination_type: type_name::<D>(),
                    expected: type_name::<S>(),
                    actual: "an erased value of another type",
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        });

        let fixup = Self {
            source: TypeId::of::<S>(),
            source_name: type_name::<S>(),
            destination_name: type_name::<D>(),
            owned_fields,
            apply,
        };

        (TypeId::of::<D>(), fixup)
    }
}

static FIXUPS: Lazy<HashMap<TypeId, Fixup>> = Lazy::new(fixups::registry);

/// Copy `source` into a new `D`, applying the fixup registered for `D`.
pub fn try_copy_type<S, D>(source: &S) -> Result<D, CopyError>
where
    S: Serialize + 'static,
    D: DeserializeOwned + 'static,
{
    let fixup = FIXUPS.get(&TypeId::of::<D>());

    if let Some(fixup) = fixup.filter(|fixup| fixup.source != TypeId::of::<S>()) {
        return Err(CopyError::SourceMismatch {
            destination_type: fixup.destination_name,
            expected: fixup.source_name,
            actual: type_name::<S>(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let mut fields = match serde_json::to_value(source)? {
        Value::Object(fields) => fields,
        other => {
            return Err(shape_error::<S, D>(format!(
                "source serialized to {} instead of an object",
                json_kind(&other)
            )));
        }
    };

    if let Some(fixup) = fixup {
        for field in fixup.owned_fields {
            fields.remove(*field);
        }
    }

    let mut destination: D = serde_json::from_value(Value::Object(fields))
        .map_err(|e| shape_error::<S, D>(e.to_string()))?;

    if let Some(fixup) = fixup {
        (fixup.apply)(source, &mut destination)?;
    }

    Ok(destination)
}

/// Like [`try_copy_type`], but a failure is a programming error.
///
/// # Panics
///
/// Panics when the two type families disagree on shape: the request that
/// would follow is malformed and must not be sent.
#[track_caller]
pub fn copy_type<S, D>(source: &S) -> D
where
    S: Serialize + 'static,
    D: DeserializeOwned + 'static,
{
    match try_copy_type(source) {
        Ok(destination) => destination,
        Err(err) => {
            error!("Copy layer out of sync: {err}");
            panic!("copy layer out of sync: {err}");
        }
    }
}

/// Whether a fixup is registered for destination `D`.
pub fn has_fixup<D: 'static>() -> bool {
    FIXUPS.contains_key(&TypeId::of::<D>())
}

/// Destination type names with a registered fixup, sorted.
pub fn registered_destinations() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = FIXUPS.values().map(|f| f.destination_name).collect();
    names.sort_unstable();
    names
}

#[track_caller]
fn shape_error<S, D>(message: String) -> CopyError {
    CopyError::Shape {
        source_type: type_name::<S>(),
        destination_type: type_name::<D>(),
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
