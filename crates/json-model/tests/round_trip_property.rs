//! Property tests: decode/encode round trips and missing-key reporting.

use json_model::{
    from_value, json_model, model_keys, to_value, ErrorKind, FieldMap, ModelError, ModelKey,
    ObjectAccessor, ObjectModel, PathSegment,
};
use proptest::prelude::*;
use serde_json::{json, Value};

model_keys! {
    enum InnerKey {
        Flag => "flag",
        Weights => "weights",
    }
}

model_keys! {
    enum RecordKey {
        Id => "id",
        Name => "name",
        Score => "score",
        Tags => "tags",
        Inner => "inner",
        Note => "note",
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Inner {
    flag: bool,
    weights: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq)]
struct Record {
    id: u32,
    name: String,
    score: f64,
    tags: Vec<String>,
    inner: Inner,
    note: Option<String>,
}

impl ObjectModel for Inner {
    type Key = InnerKey;

    fn decode(object: &ObjectAccessor<'_, InnerKey>) -> Result<Self, ModelError> {
        Ok(Self {
            flag: object.required(InnerKey::Flag)?,
            weights: object.required_array(InnerKey::Weights)?,
        })
    }

    fn encode(&self, fields: &mut FieldMap<InnerKey>) {
        fields
            .set(InnerKey::Flag, &self.flag)
            .set(InnerKey::Weights, &self.weights);
    }
}

impl ObjectModel for Record {
    type Key = RecordKey;

    fn decode(object: &ObjectAccessor<'_, RecordKey>) -> Result<Self, ModelError> {
        Ok(Self {
            id: object.required(RecordKey::Id)?,
            name: object.required(RecordKey::Name)?,
            score: object.required(RecordKey::Score)?,
            tags: object.required_array(RecordKey::Tags)?,
            inner: object.required(RecordKey::Inner)?,
            note: object.optional(RecordKey::Note)?,
        })
    }

    fn encode(&self, fields: &mut FieldMap<RecordKey>) {
        fields
            .set(RecordKey::Id, &self.id)
            .set(RecordKey::Name, &self.name)
            .set(RecordKey::Score, &self.score)
            .set(RecordKey::Tags, &self.tags)
            .set(RecordKey::Inner, &self.inner)
            .set_optional(RecordKey::Note, self.note.as_ref());
    }
}

json_model!(Inner, Record);

fn arb_inner() -> impl Strategy<Value = Inner> {
    (any::<bool>(), prop::collection::vec(any::<i64>(), 0..8))
        .prop_map(|(flag, weights)| Inner { flag, weights })
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        any::<u32>(),
        ".{0,16}",
        -1.0e9..1.0e9f64,
        prop::collection::vec("[a-z]{1,6}", 0..5),
        arb_inner(),
        prop::option::of("[ -~]{0,12}"),
    )
        .prop_map(|(id, name, score, tags, inner, note)| Record {
            id,
            name,
            score,
            tags,
            inner,
            note,
        })
}

/// Document written by hand rather than by `encode`.
fn document_for(record: &Record) -> Value {
    let mut doc = json!({
        "id": record.id,
        "name": record.name,
        "score": record.score,
        "tags": record.tags,
        "inner": {"flag": record.inner.flag, "weights": record.inner.weights},
    });
    if let Some(note) = &record.note {
        doc["note"] = json!(note);
    }
    doc
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: a well-typed document decodes and re-encodes to itself.
    #[test]
    fn prop_decode_then_encode_reproduces_document(record in arb_record()) {
        let doc = document_for(&record);
        let decoded: Record = from_value(&doc).unwrap();
        prop_assert_eq!(&decoded, &record);
        prop_assert_eq!(to_value(&decoded), doc);
    }

    /// Property: decode(encode(m)) == m.
    #[test]
    fn prop_encode_then_decode_is_identity(record in arb_record()) {
        let again: Record = from_value(&to_value(&record)).unwrap();
        prop_assert_eq!(again, record);
    }

    /// Property: dropping a required key reports exactly that key.
    #[test]
    fn prop_missing_required_key_is_reported(
        record in arb_record(),
        key in prop::sample::select(RecordKey::ALL.to_vec()),
    ) {
        let mut doc = document_for(&record);
        doc.as_object_mut().unwrap().remove(key.token());
        let result = from_value::<Record>(&doc);
        if key == RecordKey::Note {
            prop_assert!(result.is_ok());
        } else {
            let err = result.unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::MissingValue);
            prop_assert_eq!(err.path().segments(), &[PathSegment::field(key.token())][..]);
        }
    }

    /// Property: a wrong-typed optional value never decodes as absent.
    #[test]
    fn prop_wrong_typed_optional_fails(record in arb_record(), bad in any::<i64>()) {
        let mut doc = document_for(&record);
        doc["note"] = json!(bad);
        let err = from_value::<Record>(&doc).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidElement);
        prop_assert_eq!(err.to_string(), "[note]: Invalid element");
    }

    /// Property: a bad weight is located by its index.
    #[test]
    fn prop_bad_array_element_is_indexed(
        record in arb_record().prop_filter("needs weights", |r| !r.inner.weights.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut doc = document_for(&record);
        let at = pick.index(record.inner.weights.len());
        doc["inner"]["weights"][at] = json!("oops");
        let err = from_value::<Record>(&doc).unwrap_err();
        prop_assert_eq!(err.to_string(), format!("[inner][weights][{at}]: Invalid element"));
    }
}
