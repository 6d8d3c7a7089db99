use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use super::error::FetchError;
use super::model::{AssociationPage, AssociationRow, CategoryScore, DiseaseRef, TargetRef};
use super::transport::HttpReply;

const ROWS_PATH: &str = "data.disease.associatedTargets.rows";

#[derive(Clone, Debug, Deserialize)]
struct RawTarget {
    id: String,
    #[serde(rename = "approvedSymbol")]
    approved_symbol: String,
    #[serde(rename = "approvedName")]
    approved_name: String,
}

#[derive(Clone, Debug, Deserialize)]
struct RawDatatypeScore {
    id: String,
    score: f64,
}

#[derive(Clone, Debug, Deserialize)]
struct RawRow {
    target: RawTarget,
    score: f64,
    #[serde(default, rename = "datatypeScores")]
    datatype_scores: Option<Vec<RawDatatypeScore>>,
}

impl RawRow {
    fn into_row(self) -> AssociationRow {
        let datatype_scores = self
            .datatype_scores
            .unwrap_or_default()
            .into_iter()
            .map(|raw| CategoryScore::new(raw.id, raw.score))
            .collect::<Arc<[CategoryScore]>>();

        AssociationRow {
            target: TargetRef {
                id: self.target.id,
                approved_symbol: self.target.approved_symbol,
                approved_name: self.target.approved_name,
            },
            score: self.score,
            datatype_scores,
        }
    }
}

pub fn decode_reply(reply: &HttpReply) -> Result<AssociationPage, FetchError> {
    if !reply.is_success() {
        return Err(FetchError::status(reply.status, &reply.body));
    }

    let parsed: Value = serde_json::from_str(&reply.body)?;

    let disease = parsed
        .get("data")
        .and_then(|data| data.get("disease"))
        .filter(|disease| !disease.is_null())
        .ok_or_else(|| missing_path(&parsed))?;

    let associated = disease
        .get("associatedTargets")
        .filter(|value| !value.is_null())
        .ok_or_else(|| missing_path(&parsed))?;

    let raw_rows = associated
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| missing_path(&parsed))?;

    let mut rows = Vec::with_capacity(raw_rows.len());
    for (index, value) in raw_rows.iter().enumerate() {
        let raw = RawRow::deserialize(value)
            .map_err(|error| FetchError::Shape(format!("row {index} in {ROWS_PATH}: {error}")))?;
        rows.push(raw.into_row());
    }

    let disease_ref = match (
        disease.get("id").and_then(Value::as_str),
        disease.get("name").and_then(Value::as_str),
    ) {
        (Some(id), Some(name)) => Some(DiseaseRef {
            id: id.to_owned(),
            name: name.to_owned(),
        }),
        _ => None,
    };

    Ok(AssociationPage {
        disease: disease_ref,
        total_count: associated.get("count").and_then(Value::as_u64),
        rows,
    })
}

fn missing_path(parsed: &Value) -> FetchError {
    let server_message = parsed
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str);

    match server_message {
        Some(message) => FetchError::Shape(format!("{ROWS_PATH} missing; server reported: {message}")),
        None => FetchError::Shape(format!("{ROWS_PATH} missing")),
    }
}
