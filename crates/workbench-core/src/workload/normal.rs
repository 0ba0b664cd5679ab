//! Structured-extraction workload (`POST /process/normal`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::body::decode_object;
use crate::clock;
use crate::error::WorkloadError;
use crate::extract;
use crate::SERVICE_NAME;

/// Wire form of the body. Every field is optional here so an absent one
/// maps to `MissingField` instead of a generic decode error.
#[derive(Deserialize)]
struct NormalBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    birthdate: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

/// Decoded `{name, birthdate, email, data?}` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalRequest {
    pub name: String,
    pub birth_year: i32,
    pub email: String,
    /// Key count of `data`, when `data` is a JSON object.
    pub data_keys: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalResponse {
    /// First whitespace-separated token of `name`, or `""`.
    pub first_name: String,
    /// Last token of `name` when there are at least two, else `""`.
    pub last_name: String,
    /// Current year minus birth year; may be negative for future years.
    pub age: i64,
    /// Local part of `email` before the first `@`, or `""`.
    pub username: String,
    /// UTC time of processing, `YYYY-MM-DDTHH:MM:SSZ`.
    pub processed_at: String,
    /// `age >= 18`.
    pub is_adult: bool,
    /// Byte length of `name`.
    pub name_length: usize,
    /// Key count of `data`; omitted unless `data` was an object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_data_keys: Option<usize>,
    pub service: &'static str,
}

impl NormalRequest {
    pub fn decode(body: &[u8]) -> Result<Self, WorkloadError> {
        let body: NormalBody = decode_object(body)?;

        let name = body.name.ok_or(WorkloadError::MissingField("name"))?;
        let birthdate = body
            .birthdate
            .ok_or(WorkloadError::MissingField("birthdate"))?;
        let email = body.email.ok_or(WorkloadError::MissingField("email"))?;
        let data_keys = body
            .data
            .as_ref()
            .and_then(Value::as_object)
            .map(|data| data.len());

        Ok(NormalRequest {
            birth_year: extract::birth_year(&birthdate)?,
            name,
            email,
            data_keys,
        })
    }

    pub fn run(&self, current_year: i32) -> NormalResponse {
        let age = extract::age(self.birth_year, current_year);
        let name = extract::split_name(&self.name);

        NormalResponse {
            first_name: name.first.to_owned(),
            last_name: name.last.to_owned(),
            age,
            username: extract::username(&self.email).to_owned(),
            processed_at: clock::utc_timestamp(),
            is_adult: age >= 18,
            name_length: self.name.len(),
            extra_data_keys: self.data_keys,
            service: SERVICE_NAME,
        }
    }
}
