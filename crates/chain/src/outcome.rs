use serde::{Deserialize, Serialize};

/// Result of one chain run.
///
/// Recoverable failures (blank key, nothing found, a failed insert) are
/// reported here rather than as errors, so every run yields an outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
	pub is_successful: bool,
	/// Projected field of the found or inserted row.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error_message: Option<String>,
	/// Full diagnostic form of the error behind `error_message`, when there was one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error_detail: Option<String>,
}

impl Outcome {
	pub fn success(data: impl Into<String>) -> Self {
		Self {
			is_successful: true,
			data: Some(data.into()),
			..Self::default()
		}
	}

	pub fn failure(message: impl Into<String>) -> Self {
		Self {
			error_message: Some(message.into()),
			..Self::default()
		}
	}

	/// Failure carrying `err`'s message and its debug rendering as detail.
	pub fn from_error<E: std::error::Error>(err: &E) -> Self {
		Self {
			error_message: Some(err.to_string()),
			error_detail: Some(format!("{err:?}")),
			..Self::default()
		}
	}
}
