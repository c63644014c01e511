use chainsearch_chain::Outcome;
use chainsearch_primitives::SearchKey;
use serde::Serialize;

/// What one run of the demo chain did for one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
	pub key: SearchKey,
	/// Whether the run grew the contact table.
	pub inserted: bool,
	#[serde(flatten)]
	pub outcome: Outcome,
}

impl Report {
	/// Human-readable line for this run.
	pub fn line(&self) -> String {
		let key = &self.key;
		let data = self.outcome.data.as_deref().unwrap_or_default();
		match (self.outcome.is_successful, self.inserted) {
			(true, false) => format!("Found Id {key}'s name is '{data}'"),
			(true, true) => format!("Failed to find Id {key}'s name, hence inserted into Contacts table with name '{data}'"),
			(false, _) => format!("Lookup of Id {key} failed: {}", self.outcome.error_message.as_deref().unwrap_or("unknown error")),
		}
	}
}
