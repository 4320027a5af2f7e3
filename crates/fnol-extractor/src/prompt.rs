//! LLM prompt engineering for claim field extraction

/// Builds the extraction prompt for one document
///
/// The prompt is identical on every attempt; retries are blind, not
/// corrective.
pub struct PromptBuilder<'a> {
    text: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder over the full document text
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::with_capacity(
            SYSTEM_INSTRUCTION.len() + EXTRACTION_INSTRUCTIONS.len() + self.text.len() + 256,
        );

        // 1. Role and output discipline
        prompt.push_str(SYSTEM_INSTRUCTION);
        prompt.push_str("\n\n");

        // 2. Schema with a null placeholder for every optional leaf
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 3. The document, verbatim
        prompt.push_str("Document text:\n");
        prompt.push_str(self.text);
        prompt.push_str("\n\n");

        // 4. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const SYSTEM_INSTRUCTION: &str = "You are an expert insurance claims processor. \
Extract information from claim documents and return ONLY valid JSON. \
Do not include any explanatory text outside the JSON structure.";

const EXTRACTION_INSTRUCTIONS: &str = r#"Extract the following insurance claim information from the document below. Return ONLY a JSON object with the structure shown.

Required JSON structure:
{
  "policy_information": {
    "policy_number": "string or null",
    "policyholder_name": "string or null",
    "effective_dates": "string or null"
  },
  "incident_information": {
    "date": "string or null",
    "time": "string or null",
    "location": "string or null",
    "description": "string or null"
  },
  "involved_parties": {
    "claimant": "string or null",
    "third_parties": ["string"] or null,
    "contact_details": "string or null"
  },
  "asset_details": {
    "asset_type": "string or null",
    "asset_id": "string or null",
    "estimated_damage": number or null
  },
  "claim_type": "string or null",
  "attachments": ["string"] or null,
  "initial_estimate": number or null
}

Rules:
- Use null for any field the document does not state
- Amounts are plain numbers without currency symbols or thousands separators
- Do not invent values that are not in the document"#;

const OUTPUT_FORMAT_REMINDER: &str =
    "Return ONLY the JSON object, no markdown code blocks, no additional text.";
