//! Parse LLM output into a raw extraction

use fnol_domain::RawExtraction;

/// Strip leading/trailing Markdown code-fence markers
///
/// LLMs sometimes wrap JSON in ```` ```json ```` blocks despite being told
/// not to.
pub fn strip_code_fences(reply: &str) -> &str {
    let mut content = reply.trim();
    if let Some(rest) = content.strip_prefix("```json") {
        content = rest;
    }
    if let Some(rest) = content.strip_prefix("```") {
        content = rest;
    }
    if let Some(rest) = content.strip_suffix("```") {
        content = rest;
    }
    content.trim()
}

/// Strict parse of a fence-stripped reply
pub fn parse_reply(reply: &str) -> Result<RawExtraction, serde_json::Error> {
    serde_json::from_str(strip_code_fences(reply))
}

/// Recover a JSON object embedded in surrounding prose
///
/// Parses the span from the first `{` to the last `}` of the raw reply.
pub fn recover_json(reply: &str) -> Option<RawExtraction> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&reply[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plain_json() {
        let value = parse_reply(r#"{"claim_type": "Auto"}"#).unwrap();
        assert_eq!(value, json!({"claim_type": "Auto"}));
    }

    #[test]
    fn test_parse_json_with_markdown_wrapper() {
        let reply = "```json\n{\"claim_type\": \"Property\"}\n```";
        let value = parse_reply(reply).unwrap();
        assert_eq!(value["claim_type"], "Property");
    }

    #[test]
    fn test_parse_json_with_bare_fence() {
        let reply = "  ```\n{\"claim_type\": \"Injury\"}\n```  ";
        assert_eq!(strip_code_fences(reply), "{\"claim_type\": \"Injury\"}");
    }

    #[test]
    fn test_strip_leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fences("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_reply("This is not JSON").is_err());
        assert!(parse_reply("Here you go: {\"claim_type\": \"Auto\"}").is_err());
    }

    #[test]
    fn test_recover_json_from_prose() {
        let reply = "Sure! Here is the extraction:\n{\"claim_type\": \"Auto\", \"asset_details\": {\"estimated_damage\": 3000}}\nLet me know if you need more.";
        let value = recover_json(reply).unwrap();
        assert_eq!(value["asset_details"]["estimated_damage"], 3000);
    }

    #[test]
    fn test_recover_json_fails_without_braces() {
        assert!(recover_json("no json here").is_none());
        assert!(recover_json("} backwards {").is_none());
        assert!(recover_json("{ not: valid json }").is_none());
    }

    #[test]
    fn test_non_object_json_still_parses() {
        let value = parse_reply("[1, 2, 3]").unwrap();
        assert!(value.is_array());
    }
}
