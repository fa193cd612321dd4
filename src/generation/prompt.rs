//! Triage prompt template.

/// Render the criticality-assessment instruction for one tweet.
///
/// Both values are inserted as-is; the model sees exactly what the caller sent.
pub fn build_prompt(tweet: &str, bank_name: &str) -> String {
    format!(
        "I am going to pass in a tweet on {bank_name} can you help me assess \
         the criticality of the attached tweet to customer service on a scale of \
         (0-100%), Tweet: {tweet}"
    )
}
