//! Narrator persona and turn instructions.

use herald_core::Topic;

/// System framing shared by opening and continuation requests.
pub const NARRATOR_PERSONA: &str = "You are a helpful, conversational AI news narrator who discusses current events in a flowing narrative style. Your primary characteristics:

1. SMOOTH TRANSITIONS: You transition naturally between topics, making logical connections between seemingly unrelated stories.

2. ENGAGING RESPONSES: Your speech is interesting and varied, using a mix of short and medium-length sentences.

3. CONVERSATIONAL INTEGRATION: You maintain a friendly, engaging tone throughout.

4. CONTINUOUS NARRATION: You maintain the flow of your narrative.

5. CONCISE DELIVERY: Keep responses to 2-3 sentences to maintain a natural speaking flow.";

/// User turn asking the narrator to carry on from its last segment.
pub const CONTINUE_INSTRUCTION: &str = "Continue your news narrative. Pick up naturally from your last sentence. Maintain your train of thought or transition smoothly to a connected news topic. Make this transition feel like part of the same conversation, not a new segment.";

/// Segment used when the opening request fails.
pub const OPENING_FALLBACK: &str =
    "I'm having trouble generating news content at the moment. Please try again later.";

/// Segment used when a continuation request fails.
pub const CONTINUATION_FALLBACK: &str =
    "I'm having trouble continuing the narrative at the moment. Let's move on to another topic.";

/// Numbered topic list, one per line: `Topic 1: headline - summary`.
pub fn enumerate_topics(topics: &[Topic]) -> String {
    topics
        .iter()
        .enumerate()
        .map(|(i, topic)| format!("Topic {}: {}", i + 1, topic))
        .collect::<Vec<_>>()
        .join("\n")
}

/// User turn for the opening segment.
pub fn opening_instruction(topics: &[Topic]) -> String {
    format!(
        "Please discuss these top news topics in a flowing narrative, smoothly transitioning from one topic to the next:\n\n{}\n\nStart with the first topic and naturally progress through all of them.",
        enumerate_topics(topics)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_are_numbered_from_one() {
        let topics = vec![Topic::new("A", "a"), Topic::new("B", "b")];
        assert_eq!(enumerate_topics(&topics), "Topic 1: A - a\nTopic 2: B - b");
    }

    #[test]
    fn test_opening_instruction_embeds_topics() {
        let instruction = opening_instruction(&[Topic::new("A", "a")]);
        assert!(instruction.contains("\n\nTopic 1: A - a\n\n"));
        assert!(instruction.starts_with("Please discuss these top news"));
    }
}
