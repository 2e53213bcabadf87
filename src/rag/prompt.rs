//! System prompt template.

const PERSONA: &str = "You are a helpful assistant with access to a knowledge base, tasked with answering questions about the world and its history, people, places and other things.
Answer the question in a very concise manner. Use an unbiased and journalistic tone. Do not repeat text. Don't make anything up. If you are not sure about something, just say that you don't know.";

const GROUNDING: &str = "Answer the question solely based on the provided search results from the knowledge base. If the search results from the knowledge base are not relevant to the question at hand, just say that you don't know. Don't make anything up.";

const NO_LEAKAGE: &str =
    "Don't mention the knowledge base, context or search results in your answer.";

/// Render the system prompt for a set of retrieved context snippets.
///
/// With no snippets the model gets the general persona only; otherwise the
/// grounding instruction and a `<context>` block are appended. The
/// instruction not to mention the retrieval mechanism is always last.
pub fn render_system_prompt(contexts: &[String]) -> String {
    let mut prompt = String::from("\n");
    prompt.push_str(PERSONA);

    if !contexts.is_empty() {
        prompt.push('\n');
        prompt.push_str(GROUNDING);
        prompt.push_str("\n\n<context>");
        for context in contexts {
            prompt.push_str("\n    - ");
            prompt.push_str(context);
        }
        prompt.push_str("\n</context>");
    }

    prompt.push('\n');
    prompt.push_str(NO_LEAKAGE);
    prompt.push('\n');
    prompt
}
