// Advisor chat — a single stateless endpoint. The counselor persona is
// rebuilt per request from the user row and their assessment results; no
// conversation history is persisted.

pub mod handlers;
pub mod prompts;
