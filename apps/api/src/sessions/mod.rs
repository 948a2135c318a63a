// Session lifecycle: submission, suggestion review, final document assembly.
// Handlers only talk to the `SessionStore` trait, never to a concrete backend.

pub mod final_resume;
pub mod handlers;
pub mod store;
