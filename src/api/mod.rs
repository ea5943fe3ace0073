//! Checkmate REST API
//!
//! - `client.rs` - reqwest-based client, also the wizard's registration port
//! - `types.rs` - Request and response bodies
//! - `error.rs` - Error type and server message extraction

mod client;
mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{
    Answer, AnswerActions, AnswerPage, AnswerUpdate, Member, MemberSignUp, NewAnswer, Question,
    QuestionPage, Review,
};
