//! Conversation session management.
//!
//! A `Session` owns the target model identifier and the ordered turn
//! history, and extends the history by one request/response exchange
//! per user turn.

use crate::{ChatError, CompletionTransport, Role, Turn};

/// A conversation session: model identifier plus the accumulated ordered
/// turn sequence. Turns are appended, never removed or mutated.
pub struct Session {
    model: String,
    turns: Vec<Turn>,
}

impl Session {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            turns: Vec::new(),
        }
    }

    /// Seed the system turn. If present it is always the first element of
    /// the turn sequence.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.turns.push(Turn::new(Role::System, instruction));
        self
    }

    /// Add a user turn and get the assistant's reply.
    ///
    /// The full turn sequence is sent to the transport in one call. A
    /// non-empty reply is appended as an assistant turn and returned. An
    /// empty reply yields `ChatError::EmptyReply` and appends nothing; the
    /// user turn stays in the history either way (no rollback on failure).
    pub async fn submit(
        &mut self,
        transport: &dyn CompletionTransport,
        user_text: impl Into<String>,
    ) -> Result<String, ChatError> {
        self.turns.push(Turn::new(Role::User, user_text));

        let reply = transport.complete(&self.model, &self.turns).await?;
        if reply.is_empty() {
            return Err(ChatError::EmptyReply);
        }

        self.turns.push(Turn::new(Role::Assistant, reply.clone()));
        Ok(reply)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The full conversation history.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Transport stub returning a fixed result and counting calls.
    struct StubTransport {
        reply: Result<String, (u16, String)>,
        calls: std::sync::atomic::AtomicUsize,
    }

    impl StubTransport {
        fn replying(reply: impl Into<String>) -> Self {
            Self {
                reply: Ok(reply.into()),
                calls: std::sync::atomic::AtomicUsize::new(0),
            }
        }

        fn failing(status: u16, body: impl Into<String>) -> Self {
            Self {
                reply: Err((status, body.into())),
                calls: std::sync::atomic::AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(std::sync::atomic::Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionTransport for StubTransport {
        async fn complete(&self, _model: &str, _turns: &[Turn]) -> Result<String, ChatError> {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err((status, body)) => Err(ChatError::Api {
                    status: *status,
                    body: body.clone(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn successful_reply_appends_user_then_assistant() {
        let transport = StubTransport::replying("hello");
        let mut session = Session::new("m").with_system_instruction("s");

        let reply = session.submit(&transport, "hi").await.unwrap();

        assert_eq!(reply, "hello");
        assert_eq!(
            session.turns(),
            &[
                Turn::new(Role::System, "s"),
                Turn::new(Role::User, "hi"),
                Turn::new(Role::Assistant, "hello"),
            ]
        );
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn each_exchange_appends_exactly_two_turns() {
        let transport = StubTransport::replying("ok");
        let mut session = Session::new("m").with_system_instruction("s");

        session.submit(&transport, "first").await.unwrap();
        assert_eq!(session.turns().len(), 3);

        session.submit(&transport, "second").await.unwrap();
        assert_eq!(session.turns().len(), 5);
        assert_eq!(session.turns()[3].role, Role::User);
        assert_eq!(session.turns()[4].role, Role::Assistant);
    }

    #[tokio::test]
    async fn empty_reply_keeps_user_turn_without_assistant() {
        let transport = StubTransport::replying("");
        let mut session = Session::new("m").with_system_instruction("s");

        let result = session.submit(&transport, "hi").await;

        assert!(matches!(result, Err(ChatError::EmptyReply)));
        assert_eq!(
            session.turns(),
            &[Turn::new(Role::System, "s"), Turn::new(Role::User, "hi")]
        );
    }

    #[tokio::test]
    async fn api_error_keeps_user_turn_without_rollback() {
        let transport = StubTransport::failing(500, "internal error");
        let mut session = Session::new("m");

        let result = session.submit(&transport, "hi").await;

        match result {
            Err(ChatError::Api { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        assert_eq!(session.turns(), &[Turn::new(Role::User, "hi")]);
    }

    #[tokio::test]
    async fn session_without_system_instruction_starts_empty() {
        let transport = StubTransport::replying("hello");
        let mut session = Session::new("m");
        assert!(session.turns().is_empty());

        session.submit(&transport, "hi").await.unwrap();
        assert_eq!(session.turns()[0].role, Role::User);
    }
}
