use crate::cons::provider_cons::AiProvider;
use crate::llm::models::openai::{GROK_ENDPOINT, GROK_MODEL, OPENAI_ENDPOINT, OPENAI_MODEL};
use crate::llm::models::provider_handle::{create_client, AnyProviderClient, ProviderClient};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_provider_maps_to_its_own_client() {
        for provider in [
            AiProvider::OpenAI,
            AiProvider::Anthropic,
            AiProvider::Google,
            AiProvider::Grok,
        ] {
            let client = create_client(provider, "sk-test".to_string());
            assert_eq!(client.provider(), provider);
        }
    }

    #[test]
    fn grok_reuses_the_chat_completions_client_with_its_own_wire_config() {
        let openai = create_client(AiProvider::OpenAI, "sk-test".to_string());
        let grok = create_client(AiProvider::Grok, "sk-test".to_string());

        let AnyProviderClient::OpenAI(openai) = openai else {
            panic!("expected the chat-completions client");
        };
        let AnyProviderClient::Grok(grok) = grok else {
            panic!("expected the chat-completions client");
        };

        assert_eq!(openai.endpoint, OPENAI_ENDPOINT);
        assert_eq!(openai.model, OPENAI_MODEL);
        assert_eq!(grok.endpoint, GROK_ENDPOINT);
        assert_eq!(grok.model, GROK_MODEL);
    }

    #[tokio::test]
    async fn a_blank_api_key_fails_before_any_request() {
        for provider in [
            AiProvider::OpenAI,
            AiProvider::Anthropic,
            AiProvider::Google,
            AiProvider::Grok,
        ] {
            let client = create_client(provider, "   ".to_string());
            let err = client
                .invoke("prompt", 10)
                .await
                .expect_err("blank key should be rejected");
            assert!(err.to_string().contains("API key"), "{err}");
        }
    }

    #[tokio::test]
    async fn a_blank_prompt_fails_before_any_request() {
        let client = create_client(AiProvider::OpenAI, "sk-test".to_string());
        let err = client
            .invoke("  ", 10)
            .await
            .expect_err("blank prompt should be rejected");
        assert!(err.to_string().to_lowercase().contains("prompt"), "{err}");
    }
}
