
#[cfg(test)]
pub mod llm {
    pub mod models {
        pub mod provider_handle;
    }
    pub mod outline;
    pub mod prompts;
    pub mod retry;
    pub mod suggestions;
}
