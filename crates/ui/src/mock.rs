use async_trait::async_trait;
use mockall::mock;

use crate::prompt::Prompt;

mock! {
    pub Prompt {}

    #[async_trait]
    impl Prompt for Prompt {
        async fn confirm(&self, message: &str) -> bool;
        async fn alert(&self, message: &str);
    }
}
