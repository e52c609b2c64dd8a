//! Shopping assistant command.

use estee_market::assistant::AssistantClient;
use estee_market::{MarketConfig, MarketContext};

pub async fn ask(config: &MarketConfig, ctx: &MarketContext, message: &str) {
    let Some(assistant) = config.assistant.as_ref() else {
        println!("The assistant is not configured. Set ESTEE_ASSISTANT_API_KEY to enable it.");
        return;
    };

    let client = AssistantClient::new(assistant);
    let reply = client.advise(message, ctx.products()).await;
    println!("{reply}");
}
