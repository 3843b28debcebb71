use cucumber::World;
use std::collections::HashMap;

#[derive(Debug, Default, World)]
pub struct PluginWorld {
    /// Simulated plugin environment, resolved instead of process env.
    pub env: HashMap<String, String>,
    /// Canned fetch outcome: raw body or a transport error message.
    pub response: Option<Result<String, String>>,
    /// Menu lines produced by the last render.
    pub lines: Vec<String>,
}

#[tokio::main]
async fn main() {
    PluginWorld::run("features").await;
}

mod steps;
