//! Demo: seed in-memory services with a small group and print its boards.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use dotenvy::dotenv;
use rust_decimal::Decimal;
use tracing::info;

use seciboard::models::{ActivityTally, Category, Leaderboard, TimeRange};
use seciboard::services::{InMemoryTallyProvider, InMemoryWeightStore};
use seciboard::{config, logging, ScoringCoordinator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let env = config::get_environment();
    info!(environment = %env, "Starting seciboard demo");

    let org = "acme";
    let group = "knowledge-guild";

    let provider = Arc::new(InMemoryTallyProvider::new());
    let store = Arc::new(InMemoryWeightStore::new());

    seed_weights(&store, org, group).await?;
    seed_tallies(&provider, org, group).await;

    let range = TimeRange::new(Utc::now() - Duration::days(30), Utc::now())?;
    let members: Vec<String> = ["alice", "bob", "carol"]
        .iter()
        .map(|m| m.to_string())
        .collect();

    let coordinator =
        ScoringCoordinator::new(provider, store).with_top_n(config::leaderboard_top_n());
    let boards = coordinator
        .compute_group_scores(org, group, &members, &range)
        .await?;

    for category in Category::ALL {
        print_board(boards.get(category));
    }

    println!("Engagement:");
    println!("{}", serde_json::to_string_pretty(&boards.engagement)?);

    Ok(())
}

async fn seed_weights(
    store: &InMemoryWeightStore,
    org: &str,
    group: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let socialization = HashMap::from([
        ("post_blog".to_string(), Decimal::new(5, 1)),
        ("send_chat_message".to_string(), Decimal::new(2, 1)),
        ("post_forum".to_string(), Decimal::new(25, 2)),
        ("image_sharing".to_string(), Decimal::new(1, 2)),
        ("created_topic".to_string(), Decimal::new(5, 2)),
    ]);
    let externalization = HashMap::from([
        ("post_blog".to_string(), Decimal::new(4, 1)),
        ("post_forum".to_string(), Decimal::new(3, 1)),
        ("comment".to_string(), Decimal::new(2, 1)),
        ("created_topic".to_string(), Decimal::new(1, 1)),
    ]);
    let combination = HashMap::from([("created_topic".to_string(), Decimal::new(25, 3))]);
    let internalization = HashMap::from([
        ("read_blog".to_string(), Decimal::new(2, 2)),
        ("read_forum".to_string(), Decimal::new(2, 2)),
        ("download_resources".to_string(), Decimal::new(5, 2)),
    ]);

    store
        .insert(org, group, Category::Socialization, &socialization)
        .await?;
    store
        .insert(org, group, Category::Externalization, &externalization)
        .await?;
    store
        .insert(org, group, Category::Combination, &combination)
        .await?;
    store
        .insert(org, group, Category::Internalization, &internalization)
        .await?;
    Ok(())
}

async fn seed_tallies(provider: &InMemoryTallyProvider, org: &str, group: &str) {
    let alice = ActivityTally::new()
        .with("post_blog", Decimal::from(62))
        .with("post_forum", Decimal::from(40))
        .with("created_topic", Decimal::from(3))
        .with("read_blog", Decimal::from(12));
    let bob = ActivityTally::new()
        .with("send_chat_message", Decimal::from(85))
        .with("comment", Decimal::from(55))
        .with("download_resources", Decimal::from(7));
    // carol has no recorded activity; she still appears on every board at 0%
    provider.insert(org, group, "alice", alice).await;
    provider.insert(org, group, "bob", bob).await;
}

fn print_board(board: &Leaderboard) {
    println!("{} leaderboard:", board.category);
    for (i, entry) in board.entries.iter().enumerate() {
        println!(
            "  {}. {} {:.2}% (score {})",
            i + 1,
            entry.user_id,
            entry.percentage,
            entry.score
        );
    }
}
