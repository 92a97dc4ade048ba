/*
[INPUT]:  Coin pair (e.g., btc_ltc)
[OUTPUT]: Market data (coins, rate, limit, market info)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use shapeshift_adapter::{Pair, ShapeshiftClient};

/// Example: Query market data through the async client
#[tokio::main]
async fn main() {
    println!("=== ShapeShift Market Data Example ===\n");

    let client = match ShapeshiftClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    let pair = Pair::new("btc", "ltc");

    println!("Querying supported coins...");
    match client.get_coins().await {
        Ok(coins) => println!("✓ Coins: {}", coins),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying rate for {}...", pair);
    match client.get_rate(&pair).await {
        Ok(rate) => println!("✓ Rate: {}", rate),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying deposit limit for {}...", pair);
    match client.get_deposit_limit(&pair).await {
        Ok(limit) => println!("✓ Limit: {}", limit),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying market info for {}...", pair);
    match client.get_market_info(Some(&pair)).await {
        Ok(info) => println!("✓ Market info: {}", info),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying 10 most recent transactions...");
    match client.get_recent_tx_list(10).await {
        Ok(txs) => println!("✓ Recent transactions: {}", txs),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
