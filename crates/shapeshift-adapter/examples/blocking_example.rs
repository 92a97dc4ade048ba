/*
[INPUT]:  Coin pair (e.g., btc_ltc)
[OUTPUT]: Market data fetched over the blocking client
[POS]:    Examples - blocking calling convention
[UPDATE]: When the blocking client surface changes
*/

use shapeshift_adapter::{BlockingShapeshiftClient, Pair};

/// Example: Same queries as the async example, blocking convention
///
/// Runs without any async runtime; each call occupies the thread until
/// the round trip completes.
fn main() {
    println!("=== ShapeShift Blocking Client Example ===\n");

    let client = match BlockingShapeshiftClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let pair = Pair::new("btc", "ltc");

    println!("Querying rate for {}...", pair);
    match client.get_rate(&pair) {
        Ok(rate) => println!("✓ Rate: {}", rate),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying market info for {}...", pair);
    match client.get_market_info(Some(&pair)) {
        Ok(info) => println!("✓ Market info: {}", info),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Blocking example complete");
}
