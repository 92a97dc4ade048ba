/*
[INPUT]:  Withdrawal address and coin pair
[OUTPUT]: Deposit address reservation and transaction status
[POS]:    Examples - creating and tracking a shift
[UPDATE]: When the shift flow changes
*/

use shapeshift_adapter::{Pair, ShapeshiftClient, ShiftRequest};

/// Example: Create a variable-rate shift and check its status
///
/// Creating a shift reserves a deposit address on the service; run this
/// against the real API only when you mean it.
#[tokio::main]
async fn main() {
    println!("=== ShapeShift Create Shift Example ===\n");

    let client = match ShapeshiftClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let btc_address = "1JVgLgLvWhr8hVy2AKy2T59fVAHhpJ8jT2";
    let request = ShiftRequest::new(btc_address, Pair::new("ltc", "btc"));

    println!("Creating shift to {}...", btc_address);
    let deposit = match client.create_shift(&request).await {
        Ok(response) => {
            println!("✓ Shift created: {}", response);
            response["deposit"].as_str().map(str::to_string)
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            None
        }
    };

    if let Some(deposit) = deposit {
        println!("\nChecking status of deposit address {}...", deposit);
        match client.get_tx_status(&deposit).await {
            Ok(status) => println!("✓ Status: {}", status),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    println!("\n✓ Shift example complete");
}
