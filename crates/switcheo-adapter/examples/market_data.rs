/*
[INPUT]:  Trading pair (e.g., "SWTH_NEO")
[OUTPUT]: Market data (status, contracts, candles, offers, trades)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use anyhow::Context;
use switcheo_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Query market data (no authentication required)
///
/// Set `RUST_LOG=switcheo_adapter=debug` to see each request.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Switcheo Market Data Example ===\n");

    let client = PublicClient::new().context("failed to create client")?;
    println!("✓ Client created for {}\n", client.http().base_url());

    let status = client.get_exchange_status().await?;
    println!("Exchange status: {}", status.status);

    let time = client.get_exchange_time().await?;
    println!(
        "Exchange time: {} (local offset {} ms)",
        time.timestamp,
        time.timestamp - epoch_milliseconds()
    );

    let contract = client.contract_hash().await?;
    println!("NEO V2 contract: {contract}\n");

    let pair = "SWTH_NEO";
    let now = epoch_milliseconds() / 1000;
    match client
        .get_candlesticks(pair, now - 350_000, now, CandleInterval::SixHours)
        .await
    {
        Ok(candles) => println!("✓ {} candles for {pair}", candles.len()),
        Err(e) => println!("✗ Candles error: {e}"),
    }

    match client.get_offers(pair).await {
        Ok(offers) => println!("✓ {} open offers for {pair}", offers.len()),
        Err(e) => println!("✗ Offers error: {e}"),
    }

    match client.get_trades(pair, None, None, 3).await {
        Ok(trades) => {
            for trade in trades {
                println!(
                    "  trade {} fill={} take={} buy={}",
                    trade.id, trade.fill_amount, trade.take_amount, trade.is_buy
                );
            }
        }
        Err(e) => println!("✗ Trades error: {e}"),
    }

    // Length header for a 300 byte script
    println!("\nVarInt(300) = {}", encode_var_int(300));

    Ok(())
}
