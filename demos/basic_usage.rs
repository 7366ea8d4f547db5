// ============================================================================
// Basic Usage Example
// ============================================================================

use currency_fractions::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Currency Fractions Example ===\n");

    let eth = Currency::from(
        NativeCurrency::new(1, 18, TokenAddress::from_bytes([0xc0; 20]))
            .with_symbol("ETH")
            .with_name("Ether"),
    );
    let usdc = Currency::from(
        Token::new(1, TokenAddress::from_bytes([0xa0; 20]), 6)
            .with_symbol("USDC")
            .with_name("USD Coin"),
    );

    // Amounts
    let balance = Amount::from_raw(eth.clone(), "3.14159265358979").unwrap();
    println!("Balance:        {} {}", balance, eth);
    println!(
        "  significant:  {}",
        balance.to_significant(6, Rounding::Down).unwrap()
    );
    println!(
        "  fixed(4):     {}",
        balance.to_fixed(4, &FormatOptions::amount()).unwrap()
    );
    println!("  wrapped as:   {}", balance.wrapped().currency());

    // Prices
    let price = Price::from_ratio(eth.clone(), usdc.clone(), 1, "2437.81").unwrap();
    println!("\nPrice:          {} {} per {}", price, usdc, eth);
    println!("  inverted:     {}", price.invert().unwrap());

    let value = price.quote(&balance).unwrap();
    let grouped = FormatOptions::amount().with_group_separator(',');
    println!("  value:        {} {}", value.to_fixed(2, &grouped).unwrap(), usdc);

    // Percentages
    let fee = Percentage::new(30, 10_000).unwrap();
    let fee_amount = value.multiply(fee.raw_amount()).unwrap();
    println!("\nFee:            {}", fee);
    println!("  fee amount:   {} {}", fee_amount.to_fixed(2, &grouped).unwrap(), usdc);
    println!(
        "  net:          {} {}",
        value
            .subtract(&fee_amount)
            .unwrap()
            .to_fixed(2, &grouped)
            .unwrap(),
        usdc
    );

    // Contract violations surface as errors
    let other = Amount::from_raw(usdc.clone(), 1).unwrap();
    match balance.add(&other) {
        Ok(sum) => println!("\nUnexpected sum: {}", sum),
        Err(e) => println!("\nAdding ETH to USDC: {}", e),
    }
    match balance.to_fixed(19, &FormatOptions::default()) {
        Ok(s) => println!("Unexpected: {}", s),
        Err(e) => println!("Too many places:   {}", e),
    }

    println!("\n=== Example Complete ===");
}
