use crate::models::Protocol;
use crate::utils::Table;

pub fn execute() -> Result<(), String> {
    let mut protocols = Table::new(&["Protocol", "Auth digits", "Settlement"]);
    for protocol in Protocol::ALL {
        protocols.add_row(vec![
            protocol.display_name().to_string(),
            protocol.auth_code_length().to_string(),
            if protocol.is_off_ledger() { "USDT payout" } else { "Card" }.to_string(),
        ]);
    }

    println!(
        "📖 POS Terminal Commands\n\
         \n\
         🎯 Session\n\
         \x20 login <username> <password>   Start a session\n\
         \x20 logout                        End the session and drop its history\n\
         \x20 quit                          Leave the terminal\n\
         \n\
         💳 Payment form\n\
         \x20 set card <number>             Card number (grouped by 4 as typed)\n\
         \x20 set expiry <MMYY>             Expiry, shaped to MM/YY\n\
         \x20 set cvv <cvv>\n\
         \x20 set amount <amount>\n\
         \x20 set currency <USD|EUR|GBP>\n\
         \x20 set auth <code>               Auth code, length depends on protocol\n\
         \x20 set protocol <id>             e.g. 101.1 or 201.3\n\
         \x20 set network <ERC-20|TRC-20>   Also resets the merchant wallet\n\
         \x20 set wallet <address>\n\
         \x20 form                          Show the current form\n\
         \x20 clear                         Reset the form\n\
         \n\
         💸 Transactions\n\
         \x20 submit                        Send the sale to the backend\n\
         \x20 history                       Load history from the backend\n\
         \x20 print                         Print a receipt for the last sale\n\
         \n\
         {}",
        protocols.render()
    );

    Ok(())
}
