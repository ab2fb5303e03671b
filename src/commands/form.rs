use crate::api::backend::PaymentBackend;
use crate::display::Renderer;
use crate::models::{Currency, Network, Protocol};
use crate::services::Session;
use crate::utils::Table;

/// `set <field> <value>`
pub fn execute<B, R>(session: &mut Session<B, R>, args: &[&str]) -> Result<(), String>
where
    B: PaymentBackend,
    R: Renderer,
{
    let Some((field, rest)) = args.split_first() else {
        return Err("Usage: set <field> <value>. Type `help` for the field list".to_string());
    };
    let value = rest.join(" ");

    match field.to_lowercase().as_str() {
        "card" => session.set_card_number(&value),
        "expiry" | "exp" => session.set_expiry(&value),
        "cvv" => session.set_cvv(&value),
        "amount" => session.set_amount(&value),
        "auth" | "authcode" => session.set_auth_code(&value),
        "wallet" => session.set_merchant_wallet(&value),
        "currency" => session.set_currency(value.parse::<Currency>()?),
        "network" => session.set_network(value.parse::<Network>()?),
        "protocol" => {
            session.set_protocol(value.parse::<Protocol>()?);
            println!(
                "Auth code: e.g., {}",
                "X".repeat(session.required_auth_code_length())
            );
        }
        other => return Err(format!("Unknown field: {}", other)),
    }

    Ok(())
}

/// `form` - print the current form, with card data masked
pub fn show<B, R>(session: &Session<B, R>) -> Result<(), String>
where
    B: PaymentBackend,
    R: Renderer,
{
    let form = session.form();
    let mut table = Table::new(&["Field", "Value"]);
    table.add_row(vec!["Card".into(), mask(&form.card_number, 4)]);
    table.add_row(vec!["Expiry".into(), form.expiry.clone()]);
    table.add_row(vec!["CVV".into(), "*".repeat(form.cvv.chars().count())]);
    table.add_row(vec!["Amount".into(), form.amount.clone()]);
    table.add_row(vec!["Currency".into(), form.currency.to_string()]);
    table.add_row(vec!["Auth code".into(), "*".repeat(form.auth_code.chars().count())]);
    table.add_row(vec!["Protocol".into(), form.protocol.to_string()]);
    table.add_row(vec!["Network".into(), form.network.to_string()]);
    table.add_row(vec!["Wallet".into(), form.merchant_wallet.clone()]);
    println!("{}", table.render());
    Ok(())
}

/// Keep the last `visible` characters, star the rest (spaces kept)
fn mask(value: &str, visible: usize) -> String {
    let total = value.chars().filter(|c| !c.is_whitespace()).count();
    let mut seen = 0;
    value
        .chars()
        .map(|c| {
            if c.is_whitespace() {
                return c;
            }
            seen += 1;
            if seen + visible > total {
                c
            } else {
                '*'
            }
        })
        .collect()
}
