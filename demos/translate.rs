//! cargo run --example=translate -- 'A1C'

use puyopuyo_password::{identify, translate};

fn main() -> anyhow::Result<()> {
    let password = std::env::args().nth(1).expect("Usage: translate <password>");

    match identify(&password) {
        Ok(id) => println!(
            "{} ({}) -> {}",
            id.source_title(),
            id.rule.name(),
            id.target_title()
        ),
        Err(e) => println!("identify: {e}"),
    }

    println!("{}", translate(&password)?);

    Ok(())
}
