//! cargo run --example=inspect -- 'あろう'

use puyopuyo_password::{Playfield, Rule, Variant};

fn main() -> anyhow::Result<()> {
    let password = std::env::args().nth(1).expect("Usage: inspect <password>");

    let Some(variant) = Variant::detect(&password) else {
        println!("unrecognized password");
        return Ok(());
    };
    println!("variant: {variant:?}");

    let sequence = variant.decode(&password);
    println!("sextets: {:?}", sequence.as_slice());
    println!("format:  {:?}", sequence.format()?);
    println!("cells:   {}", sequence.cell_count()?);
    println!("rule:    {}", Rule::from_sequence(&sequence)?.name());

    let field = Playfield::from_sequence(&sequence)?;
    for puyo in puyopuyo_password::Puyo::all() {
        let count = field.cells().iter().filter(|&&p| p == puyo).count();
        if count > 0 {
            println!("{puyo:?}: {count}");
        }
    }

    Ok(())
}
