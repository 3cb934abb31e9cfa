use sepalib::{
    formats::{csv::Csv, pain001::Pain001},
    traits::{ReadFormat, WriteFormat},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: CSV с платежами -> pain.001.001.03 (stdin -> stdout)
    let req = Csv.read(std::io::BufReader::new(std::io::stdin()))?;
    Pain001::new().write(std::io::stdout(), &req)?;
    Ok(())
}
