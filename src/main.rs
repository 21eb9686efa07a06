use dexsearch::{run_dexsearch, Pokedex};
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        println!("Usage: dexsearch <query tokens>");
        println!("Example: dexsearch \"fire type, !water type, ou\"");
        return;
    }

    let data_path = Path::new("data");
    let dex = match Pokedex::load(data_path) {
        Ok(dex) => dex,
        Err(e) => {
            println!("Error loading dex catalog: {}", e);
            return;
        }
    };

    println!("Loaded {} species", dex.species_count());

    // A terminal session is always a private reply.
    let input = args.join(" ");
    match run_dexsearch(&dex, &input, false) {
        Ok(reply) => println!("{}", reply),
        Err(err) => println!("{}", err),
    }
}
