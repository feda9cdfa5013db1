use std::env;
use std::fs;
use std::process;

use cifra::{parse, transpose_token};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cifra <input.cifra> [semitones] [output]");
        process::exit(1);
    }

    let input_path = &args[1];
    let semitones = match args.get(2) {
        Some(raw) => match raw.parse::<i32>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Invalid semitone count '{}': expected an integer like 2 or -1", raw);
                process::exit(1);
            }
        },
        None => 0,
    };
    let output_path = args.get(3);

    // Read input file
    let source = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    let cifra = match parse(&source) {
        Ok(cifra) => cifra,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let sheet = match cifra.render(semitones) {
        Ok(sheet) => sheet,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Header mirrors the viewer: title line plus the transposed key indicator
    let mut out = String::new();
    if let Some(title) = &cifra.metadata.title {
        match &cifra.metadata.artist {
            Some(artist) => out.push_str(&format!("{} - {}\n", title, artist)),
            None => out.push_str(&format!("{}\n", title)),
        }
    }
    out.push_str(&format!("Tom: {}\n\n", transpose_token(cifra.key(), semitones)));
    out.push_str(&sheet);
    out.push('\n');

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &out) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote transposed cifra to {}", path);
        }
        None => {
            print!("{}", out);
        }
    }
}
